//! Dynamic DNS updates against Namecheap's `dynamicdns.park-your-domain.com`
//! endpoint.

pub mod api;
pub mod config;
pub mod ddns;
pub mod error;

#[cfg(test)]
mod tests;

pub use api::{DynamicDnsApi, NamecheapClient};
pub use config::{Config, Profile};
pub use ddns::{discover_ip, execute_update, perform_update, DdnsUpdater, UpdateReport};
pub use error::{ErrorKind, UpdateError};
