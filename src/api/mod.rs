pub mod client;
pub mod models;
pub mod namecheap;

pub use client::DynamicDnsApi;
pub use models::{parse_update_response, UpdateRequest, UpdateResponse};
pub use namecheap::NamecheapClient;
