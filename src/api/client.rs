use super::models::UpdateRequest;
use crate::error::UpdateError;
use async_trait::async_trait;

#[async_trait]
pub trait DynamicDnsApi {
    /// Public IPv4 address as reported by the provider, returned verbatim.
    async fn get_ip(&self) -> Result<String, UpdateError>;

    /// Sends the update and returns the raw response body.
    async fn update(&self, request: &UpdateRequest<'_>) -> Result<String, UpdateError>;
}
