use std::time::Duration;

use super::{client::DynamicDnsApi, models::UpdateRequest};
use crate::error::UpdateError;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use log::debug;
use reqwest::Url;

pub const API_BASE_URL: &str = "https://dynamicdns.park-your-domain.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("namecheap-ddns/", env!("CARGO_PKG_VERSION"));

pub struct NamecheapClient {
    client: reqwest::Client,
    base_url: Url,
}

#[async_trait]
impl DynamicDnsApi for NamecheapClient {
    async fn get_ip(&self) -> Result<String, UpdateError> {
        let url = endpoint(&self.base_url, "getip")?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn update(&self, request: &UpdateRequest<'_>) -> Result<String, UpdateError> {
        let url = update_url(&self.base_url, request)?;
        // The query carries the password, so only the path is logged.
        debug!("GET {} for {}.{}", url.path(), request.host, request.domain);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl NamecheapClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Self::with_base_url(API_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid endpoint URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Endpoint URL cannot carry a path: {}", base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// `<base>/update?host=..&domain=..&password=..&ip=..`, form-encoded.
pub fn update_url(base_url: &Url, request: &UpdateRequest<'_>) -> Result<Url, UpdateError> {
    let mut url = endpoint(base_url, "update")?;
    url.query_pairs_mut()
        .append_pair("host", request.host)
        .append_pair("domain", request.domain)
        .append_pair("password", request.password)
        .append_pair("ip", request.ip);
    Ok(url)
}

fn endpoint(base_url: &Url, name: &str) -> Result<Url, UpdateError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| anyhow!("Endpoint URL cannot carry a path: {}", base_url))?
        .pop_if_empty()
        .push(name);
    Ok(url)
}
