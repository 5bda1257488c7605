use std::fmt;

use anyhow::anyhow;
use log::{debug, info, warn};
use serde::Serialize;
use tokio::time::{sleep, Duration};

use crate::api::{parse_update_response, DynamicDnsApi, UpdateRequest};
use crate::config::{Config, Profile};
use crate::error::{ErrorKind, UpdateError};

const NON_ZERO_ERROR_COUNT: &str = "Update failed (non-zero error count)";

/// Outcome of one update, in a form both programs and people can consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub succeeded: bool,
    /// Set when the update could not be completed at all. A response that
    /// was read and parsed but not accepted leaves this empty.
    pub kind: Option<ErrorKind>,
    /// The address that was reported, discovered or configured.
    pub ip: Option<String>,
    /// Error descriptions returned by the provider, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl UpdateReport {
    fn success(ip: String) -> Self {
        Self {
            succeeded: true,
            kind: None,
            ip: Some(ip),
            errors: Vec::new(),
        }
    }

    fn rejected(ip: String, errors: Vec<String>) -> Self {
        Self {
            succeeded: false,
            kind: None,
            ip: Some(ip),
            errors,
        }
    }

    fn failed(kind: ErrorKind, ip: Option<String>) -> Self {
        Self {
            succeeded: false,
            kind: Some(kind),
            ip,
            errors: Vec::new(),
        }
    }

    pub fn message(&self) -> String {
        if self.succeeded {
            return format!("Update successful ({})", self.ip.as_deref().unwrap_or_default());
        }
        match self.kind {
            Some(kind) => kind.message().to_string(),
            None => NON_ZERO_ERROR_COUNT.to_string(),
        }
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub async fn discover_ip<A>(api: &A) -> Result<String, UpdateError>
where
    A: DynamicDnsApi + ?Sized,
{
    let ip = api.get_ip().await?;
    debug!("Discovered public IP: {}", ip);
    Ok(ip)
}

/// Runs one update for `profile` and returns the exact status line to show.
/// Never fails: every error is turned into a message.
pub async fn perform_update<A>(api: &A, profile: &Profile) -> String
where
    A: DynamicDnsApi + ?Sized,
{
    execute_update(api, profile).await.message()
}

pub async fn execute_update<A>(api: &A, profile: &Profile) -> UpdateReport
where
    A: DynamicDnsApi + ?Sized,
{
    info!("Updating {} ({}.{})", profile.name, profile.host, profile.domain);

    let ip = if profile.auto_detect_ip_address {
        match discover_ip(api).await {
            Ok(ip) => ip,
            Err(e) => {
                warn!("Failed to discover public IP for {}: {}", profile.name, e);
                return UpdateReport::failed(e.kind(), None);
            }
        }
    } else {
        profile.ip_address.clone()
    };

    let request = UpdateRequest {
        host: &profile.host,
        domain: &profile.domain,
        password: &profile.dynamic_dns_password,
        ip: &ip,
    };

    let response = match api.update(&request).await {
        Ok(body) => {
            debug!("Update response: {}", body);
            parse_update_response(&body)
        }
        Err(e) => Err(e),
    };

    match response {
        Ok(response) if response.is_success() => {
            info!("Updated {} to {}", profile.name, ip);
            UpdateReport::success(ip)
        }
        Ok(response) => {
            warn!(
                "Provider rejected update for {} (ErrCount: {:?}, errors: {:?})",
                profile.name, response.err_counts, response.errors
            );
            UpdateReport::rejected(ip, response.errors)
        }
        Err(e) => {
            warn!("Update for {} failed: {}", profile.name, e);
            UpdateReport::failed(e.kind(), Some(ip))
        }
    }
}

pub struct DdnsUpdater<A> {
    config: Config,
    api: A,
}

impl<A: DynamicDnsApi> DdnsUpdater<A> {
    pub fn new(config: Config, api: A) -> Self {
        Self { config, api }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Updates the given profiles one after the other.
    pub async fn update_all<'a>(
        &self,
        profiles: &[&'a Profile],
    ) -> Vec<(&'a Profile, UpdateReport)> {
        let mut reports = Vec::with_capacity(profiles.len());
        for &profile in profiles {
            let report = execute_update(&self.api, profile).await;
            reports.push((profile, report));
        }
        reports
    }

    /// Runs update rounds every `update_interval` minutes, or a single round
    /// when no interval is configured or `once` is set. Failures are
    /// reported through `on_report` and do not stop the schedule.
    pub async fn run<F>(
        &self,
        only: Option<&str>,
        once: bool,
        mut on_report: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(&Profile, &UpdateReport),
    {
        let profiles = self.config.select(only)?;
        let interval = match self.config.update_interval {
            Some(minutes) if !once => {
                let secs = minutes
                    .checked_mul(60)
                    .ok_or_else(|| anyhow!("Update interval too large: {} minutes", minutes))?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        loop {
            for (profile, report) in self.update_all(&profiles).await {
                on_report(profile, &report);
            }

            match interval {
                Some(interval) => {
                    debug!("Next update in {:?}", interval);
                    sleep(interval).await;
                }
                None => return Ok(()),
            }
        }
    }
}
