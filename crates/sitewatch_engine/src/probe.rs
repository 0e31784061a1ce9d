use std::time::Duration;

use futures_util::future;

use sitewatch_core::{normalize, NormalizedAddress, ProbeStatus};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Per-request timeout; one attempt per address, no retries.
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub redirect_limit: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            follow_redirects: true,
            redirect_limit: 10,
        }
    }
}

#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Probe every address that normalizes to non-empty, one result per
    /// probed address in input order. Duplicates are probed again; de-dup is
    /// the caller's responsibility.
    async fn check(&self, addresses: &[String]) -> Vec<ProbeStatus>;
}

/// HTTP GET prober. Reachable means a response arrived with a 2xx or 3xx
/// final status; any transport failure (DNS, refused connection, TLS,
/// timeout) is captured as an error string, never raised.
#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, reqwest::Error> {
        let redirects = if settings.follow_redirects {
            reqwest::redirect::Policy::limited(settings.redirect_limit)
        } else {
            reqwest::redirect::Policy::none()
        };
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .redirect(redirects)
            .build()?;
        Ok(Self { client })
    }

    async fn probe_one(&self, address: NormalizedAddress) -> ProbeStatus {
        match self.client.get(address.as_str()).send().await {
            Ok(response) => {
                let status = response.status();
                ProbeStatus {
                    address: address.into_string(),
                    ok: status.is_success() || status.is_redirection(),
                    status_code: Some(status.as_u16()),
                    error: None,
                }
            }
            Err(err) => ProbeStatus {
                address: address.into_string(),
                ok: false,
                status_code: None,
                error: Some(describe_error(&err)),
            },
        }
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn check(&self, addresses: &[String]) -> Vec<ProbeStatus> {
        let probes = addresses
            .iter()
            .filter_map(|raw| normalize(raw))
            .map(|address| self.probe_one(address));
        // Independent probes run concurrently; join_all keeps input order.
        future::join_all(probes).await
    }
}

/// Flatten a reqwest error and its cause chain into one readable line.
fn describe_error(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
