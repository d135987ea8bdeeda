use std::time::Duration;

use bucket_core::{Candidate, FailureReason, ProbeOutcome, TransportKind};
use reqwest::StatusCode;

use crate::ScanError;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    /// Deadline for the whole exchange of one probe.
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    /// Status that signals the bucket exists.
    pub found_status: u16,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
            redirect_limit: 10,
            found_status: 200,
        }
    }
}

/// Issues a single existence probe. Never retries, never returns an error:
/// every way a probe can go wrong is a [`ProbeOutcome::Failure`].
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome;
}

#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
    found_status: u16,
}

impl ReqwestProber {
    /// Builds one shared client so connections are pooled across probes.
    pub fn new(settings: ProbeSettings) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| ScanError::HttpClient(err.to_string()))?;
        Ok(Self {
            client,
            found_status: settings.found_status,
        })
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        let parsed = match reqwest::Url::parse(candidate.url()) {
            Ok(url) => url,
            Err(_) => {
                return ProbeOutcome::Failure(FailureReason::Transport(TransportKind::InvalidUrl))
            }
        };

        match self.client.get(parsed).send().await {
            // The body is never read; dropping the response closes it.
            Ok(response) => classify_status(response.status(), self.found_status),
            Err(err) => ProbeOutcome::Failure(FailureReason::Transport(map_reqwest_error(&err))),
        }
    }
}

pub fn classify_status(status: StatusCode, found_status: u16) -> ProbeOutcome {
    if status.as_u16() == found_status {
        ProbeOutcome::Success
    } else {
        ProbeOutcome::Failure(FailureReason::Status(status.as_u16()))
    }
}

fn map_reqwest_error(err: &reqwest::Error) -> TransportKind {
    if err.is_timeout() {
        return TransportKind::Timeout;
    }
    if err.is_redirect() {
        return TransportKind::RedirectLimitExceeded;
    }
    if err.is_connect() {
        return TransportKind::Connect;
    }
    if err.is_builder() {
        return TransportKind::InvalidUrl;
    }
    TransportKind::Network
}
