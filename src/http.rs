//! # Authority HTTP access
//! A minimal client seam over [`ureq`] so that authority-contacting
//! validators can be exercised in tests with a stub. Requests are plain
//! GETs with an optional `Accept` header, a hard per-request deadline, no
//! retries, and no caching.

use std::time::Duration;

use ureq::Agent;

use crate::error::AuthorityError;

static APP_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")",
);

/// A completed authority request. Non-2xx statuses are data, not errors:
/// callers map them onto the validation message streams.
#[derive(Debug, Clone)]
pub struct AuthorityResponse {
    pub status: u16,
    /// URI the response was ultimately served from, after redirects.
    pub final_url: String,
    pub body: String,
}

impl AuthorityResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The authority explicitly denied the request (4xx).
    pub fn is_denied(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// The authority itself failed (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

pub trait AuthorityClient: Send + Sync {
    fn get(&self, url: &str, accept: Option<&str>) -> Result<AuthorityResponse, AuthorityError>;
}

pub struct UreqClient {
    agent: Agent,
}

impl UreqClient {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .user_agent(APP_USER_AGENT)
            .https_only(true)
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl AuthorityClient for UreqClient {
    fn get(&self, url: &str, accept: Option<&str>) -> Result<AuthorityResponse, AuthorityError> {
        let mut request = self.agent.get(url);
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }
        let mut response = request.call().map_err(classify)?;

        let status = response.status().as_u16();
        let final_url = {
            use ureq::ResponseExt;
            response.get_uri().to_string()
        };
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(classify)?;

        Ok(AuthorityResponse {
            status,
            final_url,
            body,
        })
    }
}

fn classify(err: ureq::Error) -> AuthorityError {
    match err {
        ureq::Error::Timeout(_) => AuthorityError::Timeout,
        ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            AuthorityError::Timeout
        }
        other => AuthorityError::Network(other.to_string()),
    }
}
