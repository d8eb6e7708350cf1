//! Executors that turn an `HttpRequest` into an `HttpResponse`.
//!
//! # Design
//! `Transport` is the only I/O seam in the crate. Implementations are
//! blocking; `CatFactService` moves them onto Tokio's blocking pool. A
//! transport must hand back non-2xx responses as data so status
//! interpretation stays in `CatFactClient`. Only failures to complete the
//! exchange are errors, and those are always `ApiError::Network`.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Any matching closure is a transport. Handy for tests and adapters.
impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, ApiError> + Send + Sync,
{
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent pools connections and is cheap to share; it is created once,
/// when the transport is constructed.
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Option<Duration>,
}

impl UreqTransport {
    /// `timeout = None` keeps ureq's defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent, timeout }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(network_error)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(network_error)?;

        Ok(HttpResponse::new(status, body))
    }
}

fn network_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(which) => ApiError::Network(format!("timed out ({which:?})")),
        other => ApiError::Network(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_transports() {
        let transport = |request: HttpRequest| {
            Ok(HttpResponse::new(200, request.full_url()))
        };
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://example.test/fact".to_string(),
            query: vec![("max_length".to_string(), "9".to_string())],
            headers: Vec::new(),
        };
        let response = transport.execute(request).unwrap();
        assert_eq!(response.text(), "http://example.test/fact?max_length=9");
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        drop(std_listener);

        let transport = UreqTransport::new(Some(Duration::from_secs(5)));
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://{addr}/fact"),
            query: Vec::new(),
            headers: Vec::new(),
        };
        let err = transport.execute(request).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
