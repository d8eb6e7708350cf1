//! Asynchronous cat fact client.
//!
//! # Design
//! `CatFactService` glues the sans-I/O `CatFactClient` to a blocking
//! `Transport`. Every call builds a request, runs the transport on Tokio's
//! blocking pool so no async worker is ever parked on the socket, then
//! parses the response. The service keeps no per-call state, so clones can
//! be handed to any number of concurrent callers.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use tracing::debug;

use crate::client::CatFactClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{BreedList, CatFact};

pub struct CatFactService<T = UreqTransport> {
    client: CatFactClient,
    transport: Arc<T>,
}

impl CatFactService<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(
            CatFactClient::new(&config.base_url),
            UreqTransport::new(config.timeout()),
        )
    }
}

impl Default for CatFactService<UreqTransport> {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl<T> Clone for CatFactService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for CatFactService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatFactService")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}

impl<T: Transport + 'static> CatFactService<T> {
    pub fn with_transport(client: CatFactClient, transport: T) -> Self {
        Self {
            client,
            transport: Arc::new(transport),
        }
    }

    pub fn client(&self) -> &CatFactClient {
        &self.client
    }

    /// Fetch one random fact, at most `length` characters long when given.
    pub async fn get_cat_fact(&self, length: Option<u32>) -> Result<CatFact, ApiError> {
        let request = self.client.build_get_cat_fact(length);
        let response = self.execute(request).await?;
        self.client.parse_cat_fact(response)
    }

    /// Fetch the first page of breeds, capped at `limit` entries when given.
    pub async fn get_cat_breeds(&self, limit: Option<NonZeroU32>) -> Result<BreedList, ApiError> {
        let request = self.client.build_get_cat_breeds(limit);
        let response = self.execute(request).await?;
        self.client.parse_cat_breeds(response)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.full_url(), "sending request");

        let transport = Arc::clone(&self.transport);
        let response = match tokio::task::spawn_blocking(move || transport.execute(request)).await
        {
            Ok(result) => result?,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => return Err(ApiError::Network(format!("request abandoned: {err}"))),
        };

        debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}
