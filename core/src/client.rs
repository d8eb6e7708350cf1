//! Stateless HTTP request builder and response parser for the cat fact API.
//!
//! # Design
//! `CatFactClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Whoever sits in between executes the
//! round-trip, which keeps this layer deterministic and free of I/O.

use std::num::NonZeroU32;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BreedList, CatFact, CatRequest};

/// Public endpoint of the Cat Fact API.
pub const DEFAULT_BASE_URL: &str = "https://catfact.ninja";

/// Synchronous, stateless client for the cat fact API.
#[derive(Debug, Clone)]
pub struct CatFactClient {
    base_url: String,
}

impl Default for CatFactClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatFactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /fact`, with `max_length` only when `length` is present.
    pub fn build_get_cat_fact(&self, length: Option<u32>) -> HttpRequest {
        self.get("fact", CatRequest::fact(length))
    }

    /// `GET /breeds`, with `limit` only when present.
    pub fn build_get_cat_breeds(&self, limit: Option<NonZeroU32>) -> HttpRequest {
        self.get("breeds", CatRequest::breeds(limit))
    }

    pub fn parse_cat_fact(&self, response: HttpResponse) -> Result<CatFact, ApiError> {
        decode(response)
    }

    pub fn parse_cat_breeds(&self, response: HttpResponse) -> Result<BreedList, ApiError> {
        decode(response)
    }

    fn get(&self, resource: &str, params: CatRequest) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{resource}", self.base_url),
            query: params.query_pairs(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    Ok(serde_json::from_slice(&response.body)?)
}

/// Map any status outside 200..=299 to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.text(),
    })
}
