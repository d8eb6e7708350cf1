//! Typed client for the Cat Fact API (`https://catfact.ninja`).
//!
//! # Overview
//! Two read-only operations: a random fact (optionally length-capped) and a
//! page of breeds (optionally count-capped). Requests and responses are
//! plain data; a pluggable `Transport` performs the round-trip.
//!
//! # Design
//! - `CatFactClient` is sans-I/O: `build_*` produces a request, `parse_*`
//!   consumes a response. It holds only `base_url`.
//! - `CatFactService` is the async surface. It runs the blocking transport
//!   off the async workers and is safe to share between concurrent callers.
//! - `FactPresenter` runs a fetch in the background and publishes the
//!   outcome on a watch channel for a front end to render.
//! - Failures come back as one of three `ApiError` variants; nothing is
//!   retried or cached.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod presenter;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{CatFactClient, DEFAULT_BASE_URL};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use presenter::{DisplayState, FactPresenter};
pub use service::CatFactService;
pub use transport::{Transport, UreqTransport};
pub use types::{Breed, BreedList, CatFact, CatRequest, PageLink, Pagination};
