//! Larek backend API.
//!
//! # Architecture
//!
//! - [`LarekApi`] is the seam the presenter depends on; tests plug in
//!   scripted implementations.
//! - [`LarekClient`] is the `reqwest` implementation. Every call is a single
//!   round trip: no retries, no caching, no timeouts beyond the transport's.
//!
//! # Endpoints
//!
//! - `GET /product` → `{ total, items: Product[] }`
//! - `GET /product/{id}` → `Product`
//! - `POST /order` → `{ id, total }`
//!
//! Product images arrive as paths relative to the asset host; the client
//! prefixes them before handing products to the rest of the system.

mod client;

pub use client::LarekClient;

use larek_core::{Order, OrderResult, Product, ProductId};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Larek backend.
///
/// All variants are the same failure kind from the caller's point of view:
/// the remote operation did not produce a usable result.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport failure (connection refused, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The endpoint URL could not be built from the API base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Remote catalog and order operations.
#[allow(async_fn_in_trait)]
pub trait LarekApi {
    /// Fetch the whole catalog.
    async fn get_product_list(&self) -> Result<Vec<Product>, NetworkError>;

    /// Fetch one product by id.
    async fn get_product_item(&self, id: &ProductId) -> Result<Product, NetworkError>;

    /// Submit an order.
    async fn order_products(&self, order: &Order) -> Result<OrderResult, NetworkError>;
}

/// List envelope used by collection endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiListResponse<T> {
    /// Number of items on the server.
    #[serde(default)]
    pub total: usize,
    /// The items.
    pub items: Vec<T>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Extract the `error` message from a failed response body, if present.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty())
}
