//! Integration tests for the Larek storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p larek-integration-tests
//! ```
//!
//! No external services are needed: the HTTP client tests start an `axum`
//! stub of the Larek API on an ephemeral local port, and the checkout tests
//! drive a mounted storefront against a scripted in-memory API.
//!
//! # Test Categories
//!
//! - `api_client` - `LarekClient` against the stub server
//! - `checkout_flow` - catalog, basket, both form steps and order submission
