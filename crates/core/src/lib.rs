//! Larek Core - Shared domain types.
//!
//! This crate provides the data model shared by every Larek component:
//! - `storefront` - The single-page storefront (broker, model, views)
//! - `integration-tests` - End-to-end checks against stub services
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no DOM access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Ids, prices, products, order drafts and validation errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
