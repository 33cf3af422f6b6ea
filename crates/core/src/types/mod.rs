//! Core types for the Larek storefront.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod form_errors;
pub mod id;
pub mod label;
pub mod order;
pub mod price;
pub mod product;

pub use form_errors::FormErrors;
pub use id::*;
pub use label::UnknownLabel;
pub use order::{Order, OrderField, OrderResult, PaymentMethod};
pub use price::{Price, PriceError};
pub use product::{Category, Product};
