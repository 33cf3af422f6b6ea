//! Larek storefront library.
//!
//! A single-page storefront built as Model-View-Broker: an observable state
//! model ([`model`]), views rendering into a headless DOM ([`views`],
//! [`dom`]) and a synchronous event broker ([`events`]) between them,
//! wired together by the [`presenter`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod model;
pub mod presenter;
pub mod templates;
pub mod views;

pub use api::{LarekApi, LarekClient, NetworkError};
pub use config::StorefrontConfig;
pub use error::AppError;
pub use events::{AppEvent, EventBroker};
pub use model::AppState;
pub use presenter::Storefront;
