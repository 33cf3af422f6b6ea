//! Larek storefront - renders the catalog page.
//!
//! Loads configuration, mounts the storefront onto a fresh page document,
//! fetches the catalog from the Larek API and writes the rendered page to
//! stdout.
//!
//! # Architecture
//!
//! - Single-threaded: a current-thread Tokio runtime driving a `LocalSet`
//! - `reqwest` client for the Larek API
//! - `tracing` to stderr, filtered by `RUST_LOG`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::process::ExitCode;

use larek_storefront::dom::Document;
use larek_storefront::templates::mount_page;
use larek_storefront::{AppError, LarekClient, Storefront, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "larek_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "storefront failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    tracing::info!(api = %config.api_url, cdn = %config.cdn_url, "configuration loaded");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();

    let html = local.block_on(&runtime, async {
        let document = Document::new();
        mount_page(&document);

        let storefront = Storefront::mount(&document, LarekClient::new(&config))?;
        storefront.load_catalog().await?;
        storefront.settle().await;

        Ok::<_, AppError>(document.to_html())
    })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
