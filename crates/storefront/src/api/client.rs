//! `reqwest` implementation of [`LarekApi`].

use larek_core::{Order, OrderResult, Product, ProductId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::{ApiListResponse, LarekApi, NetworkError, error_message};
use crate::config::StorefrontConfig;

/// HTTP client for the Larek backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LarekClient {
    client: reqwest::Client,
    api_url: String,
    cdn_url: String,
}

impl LarekClient {
    /// Create a client for the configured API and asset host.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_client(reqwest::Client::new(), &config.api_url, &config.cdn_url)
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, api_url: &str, cdn_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            cdn_url: cdn_url.to_string(),
        }
    }

    /// The API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Prefix a product's image path with the asset host.
    fn with_cdn(&self, mut product: Product) -> Product {
        product.image = format!("{}{}", self.cdn_url, product.image);
        product
    }

    /// Append `segments` to the API base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, NetworkError> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, NetworkError> {
        let url = self.endpoint(segments)?;
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, NetworkError> {
        let url = self.endpoint(segments)?;
        let response = self.client.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    /// Turn a response into `T`, mapping non-success statuses to
    /// [`NetworkError::Api`].
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, NetworkError> {
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            tracing::error!(
                status = %status,
                message = %message,
                "Larek API returned non-success status"
            );
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse Larek API response"
            );
            NetworkError::Parse(e.to_string())
        })
    }
}

impl LarekApi for LarekClient {
    #[instrument(skip(self))]
    async fn get_product_list(&self) -> Result<Vec<Product>, NetworkError> {
        let data: ApiListResponse<Product> = self.get(&["product"]).await?;
        tracing::debug!(total = data.total, items = data.items.len(), "catalog fetched");

        Ok(data
            .items
            .into_iter()
            .map(|item| self.with_cdn(item))
            .collect())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_product_item(&self, id: &ProductId) -> Result<Product, NetworkError> {
        let item: Product = self.get(&["product", id.as_str()]).await?;
        Ok(self.with_cdn(item))
    }

    #[instrument(skip(self, order), fields(items = order.items.len(), total = %order.total))]
    async fn order_products(&self, order: &Order) -> Result<OrderResult, NetworkError> {
        self.post(&["order"], order).await
    }
}
