//! HTTP implementation of [`Backend`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::Backend;
use crate::models::{
    CalculateRequest, Endpoint, Item, OrderId, OrderRequest, OrderResponse, SelectionEntry, Totals,
};
use crate::{BowlError, Result};

/// Talks JSON to the ordering backend at `base_url`.
///
/// Every request is bounded by the client timeout given at construction;
/// an elapsed timeout surfaces as [`BowlError::Timeout`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a backend for `base_url` (without a trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`BowlError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.as_str())
    }

    /// Checks the status code and decodes the JSON body.
    async fn read_json<T: DeserializeOwned>(
        endpoint: Endpoint,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(BowlError::Status {
                endpoint: endpoint.as_str(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify(endpoint, e))?;
        serde_json::from_str(&body).map_err(|e| BowlError::InvalidResponse {
            endpoint: endpoint.as_str(),
            reason: e.to_string(),
        })
    }
}

/// Maps transport errors, singling out timeouts.
fn classify(endpoint: Endpoint, err: reqwest::Error) -> BowlError {
    if err.is_timeout() {
        BowlError::Timeout {
            endpoint: endpoint.as_str(),
        }
    } else {
        BowlError::Http(err)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_catalog(&self) -> Result<Vec<Item>> {
        let endpoint = Endpoint::Ingredients;
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| classify(endpoint, e))?;

        let items: Vec<Item> = Self::read_json(endpoint, response).await?;
        info!(
            endpoint = endpoint.as_str(),
            count = items.len(),
            "Fetched ingredients"
        );
        Ok(items)
    }

    async fn compute_totals(&self, items: &[SelectionEntry]) -> Result<Totals> {
        let endpoint = Endpoint::Calculate;
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&CalculateRequest { items })
            .send()
            .await
            .map_err(|e| classify(endpoint, e))?;

        let totals: Totals = Self::read_json(endpoint, response).await?;
        if let Some(field) = totals.negative_field() {
            return Err(BowlError::InvalidResponse {
                endpoint: endpoint.as_str(),
                reason: format!("negative {field}"),
            });
        }
        debug!(
            endpoint = endpoint.as_str(),
            entries = items.len(),
            price = %totals.price,
            "Remote totals"
        );
        Ok(totals)
    }

    async fn submit_order(&self, items: &[SelectionEntry], totals: &Totals) -> Result<OrderId> {
        let endpoint = Endpoint::Order;
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&OrderRequest { items, totals })
            .send()
            .await
            .map_err(|e| classify(endpoint, e))?;

        let body: OrderResponse = Self::read_json(endpoint, response).await?;
        info!(
            endpoint = endpoint.as_str(),
            order_id = body.order_id,
            "Order accepted"
        );
        Ok(body.order_id)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
