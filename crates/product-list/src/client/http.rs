use crate::{
    abstract_trait::{ProductDataSource, ProductMutation},
    model::Product,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::responses::ApiResponse,
    errors::{ClientError, ErrorResponse},
};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
pub struct HttpProductClient {
    base_url: String,
    client: Client,
}

impl HttpProductClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: i32) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    async fn read_body<T: DeserializeOwned>(
        response: Response,
    ) -> Result<ApiResponse<T>, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        decode_body(status, &body)
    }
}

/// Non-2xx becomes `ClientError::Api` carrying the server's message, an empty
/// 2xx body is an envelope without data or message.
fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse<T>, ClientError> {
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: parse_error_message(body),
        });
    }

    if body.trim().is_empty() {
        return Ok(ApiResponse::default());
    }

    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|m| !m.trim().is_empty())
}

#[async_trait]
impl ProductDataSource for HttpProductClient {
    async fn fetch_products(&self) -> Result<ApiResponse<Vec<Product>>, ClientError> {
        let url = self.products_url();
        info!("Fetching products from {url}");

        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await
            .map_err(|e| {
                error!("GET {url} failed: {e}");
                ClientError::Transport(e.to_string())
            })?;

        let reply = Self::read_body::<Vec<Product>>(response).await?;

        info!(
            "Successfully fetched {} products",
            reply.data.as_ref().map_or(0, Vec::len)
        );
        Ok(reply)
    }
}

#[async_trait]
impl ProductMutation for HttpProductClient {
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ClientError> {
        let url = self.product_url(id);
        info!("Deleting product via DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await
            .map_err(|e| {
                error!("DELETE {url} failed: {e}");
                ClientError::Transport(e.to_string())
            })?;

        // the body may carry arbitrary `data`; only the envelope matters
        let reply = Self::read_body::<serde_json::Value>(response).await?;

        Ok(ApiResponse {
            status: reply.status,
            data: None,
            meta: reply.meta,
        })
    }
}
