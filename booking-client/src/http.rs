//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, LessonsApi};
use shared::{Lesson, Order, OrderAck, SpaceUpdate};

/// HTTP client for making network requests to the lessons backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Reject non-success statuses, passing the body back as the error
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Handle an HTTP response carrying a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(|e| {
            if e.is_decode() {
                ClientError::InvalidResponse(e.to_string())
            } else {
                ClientError::Http(e)
            }
        })
    }

    /// Handle a response whose body we do not consume
    async fn handle_ack(response: reqwest::Response) -> ClientResult<()> {
        Self::check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl LessonsApi for HttpClient {
    async fn fetch_lessons(&self) -> ClientResult<Vec<Lesson>> {
        let url = self.url("lessons");
        tracing::debug!(%url, "GET lessons");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn search_lessons(&self, query: &str) -> ClientResult<Vec<Lesson>> {
        let url = self.url("search");
        tracing::debug!(%url, query, "GET search");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn create_order(&self, order: &Order) -> ClientResult<OrderAck> {
        let url = self.url("orders");
        tracing::debug!(%url, lines = order.lessons.len(), "POST order");

        let response = self.client.post(&url).json(order).send().await?;
        Self::handle_response(response).await
    }

    async fn update_space(&self, lesson_id: i64, space: u32) -> ClientResult<()> {
        let url = self.url(&format!("lessons/{lesson_id}"));
        tracing::debug!(%url, space, "PUT lesson space");

        let response = self
            .client
            .put(&url)
            .json(&SpaceUpdate { space })
            .send()
            .await?;
        Self::handle_ack(response).await
    }

    fn image_url(&self, name: &str) -> String {
        self.url(&format!("images/{name}"))
    }
}
