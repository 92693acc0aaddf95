use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::common::{BoardError, HealthReport, Message, MessageId, NewMessage};

/// The four calls the board makes against its backend.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn health(&self) -> Result<HealthReport, BoardError>;

    /// Messages in the order the store returns them (newest first).
    async fn list_messages(&self) -> Result<Vec<Message>, BoardError>;

    async fn create_message(&self, content: &str) -> Result<(), BoardError>;

    async fn delete_message(&self, id: &MessageId) -> Result<(), BoardError>;
}

/// [`BoardApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    http: Client,
    base_url: String,
}

impl HttpBoardApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BoardError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn any non-2xx response into [`BoardError::Server`], keeping the body.
async fn ensure_success(response: Response) -> Result<Response, BoardError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(BoardError::Server {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn health(&self) -> Result<HealthReport, BoardError> {
        let response = self.http.get(self.url("/api/health")).send().await?;
        let report = ensure_success(response).await?.json::<HealthReport>().await?;
        Ok(report)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, BoardError> {
        let response = self.http.get(self.url("/api/messages")).send().await?;
        // backend encodes an empty table as `null`
        let messages = ensure_success(response)
            .await?
            .json::<Option<Vec<Message>>>()
            .await?;
        Ok(messages.unwrap_or_default())
    }

    async fn create_message(&self, content: &str) -> Result<(), BoardError> {
        let payload = NewMessage {
            content: content.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/messages"))
            .json(&payload)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_message(&self, id: &MessageId) -> Result<(), BoardError> {
        let response = self
            .http
            .delete(self.url("/api/messages"))
            .query(&[("id", id.to_string())])
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
