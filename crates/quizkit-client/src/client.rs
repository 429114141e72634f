use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use uuid::Uuid;

use quizkit_core::models::question::{Question, QuestionDraft};
use quizkit_core::models::response::{Response, ResponseDraft};

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the `/api` routes of a quiz server.
#[derive(Debug, Clone)]
pub struct QuizClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl QuizClient {
    /// `base_url` is the server root, without the `/api` suffix. Empty means
    /// a local server on the default port.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    #[instrument(skip(self))]
    pub async fn list_questions(&self) -> Result<Vec<Question>, ClientError> {
        let resp = self.client.get(self.url("/questions")).send().await;
        decode(resp).await
    }

    #[instrument(skip(self))]
    pub async fn get_question(&self, id: Uuid) -> Result<Question, ClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/questions/{id}")))
            .send()
            .await;
        decode(resp).await
    }

    #[instrument(skip(self, draft))]
    pub async fn create_question(&self, draft: &QuestionDraft) -> Result<Question, ClientError> {
        let resp = self
            .client
            .post(self.url("/questions"))
            .json(draft)
            .send()
            .await;
        decode(resp).await
    }

    #[instrument(skip(self, draft))]
    pub async fn update_question(
        &self,
        id: Uuid,
        draft: &QuestionDraft,
    ) -> Result<Question, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/questions/{id}")))
            .json(draft)
            .send()
            .await;
        decode(resp).await
    }

    /// Delete a question, returning the server's confirmation message.
    #[instrument(skip(self))]
    pub async fn delete_question(&self, id: Uuid) -> Result<String, ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/questions/{id}")))
            .send()
            .await;
        let body: MessageBody = decode(resp).await?;
        Ok(body.message)
    }

    #[instrument(skip(self, draft))]
    pub async fn create_response(&self, draft: &ResponseDraft) -> Result<Response, ClientError> {
        let resp = self
            .client
            .post(self.url("/responses"))
            .json(draft)
            .send()
            .await;
        decode(resp).await
    }

    #[instrument(skip(self))]
    pub async fn list_responses(&self, question_id: Uuid) -> Result<Vec<Response>, ClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/responses/question/{question_id}")))
            .send()
            .await;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(
    resp: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ClientError> {
    let resp = resp.map_err(|e| ClientError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    if status >= 400 {
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);
        return Err(match status {
            400 => ClientError::BadRequest(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        });
    }

    resp.json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
