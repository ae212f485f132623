//! REST gateway store implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quizforge_core::error::StoreError;
use quizforge_core::records::QuestionRecord;
use quizforge_core::traits::QuestionStore;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Store backed by the hosted question gateway.
///
/// The gateway persists batches atomically: a non-2xx response means no
/// record of the batch was written.
pub struct RestStore {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn error_message(response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<GatewayError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body)
    }
}

#[derive(Serialize)]
struct SaveBatchRequest<'a> {
    questions: &'a [QuestionRecord],
}

#[derive(Deserialize)]
struct SaveBatchResponse {
    questions: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
struct ListResponse {
    questions: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
struct GatewayError {
    error: GatewayErrorBody,
}

#[derive(Deserialize)]
struct GatewayErrorBody {
    message: String,
}

#[async_trait]
impl QuestionStore for RestStore {
    fn name(&self) -> &str {
        "rest"
    }

    #[instrument(skip(self, batch), fields(batch_len = batch.len()))]
    async fn save_questions(
        &self,
        batch: &[QuestionRecord],
    ) -> anyhow::Result<Vec<QuestionRecord>> {
        let body = SaveBatchRequest { questions: batch };

        let response = self
            .client
            .post(format!("{}/v1/questions/batch", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    StoreError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::AuthenticationFailed(body).into());
        }
        if status == 422 {
            return Err(StoreError::InvalidRecord(Self::error_message(response).await).into());
        }
        if status >= 400 {
            return Err(StoreError::Rejected {
                status,
                message: Self::error_message(response).await,
            }
            .into());
        }

        let parsed: SaveBatchResponse =
            response.json().await.map_err(|e| StoreError::Rejected {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;
        Ok(parsed.questions)
    }

    #[instrument(skip(self))]
    async fn list_questions(&self, content_id: &str) -> anyhow::Result<Vec<QuestionRecord>> {
        let response = self
            .client
            .get(format!("{}/v1/questions", self.base_url))
            .query(&[("contentId", content_id)])
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    StoreError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::AuthenticationFailed(body).into());
        }
        if status >= 400 {
            return Err(StoreError::Rejected {
                status,
                message: Self::error_message(response).await,
            }
            .into());
        }

        let parsed: ListResponse = response.json().await.map_err(|e| StoreError::Rejected {
            status: 0,
            message: format!("failed to parse response: {e}"),
        })?;
        Ok(parsed.questions)
    }
}
