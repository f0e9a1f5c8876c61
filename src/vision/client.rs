//! Gemini API クライアント

use super::GenerativeModel;
use crate::config::Config;
use crate::error::ExtractError;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Gemini APIクライアント
pub struct GeminiClient {
    config: Config,
    http_client: reqwest::Client,
}

impl GeminiClient {
    /// 新しいクライアントを作成
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn send(&self, prompt: &str, jpeg: &[u8]) -> Result<String, ExtractError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: IMAGE_MIME_TYPE.to_string(),
                            data: STANDARD.encode(jpeg),
                        },
                    },
                ],
            }],
        };

        let response = self
            .http_client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response.json().await?;
        response.into_text()
    }
}

impl GenerativeModel for GeminiClient {
    fn generate_content(
        &self,
        prompt: &str,
        jpeg: &[u8],
    ) -> impl std::future::Future<Output = Result<String, ExtractError>> + Send {
        self.send(prompt, jpeg)
    }
}

// Gemini API リクエスト/レスポンス構造体

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

#[derive(Serialize)]
struct Blob {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 最初の候補のテキストパートを連結
    fn into_text(self) -> Result<String, ExtractError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ExtractError::EmptyResponse {
                reason: format!("blockReason: {reason}"),
            });
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(ExtractError::EmptyResponse {
                reason: "候補がありません".to_string(),
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|r| format!("finishReason: {r}"))
                .unwrap_or_else(|| "テキストパートがありません".to_string());
            return Err(ExtractError::EmptyResponse { reason });
        }

        Ok(text)
    }
}
