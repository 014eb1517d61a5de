use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
    TranslationResponse,
};

// Persona prompt for the translator. The provider is asked for a strict JSON
// object on top of this, and we still validate the shape ourselves.
pub const SYSTEM_INSTRUCTION: &str = "
你是一個極度毒舌、精準的前任, 渣男渣女心聲翻譯機，必須以渣男渣女第一人稱心境敘述
任務：把前任傳的表面好聽用語，
翻譯成對方心裡最真實、最缺德、最直白的想法、越嘲諷越好、越有創意有趣越好。
語氣要又狠又好笑，像最佳閨蜜在深夜吐槽。
絕對不要溫柔，不要安慰，直接捅刀。
不要過度使用大陸用語，多用台灣流行用語。
以下是範例：
訊息：我們還是當朋友吧
真心話：我看到你就想吐，但還想繼續撩你當備胎

你必須以JSON格式回應，包含兩個欄位：
- true_meaning: 翻譯後的真心話 (字串)
- toxicity_level: 毒性分數 0-100 (數字)
";

pub const TEMPERATURE: f32 = 1.4;
const MAX_COMPLETION_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("no content in provider response")]
    EmptyCompletion,
    #[error("provider content is not valid JSON: {0}")]
    MalformedContent(#[from] serde_json::Error),
    #[error("provider content failed validation: {0}")]
    InvalidShape(&'static str),
}

// The single capability the handler needs from the LLM side: one system
// instruction, one user turn, back comes the raw completion content string.
// Kept behind a trait so tests can swap the network out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
        temperature: f32,
    ) -> Result<String, ProviderError>;
}

// xAI Grok over the OpenAI-compatible chat completions endpoint
pub struct GrokProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GrokProvider {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionProvider for GrokProvider {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // body goes to the log only, never to the client
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "provider returned error status");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyCompletion)
    }
}

// Loose shape for the provider's content so a missing field is a validation
// error we control rather than a serde message.
#[derive(Deserialize)]
struct RawTranslation {
    true_meaning: Option<String>,
    toxicity_level: Option<f64>,
}

// Parse and validate the provider's content string. true_meaning passes
// through untouched; toxicity_level is clamped into 0..=100.
pub fn parse_translation(content: &str) -> Result<TranslationResponse, ProviderError> {
    let raw: RawTranslation = serde_json::from_str(content)?;

    let true_meaning = raw
        .true_meaning
        .filter(|s| !s.trim().is_empty())
        .ok_or(ProviderError::InvalidShape("true_meaning missing or empty"))?;

    let toxicity_level = raw
        .toxicity_level
        .ok_or(ProviderError::InvalidShape("toxicity_level missing"))?;

    Ok(TranslationResponse {
        true_meaning,
        toxicity_level: toxicity_level.round().clamp(0.0, 100.0) as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_content() {
        let result =
            parse_translation(r#"{"true_meaning": "我看到你就想吐", "toxicity_level": 87}"#)
                .unwrap();
        assert_eq!(result.true_meaning, "我看到你就想吐");
        assert_eq!(result.toxicity_level, 87);
    }

    #[test]
    fn rejects_non_json_content() {
        let result = parse_translation("sorry, I can't help with that");
        assert!(matches!(result, Err(ProviderError::MalformedContent(_))));
    }

    #[test]
    fn rejects_missing_or_empty_true_meaning() {
        assert!(matches!(
            parse_translation(r#"{"toxicity_level": 50}"#),
            Err(ProviderError::InvalidShape(_))
        ));
        assert!(matches!(
            parse_translation(r#"{"true_meaning": "  ", "toxicity_level": 50}"#),
            Err(ProviderError::InvalidShape(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_toxicity() {
        assert!(matches!(
            parse_translation(r#"{"true_meaning": "哼", "toxicity_level": "high"}"#),
            Err(ProviderError::MalformedContent(_))
        ));
        assert!(matches!(
            parse_translation(r#"{"true_meaning": "哼"}"#),
            Err(ProviderError::InvalidShape(_))
        ));
    }

    #[test]
    fn clamps_toxicity_into_range() {
        let over = parse_translation(r#"{"true_meaning": "哼", "toxicity_level": 250}"#).unwrap();
        assert_eq!(over.toxicity_level, 100);

        let under = parse_translation(r#"{"true_meaning": "哼", "toxicity_level": -3}"#).unwrap();
        assert_eq!(under.toxicity_level, 0);

        let fractional =
            parse_translation(r#"{"true_meaning": "哼", "toxicity_level": 87.6}"#).unwrap();
        assert_eq!(fractional.toxicity_level, 88);
    }
}
