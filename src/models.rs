use serde::{Deserialize, Serialize};

// Incoming translation request body
#[derive(Deserialize, Clone)]
pub struct TranslateRequest {
    #[serde(default)]
    pub message: String,
}

// Normalized result returned to the front-end
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TranslationResponse {
    pub true_meaning: String,
    pub toxicity_level: u8,
}

// Chat-completion wire format (OpenAI-compatible, what Grok speaks)
#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub response_format: ResponseFormat<'a>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
pub struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}
