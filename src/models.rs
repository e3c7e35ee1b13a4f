use serde::{Deserialize, Serialize};

// Prompt sent by the chat frontend, re-sent as-is to the AI service
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
}

// AI service response format, forwarded verbatim to the frontend
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TextResponse {
    pub text: String,
}
