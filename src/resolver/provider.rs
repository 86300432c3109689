use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{ResolverError, Result};
use crate::config::ResolverConfig;

/// The provider backends the generator knows how to talk to. Each one carries
/// its own endpoint layout, request envelope and response shape; everything
/// downstream of `normalize` is provider-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    HuggingFace,
    DeepSeek,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "huggingface",
            Provider::DeepSeek => "deepseek",
        }
    }

    pub fn endpoint(&self, config: &ResolverConfig) -> String {
        match self {
            Provider::HuggingFace => format!("{}/models/{}", config.api_base, config.model),
            Provider::DeepSeek => format!("{}/v1/chat/completions", config.api_base),
        }
    }

    pub fn build_request_body(&self, prompt: &str, config: &ResolverConfig) -> Value {
        match self {
            Provider::HuggingFace => json!({
                "inputs": prompt,
                "parameters": {
                    "max_length": config.max_tokens,
                    "temperature": config.temperature,
                    "do_sample": true,
                    "return_full_text": false
                }
            }),
            Provider::DeepSeek => json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a helpful assistant that generates educational questions based on provided text. Always respond with valid JSON."
                    },
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "temperature": config.temperature,
                "max_tokens": config.max_tokens
            }),
        }
    }

    /// Reduce a raw provider response to the single completion string.
    pub fn normalize(&self, raw: &Value) -> Result<String> {
        match self {
            Provider::HuggingFace => {
                let generations: Vec<HfGeneration> = serde_json::from_value(raw.clone())
                    .map_err(|e| ResolverError::Format(format!("not a generation list: {e}")))?;
                generations
                    .first()
                    .map(|g| g.generated_text.clone())
                    .ok_or_else(|| ResolverError::Format("empty generation list".to_string()))
            }
            Provider::DeepSeek => {
                let chat: ChatResponse = serde_json::from_value(raw.clone())
                    .map_err(|e| ResolverError::Format(format!("not a chat completion: {e}")))?;
                chat.choices
                    .first()
                    .map(|choice| choice.message.content.clone())
                    .ok_or_else(|| ResolverError::Format("chat completion had no choices".to_string()))
            }
        }
    }
}

// ===== API RESPONSE STRUCTURES =====

// Hugging Face inference returns a list of generations
#[derive(Debug, Deserialize)]
struct HfGeneration {
    generated_text: String,
}

// DeepSeek (OpenAI-style) chat completion
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config(provider: Provider) -> ResolverConfig {
        ResolverConfig {
            provider,
            api_base: "http://localhost:0".to_string(),
            api_key: Some("test-key".to_string()),
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            timeout: Duration::from_secs(1),
            max_retries: 3,
            warmup_delay: Duration::from_millis(0),
            net_delay: Duration::from_millis(0),
            strict_credentials: false,
            output_path: "results.json".to_string(),
        }
    }

    #[test]
    fn test_huggingface_endpoint_includes_model() {
        let config = test_config(Provider::HuggingFace);
        assert_eq!(
            Provider::HuggingFace.endpoint(&config),
            "http://localhost:0/models/test-model"
        );
    }

    #[test]
    fn test_deepseek_request_carries_system_message() {
        let config = test_config(Provider::DeepSeek);
        let body = Provider::DeepSeek.build_request_body("generate questions", &config);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "generate questions");
        assert_eq!(body["model"], "test-model");
    }

    #[test]
    fn test_normalize_huggingface_takes_first_generation() {
        let raw = json!([
            {"generated_text": "first"},
            {"generated_text": "second"}
        ]);
        assert_eq!(Provider::HuggingFace.normalize(&raw).unwrap(), "first");
    }

    #[test]
    fn test_normalize_deepseek_takes_first_choice() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}]
        });
        assert_eq!(Provider::DeepSeek.normalize(&raw).unwrap(), "hello");
    }

    #[test]
    fn test_normalize_wrong_shape_is_format_error() {
        let raw = json!({"unexpected": true});
        let err = Provider::HuggingFace.normalize(&raw).unwrap_err();
        assert!(matches!(err, ResolverError::Format(_)));

        let err = Provider::DeepSeek.normalize(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ResolverError::Format(_)));
    }

    #[test]
    fn test_normalize_empty_list_is_format_error() {
        let err = Provider::HuggingFace.normalize(&json!([])).unwrap_err();
        assert!(matches!(err, ResolverError::Format(_)));
    }
}
