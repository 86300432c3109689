use std::time::Duration;

use crate::resolver::Provider;

// Hugging Face inference defaults
const HF_API_BASE: &str = "https://api-inference.huggingface.co";
const HF_DEFAULT_MODEL: &str = "microsoft/DialoGPT-large";
const HF_TIMEOUT_SECS: u64 = 120;
const HF_MAX_LENGTH: u32 = 1000;

// DeepSeek chat completion defaults
const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";
const DEEPSEEK_MODEL: &str = "deepseek-chat";
const DEEPSEEK_TIMEOUT_SECS: u64 = 60;
const DEEPSEEK_MAX_TOKENS: u32 = 2000;

/// Everything the resolver needs for one run, read from the environment
/// exactly once at startup. No env lookups happen past this point.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub provider: Provider,
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Base delay for "model warming up" (HTTP 503) retries; the n-th attempt
    /// waits `warmup_delay * n`.
    pub warmup_delay: Duration,
    /// Base delay for transient network-failure retries.
    pub net_delay: Duration,
    /// Treat a missing API key as fatal instead of falling back.
    pub strict_credentials: bool,
    pub output_path: String,
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        let provider = match std::env::var("PROVIDER").as_deref() {
            Ok("deepseek") => Provider::DeepSeek,
            _ => Provider::HuggingFace,
        };

        let (api_base, api_key, model, max_tokens, timeout) = match provider {
            Provider::HuggingFace => (
                HF_API_BASE.to_string(),
                std::env::var("HUGGINGFACE_API_KEY").ok(),
                std::env::var("HF_MODEL").unwrap_or_else(|_| HF_DEFAULT_MODEL.to_string()),
                HF_MAX_LENGTH,
                Duration::from_secs(HF_TIMEOUT_SECS),
            ),
            Provider::DeepSeek => (
                DEEPSEEK_API_BASE.to_string(),
                std::env::var("DEEPSEEK_API_KEY").ok(),
                DEEPSEEK_MODEL.to_string(),
                DEEPSEEK_MAX_TOKENS,
                Duration::from_secs(DEEPSEEK_TIMEOUT_SECS),
            ),
        };

        Self {
            provider,
            api_base,
            api_key,
            model,
            temperature: 0.7,
            max_tokens,
            timeout,
            max_retries: 3,
            warmup_delay: Duration::from_secs(10),
            net_delay: Duration::from_secs(5),
            strict_credentials: std::env::var("REQUIRE_API_KEY")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            output_path: std::env::var("OUTPUT_FILE").unwrap_or_else(|_| "results.json".to_string()),
        }
    }
}
