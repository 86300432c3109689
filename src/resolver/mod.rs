mod client;
mod error;
mod extract;
mod fallback;
mod provider;

pub use client::call_provider;
pub use error::{ResolverError, Result};
pub use extract::extract_json_payload;
pub use fallback::{fallback_payload, fallback_question_set};
pub use provider::Provider;

use serde_json::Value;

use crate::config::ResolverConfig;
use extract::truncate_for_log;

// ===== TOP-LEVEL RESOLUTION =====

/// Resolve a prompt to a question payload. Total: always returns a
/// syntactically valid JSON payload, no matter what the provider does.
///
/// Without an API key no network call is made and the fallback is returned
/// directly (offline/dev mode). Otherwise any failure along
/// call → normalize → extract is reported to the console and downgraded to
/// the fallback payload.
pub async fn resolve(prompt: &str, config: &ResolverConfig) -> Value {
    if config.api_key.is_none() {
        println!("⚠️  No API key configured, using fallback questions (offline mode)");
        return fallback::fallback_payload();
    }

    match resolve_live(prompt, config).await {
        Ok(payload) => {
            println!("✅ Used live {} response", config.provider.name());
            payload
        }
        Err(e) => {
            match &e {
                ResolverError::Transport { status, .. } => match status {
                    Some(code) => eprintln!("❌ Provider error (HTTP {})", code),
                    None => eprintln!("❌ Provider unreachable"),
                },
                ResolverError::Format(_) => eprintln!("⚠️  Unexpected API response format"),
                ResolverError::Parse(_) => eprintln!("⚠️  Could not parse AI response as JSON"),
            }
            eprintln!("📁 Used fallback due to: {}", e);
            fallback::fallback_payload()
        }
    }
}

async fn resolve_live(prompt: &str, config: &ResolverConfig) -> Result<Value> {
    println!("🔍 Sending request to {}...", config.provider.name());
    let raw = client::call_provider(prompt, config).await?;

    let completion = config.provider.normalize(&raw)?;
    println!("✅ AI response received: {}", truncate_for_log(&completion, 100));

    extract::extract_json_payload(&completion)
}
