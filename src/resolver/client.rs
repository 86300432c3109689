use serde_json::Value;

use super::error::{ResolverError, Result};
use crate::config::ResolverConfig;

/// POST the prompt to the configured provider and return the raw JSON
/// response body.
///
/// Retry policy: HTTP 503 means the hosted model is still warming up, so we
/// wait `warmup_delay * attempt` and try again; a failed request (connect,
/// timeout) waits the shorter `net_delay * attempt`. Both cases make exactly
/// `max_retries` attempts before giving up. Any other error status fails
/// immediately with the status and body.
pub async fn call_provider(prompt: &str, config: &ResolverConfig) -> Result<Value> {
    let api_key = config.api_key.as_deref().ok_or_else(|| ResolverError::Transport {
        status: None,
        message: "no API key configured".to_string(),
    })?;

    let url = config.provider.endpoint(config);
    let request_body = config.provider.build_request_body(prompt, config);

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ResolverError::Transport {
            status: None,
            message: format!("failed to build HTTP client: {e}"),
        })?;

    for attempt in 1..=config.max_retries {
        let response = match client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                if attempt == config.max_retries {
                    return Err(ResolverError::Transport {
                        status: None,
                        message: format!("request failed after {} attempts: {e}", config.max_retries),
                    });
                }
                let wait = config.net_delay * attempt;
                eprintln!(
                    "⚠️  Attempt {}/{} failed, retrying in {:?}: {}",
                    attempt, config.max_retries, wait, e
                );
                tokio::time::sleep(wait).await;
                continue;
            }
        };

        let status = response.status();

        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| ResolverError::Transport {
                status: Some(status.as_u16()),
                message: format!("failed to read response body: {e}"),
            });
        }

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            if attempt == config.max_retries {
                return Err(ResolverError::Transport {
                    status: Some(status.as_u16()),
                    message: format!("model still warming up after {} attempts", config.max_retries),
                });
            }
            let wait = config.warmup_delay * attempt;
            println!("⏳ Model is loading, waiting {:?} before retry...", wait);
            tokio::time::sleep(wait).await;
            continue;
        }

        // Non-retriable status: surface the body for diagnostics
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ResolverError::Transport {
            status: Some(status.as_u16()),
            message: body,
        });
    }

    Err(ResolverError::Transport {
        status: None,
        message: "all API attempts failed".to_string(),
    })
}
