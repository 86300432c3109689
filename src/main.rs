use anyhow::Context;

pub mod config;
pub mod models;
pub mod prompt;
pub mod resolver;

use config::ResolverConfig;
use prompt::{build_question_prompt, SAMPLE_TEXT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ResolverConfig::from_env();

    let key_status = if config.api_key.is_some() {
        "\x1b[32m✅ READY\x1b[0m"
    } else {
        "\x1b[33m⚠️  MISSING\x1b[0m"
    };

    println!(" 🔧 \x1b[1mExamBlox QUESTION GENERATOR\x1b[0m");
    println!("    ├─ 🧠 Provider  : {}", config.provider.name());
    println!("    ├─ 🤖 Model     : {}", config.model);
    println!("    ├─ 🔑 API key   : {}", key_status);
    println!("    └─ 📄 Output    : {}", config.output_path);

    if config.strict_credentials && config.api_key.is_none() {
        anyhow::bail!(
            "no API key configured for provider {} and REQUIRE_API_KEY is set",
            config.provider.name()
        );
    }

    let prompt = build_question_prompt(SAMPLE_TEXT);
    let payload = resolver::resolve(&prompt, &config).await;

    let json = serde_json::to_string_pretty(&payload).context("failed to serialize results")?;
    std::fs::write(&config.output_path, json)
        .with_context(|| format!("failed to write {}", config.output_path))?;

    let count = payload
        .get("questions")
        .and_then(|q| q.as_array())
        .map(|a| a.len())
        .unwrap_or(0);

    println!("✅ Results saved to {}", config.output_path);
    println!("🎉 Question generation completed successfully!");
    println!("📊 Generated {} questions", count);

    Ok(())
}
