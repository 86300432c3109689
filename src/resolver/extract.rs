use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::error::{ResolverError, Result};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());
static ANY_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());
static BRACE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Pull a JSON payload out of a model completion.
///
/// Candidates are tried in order: a ```json fenced block, any fenced block,
/// the widest `{...}` span, and finally the whole trimmed text. The first
/// candidate that parses as JSON is returned as-is; no shape checking happens
/// here, so a payload missing expected fields passes through uncorrected.
pub fn extract_json_payload(text: &str) -> Result<Value> {
    let mut candidates: Vec<&str> = Vec::new();

    if let Some(caps) = JSON_FENCE.captures(text) {
        if let Some(m) = caps.get(1) {
            candidates.push(m.as_str());
        }
    }
    if let Some(caps) = ANY_FENCE.captures(text) {
        if let Some(m) = caps.get(1) {
            candidates.push(m.as_str());
        }
    }
    if let Some(m) = BRACE_SPAN.find(text) {
        candidates.push(m.as_str());
    }
    candidates.push(text.trim());

    for candidate in candidates {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            return Ok(value);
        }
    }

    Err(ResolverError::Parse(format!(
        "\"{}\"",
        truncate_for_log(text, 80)
    )))
}

/// Truncate text for logging. Counts characters, not bytes, so multi-byte
/// text never gets sliced mid-character.
pub(crate) fn truncate_for_log(text: &str, max_len: usize) -> String {
    let clean_text = text.replace('\n', " ");
    match clean_text.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &clean_text[..idx]),
        None => clean_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_fence_wins_over_brace_span() {
        let text = "Here you go:\n```json\n{\"winner\": \"fence\"}\n```\nAlso {\"winner\": \"bare\"} inline.";
        let value = extract_json_payload(text).unwrap();
        assert_eq!(value, json!({"winner": "fence"}));
    }

    #[test]
    fn test_untagged_fence() {
        let text = "```\n{\"from\": \"plain fence\"}\n```";
        let value = extract_json_payload(text).unwrap();
        assert_eq!(value, json!({"from": "plain fence"}));
    }

    #[test]
    fn test_brace_span_in_prose() {
        let text = "Sure! The questions are {\"questions\": []} as requested.";
        let value = extract_json_payload(text).unwrap();
        assert_eq!(value, json!({"questions": []}));
    }

    #[test]
    fn test_whole_text_as_last_resort() {
        let value = extract_json_payload("  {\"questions\": []}\n").unwrap();
        assert_eq!(value, json!({"questions": []}));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = extract_json_payload("no json here").unwrap_err();
        assert!(matches!(err, ResolverError::Parse(_)));
    }

    #[test]
    fn test_unparseable_fence_falls_through_to_brace_span() {
        let text = "```json\nnot even json\n```\ntrailing {\"ok\": true} text";
        let value = extract_json_payload(text).unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_missing_fields_pass_through_uncorrected() {
        let text = "```json\n{\"questions\": [{\"question\": \"q?\"}]}\n```";
        let value = extract_json_payload(text).unwrap();
        assert_eq!(value, json!({"questions": [{"question": "q?"}]}));
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 10), "short");
        assert_eq!(truncate_for_log("this is a very long text", 10), "this is a ...");
    }

    #[test]
    fn test_truncate_multibyte_on_char_boundary() {
        // A multi-byte character straddling the byte cutoff must not panic
        let text = format!("{}é and more", "a".repeat(79));
        let truncated = truncate_for_log(&text, 80);
        assert!(truncated.ends_with("é..."));

        assert_eq!(truncate_for_log(&"日".repeat(12), 10), format!("{}...", "日".repeat(10)));
    }

    #[test]
    fn test_multibyte_garbage_near_limit_is_parse_error() {
        let text = format!("{}é no json in sight", "a".repeat(79));
        let err = extract_json_payload(&text).unwrap_err();
        assert!(matches!(err, ResolverError::Parse(_)));
    }
}
