use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ===== GENERATED QUESTION PAYLOAD =====

/// The structured payload recovered from a model completion (or the fallback).
/// `metadata` is free-form: whatever mapping the model emitted, or empty if
/// the completion carried none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}
