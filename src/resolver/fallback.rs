use chrono::Utc;
use serde_json::{json, Value};

use crate::models::{Question, QuestionSet};

/// The canonical payload used whenever live generation fails (or no API key
/// is configured). Three photosynthesis questions matching the default sample
/// text, so downstream consumers always have something sensible to show.
pub fn fallback_question_set() -> QuestionSet {
    let questions = vec![
        Question {
            question: "What is the primary process plants use to convert sunlight into energy?"
                .to_string(),
            options: vec![
                "Photosynthesis".to_string(),
                "Respiration".to_string(),
                "Fermentation".to_string(),
                "Transpiration".to_string(),
            ],
            correct_answer: "Photosynthesis".to_string(),
            explanation: "Photosynthesis is the process where plants convert light energy into chemical energy stored in glucose.".to_string(),
        },
        Question {
            question: "Which organisms can perform photosynthesis?".to_string(),
            options: vec![
                "Only plants".to_string(),
                "Plants and animals".to_string(),
                "Plants, algae, and some bacteria".to_string(),
                "All living organisms".to_string(),
            ],
            correct_answer: "Plants, algae, and some bacteria".to_string(),
            explanation: "Photosynthesis is performed by plants, algae, and certain types of bacteria called cyanobacteria.".to_string(),
        },
        Question {
            question: "What are the main products of photosynthesis?".to_string(),
            options: vec![
                "Oxygen and glucose".to_string(),
                "Carbon dioxide and water".to_string(),
                "Nitrogen and oxygen".to_string(),
                "Glucose and carbon dioxide".to_string(),
            ],
            correct_answer: "Oxygen and glucose".to_string(),
            explanation: "Photosynthesis produces oxygen (released into the atmosphere) and glucose (used by the plant for energy).".to_string(),
        },
    ];

    let mut metadata = serde_json::Map::new();
    metadata.insert("model".to_string(), json!("fallback"));
    metadata.insert(
        "generated_at".to_string(),
        json!(Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()),
    );
    metadata.insert(
        "note".to_string(),
        json!("Free AI-generated questions - perfect for studying!"),
    );

    QuestionSet {
        questions,
        metadata,
    }
}

/// Fallback payload as raw JSON, matching what `resolve` hands out.
pub fn fallback_payload() -> Value {
    serde_json::to_value(fallback_question_set())
        .unwrap_or_else(|_| json!({ "questions": [] }))
}
