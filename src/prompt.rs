/// Default study material used when the workflow supplies no source text.
pub const SAMPLE_TEXT: &str = "\
Photosynthesis is the process used by plants, algae and certain bacteria to harness energy from sunlight and turn it into chemical energy. \
There are two types of photosynthetic processes: oxygenic photosynthesis and anoxygenic photosynthesis. \
The general principles of anoxygenic and oxygenic photosynthesis are very similar, but oxygenic photosynthesis is the most common and is seen in plants, algae and cyanobacteria. \
During photosynthesis, plants convert carbon dioxide and water into glucose and oxygen using sunlight energy. \
Chlorophyll is the green pigment that captures sunlight energy for photosynthesis.";

/// Build the question-generation prompt for a piece of source text.
///
/// The prompt spells out the exact JSON shape we try to extract later, so a
/// cooperative model hands us a directly parseable payload.
pub fn build_question_prompt(source_text: &str) -> String {
    format!(
        r#"Based on the following text, generate 3 multiple choice questions with 4 options each and indicate the correct answer.
Make the questions educational and relevant to the text content.

Text: {source_text}

Format your response as a valid JSON object with this exact structure:
{{
  "questions": [
    {{
      "question": "question text here",
      "options": ["option a", "option b", "option c", "option d"],
      "correct_answer": "option a",
      "explanation": "brief explanation of why this is correct"
    }}
  ],
  "metadata": {{
    "model": "model name",
    "generated_at": "timestamp"
  }}
}}

Return ONLY the JSON object, no additional text or explanation."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_source_text() {
        let prompt = build_question_prompt("The mitochondria is the powerhouse of the cell.");
        assert!(prompt.contains("The mitochondria is the powerhouse of the cell."));
        assert!(prompt.contains("\"questions\""));
        assert!(prompt.contains("Return ONLY the JSON object"));
    }
}
