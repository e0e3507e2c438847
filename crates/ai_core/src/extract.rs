//! Response text extraction
//!
//! Upstream providers disagree on where generated text lives. Extraction is
//! an explicit precedence over a small tagged union: `choices[0].message
//! .content` wins, then `output[0].content`, then a fixed fallback literal.
//! Structural absence at any level is an expected condition, never an error.

use serde::Deserialize;
use serde_json::Value;

/// Literal substituted when no recognizable text field exists
pub const NO_RESPONSE_FALLBACK: &str = "No response from AI.";

/// Where the extracted text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    /// `choices[0].message.content` (OpenAI chat-completions shape)
    Choices(String),
    /// `output[0].content` (responses-style shape)
    Output(String),
    /// Neither shape matched; render the fallback literal
    Missing,
}

impl ExtractedText {
    /// The text to hand to the caller
    pub fn as_str(&self) -> &str {
        match self {
            Self::Choices(text) | Self::Output(text) => text,
            Self::Missing => NO_RESPONSE_FALLBACK,
        }
    }

    /// Consume into the final response text
    pub fn into_text(self) -> String {
        match self {
            Self::Choices(text) | Self::Output(text) => text,
            Self::Missing => NO_RESPONSE_FALLBACK.to_string(),
        }
    }

    /// True when the upstream body carried no recognizable text field
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

#[derive(Debug, Deserialize)]
struct ChoicesShape {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OutputShape {
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Option<String>,
}

fn from_choices(raw: &Value) -> Option<String> {
    let shape: ChoicesShape = serde_json::from_value(raw.clone()).ok()?;
    shape.choices.into_iter().next()?.message?.content
}

fn from_output(raw: &Value) -> Option<String> {
    let shape: OutputShape = serde_json::from_value(raw.clone()).ok()?;
    shape.output.into_iter().next()?.content
}

/// Extract generated text from an arbitrary upstream JSON body.
///
/// Never fails; a body with no recognizable text field yields
/// [`ExtractedText::Missing`].
pub fn extract(raw: &Value) -> ExtractedText {
    if let Some(text) = from_choices(raw) {
        return ExtractedText::Choices(text);
    }
    if let Some(text) = from_output(raw) {
        return ExtractedText::Output(text);
    }
    ExtractedText::Missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn choices_shape_is_extracted() {
        let raw = json!({"choices": [{"message": {"content": "hello"}}]});
        assert_eq!(extract(&raw), ExtractedText::Choices("hello".to_string()));
    }

    #[test]
    fn output_shape_is_extracted() {
        let raw = json!({"output": [{"content": "x"}]});
        assert_eq!(extract(&raw), ExtractedText::Output("x".to_string()));
    }

    #[test]
    fn choices_takes_precedence_over_output() {
        let raw = json!({
            "choices": [{"message": {"content": "y"}}],
            "output": [{"content": "z"}]
        });
        assert_eq!(extract(&raw).into_text(), "y");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!({
            "output": [{"content": "x"}],
            "extra": {"usage": {"total_tokens": 12}, "id": "resp-1"}
        });
        assert_eq!(extract(&raw).into_text(), "x");
    }

    #[test]
    fn empty_object_falls_back() {
        let extracted = extract(&json!({}));
        assert!(extracted.is_missing());
        assert_eq!(extracted.into_text(), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn null_choices_falls_through_to_output() {
        let raw = json!({"choices": null, "output": [{"content": "fallback"}]});
        assert_eq!(extract(&raw).into_text(), "fallback");
    }

    #[test]
    fn empty_choices_array_falls_through() {
        let raw = json!({"choices": [], "output": [{"content": "from output"}]});
        assert_eq!(extract(&raw).into_text(), "from output");
    }

    #[test]
    fn choice_without_message_falls_through() {
        let raw = json!({"choices": [{"index": 0}]});
        assert!(extract(&raw).is_missing());
    }

    #[test]
    fn null_message_content_falls_through() {
        let raw = json!({"choices": [{"message": {"content": null}}]});
        assert!(extract(&raw).is_missing());
    }

    #[test]
    fn empty_output_array_falls_back() {
        let raw = json!({"output": []});
        assert!(extract(&raw).is_missing());
    }

    #[test]
    fn non_object_body_falls_back() {
        assert!(extract(&json!("just a string")).is_missing());
        assert!(extract(&json!(42)).is_missing());
        assert!(extract(&json!(null)).is_missing());
    }

    #[test]
    fn as_str_matches_into_text() {
        let extracted = extract(&json!({"choices": [{"message": {"content": "same"}}]}));
        assert_eq!(extracted.as_str(), "same");
        assert_eq!(extracted.into_text(), "same");
    }

    #[test]
    fn fallback_literal_is_exact() {
        assert_eq!(NO_RESPONSE_FALLBACK, "No response from AI.");
    }
}
