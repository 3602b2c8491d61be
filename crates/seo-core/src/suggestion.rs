//! SEO Suggestion Model

use serde::{Deserialize, Serialize};

/// Structured SEO recommendation returned to the UI.
///
/// Immutable after creation; the cache owns its copy and hands out clones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested page title
    pub title: String,

    /// Suggested meta description
    pub description: String,

    /// Suggested keywords, in order
    pub keywords: Vec<String>,

    /// Improvement notes, in order
    pub improvements: Vec<String>,
}

impl Suggestion {
    /// Shape a suggestion from the analyzed content and the model's raw
    /// reply.
    ///
    /// Title, description, and keywords are fixed templates derived from the
    /// input; only `improvements` carries the model's text. This decoupling
    /// is carried over from the shipped product as observed behavior — do
    /// not change it to parse structured model output without a product
    /// decision.
    pub fn from_model_output(content: &str, raw: &str) -> Self {
        Self {
            title: format!("Optimized {content}"),
            description: "SEO-optimized version of your content".into(),
            keywords: vec!["viral".into(), "content".into(), "optimization".into()],
            improvements: vec![raw.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templated_shape() {
        let s = Suggestion::from_model_output("hello", "Use more keywords");
        assert_eq!(s.title, "Optimized hello");
        assert_eq!(s.description, "SEO-optimized version of your content");
        assert_eq!(s.keywords, vec!["viral", "content", "optimization"]);
        assert_eq!(s.improvements, vec!["Use more keywords"]);
    }

    #[test]
    fn test_roundtrips_through_json() {
        let s = Suggestion::from_model_output("launch post", "Shorten the title");
        let json = serde_json::to_string(&s).unwrap();
        let back: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
