use serde::{Deserialize, Serialize};

/// Backend-computed narrative evaluation of a snapshot. Opaque to this
/// crate apart from the recommendations, which need normalizing before
/// display (see [`RawRecommendations`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub score: i32,
    #[serde(default)]
    pub risk: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub recommendations: RawRecommendations,
}

/// The backend stores recommendations as a serialized text column, so the
/// wire shape is either a native JSON array of strings or a string that
/// itself encodes a JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecommendations {
    Listed(Vec<String>),
    Encoded(String),
}

impl Default for RawRecommendations {
    fn default() -> Self {
        Self::Listed(Vec::new())
    }
}

impl RawRecommendations {
    /// Total normalization into an ordered list for 1-based enumerated
    /// display. A malformed encoding degrades to the original text as a
    /// single item; this never fails and never panics.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Listed(items) => items.clone(),
            Self::Encoded(text) => normalize_encoded(text),
        }
    }
}

fn normalize_encoded(text: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Array(items)) => items.into_iter().map(value_to_text).collect(),
        Ok(value) => vec![value_to_text(value)],
        Err(_) => vec![text.to_string()],
    }
}

fn value_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_list_passes_through_in_order() {
        let raw = RawRecommendations::Listed(vec!["cut costs".into(), "raise prices".into()]);
        assert_eq!(raw.normalize(), vec!["cut costs", "raise prices"]);
    }

    #[test]
    fn serialized_list_round_trips() {
        let items = vec!["cut costs".to_string(), "raise prices".to_string()];
        let encoded = serde_json::to_string(&items).unwrap();
        let raw = RawRecommendations::Encoded(encoded);
        assert_eq!(raw.normalize(), items);
    }

    #[test]
    fn encoded_scalar_is_wrapped_as_single_item() {
        let raw = RawRecommendations::Encoded("\"diversify suppliers\"".to_string());
        assert_eq!(raw.normalize(), vec!["diversify suppliers"]);
    }

    #[test]
    fn malformed_encoding_falls_back_to_the_original_text() {
        let raw = RawRecommendations::Encoded("just hire more people".to_string());
        assert_eq!(raw.normalize(), vec!["just hire more people"]);
    }

    #[test]
    fn assessment_decodes_with_string_recommendations() {
        let assessment: Assessment = serde_json::from_value(serde_json::json!({
            "score": 72,
            "risk": "Calculated",
            "summary": "Healthy margins.",
            "recommendations": "[\"Negotiate rent\", \"Automate invoicing\"]",
        }))
        .unwrap();
        assert_eq!(
            assessment.recommendations.normalize(),
            vec!["Negotiate rent", "Automate invoicing"]
        );
    }

    #[test]
    fn assessment_decodes_with_native_recommendations() {
        let assessment: Assessment = serde_json::from_value(serde_json::json!({
            "score": 40,
            "summary": "Thin margins.",
            "recommendations": ["Reduce OpEx"],
        }))
        .unwrap();
        assert_eq!(assessment.recommendations.normalize(), vec!["Reduce OpEx"]);
    }
}
