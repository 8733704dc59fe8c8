//! Bible API response bodies.
//!
//! Only the text key is required; the service also echoes a human-readable
//! `reference` such as `"Genesis 1:2"`. Unknown keys are ignored, and a
//! `reference` that is not a string is treated as absent.

use serde::{Deserialize, Deserializer};

/// Body of `GET /api/get_verse/{book}/{chapter}/{verse}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseResponse {
    pub verse: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub reference: Option<String>,
}

/// Body of `GET /api/get_chapter/{book}/{chapters}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChapterResponse {
    pub verses: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub reference: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_string_reference_is_ignored() {
        for reference in [json!(12), json!(null), json!(["Genesis 1:2"]), json!({})] {
            let body = json!({ "verse": "In the beginning", "reference": reference });
            let got: VerseResponse =
                serde_json::from_value(body).expect("verse alone should be enough");
            assert_eq!(got.verse, "In the beginning");
            assert!(got.reference.is_none());
        }
    }

    #[test]
    fn missing_reference_defaults_to_none() {
        let got: ChapterResponse =
            serde_json::from_value(json!({ "verses": "1 Blessed" })).unwrap();
        assert!(got.reference.is_none());
    }

    #[test]
    fn string_reference_is_kept() {
        let got: ChapterResponse =
            serde_json::from_value(json!({ "verses": "1 Blessed", "reference": "Psalms 1" }))
                .unwrap();
        assert_eq!(got.reference.as_deref(), Some("Psalms 1"));
    }
}
