use serde::Deserialize;
use tracing::debug;

use super::document::decode_document;
use super::error::DataError;

/// One emotional register definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmotionRule {
    pub id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, rename = "tone")]
    pub tonal_descriptors: Vec<String>,
    /// The first pattern is the primary one.
    #[serde(default, rename = "patterns")]
    pub phrase_patterns: Vec<String>,
    #[serde(default, rename = "modes")]
    pub applicable_modes: Vec<String>,
}

impl EmotionRule {
    pub fn answers_to(&self, id: &str) -> bool {
        self.id == id || self.aliases.iter().any(|alias| alias == id)
    }

    pub fn applies_to(&self, mode: &str) -> bool {
        self.applicable_modes.iter().any(|m| m == mode)
    }

    pub fn primary_pattern(&self) -> Option<&str> {
        self.phrase_patterns.first().map(String::as_str)
    }
}

/// Pins the emotion for one `"<level_one>/<level_two>"` category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmotionOverride {
    #[serde(rename = "category")]
    pub category_key: String,
    #[serde(rename = "primary")]
    pub primary_emotion_id: String,
    #[serde(default, rename = "fallback")]
    pub fallback_emotion_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmotionDocument {
    #[serde(default, rename = "default_emotion")]
    pub default_emotion_id: Option<String>,
    #[serde(rename = "emotions")]
    pub rules: Vec<EmotionRule>,
    #[serde(default, rename = "category_overrides")]
    pub overrides: Vec<EmotionOverride>,
}

impl EmotionDocument {
    /// Find a rule by id, then by alias.
    pub fn rule(&self, id: &str) -> Option<&EmotionRule> {
        self.rules.iter().find(|rule| rule.id == id).or_else(|| self.rules.iter().find(|rule| rule.answers_to(id)))
    }

    pub fn override_for(&self, category_key: &str) -> Option<&EmotionOverride> {
        self.overrides.iter().find(|o| o.category_key == category_key)
    }
}

pub fn load_emotion_document(source_id: &str, text: &str) -> Result<EmotionDocument, DataError> {
    let doc: EmotionDocument = decode_document(source_id, text, "emotions")?;
    debug!(source = source_id, rules = doc.rules.len(), overrides = doc.overrides.len(), "loaded emotion document");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_full_document() {
        let doc = load_emotion_document("emotion.yaml", include_str!("../../data/emotion.yaml")).unwrap();
        assert_eq!(doc.default_emotion_id.as_deref(), Some("安心"));
        assert_eq!(doc.rules[0].id, "安心");
        assert_eq!(doc.rules[0].primary_pattern(), Some("毎日安心して使える"));
        assert!(doc.rules[0].applies_to("safe"));
        assert_eq!(doc.overrides[0].category_key, "美容・ヘルスケア/スキンケア");
        assert_eq!(doc.overrides[1].fallback_emotion_ids, vec!["特別感".to_string()]);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let doc = load_emotion_document("e", r#"{"emotions": [{"id": "安心"}]}"#).unwrap();
        assert_eq!(doc.default_emotion_id, None);
        assert!(doc.overrides.is_empty());
        assert_eq!(doc.rules[0], EmotionRule { id: "安心".into(), ..Default::default() });
        assert_eq!(doc.rules[0].primary_pattern(), None);
    }

    #[test]
    fn rule_lookup_accepts_aliases() {
        let doc = load_emotion_document("e", "emotions:\n  - id: 安心\n    aliases: [安心感]\n").unwrap();
        assert_eq!(doc.rule("安心感").map(|r| r.id.as_str()), Some("安心"));
        assert!(doc.rule("感動").is_none());
    }

    #[test]
    fn dangling_override_is_tolerated_at_load() {
        let text = "emotions:\n  - id: 安心\ncategory_overrides:\n  - category: a/b\n    primary: 感動\n";
        let doc = load_emotion_document("e", text).unwrap();
        assert_eq!(doc.override_for("a/b").map(|o| o.primary_emotion_id.as_str()), Some("感動"));
    }

    #[test]
    fn emotions_must_be_a_sequence() {
        let err = load_emotion_document("e", "emotions: 安心\n").unwrap_err();
        assert!(matches!(err, DataError::Schema { field: "emotions", .. }));
    }
}
