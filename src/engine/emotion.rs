//! Emotion (register) resolution.
//!
//! ```text
//! (1) Override          category pin: primary id, then each fallback id
//! (2) Mode              first rule whose modes contain the entry's mode
//! (3) Default           the document's default_emotion, if it resolves
//! (4) FirstRule         first rule in the document
//! (5) Builtin           literal "安心" with no pattern
//! ```
//!
//! Ids resolve against rule ids first and aliases second. An override whose
//! ids all miss is skipped, and resolution continues at (2).

use serde::Serialize;
use tracing::trace;

use crate::{EmotionDocument, EmotionRule, category_key};

/// Emitted when the document has no rules at all.
pub const BUILTIN_EMOTION_ID: &str = "安心";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEmotion {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_pattern: Option<String>,
}

impl ResolvedEmotion {
    fn from_rule(rule: &EmotionRule) -> Self {
        ResolvedEmotion { id: rule.id.clone(), primary_pattern: rule.primary_pattern().map(str::to_string) }
    }

    fn builtin() -> Self {
        ResolvedEmotion { id: BUILTIN_EMOTION_ID.to_string(), primary_pattern: None }
    }
}

/// Which step of the chain decided the emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionSource {
    Override,
    OverrideFallback,
    Mode,
    Default,
    FirstRule,
    Builtin,
}

impl EmotionSource {
    pub fn name(self) -> &'static str {
        match self {
            EmotionSource::Override => "override",
            EmotionSource::OverrideFallback => "override_fallback",
            EmotionSource::Mode => "mode",
            EmotionSource::Default => "default",
            EmotionSource::FirstRule => "first_rule",
            EmotionSource::Builtin => "builtin",
        }
    }
}

pub fn resolve_emotion(doc: &EmotionDocument, level_one: &str, level_two: &str, mode: &str) -> ResolvedEmotion {
    resolve_emotion_traced(doc, level_one, level_two, mode).0
}

/// Like [`resolve_emotion`], also reporting the deciding step.
pub fn resolve_emotion_traced(
    doc: &EmotionDocument,
    level_one: &str,
    level_two: &str,
    mode: &str,
) -> (ResolvedEmotion, EmotionSource) {
    let key = category_key(level_one, level_two);

    let picked = from_override(doc, &key)
        .or_else(|| doc.rules.iter().find(|rule| rule.applies_to(mode)).map(|rule| (rule, EmotionSource::Mode)))
        .or_else(|| {
            let id = doc.default_emotion_id.as_deref()?;
            doc.rule(id).map(|rule| (rule, EmotionSource::Default))
        })
        .or_else(|| doc.rules.first().map(|rule| (rule, EmotionSource::FirstRule)));

    let (emotion, source) = match picked {
        Some((rule, source)) => (ResolvedEmotion::from_rule(rule), source),
        None => (ResolvedEmotion::builtin(), EmotionSource::Builtin),
    };
    trace!(category = %key, mode, emotion = %emotion.id, source = source.name(), "resolved emotion");
    (emotion, source)
}

fn from_override<'a>(doc: &'a EmotionDocument, key: &str) -> Option<(&'a EmotionRule, EmotionSource)> {
    let pin = doc.override_for(key)?;
    if let Some(rule) = doc.rule(&pin.primary_emotion_id) {
        return Some((rule, EmotionSource::Override));
    }
    pin.fallback_emotion_ids.iter().find_map(|id| doc.rule(id)).map(|rule| (rule, EmotionSource::OverrideFallback))
}
