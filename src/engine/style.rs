use serde::Serialize;
use tracing::trace;

use crate::{Media, StyleDocument, StyleRule};

/// Voice used when neither the rule nor the document defaults set one.
pub const FALLBACK_VOICE: &str = "です・ます";
/// Sentence length used when neither the media override nor the defaults set one.
pub const FALLBACK_SENTENCE_LENGTH: &str = "short";
/// Style id reported for a document that has no style rules.
pub const DEFAULT_STYLE_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub id: String,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhythm: Option<String>,
    #[serde(rename = "lexicon_add", skip_serializing_if = "Option::is_none")]
    pub lexicon_additions: Option<Vec<String>>,
    #[serde(rename = "lexicon_avoid", skip_serializing_if = "Option::is_none")]
    pub lexicon_exclusions: Option<Vec<String>>,
    #[serde(rename = "emoji")]
    pub use_emoji: bool,
    pub sentence_length: String,
}

/// Pick the style for `mode` and apply the `media` channel's formatting.
///
/// The rule is the first whose modes contain `mode`, else the first rule.
/// Voice falls back rule → defaults → "です・ます"; emoji and sentence length
/// fall back media override → defaults → `false` / "short".
pub fn resolve_style(doc: &StyleDocument, mode: &str, media: Media) -> ResolvedStyle {
    let rule: Option<&StyleRule> = doc.rules.iter().find(|rule| rule.applies_to(mode)).or_else(|| doc.rules.first());
    let channel = doc.media_override(media);

    let voice = rule
        .and_then(|r| r.voice.clone())
        .or_else(|| doc.defaults.voice.clone())
        .unwrap_or_else(|| FALLBACK_VOICE.to_string());
    let use_emoji = channel.and_then(|o| o.use_emoji).or(doc.defaults.use_emoji).unwrap_or(false);
    let sentence_length = channel
        .and_then(|o| o.sentence_length.clone())
        .or_else(|| doc.defaults.sentence_length.clone())
        .unwrap_or_else(|| FALLBACK_SENTENCE_LENGTH.to_string());

    let style = ResolvedStyle {
        id: rule.map_or_else(|| DEFAULT_STYLE_ID.to_string(), |r| r.id.clone()),
        voice,
        rhythm: rule.and_then(|r| r.rhythm.clone()),
        lexicon_additions: rule.and_then(|r| r.lexicon_additions.clone()),
        lexicon_exclusions: rule.and_then(|r| r.lexicon_exclusions.clone()),
        use_emoji,
        sentence_length,
    };
    trace!(mode, %media, style = %style.id, "resolved style");
    style
}
