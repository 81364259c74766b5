use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::decode_document;
use super::error::DataError;

/// Target publishing channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Ad,
    Social,
    #[default]
    Lp,
}

impl Media {
    pub const ALL: [Media; 3] = [Media::Ad, Media::Social, Media::Lp];

    pub fn as_str(self) -> &'static str {
        match self {
            Media::Ad => "ad",
            Media::Social => "social",
            Media::Lp => "lp",
        }
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media '{0}' (expected ad, social or lp)")]
pub struct ParseMediaError(pub String);

impl FromStr for Media {
    type Err = ParseMediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Media::ALL.into_iter().find(|m| m.as_str() == s.trim()).ok_or_else(|| ParseMediaError(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleDefaults {
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub sentence_length: Option<String>,
    #[serde(default, rename = "emoji")]
    pub use_emoji: Option<bool>,
}

/// One voice/tone definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleRule {
    pub id: String,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub rhythm: Option<String>,
    /// Words to favor.
    #[serde(default, rename = "lexicon_add")]
    pub lexicon_additions: Option<Vec<String>>,
    /// Words to avoid.
    #[serde(default, rename = "lexicon_avoid")]
    pub lexicon_exclusions: Option<Vec<String>>,
    #[serde(default, rename = "modes")]
    pub applicable_modes: Vec<String>,
}

impl StyleRule {
    pub fn applies_to(&self, mode: &str) -> bool {
        self.applicable_modes.iter().any(|m| m == mode)
    }
}

/// Channel-specific formatting pin.
///
/// `media` is kept as written. An entry naming a channel that is not a
/// [`Media`] loads but is never selected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaOverride {
    pub media: String,
    #[serde(default)]
    pub sentence_length: Option<String>,
    #[serde(default, rename = "emoji")]
    pub use_emoji: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleDocument {
    #[serde(default)]
    pub defaults: StyleDefaults,
    #[serde(rename = "styles")]
    pub rules: Vec<StyleRule>,
    #[serde(default)]
    pub media_overrides: Vec<MediaOverride>,
}

impl StyleDocument {
    pub fn media_override(&self, media: Media) -> Option<&MediaOverride> {
        self.media_overrides.iter().find(|o| o.media == media.as_str())
    }
}

pub fn load_style_document(source_id: &str, text: &str) -> Result<StyleDocument, DataError> {
    let doc: StyleDocument = decode_document(source_id, text, "styles")?;
    debug!(source = source_id, rules = doc.rules.len(), media_overrides = doc.media_overrides.len(), "loaded style document");
    Ok(doc)
}
