//! Rule-based intent resolution for e-commerce copy.
//!
//! A free-text product description is mapped to a taxonomy category, then to
//! an emotional register and a writing style:
//!
//! ```text
//! text ─▶ classify ─▶ CategoryEntry ─┬─▶ resolve_emotion ─▶ ResolvedEmotion
//!                                    └─▶ resolve_style   ─▶ ResolvedStyle
//! ```
//!
//! All lookups run against a [`ReferenceData`] bundle loaded once up front.

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod data;
mod engine;
mod rules;

pub use api::{
    CategorySummary, Options, ResolutionDetails, ResolutionResult, ResolutionVerbose, SAMPLE_INPUTS, resolve,
    resolve_verbose_with, resolve_with, run_pipeline,
};
pub use data::{
    CategoryEntry, DataError, DataPaths, EMOTION_FILE, EmotionDocument, EmotionOverride, EmotionRule, Media,
    MediaOverride, PITCH_SEPARATOR, ParseMediaError, ReferenceData, STYLE_FILE, StyleDefaults, StyleDocument,
    StyleRule, TAXONOMY_DELIMITER, TAXONOMY_FILE, Taxonomy, category_key, load_emotion_document, load_style_document, load_taxonomy,
};
pub use engine::{
    BUILTIN_EMOTION_ID, Classification, DEFAULT_STYLE_ID, EmotionSource, FALLBACK_SENTENCE_LENGTH, FALLBACK_VOICE,
    ResolvedEmotion, ResolvedStyle, Stage, StageMask, classify, classify_with, resolve_emotion, resolve_emotion_traced,
    resolve_style,
};

// --- Internal types ---------------------------------------------------------

/// A curated classification hint: a domain vocabulary pattern and the
/// taxonomy pair it points at.
#[derive(Debug)]
pub(crate) struct Hint {
    pub name: &'static str,
    /// Matched against the raw (not lower-cased) input.
    pub pattern: &'static Regex,
    pub level_one: &'static str,
    /// When set, an entry with this exact sub-category is preferred.
    pub level_two: Option<&'static str>,
}
