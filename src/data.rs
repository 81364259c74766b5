//! Reference data loading.
//!
//! The resolver works from three static sources that are read once and then
//! shared read-only across every resolution:
//!
//! ```text
//! category.csv  ── load_taxonomy ─────────┐
//! emotion.yaml  ── load_emotion_document ─┼─▶ ReferenceData
//! style.yaml    ── load_style_document ───┘
//! ```
//!
//! - `taxonomy.rs`: comma-delimited category rows (`Taxonomy`, `CategoryEntry`).
//! - `emotion.rs`: emotional register rules and category overrides.
//! - `style.rs`: voice/rhythm rules, document defaults and media overrides.
//! - `document.rs`: the shared two-step decode used by the structured documents.
//! - `reference.rs`: the immutable bundle and file-path configuration.
//!
//! Structured documents are decoded as YAML, so JSON sources load unchanged.
//! Only the presence and shape of the required list field is validated here;
//! dangling ids are left to the resolvers' fallback chains.

#[path = "data/document.rs"]
mod document;
#[path = "data/emotion.rs"]
mod emotion;
#[path = "data/error.rs"]
mod error;
#[path = "data/reference.rs"]
mod reference;
#[path = "data/style.rs"]
mod style;
#[path = "data/taxonomy.rs"]
mod taxonomy;

pub use emotion::{EmotionDocument, EmotionOverride, EmotionRule, load_emotion_document};
pub use error::DataError;
pub use reference::{DataPaths, EMOTION_FILE, ReferenceData, STYLE_FILE, TAXONOMY_FILE};
pub use style::{Media, MediaOverride, ParseMediaError, StyleDefaults, StyleDocument, StyleRule, load_style_document};
pub use taxonomy::{CategoryEntry, PITCH_SEPARATOR, category_key, TAXONOMY_DELIMITER, Taxonomy, load_taxonomy};

/// Drop a leading UTF-8 byte-order mark, if any.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
