//! Resolution engine.
//!
//! Three independent resolvers run in sequence for one input:
//!
//! ```text
//! input ── classify (classifier.rs)
//!            - ordered strategy table, first hit wins
//!            - LevelTwo → LevelOne → PitchKeyword → Hint → Fallback
//!                 │
//!                 v
//!          CategoryEntry { level_one, level_two, mode }
//!                 │
//!        ┌────────┴─────────┐
//!        v                  v
//!  resolve_emotion     resolve_style
//!  (emotion.rs)        (style.rs)
//!   - override pin      - rule by mode
//!   - rule by mode      - media override
//!   - default / first   - document defaults
//!   - builtin id        - literal fallbacks
//! ```
//!
//! Every resolver is total: given loaded reference data it always produces a
//! value, and lookups that miss (an override naming an unknown emotion, a
//! channel with no override) move on to the next step of the chain instead of
//! failing.
//!
//! Resolvers borrow the reference documents and never mutate them, so any
//! number of resolutions may run concurrently over one `ReferenceData`.

#[path = "engine/classifier.rs"]
mod classifier;
#[path = "engine/emotion.rs"]
mod emotion;
#[path = "engine/style.rs"]
mod style;
#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use classifier::{Classification, Stage, StageMask, classify, classify_with};
pub use emotion::{BUILTIN_EMOTION_ID, EmotionSource, ResolvedEmotion, resolve_emotion, resolve_emotion_traced};
pub use style::{DEFAULT_STYLE_ID, FALLBACK_SENTENCE_LENGTH, FALLBACK_VOICE, ResolvedStyle, resolve_style};
