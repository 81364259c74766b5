//! Category classification.
//!
//! The classifier is a fixed, ordered table of strategies. Each strategy looks
//! at the input and the taxonomy and either names an entry or passes:
//!
//! ```text
//! (1) LevelTwo      sub-category name contained in the input
//! (2) LevelOne      top-level name contained in the input
//! (3) PitchKeyword  first entry (file order) with a keyword in the input
//! (4) Hint          curated domain patterns (rules/hints.rs)
//! (5) Fallback      first taxonomy entry
//! ```
//!
//! Stages (1)-(3) compare lower-cased text by substring containment. Stage (4)
//! matches its patterns against the raw input. Stage (5) always succeeds,
//! which keeps classification total for any non-empty taxonomy.
//!
//! Keyword matching deliberately takes the first entry in taxonomy order, not
//! the most specific one; reordering the taxonomy file changes results.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::trace;

use crate::{CategoryEntry, Hint, Taxonomy};

static HINTS: Lazy<Vec<Hint>> = Lazy::new(crate::rules::hints::get);

bitflags! {
    /// Classifier stages that may run. `Fallback` cannot be disabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StageMask: u8 {
        const LEVEL_TWO = 1 << 0;
        const LEVEL_ONE = 1 << 1;
        const PITCH_KEYWORD = 1 << 2;
        const HINT = 1 << 3;
    }
}

impl Default for StageMask {
    fn default() -> Self {
        StageMask::all()
    }
}

/// The classifier stage that produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    LevelTwo,
    LevelOne,
    PitchKeyword,
    Hint,
    Fallback,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::LevelTwo => "level_two",
            Stage::LevelOne => "level_one",
            Stage::PitchKeyword => "pitch_keyword",
            Stage::Hint => "hint",
            Stage::Fallback => "fallback",
        }
    }

    fn mask(self) -> StageMask {
        match self {
            Stage::LevelTwo => StageMask::LEVEL_TWO,
            Stage::LevelOne => StageMask::LEVEL_ONE,
            Stage::PitchKeyword => StageMask::PITCH_KEYWORD,
            Stage::Hint => StageMask::HINT,
            Stage::Fallback => StageMask::empty(),
        }
    }
}

/// A classified entry and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub entry: &'a CategoryEntry,
    /// Position of `entry` in the taxonomy.
    pub index: usize,
    pub stage: Stage,
    /// What matched: the category name, the keyword, or the hint name.
    pub evidence: Option<String>,
}

/// The input in both forms the strategies need.
struct Probe<'a> {
    raw: &'a str,
    folded: String,
}

impl<'a> Probe<'a> {
    fn new(raw: &'a str) -> Self {
        Probe { raw, folded: raw.to_lowercase() }
    }

    fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.folded.contains(&needle.to_lowercase())
    }
}

struct StageMatch {
    index: usize,
    evidence: String,
}

type Strategy = fn(&Probe<'_>, &[CategoryEntry]) -> Option<StageMatch>;

const STAGES: &[(Stage, Strategy)] = &[
    (Stage::LevelTwo, match_level_two),
    (Stage::LevelOne, match_level_one),
    (Stage::PitchKeyword, match_pitch_keyword),
    (Stage::Hint, match_hint),
];

/// Classify `text` with every stage enabled.
pub fn classify<'a>(text: &str, taxonomy: &'a Taxonomy) -> &'a CategoryEntry {
    classify_with(text, taxonomy, StageMask::all()).entry
}

/// Classify `text`, running only the stages in `stages` (plus `Fallback`).
pub fn classify_with<'a>(text: &str, taxonomy: &'a Taxonomy, stages: StageMask) -> Classification<'a> {
    let probe = Probe::new(text);
    let entries = taxonomy.entries();

    for &(stage, strategy) in STAGES {
        if !stages.contains(stage.mask()) {
            continue;
        }
        if let Some(hit) = strategy(&probe, entries) {
            trace!(stage = stage.name(), index = hit.index, evidence = %hit.evidence, "classified");
            return Classification { entry: &entries[hit.index], index: hit.index, stage, evidence: Some(hit.evidence) };
        }
    }

    trace!(stage = Stage::Fallback.name(), "classified");
    Classification { entry: taxonomy.first(), index: 0, stage: Stage::Fallback, evidence: None }
}

fn match_level_two(probe: &Probe<'_>, entries: &[CategoryEntry]) -> Option<StageMatch> {
    let index = entries.iter().position(|e| probe.contains(&e.level_two))?;
    Some(StageMatch { index, evidence: entries[index].level_two.clone() })
}

fn match_level_one(probe: &Probe<'_>, entries: &[CategoryEntry]) -> Option<StageMatch> {
    let index = entries.iter().position(|e| probe.contains(&e.level_one))?;
    Some(StageMatch { index, evidence: entries[index].level_one.clone() })
}

fn match_pitch_keyword(probe: &Probe<'_>, entries: &[CategoryEntry]) -> Option<StageMatch> {
    entries.iter().enumerate().find_map(|(index, entry)| {
        let keyword = entry.pitch_keywords.iter().find(|k| probe.contains(k))?;
        Some(StageMatch { index, evidence: keyword.clone() })
    })
}

fn match_hint(probe: &Probe<'_>, entries: &[CategoryEntry]) -> Option<StageMatch> {
    HINTS.iter().filter(|hint| hint.pattern.is_match(probe.raw)).find_map(|hint| {
        let index = hint_target(hint, entries)?;
        Some(StageMatch { index, evidence: hint.name.to_string() })
    })
}

/// Exact `(level_one, level_two)` entry if the hint names one, else any entry
/// under `level_one`.
fn hint_target(hint: &Hint, entries: &[CategoryEntry]) -> Option<usize> {
    let exact = hint
        .level_two
        .and_then(|level_two| entries.iter().position(|e| e.level_one == hint.level_one && e.level_two == level_two));
    exact.or_else(|| entries.iter().position(|e| e.level_one == hint.level_one))
}
