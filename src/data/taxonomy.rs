use serde::Serialize;
use tracing::debug;

use super::error::DataError;
use super::strip_bom;

/// Field delimiter of the taxonomy source.
pub const TAXONOMY_DELIMITER: char = ',';

/// Separator used when pitch keywords are rendered as one display string.
pub const PITCH_SEPARATOR: &str = "、";

/// `"<level_one>/<level_two>"`, the key emotion overrides are matched on.
pub fn category_key(level_one: &str, level_two: &str) -> String {
    format!("{level_one}/{level_two}")
}

/// One taxonomy leaf: `level_one / level_two`, its mode tag and pitch keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub level_one: String,
    pub level_two: String,
    /// Opaque lookup key into the emotion and style rule sets.
    pub mode: String,
    pub pitch_keywords: Vec<String>,
}

impl CategoryEntry {
    pub fn new(level_one: &str, level_two: &str, mode: &str, pitch_keywords: &[&str]) -> Self {
        CategoryEntry {
            level_one: level_one.to_string(),
            level_two: level_two.to_string(),
            mode: mode.to_string(),
            pitch_keywords: pitch_keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn key(&self) -> String {
        category_key(&self.level_one, &self.level_two)
    }

    pub fn pitch_display(&self) -> String {
        self.pitch_keywords.join(PITCH_SEPARATOR)
    }
}

/// An ordered, non-empty list of category entries.
///
/// Non-emptiness is what lets classification fall back to the first entry
/// without an `Option` at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
}

impl Taxonomy {
    /// Returns `None` when `entries` is empty.
    pub fn new(entries: Vec<CategoryEntry>) -> Option<Self> {
        if entries.is_empty() { None } else { Some(Taxonomy { entries }) }
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn first(&self) -> &CategoryEntry {
        &self.entries[0]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryEntry> {
        self.entries.iter()
    }
}

/// Parse the comma-delimited taxonomy source.
///
/// The first line is a header and is discarded without inspection. Rows with
/// fewer than four fields, or with an empty `level_one`/`level_two`/`mode`,
/// are dropped silently. Fails only when nothing is left to classify with.
pub fn load_taxonomy(source_id: &str, text: &str) -> Result<Taxonomy, DataError> {
    let mut lines = strip_bom(text).lines();
    lines.next();

    let rows: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
    if rows.is_empty() {
        return Err(DataError::format(source_id, "no rows after the header line"));
    }

    let entries: Vec<CategoryEntry> = rows.iter().filter_map(|row| parse_row(row)).collect();
    let dropped = rows.len() - entries.len();
    debug!(source = source_id, entries = entries.len(), dropped, "loaded taxonomy");

    Taxonomy::new(entries).ok_or_else(|| DataError::format(source_id, "no usable rows (every row was malformed)"))
}

fn parse_row(row: &str) -> Option<CategoryEntry> {
    let fields: Vec<&str> = row.split(TAXONOMY_DELIMITER).collect();
    if fields.len() < 4 {
        return None;
    }

    let level_one = fields[0].trim();
    let level_two = fields[1].trim();
    let mode = fields[2].trim();
    if level_one.is_empty() || level_two.is_empty() || mode.is_empty() {
        return None;
    }

    let pitch_keywords =
        fields[3..].iter().map(|field| field.trim()).filter(|field| !field.is_empty()).map(str::to_string).collect();

    Some(CategoryEntry {
        level_one: level_one.to_string(),
        level_two: level_two.to_string(),
        mode: mode.to_string(),
        pitch_keywords,
    })
}
