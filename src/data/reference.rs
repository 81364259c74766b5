use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::emotion::{EmotionDocument, load_emotion_document};
use super::error::DataError;
use super::style::{StyleDocument, load_style_document};
use super::taxonomy::{Taxonomy, load_taxonomy};

pub const TAXONOMY_FILE: &str = "category.csv";
pub const EMOTION_FILE: &str = "emotion.yaml";
pub const STYLE_FILE: &str = "style.yaml";

/// Locations of the three reference sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub taxonomy: PathBuf,
    pub emotions: PathBuf,
    pub styles: PathBuf,
}

impl DataPaths {
    /// The conventional file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataPaths { taxonomy: dir.join(TAXONOMY_FILE), emotions: dir.join(EMOTION_FILE), styles: dir.join(STYLE_FILE) }
    }
}

/// The loaded taxonomy and rule documents.
///
/// Built once, then only ever borrowed by the resolvers.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    taxonomy: Taxonomy,
    emotions: EmotionDocument,
    styles: StyleDocument,
}

impl ReferenceData {
    pub fn new(taxonomy: Taxonomy, emotions: EmotionDocument, styles: StyleDocument) -> Self {
        ReferenceData { taxonomy, emotions, styles }
    }

    /// Decode the three sources from text, labelling errors with fixed ids.
    pub fn from_sources(taxonomy: &str, emotions: &str, styles: &str) -> Result<Self, DataError> {
        Ok(ReferenceData {
            taxonomy: load_taxonomy(TAXONOMY_FILE, taxonomy)?,
            emotions: load_emotion_document(EMOTION_FILE, emotions)?,
            styles: load_style_document(STYLE_FILE, styles)?,
        })
    }

    /// Read and decode the three files. The first failure aborts the load.
    pub fn load(paths: &DataPaths) -> Result<Self, DataError> {
        let taxonomy = load_taxonomy(&label(&paths.taxonomy), &read_source(&paths.taxonomy)?)?;
        let emotions = load_emotion_document(&label(&paths.emotions), &read_source(&paths.emotions)?)?;
        let styles = load_style_document(&label(&paths.styles), &read_source(&paths.styles)?)?;

        info!(
            categories = taxonomy.len(),
            emotions = emotions.rules.len(),
            styles = styles.rules.len(),
            "reference data loaded"
        );
        Ok(ReferenceData { taxonomy, emotions, styles })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn emotions(&self) -> &EmotionDocument {
        &self.emotions
    }

    pub fn styles(&self) -> &StyleDocument {
        &self.styles
    }
}

fn read_source(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io { path: path.to_path_buf(), source })
}

fn label(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_data_dir(taxonomy: &str, emotions: &str, styles: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TAXONOMY_FILE), taxonomy).unwrap();
        fs::write(dir.path().join(EMOTION_FILE), emotions).unwrap();
        fs::write(dir.path().join(STYLE_FILE), styles).unwrap();
        dir
    }

    #[test]
    fn loads_shipped_data_files() {
        let data = ReferenceData::load(&DataPaths::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))).unwrap();
        assert_eq!(data.taxonomy().len(), 13);
        assert_eq!(data.emotions().rules.len(), 4);
        assert_eq!(data.styles().rules.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceData::load(&DataPaths::in_dir(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains(TAXONOMY_FILE));
    }

    #[test]
    fn decode_errors_carry_the_file_path() {
        let dir = write_data_dir("h\na,b,m,k\n", "emotions: [\n", "styles:\n  - id: s\n");
        let err = ReferenceData::load(&DataPaths::in_dir(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::DataFormat { .. }));
        assert_eq!(err.source_id(), dir.path().join(EMOTION_FILE).display().to_string());
    }

    #[test]
    fn schema_errors_carry_the_file_path() {
        let dir = write_data_dir("h\na,b,m,k\n", "emotions:\n  - id: e\n", "styles: {}\n");
        let err = ReferenceData::load(&DataPaths::in_dir(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::Schema { field: "styles", .. }));
        assert!(err.to_string().contains(STYLE_FILE));
    }
}
