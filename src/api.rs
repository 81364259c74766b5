use std::time::{Duration, Instant};

use serde::Serialize;

use crate::engine::{self, EmotionSource, ResolvedEmotion, ResolvedStyle, Stage, StageMask};
use crate::{CategoryEntry, Media, ReferenceData};

/// Inputs used for a smoke run when no text is given.
pub const SAMPLE_INPUTS: [&str; 3] = [
    "敏感肌でも使える低刺激の保湿クリーム",
    "プレゼントに合う高級ハンドクリームを探している",
    "キャンプで使える軽量の折りたたみチェア",
];

/// Options that affect resolution behavior.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Classifier stages to run. The first-entry fallback always runs.
    pub stages: StageMask,
}

/// The classified category as reported in a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub level_one: String,
    pub level_two: String,
    pub mode: String,
    /// Keywords joined with `、`.
    pub pitch_keywords: String,
}

impl From<&CategoryEntry> for CategorySummary {
    fn from(entry: &CategoryEntry) -> Self {
        CategorySummary {
            level_one: entry.level_one.clone(),
            level_two: entry.level_two.clone(),
            mode: entry.mode.clone(),
            pitch_keywords: entry.pitch_display(),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub input_text: String,
    pub category: CategorySummary,
    pub emotion: ResolvedEmotion,
    pub style: ResolvedStyle,
}

/// How a result was reached. Returned by [`resolve_verbose_with`].
#[derive(Debug, Clone)]
pub struct ResolutionDetails {
    pub stage: Stage,
    pub evidence: Option<String>,
    /// Position of the classified entry in the taxonomy.
    pub taxonomy_index: usize,
    pub emotion_source: EmotionSource,
    pub media: Media,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ResolutionVerbose {
    pub result: ResolutionResult,
    pub details: ResolutionDetails,
}

/// Resolve `text` for `media` with default [`Options`].
///
/// # Example
/// ```
/// use copyintent::{Media, ReferenceData, resolve};
///
/// let data = ReferenceData::from_sources(
///     "level_one,level_two,mode,pitch\n美容・ヘルスケア,スキンケア,safe,保湿\n",
///     "emotions:\n  - id: 安心\n    modes: [safe]\n",
///     "styles:\n  - id: gentle\n",
/// )
/// .unwrap();
///
/// let out = resolve(&data, "保湿ジェル", Media::Lp);
/// assert_eq!(out.category.level_two, "スキンケア");
/// assert_eq!(out.emotion.id, "安心");
/// ```
pub fn resolve(data: &ReferenceData, text: &str, media: Media) -> ResolutionResult {
    resolve_with(data, text, media, &Options::default())
}

pub fn resolve_with(data: &ReferenceData, text: &str, media: Media, options: &Options) -> ResolutionResult {
    resolve_verbose_with(data, text, media, options).result
}

/// Resolve `text` and report which classifier stage and emotion step decided it.
pub fn resolve_verbose_with(data: &ReferenceData, text: &str, media: Media, options: &Options) -> ResolutionVerbose {
    let start = Instant::now();

    let classification = engine::classify_with(text, data.taxonomy(), options.stages);
    let entry = classification.entry;
    let (emotion, emotion_source) =
        engine::resolve_emotion_traced(data.emotions(), &entry.level_one, &entry.level_two, &entry.mode);
    let style = engine::resolve_style(data.styles(), &entry.mode, media);

    let result = ResolutionResult { input_text: text.to_string(), category: entry.into(), emotion, style };
    let details = ResolutionDetails {
        stage: classification.stage,
        evidence: classification.evidence,
        taxonomy_index: classification.index,
        emotion_source,
        media,
        elapsed: start.elapsed(),
    };

    ResolutionVerbose { result, details }
}

/// Resolve every input, in order. Inputs are independent of each other.
pub fn run_pipeline<S: AsRef<str>>(data: &ReferenceData, inputs: &[S], media: Media) -> Vec<ResolutionResult> {
    inputs.iter().map(|input| resolve(data, input.as_ref(), media)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> ReferenceData {
        ReferenceData::from_sources(
            include_str!("../data/category.csv"),
            include_str!("../data/emotion.yaml"),
            include_str!("../data/style.yaml"),
        )
        .unwrap()
    }

    #[test]
    fn resolve_assembles_all_three_parts() {
        let data = shipped();
        let res = resolve(&data, "敏感肌向けのスキンケア", Media::Ad);

        assert_eq!(res.input_text, "敏感肌向けのスキンケア");
        assert_eq!(
            res.category,
            CategorySummary {
                level_one: "美容・ヘルスケア".into(),
                level_two: "スキンケア".into(),
                mode: "safe".into(),
                pitch_keywords: "保湿、低刺激、敏感肌".into(),
            }
        );
        assert_eq!(res.emotion.id, "安心");
        assert_eq!(res.style.id, "gentle");
        assert_eq!(res.style.sentence_length, "very_short");
        assert!(res.style.use_emoji);
    }

    #[test]
    fn run_pipeline_keeps_input_order() {
        let data = shipped();
        let out = run_pipeline(&data, &SAMPLE_INPUTS, Media::Lp);
        let inputs: Vec<&str> = out.iter().map(|r| r.input_text.as_str()).collect();
        assert_eq!(inputs, SAMPLE_INPUTS);
    }

    #[test]
    fn verbose_reports_stage_and_source() {
        let data = shipped();
        let res = resolve_verbose_with(&data, "プレゼントに合う高級ハンドクリームを探している", Media::Lp, &Options::default());

        assert_eq!(res.details.stage, Stage::Hint);
        assert_eq!(res.details.evidence.as_deref(), Some("gift"));
        assert_eq!(res.result.category.level_one, "ギフト・プレゼント");
        assert_eq!(res.details.emotion_source, EmotionSource::Mode);
        assert_eq!(res.details.media, Media::Lp);
    }

    #[test]
    fn serializes_with_optional_fields_omitted() {
        let data = ReferenceData::from_sources(
            "h\nx,y,m,\n",
            "emotions:\n  - id: 安心\n",
            "styles:\n  - id: plain\n",
        )
        .unwrap();
        let res = resolve(&data, "なんでも", Media::Lp);
        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "input_text": "なんでも",
                "category": {"level_one": "x", "level_two": "y", "mode": "m", "pitch_keywords": ""},
                "emotion": {"id": "安心"},
                "style": {"id": "plain", "voice": "です・ます", "emoji": false, "sentence_length": "short"}
            })
        );
    }
}
