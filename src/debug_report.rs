use copyintent::{ResolutionDetails, ResolutionVerbose, Stage};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const RULE: &str = "\x1b[90m";
    pub const HEADLINE: &str = "\x1b[1;36m";
    pub const PICKED: &str = "\x1b[1;32m";
    pub const VALUE: &str = "\x1b[34m";
    pub const DETAIL: &str = "\x1b[33m";
    pub const SOURCE: &str = "\x1b[36m";

    /// Wraps text in SGR codes, or passes it through when color is off.
    pub struct Palette(pub bool);

    impl Palette {
        pub fn paint(&self, s: impl AsRef<str>, sgr: &str) -> String {
            if self.0 { format!("{sgr}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }
    }
}

/// Print a human-readable trace of one resolution to stderr.
///
/// stdout is reserved for the JSON result.
pub fn print_run(run: &ResolutionVerbose, color: bool) {
    let palette = ansi::Palette(color);
    let result = &run.result;
    let details = &run.details;

    eprintln!("\n{}", palette.paint(format!("⚙  Resolving: \"{}\"", result.input_text), ansi::HEADLINE));

    eprintln!("\n{}", palette.paint("━━━ Category ━━━", ansi::RULE));
    eprintln!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", details.taxonomy_index), ansi::RULE),
        palette.paint(format!("{} / {}", result.category.level_one, result.category.level_two), ansi::PICKED),
        palette.paint("│ mode:", ansi::DIM),
        palette.paint(&result.category.mode, ansi::VALUE),
    );
    eprintln!("      {} {}", palette.paint("matched by:", ansi::DIM), fmt_stage(details, &palette));
    if !result.category.pitch_keywords.is_empty() {
        eprintln!("      {} {}", palette.paint("pitch:", ansi::DIM), result.category.pitch_keywords);
    }

    eprintln!("\n{}", palette.paint("━━━ Emotion ━━━", ansi::RULE));
    eprintln!(
        "  {} {} {}",
        palette.paint(&result.emotion.id, ansi::PICKED),
        palette.paint("│ via:", ansi::DIM),
        palette.paint(details.emotion_source.name(), ansi::SOURCE),
    );
    if let Some(pattern) = &result.emotion.primary_pattern {
        eprintln!("      {} {}", palette.paint("pattern:", ansi::DIM), pattern);
    }

    eprintln!("\n{}", palette.paint("━━━ Style ━━━", ansi::RULE));
    let style = &result.style;
    eprintln!(
        "  {} {} {} {}",
        palette.paint(&style.id, ansi::PICKED),
        palette.paint("│ voice:", ansi::DIM),
        palette.paint(&style.voice, ansi::VALUE),
        palette.paint(style.rhythm.as_deref().map(|r| format!("│ rhythm: {r}")).unwrap_or_default(), ansi::DIM),
    );
    eprintln!(
        "      {} {}  {} {}  {} {}",
        palette.paint("media:", ansi::DIM),
        palette.paint(details.media.as_str(), ansi::DETAIL),
        palette.paint("sentences:", ansi::DIM),
        palette.paint(&style.sentence_length, ansi::DETAIL),
        palette.paint("emoji:", ansi::DIM),
        palette.paint(if style.use_emoji { "yes" } else { "no" }, ansi::DETAIL),
    );

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::RULE));
    eprintln!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::PICKED));
    eprintln!();
}

fn fmt_stage(details: &ResolutionDetails, palette: &ansi::Palette) -> String {
    let stage = palette.paint(details.stage.name(), ansi::VALUE);
    match (&details.evidence, details.stage) {
        (_, Stage::Fallback) => format!("{} {}", stage, palette.paint("(no match, first taxonomy entry)", ansi::DIM)),
        (Some(evidence), _) => format!("{} {} {}", stage, palette.paint("→", ansi::DIM), palette.paint(evidence, ansi::DETAIL)),
        (None, _) => stage,
    }
}

#[cfg(test)]
mod tests {
    use super::ansi::{DIM, PICKED, Palette, RESET};

    #[test]
    fn palette_wraps_only_when_enabled() {
        assert_eq!(Palette(false).paint("安心", PICKED), "安心");
        assert_eq!(Palette(true).paint("安心", PICKED), format!("{PICKED}安心{RESET}"));
        assert_eq!(Palette(true).paint("", DIM), format!("{DIM}{RESET}"));
    }
}
