//! DumpLine
//!
//! Prints the script runs of a fixed line of text and the glyphs each run
//! shapes to, one line per run and one line per glyph.
//!
//! # Example
//! ```rust,ignore
//! use dumpline::{DumpConfig, dump_line};
//! use dumpline_text::{FontDatabase, ShapingAnalyzer};
//!
//! let fonts = FontDatabase::with_system_fonts();
//! dump_line(&ShapingAnalyzer::new(), &fonts, &DumpConfig::default(), &mut std::io::stdout())?;
//! ```

pub mod config;
pub mod report;

pub use config::DumpConfig;

use std::io::Write;

use anyhow::Context;
use dumpline_text::{
    FontProvider, GlyphRequest, ScriptRunSink, TextAnalyzer, Utf16Source, get_glyphs_with_retry,
};

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What a completed dump printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub runs: usize,
    pub glyphs: usize,
}

/// Analyze and shape `config.text`, writing the report to `out`
///
/// Stops at the first engine failure; lines already written stay written.
pub fn dump_line(
    analyzer: &dyn TextAnalyzer,
    fonts: &dyn FontProvider,
    config: &DumpConfig,
    out: &mut dyn Write,
) -> anyhow::Result<DumpSummary> {
    let face = fonts.font_face(&config.font)
        .with_context(|| format!("resolving font {}", config.font.family_list()))?;
    tracing::debug!("Shaping with {:?} at size {}", face, config.font_size);

    let source = Utf16Source::new(&config.text);
    let mut sink = ScriptRunSink::new();
    analyzer.analyze_script(&source, 0, source.len(), &mut sink)
        .context("analyzing scripts")?;

    let runs = sink.runs(source.len());
    tracing::debug!("Found {} script runs", runs.len());

    let mut summary = DumpSummary::default();
    for (index, run) in runs.iter().enumerate() {
        report::write_run(out, index, run)?;

        let request = GlyphRequest::new(run.slice(&config.text), &face, &run.analysis)
            .sideways(config.is_sideways)
            .right_to_left(config.is_right_to_left)
            .locale(config.locale.as_deref());

        let glyphs = get_glyphs_with_retry(analyzer, &request)
            .inspect_err(|e| tracing::warn!("Run {} ({}) failed: {}", index, run.analysis.tag(), e))
            .with_context(|| format!("generating glyphs for run {}", index))?;

        let placements = analyzer.get_glyph_placements(&request, &glyphs, config.font_size)
            .inspect_err(|e| tracing::warn!("Run {} ({}) failed: {}", index, run.analysis.tag(), e))
            .with_context(|| format!("placing glyphs for run {}", index))?;

        report::write_glyphs(out, &glyphs, &placements)?;

        summary.runs += 1;
        summary.glyphs += glyphs.len();
    }

    Ok(summary)
}
