//! DumpLine Text - Script Analysis and Shaping
//!
//! This crate provides the text pipeline behind the DumpLine diagnostic:
//! - Font collection and matching (fontdb)
//! - Text analysis source and sink adapters over UTF-16 buffers
//! - Script segmentation (unicode-script)
//! - Two-phase glyph shaping (rustybuzz - HarfBuzz port)
//!
//! The shaping engine sits behind the [`TextAnalyzer`] and [`FontProvider`]
//! traits so the adapters and drivers can run against a stub engine.

pub mod font;
pub mod analysis;
pub mod shaping;

pub use unicode_script::Script;
pub use font::{FontDatabase, FontFace, FontProvider, FontQuery, FontStretch, FontStyle, FontWeight};
pub use analysis::{
    BreakCondition, LineBreakpoint, NumberSubstitution, ReadingDirection, ScriptAnalysis,
    ScriptRun, ScriptRunSink, ScriptShapes, TextAnalysisSink, TextAnalysisSource, Utf16Source,
    derive_runs,
};
pub use shaping::{
    GlyphCapacity, GlyphOffset, GlyphPlacements, GlyphRequest, Glyphs, MAX_GLYPH_CAPACITY,
    ShapingAnalyzer, ShapingGlyphProperties, ShapingTextProperties, TextAnalyzer,
    get_glyphs_with_retry,
};

/// Text analysis error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("No font in family {0} matches the requested weight, stretch and style")]
    NoMatchingFont(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Shaping failed: {0}")]
    ShapingFailed(String),

    #[error("Insufficient buffer: {required} glyphs needed, capacity is {capacity}")]
    InsufficientBuffer { required: usize, capacity: usize },

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Range {position}+{length} is outside text of length {text_length}")]
    InvalidRange { position: u32, length: u32, text_length: u32 },
}

impl TextError {
    /// Whether the caller should retry with a larger glyph buffer
    pub fn is_insufficient_buffer(&self) -> bool {
        matches!(self, TextError::InsufficientBuffer { .. })
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
