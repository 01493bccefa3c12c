//! Text analyzer capability

use crate::analysis::{ScriptAnalysis, TextAnalysisSink, TextAnalysisSource};
use crate::font::FontFace;
use crate::Result;
use super::{GlyphPlacements, Glyphs};

/// Parameters shared by both shaping phases of one run
#[derive(Debug, Clone, Copy)]
pub struct GlyphRequest<'a> {
    /// Run text (UTF-16 code units)
    pub text: &'a [u16],
    pub face: &'a FontFace,
    /// Shape for vertical (top-to-bottom) layout instead of horizontal
    pub is_sideways: bool,
    pub is_right_to_left: bool,
    pub analysis: &'a ScriptAnalysis,
    /// BCP 47 locale, `None` for no localization
    pub locale: Option<&'a str>,
}

impl<'a> GlyphRequest<'a> {
    /// Horizontal left-to-right request without locale
    pub fn new(text: &'a [u16], face: &'a FontFace, analysis: &'a ScriptAnalysis) -> Self {
        Self {
            text,
            face,
            is_sideways: false,
            is_right_to_left: false,
            analysis,
            locale: None,
        }
    }

    pub fn right_to_left(mut self, is_right_to_left: bool) -> Self {
        self.is_right_to_left = is_right_to_left;
        self
    }

    /// Switch to vertical layout
    pub fn sideways(mut self, is_sideways: bool) -> Self {
        self.is_sideways = is_sideways;
        self
    }

    pub fn locale(mut self, locale: Option<&'a str>) -> Self {
        self.locale = locale;
        self
    }
}

/// Script analysis and two-phase shaping engine
pub trait TextAnalyzer {
    /// Report script runs of `source[position..position + length]` to `sink`
    fn analyze_script(
        &self,
        source: &dyn TextAnalysisSource,
        position: u32,
        length: u32,
        sink: &mut dyn TextAnalysisSink,
    ) -> Result<()>;

    /// Glyph indices for a run
    ///
    /// Fails with [`crate::TextError::InsufficientBuffer`] when the run needs
    /// more than `max_glyph_count` glyphs.
    fn get_glyphs(&self, request: &GlyphRequest<'_>, max_glyph_count: usize) -> Result<Glyphs>;

    /// Advances and offsets for glyphs produced by [`TextAnalyzer::get_glyphs`]
    fn get_glyph_placements(
        &self,
        request: &GlyphRequest<'_>,
        glyphs: &Glyphs,
        font_size: f32,
    ) -> Result<GlyphPlacements>;
}
