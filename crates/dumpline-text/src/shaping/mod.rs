//! Text shaping module

mod analyzer;
mod glyphs;
mod shaper;
mod retry;

pub use analyzer::{GlyphRequest, TextAnalyzer};
pub use glyphs::{GlyphOffset, GlyphPlacements, Glyphs, ShapingGlyphProperties, ShapingTextProperties};
pub use shaper::ShapingAnalyzer;
pub use retry::{GlyphCapacity, MAX_GLYPH_CAPACITY, get_glyphs_with_retry};
