//! Shaped glyph data

/// Shaping properties of one input code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapingTextProperties {
    /// The code unit's cluster was shaped by itself
    pub is_shaped_alone: bool,
    /// Shaping may be split after this code unit
    pub can_break_shaping_after: bool,
}

/// Shaping properties of one output glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapingGlyphProperties {
    /// First glyph of its cluster
    pub is_cluster_start: bool,
    /// Mark glyph attached to a base
    pub is_diacritic: bool,
    /// Glyph with no advance
    pub is_zero_width: bool,
}

/// Output of the glyph generation phase, in logical order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyphs {
    /// Per code unit: index of the first glyph of its cluster
    pub cluster_map: Vec<u16>,
    /// Per code unit properties
    pub text_props: Vec<ShapingTextProperties>,
    /// Glyph IDs in the font
    pub indices: Vec<u16>,
    /// Per glyph properties
    pub glyph_props: Vec<ShapingGlyphProperties>,
}

impl Glyphs {
    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Glyph offset from its nominal pen position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphOffset {
    /// Along the reading direction
    pub advance_offset: f32,
    /// Toward the ascender
    pub ascender_offset: f32,
}

/// Output of the glyph placement phase, one entry per glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPlacements {
    pub advances: Vec<f32>,
    pub offsets: Vec<GlyphOffset>,
}

impl GlyphPlacements {
    /// Total advance of the run
    pub fn width(&self) -> f32 {
        self.advances.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_sums_advances() {
        let placements = GlyphPlacements {
            advances: vec![10.0, 0.0, 2.5],
            offsets: vec![GlyphOffset::default(); 3],
        };
        assert_eq!(placements.width(), 12.5);
    }

    #[test]
    fn test_empty_glyphs() {
        let glyphs = Glyphs::default();
        assert!(glyphs.is_empty());
        assert_eq!(glyphs.len(), 0);
    }
}
