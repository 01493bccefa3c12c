//! Glyph buffer growth
//!
//! Glyph generation reports an insufficient buffer instead of guessing how
//! many glyphs a run produces, so callers retry with a larger capacity.

use crate::Result;
use super::{GlyphRequest, Glyphs, TextAnalyzer};

/// Largest glyph capacity addressable by a `u16` cluster map
pub const MAX_GLYPH_CAPACITY: usize = 1 << 16;

/// Glyph capacity that doubles once per retry, starting at 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCapacity(usize);

impl GlyphCapacity {
    pub const INITIAL: GlyphCapacity = GlyphCapacity(2);

    pub fn get(self) -> usize {
        self.0
    }

    /// Next capacity, `None` once the maximum is exceeded
    pub fn grow(self) -> Option<GlyphCapacity> {
        let next = self.0.checked_mul(2)?;
        (next <= MAX_GLYPH_CAPACITY).then_some(GlyphCapacity(next))
    }
}

impl Default for GlyphCapacity {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Generate glyphs, doubling the capacity on every insufficient buffer
pub fn get_glyphs_with_retry(analyzer: &dyn TextAnalyzer, request: &GlyphRequest<'_>) -> Result<Glyphs> {
    let mut capacity = GlyphCapacity::INITIAL;
    loop {
        match analyzer.get_glyphs(request, capacity.get()) {
            Err(err) if err.is_insufficient_buffer() => {
                let Some(next) = capacity.grow() else {
                    return Err(err);
                };
                tracing::debug!("Glyph buffer of {} too small, retrying with {}", capacity.get(), next.get());
                capacity = next;
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::TextError;

    use crate::analysis::{ScriptAnalysis, ScriptShapes, TextAnalysisSink, TextAnalysisSource};
    use crate::font::FontFace;
    use crate::shaping::GlyphPlacements;
    use unicode_script::Script;

    /// Engine that needs a fixed number of glyphs and records every capacity
    struct NeedsGlyphs {
        required: usize,
        calls: RefCell<Vec<usize>>,
    }

    impl NeedsGlyphs {
        fn new(required: usize) -> Self {
            Self { required, calls: RefCell::new(Vec::new()) }
        }
    }

    impl TextAnalyzer for NeedsGlyphs {
        fn analyze_script(
            &self,
            _source: &dyn TextAnalysisSource,
            _position: u32,
            _length: u32,
            _sink: &mut dyn TextAnalysisSink,
        ) -> Result<()> {
            Ok(())
        }

        fn get_glyphs(&self, _request: &GlyphRequest<'_>, max_glyph_count: usize) -> Result<Glyphs> {
            self.calls.borrow_mut().push(max_glyph_count);
            if max_glyph_count < self.required {
                return Err(TextError::InsufficientBuffer { required: self.required, capacity: max_glyph_count });
            }
            Ok(Glyphs {
                indices: vec![7; self.required],
                ..Glyphs::default()
            })
        }

        fn get_glyph_placements(
            &self,
            _request: &GlyphRequest<'_>,
            _glyphs: &Glyphs,
            _font_size: f32,
        ) -> Result<GlyphPlacements> {
            Err(TextError::NotImplemented("placements"))
        }
    }

    fn with_request<R>(f: impl FnOnce(&GlyphRequest<'_>) -> R) -> R {
        let face = FontFace::new(Vec::<u8>::new(), 0, "Stub");
        let analysis = ScriptAnalysis::new(Script::Arabic, ScriptShapes::Default);
        let text = [0x644u16, 0x627];
        f(&GlyphRequest::new(&text, &face, &analysis))
    }

    #[test]
    fn test_capacity_doubles_once_per_retry() {
        let engine = NeedsGlyphs::new(5);
        let glyphs = with_request(|request| get_glyphs_with_retry(&engine, request)).unwrap();
        assert_eq!(glyphs.len(), 5);
        assert_eq!(*engine.calls.borrow(), vec![2, 4, 8]);
    }

    #[test]
    fn test_first_attempt_fits() {
        let engine = NeedsGlyphs::new(1);
        with_request(|request| get_glyphs_with_retry(&engine, request)).unwrap();
        assert_eq!(*engine.calls.borrow(), vec![2]);
    }

    #[test]
    fn test_gives_up_past_maximum() {
        let engine = NeedsGlyphs::new(MAX_GLYPH_CAPACITY + 1);
        let err = with_request(|request| get_glyphs_with_retry(&engine, request)).unwrap_err();
        assert!(err.is_insufficient_buffer());
        assert_eq!(engine.calls.borrow().last().copied(), Some(MAX_GLYPH_CAPACITY));
    }

    #[test]
    fn test_other_errors_are_not_retried() {
        struct Broken;
        impl TextAnalyzer for Broken {
            fn analyze_script(
                &self,
                _source: &dyn TextAnalysisSource,
                _position: u32,
                _length: u32,
                _sink: &mut dyn TextAnalysisSink,
            ) -> Result<()> {
                Ok(())
            }
            fn get_glyphs(&self, _request: &GlyphRequest<'_>, _max: usize) -> Result<Glyphs> {
                Err(TextError::ShapingFailed("broken".into()))
            }
            fn get_glyph_placements(&self, _r: &GlyphRequest<'_>, _g: &Glyphs, _s: f32) -> Result<GlyphPlacements> {
                Ok(GlyphPlacements::default())
            }
        }
        let err = with_request(|request| get_glyphs_with_retry(&Broken, request)).unwrap_err();
        assert!(matches!(err, TextError::ShapingFailed(_)));
    }

    #[test]
    fn test_capacity_growth() {
        assert_eq!(GlyphCapacity::default().get(), 2);
        assert_eq!(GlyphCapacity::INITIAL.grow().map(GlyphCapacity::get), Some(4));
        assert_eq!(GlyphCapacity(MAX_GLYPH_CAPACITY).grow(), None);
    }
}
