//! Text analyzer using rustybuzz

use std::str::FromStr;

use rustybuzz::{UnicodeBuffer, shape, ttf_parser};
use unicode_script::Script;

use crate::analysis::{ScriptAnalysis, TextAnalysisSink, TextAnalysisSource, segment_scripts};
use crate::{Result, TextError};
use super::{
    GlyphOffset, GlyphPlacements, GlyphRequest, Glyphs, ShapingGlyphProperties,
    ShapingTextProperties, TextAnalyzer,
};

/// Text analyzer backed by HarfBuzz (via rustybuzz)
///
/// Script segmentation uses Unicode script properties; shaping runs the
/// full OpenType pipeline of the requested face.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapingAnalyzer;

/// A shaped glyph in font units
#[derive(Debug, Clone, Copy)]
struct ShapedGlyph {
    glyph_id: u16,
    x_offset: i32,
    y_offset: i32,
    x_advance: i32,
    y_advance: i32,
    /// First code unit of the glyph's cluster
    cluster: u32,
    is_mark: bool,
}

/// Glyphs of one run in logical order
struct ShapedRun {
    glyphs: Vec<ShapedGlyph>,
    units_per_em: u16,
}

/// Text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
}

impl From<Direction> for rustybuzz::Direction {
    fn from(d: Direction) -> Self {
        match d {
            Direction::LeftToRight => rustybuzz::Direction::LeftToRight,
            Direction::RightToLeft => rustybuzz::Direction::RightToLeft,
            Direction::TopToBottom => rustybuzz::Direction::TopToBottom,
        }
    }
}

impl Direction {
    fn of(request: &GlyphRequest<'_>) -> Self {
        if request.is_sideways {
            Direction::TopToBottom
        } else if request.is_right_to_left {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

/// Shaping script for an analysis, `None` lets the shaper guess
fn shaping_script(analysis: &ScriptAnalysis) -> Option<rustybuzz::Script> {
    if matches!(analysis.script, Script::Common | Script::Inherited | Script::Unknown) {
        return None;
    }
    let tag = ttf_parser::Tag::from_bytes_lossy(analysis.tag().as_bytes());
    rustybuzz::Script::from_iso15924_tag(tag)
}

impl ShapingAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    fn shape_run(&self, request: &GlyphRequest<'_>) -> Result<ShapedRun> {
        let parsed = request.face.parse()?;
        let units_per_em = parsed.units_per_em();
        if units_per_em == 0 {
            return Err(TextError::FontParsing(format!("{} has no units per em", request.face.family())));
        }
        let face = rustybuzz::Face::from_face(parsed.clone());

        // Clusters are UTF-16 offsets so they index the caller's buffer
        let mut buffer = UnicodeBuffer::new();
        let mut offset = 0u32;
        for decoded in char::decode_utf16(request.text.iter().copied()) {
            let (ch, len) = match decoded {
                Ok(ch) => (ch, ch.len_utf16() as u32),
                Err(_) => (char::REPLACEMENT_CHARACTER, 1),
            };
            buffer.add(ch, offset);
            offset += len;
        }

        let direction = Direction::of(request);
        buffer.set_direction(direction.into());

        if let Some(script) = shaping_script(request.analysis) {
            buffer.set_script(script);
        }

        if let Some(lang) = request.locale.and_then(|l| rustybuzz::Language::from_str(l).ok()) {
            buffer.set_language(lang);
        }

        let output = shape(&face, &[], buffer);

        let mut glyphs: Vec<ShapedGlyph> = output.glyph_infos().iter()
            .zip(output.glyph_positions().iter())
            .map(|(info, pos)| {
                let glyph_id = info.glyph_id as u16;
                ShapedGlyph {
                    glyph_id,
                    x_offset: pos.x_offset,
                    y_offset: pos.y_offset,
                    x_advance: pos.x_advance,
                    y_advance: pos.y_advance,
                    cluster: info.cluster,
                    is_mark: parsed.tables().gdef
                        .and_then(|gdef| gdef.glyph_class(ttf_parser::GlyphId(glyph_id)))
                        == Some(ttf_parser::gdef::GlyphClass::Mark),
                }
            })
            .collect();

        // Right-to-left output comes back in visual order
        if direction == Direction::RightToLeft {
            glyphs.reverse();
        }

        Ok(ShapedRun { glyphs, units_per_em })
    }
}

/// Glyphs of one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClusterSpan {
    /// First code unit of the cluster
    cluster: u32,
    first_glyph: u16,
    glyph_count: usize,
}

/// Group glyphs into clusters, ordered by cluster
///
/// Logical order keeps a cluster's glyphs adjacent, so one pass suffices.
fn cluster_spans(glyphs: &[ShapedGlyph]) -> Vec<ClusterSpan> {
    let mut spans: Vec<ClusterSpan> = Vec::new();
    for (index, glyph) in glyphs.iter().enumerate() {
        match spans.last_mut() {
            Some(span) if span.cluster == glyph.cluster => span.glyph_count += 1,
            _ => spans.push(ClusterSpan {
                cluster: glyph.cluster,
                first_glyph: index as u16,
                glyph_count: 1,
            }),
        }
    }
    spans.sort_by_key(|span| span.cluster);
    spans
}

/// Position of `unit`'s cluster within `spans`
fn cluster_of(spans: &[ClusterSpan], unit: u32) -> usize {
    spans.partition_point(|span| span.cluster <= unit).saturating_sub(1)
}

impl TextAnalyzer for ShapingAnalyzer {
    fn analyze_script(
        &self,
        source: &dyn TextAnalysisSource,
        position: u32,
        length: u32,
        sink: &mut dyn TextAnalysisSink,
    ) -> Result<()> {
        if length == 0 {
            return Ok(());
        }

        let available = source.text_at_position(position);
        let text = available.get(..length as usize).ok_or(TextError::InvalidRange {
            position,
            length,
            text_length: position.saturating_add(available.len() as u32),
        })?;

        for (offset, run_length, analysis) in segment_scripts(text) {
            tracing::debug!(
                "Script run {} at {} with length {}",
                analysis.tag(), position + offset, run_length
            );
            sink.set_script_analysis(position + offset, run_length, &analysis)?;
        }

        Ok(())
    }

    fn get_glyphs(&self, request: &GlyphRequest<'_>, max_glyph_count: usize) -> Result<Glyphs> {
        let run = self.shape_run(request)?;
        if run.glyphs.len() > max_glyph_count {
            return Err(TextError::InsufficientBuffer {
                required: run.glyphs.len(),
                capacity: max_glyph_count,
            });
        }
        if run.glyphs.len() > usize::from(u16::MAX) + 1 {
            return Err(TextError::ShapingFailed(format!("{} glyphs overflow the cluster map", run.glyphs.len())));
        }

        let spans = cluster_spans(&run.glyphs);
        let text_length = request.text.len() as u32;
        let mut cluster_map = Vec::with_capacity(request.text.len());
        let mut text_props = Vec::with_capacity(request.text.len());

        for unit in 0..text_length {
            let k = cluster_of(&spans, unit);
            let Some(span) = spans.get(k) else {
                cluster_map.push(0);
                text_props.push(ShapingTextProperties::default());
                continue;
            };
            let cluster_end = spans.get(k + 1).map_or(text_length, |next| next.cluster);

            cluster_map.push(span.first_glyph);
            text_props.push(ShapingTextProperties {
                is_shaped_alone: cluster_end.saturating_sub(span.cluster) == 1 && span.glyph_count == 1,
                can_break_shaping_after: unit + 1 == cluster_end,
            });
        }

        let horizontal = !request.is_sideways;
        let glyph_props = run.glyphs.iter()
            .enumerate()
            .map(|(index, glyph)| ShapingGlyphProperties {
                is_cluster_start: index == 0 || run.glyphs[index - 1].cluster != glyph.cluster,
                is_diacritic: glyph.is_mark,
                is_zero_width: if horizontal { glyph.x_advance == 0 } else { glyph.y_advance == 0 },
            })
            .collect();

        Ok(Glyphs {
            cluster_map,
            text_props,
            indices: run.glyphs.iter().map(|g| g.glyph_id).collect(),
            glyph_props,
        })
    }

    fn get_glyph_placements(
        &self,
        request: &GlyphRequest<'_>,
        glyphs: &Glyphs,
        font_size: f32,
    ) -> Result<GlyphPlacements> {
        let run = self.shape_run(request)?;
        if !run.glyphs.iter().map(|g| g.glyph_id).eq(glyphs.indices.iter().copied()) {
            return Err(TextError::ShapingFailed("glyphs do not match the run text".into()));
        }

        let scale = font_size / f32::from(run.units_per_em);
        let direction = Direction::of(request);

        let advances = run.glyphs.iter()
            .map(|g| match direction {
                Direction::TopToBottom => -g.y_advance as f32 * scale,
                _ => g.x_advance as f32 * scale,
            })
            .collect();

        let offsets = run.glyphs.iter()
            .map(|g| match direction {
                Direction::LeftToRight => GlyphOffset {
                    advance_offset: g.x_offset as f32 * scale,
                    ascender_offset: g.y_offset as f32 * scale,
                },
                Direction::RightToLeft => GlyphOffset {
                    advance_offset: -g.x_offset as f32 * scale,
                    ascender_offset: g.y_offset as f32 * scale,
                },
                Direction::TopToBottom => GlyphOffset {
                    advance_offset: -g.y_offset as f32 * scale,
                    ascender_offset: g.x_offset as f32 * scale,
                },
            })
            .collect();

        Ok(GlyphPlacements { advances, offsets })
    }
}
