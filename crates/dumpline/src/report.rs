//! Line-oriented report output

use std::io::{self, Write};

use dumpline_text::{GlyphPlacements, Glyphs, ScriptRun};

/// Format a float like C's `%g`: six significant digits, trailing zeros
/// trimmed, scientific notation outside `1e-4..1e6`
pub fn format_general(value: f32) -> String {
    let value = f64::from(value);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to six significant digits first; the rounded exponent picks the notation
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (5 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write the header line of a run
pub fn write_run(out: &mut dyn Write, index: usize, run: &ScriptRun) -> io::Result<()> {
    writeln!(
        out,
        "Run {} at string position {} with string length: {}.",
        index, run.position, run.length
    )
}

/// Write one line per glyph, in glyph order
pub fn write_glyphs(out: &mut dyn Write, glyphs: &Glyphs, placements: &GlyphPlacements) -> io::Result<()> {
    let rows = glyphs.indices.iter()
        .zip(&placements.advances)
        .zip(&placements.offsets);

    for ((id, advance), offset) in rows {
        writeln!(
            out,
            "Glyph {} with advance {} and offset ({}, {})",
            id,
            format_general(*advance),
            format_general(offset.advance_offset),
            format_general(offset.ascender_offset)
        )?;
    }
    Ok(())
}
