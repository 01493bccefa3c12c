//! Dump configuration

use dumpline_text::FontQuery;

/// Lam, Tah, Feh, Alef, Fathatan
pub const DEFAULT_TEXT: [u16; 5] = [0x644, 0x637, 0x641, 0x627, 0x64B];

/// Everything the dump is run with
///
/// The defaults are the fixed input of the tool; there is no command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpConfig {
    /// Text to analyze (UTF-16 code units)
    pub text: Vec<u16>,
    /// Font to shape with
    pub font: FontQuery,
    /// Em size used for glyph placement
    pub font_size: f32,
    pub is_sideways: bool,
    /// Shaping direction for every run
    pub is_right_to_left: bool,
    pub locale: Option<String>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_vec(),
            font: FontQuery::new(&["Arial"]),
            font_size: 100.0,
            is_sideways: false,
            is_right_to_left: true,
            locale: None,
        }
    }
}

impl DumpConfig {
    /// Replace the text
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.encode_utf16().collect();
        self
    }

    /// Replace the font families
    pub fn families(mut self, families: &[&str]) -> Self {
        self.font.families = families.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn right_to_left(mut self, is_right_to_left: bool) -> Self {
        self.is_right_to_left = is_right_to_left;
        self
    }

    /// Text length in code units
    pub fn text_length(&self) -> u32 {
        self.text.len() as u32
    }
}
