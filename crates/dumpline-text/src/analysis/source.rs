//! Text analysis source

/// Paragraph reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// How digits are substituted when shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSubstitution {
    FromCulture,
    Contextual,
    National,
    Traditional,
}

/// Text provider consulted by an analyzer
pub trait TextAnalysisSource {
    /// Text from `position` to the end, empty when out of range
    fn text_at_position(&self, position: u32) -> &[u16];

    /// Text from the start up to `position`, empty when out of range
    fn text_before_position(&self, position: u32) -> &[u16];

    fn paragraph_reading_direction(&self) -> ReadingDirection;

    /// Locale for the span starting at `position` and the span's length
    fn locale_name(&self, position: u32) -> (u32, Option<&str>);

    /// Number substitution for the span starting at `position` and the span's length
    fn number_substitution(&self, position: u32) -> (u32, Option<NumberSubstitution>);
}

/// Source over a borrowed UTF-16 buffer
///
/// Left-to-right, no locale and no number substitution anywhere.
#[derive(Debug, Clone, Copy)]
pub struct Utf16Source<'a> {
    text: &'a [u16],
}

impl<'a> Utf16Source<'a> {
    pub fn new(text: &'a [u16]) -> Self {
        Self { text }
    }

    /// Length in code units
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn remaining(&self, position: u32) -> u32 {
        self.len().saturating_sub(position)
    }
}

impl TextAnalysisSource for Utf16Source<'_> {
    fn text_at_position(&self, position: u32) -> &[u16] {
        self.text.get(position as usize..).unwrap_or(&[])
    }

    fn text_before_position(&self, position: u32) -> &[u16] {
        if position == 0 {
            return &[];
        }
        self.text.get(..position as usize).unwrap_or(&[])
    }

    fn paragraph_reading_direction(&self) -> ReadingDirection {
        ReadingDirection::LeftToRight
    }

    fn locale_name(&self, position: u32) -> (u32, Option<&str>) {
        (self.remaining(position), None)
    }

    fn number_substitution(&self, position: u32) -> (u32, Option<NumberSubstitution>) {
        (self.remaining(position), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: [u16; 5] = [0x644, 0x637, 0x641, 0x627, 0x64B];

    #[test]
    fn test_text_at_position() {
        let source = Utf16Source::new(&TEXT);
        assert_eq!(source.text_at_position(0), &TEXT[..]);
        for p in 1..=5u32 {
            let suffix = source.text_at_position(p);
            assert_eq!(suffix.len() as u32, 5 - p);
            assert_eq!(suffix, &TEXT[p as usize..]);
        }
    }

    #[test]
    fn test_text_at_position_out_of_range() {
        let source = Utf16Source::new(&TEXT);
        for p in [5u32, 6, 100, u32::MAX] {
            assert!(source.text_at_position(p).is_empty());
        }
    }

    #[test]
    fn test_text_before_position() {
        let source = Utf16Source::new(&TEXT);
        for p in 1..=5u32 {
            assert_eq!(source.text_before_position(p), &TEXT[..p as usize]);
        }
    }

    #[test]
    fn test_text_before_position_out_of_range() {
        let source = Utf16Source::new(&TEXT);
        for p in [0u32, 6, 100, u32::MAX] {
            assert!(source.text_before_position(p).is_empty());
        }
    }

    #[test]
    fn test_fixed_direction_and_no_localization() {
        let source = Utf16Source::new(&TEXT);
        assert_eq!(source.paragraph_reading_direction(), ReadingDirection::LeftToRight);
        assert_eq!(source.locale_name(0), (5, None));
        assert_eq!(source.locale_name(3), (2, None));
        assert_eq!(source.number_substitution(1), (4, None));
        assert_eq!(source.number_substitution(9), (0, None));
    }

    #[test]
    fn test_empty_source() {
        let source = Utf16Source::new(&[]);
        assert!(source.is_empty());
        assert!(source.text_at_position(0).is_empty());
        assert!(source.text_before_position(0).is_empty());
    }
}
