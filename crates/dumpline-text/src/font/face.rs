//! Font face handle

use std::sync::Arc;

use rustybuzz::ttf_parser;

use crate::{Result, TextError};

/// A font face resolved from a collection
///
/// Owns the font bytes so the face outlives the database it came from.
#[derive(Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    index: u32,
    family: String,
}

impl FontFace {
    /// Wrap font data without parsing it
    pub fn new(data: impl Into<Arc<[u8]>>, index: u32, family: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            index,
            family: family.into(),
        }
    }

    /// Raw font file bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Face index inside a collection file
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Family name the face was resolved under
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Parse the font tables
    pub fn parse(&self) -> Result<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index)
            .map_err(|e| TextError::FontParsing(format!("{}: {}", self.family, e)))
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("index", &self.index)
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_fails_to_parse() {
        let face = FontFace::new(vec![0u8; 16], 0, "Garbage");
        assert_eq!(face.family(), "Garbage");
        assert_eq!(face.index(), 0);
        assert!(matches!(face.parse(), Err(TextError::FontParsing(_))));
    }
}
