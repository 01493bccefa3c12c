//! Font database for loading and managing fonts

use fontdb::{Database, FaceInfo};
use super::{FontFace, FontId, FontProvider, FontQuery};
use crate::{Result, TextError};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Load a font from memory
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Check whether any loaded face belongs to the family
    pub fn has_family(&self, family: &str) -> bool {
        self.canonical_family(family).is_some()
    }

    /// Family name as spelled by the font itself
    ///
    /// Family names match ASCII case-insensitively; fontdb queries need the
    /// exact spelling.
    pub fn canonical_family(&self, family: &str) -> Option<&str> {
        self.db.faces()
            .flat_map(|face| face.families.iter())
            .map(|(name, _)| name.as_str())
            .find(|name| name.eq_ignore_ascii_case(family))
    }

    /// Find the best face of one family for the query's weight, stretch and style
    pub fn query_family(&self, family: &str, query: &FontQuery) -> Option<FontId> {
        let families = [fontdb::Family::Name(family)];
        self.db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight.0),
            stretch: query.stretch.into(),
            style: query.style.into(),
        }).map(FontId)
    }

    /// Get font info by ID
    pub fn face_info(&self, id: FontId) -> Option<&FaceInfo> {
        self.db.face(id.0)
    }

    /// Copy a face out of the database
    pub fn load_face(&self, id: FontId, family: &str) -> Option<FontFace> {
        self.db.with_face_data(id.0, |data, index| {
            FontFace::new(data.to_vec(), index, family)
        })
    }

    /// Number of loaded fonts
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl FontProvider for FontDatabase {
    fn font_face(&self, query: &FontQuery) -> Result<FontFace> {
        let family = query.families
            .iter()
            .find_map(|family| self.canonical_family(family))
            .ok_or_else(|| TextError::FontNotFound(query.family_list()))?;

        let id = self.query_family(family, query)
            .ok_or_else(|| TextError::NoMatchingFont(family.to_string()))?;

        if let Some(info) = self.face_info(id) {
            tracing::debug!(
                "Resolved {} to {} (weight {}, index {})",
                family, info.post_script_name, info.weight.0, info.index
            );
        }

        self.load_face(id, family)
            .ok_or_else(|| TextError::FontParsing(format!("could not read font data for {}", family)))
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}
