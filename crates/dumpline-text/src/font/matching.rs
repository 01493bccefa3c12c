//! Font matching and query

use super::{FontStretch, FontStyle, FontWeight};

/// Font query for matching
#[derive(Debug, Clone, PartialEq)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
    /// Desired weight
    pub weight: FontWeight,
    /// Desired stretch
    pub stretch: FontStretch,
    /// Desired style
    pub style: FontStyle,
}

impl FontQuery {
    /// Create a new font query with normal weight, stretch and style
    pub fn new(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|s| s.to_string()).collect(),
            weight: FontWeight::NORMAL,
            stretch: FontStretch::Normal,
            style: FontStyle::Normal,
        }
    }

    /// Set font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font stretch
    pub fn stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Set font style
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Human readable family list, for diagnostics
    pub fn family_list(&self) -> String {
        self.families.join(", ")
    }
}

impl Default for FontQuery {
    fn default() -> Self {
        Self::new(&["Arial"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = FontQuery::new(&["Arial", "DejaVu Sans"])
            .weight(FontWeight(700))
            .style(FontStyle::Italic)
            .stretch(FontStretch::Condensed);
        assert_eq!(query.families, vec!["Arial", "DejaVu Sans"]);
        assert_eq!(query.weight, FontWeight(700));
        assert_eq!(query.style, FontStyle::Italic);
        assert_eq!(query.stretch, FontStretch::Condensed);
        assert_eq!(query.family_list(), "Arial, DejaVu Sans");
    }
}
