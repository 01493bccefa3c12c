//! Script runs derived from a run table

use std::collections::BTreeMap;

use super::ScriptAnalysis;

/// One entry of a run table with its derived length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    /// Starting position (UTF-16 code units)
    pub position: u32,
    /// Length (UTF-16 code units)
    pub length: u32,
    pub analysis: ScriptAnalysis,
}

impl ScriptRun {
    /// Position one past the last code unit
    pub fn end(&self) -> u32 {
        self.position + self.length
    }

    /// Slice of `text` covered by the run
    pub fn slice<'a>(&self, text: &'a [u16]) -> &'a [u16] {
        let start = (self.position as usize).min(text.len());
        let end = (self.end() as usize).min(text.len());
        &text[start..end]
    }
}

/// Derive run lengths from an ordered table
///
/// Each run extends to the next entry's position; the last one extends to
/// `text_length`. Entries at or past `text_length` get a zero length.
pub fn derive_runs(table: &BTreeMap<u32, ScriptAnalysis>, text_length: u32) -> Vec<ScriptRun> {
    let mut entries = table.iter().peekable();
    let mut runs = Vec::with_capacity(table.len());

    while let Some((&position, analysis)) = entries.next() {
        let end = entries.peek().map_or(text_length, |&(&next, _)| next);
        runs.push(ScriptRun {
            position,
            length: end.saturating_sub(position),
            analysis: *analysis,
        });
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScriptShapes;
    use unicode_script::Script;

    fn table(positions: &[u32]) -> BTreeMap<u32, ScriptAnalysis> {
        positions
            .iter()
            .map(|&p| (p, ScriptAnalysis::new(Script::Arabic, ScriptShapes::Default)))
            .collect()
    }

    #[test]
    fn test_gap_and_last_run_to_end() {
        let runs = derive_runs(&table(&[0, 2, 4]), 5);
        let spans: Vec<(u32, u32)> = runs.iter().map(|r| (r.position, r.length)).collect();
        assert_eq!(spans, vec![(0, 2), (2, 2), (4, 1)]);
    }

    #[test]
    fn test_single_run_covers_text() {
        let runs = derive_runs(&table(&[0]), 5);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].length, 5);
        assert_eq!(runs[0].end(), 5);
    }

    #[test]
    fn test_empty_table() {
        assert!(derive_runs(&BTreeMap::new(), 5).is_empty());
    }

    #[test]
    fn test_entry_past_end_is_empty() {
        let runs = derive_runs(&table(&[0, 7]), 5);
        assert_eq!(runs[0].length, 7);
        assert_eq!(runs[1].length, 0);
    }

    #[test]
    fn test_slice_is_clamped() {
        let text = [1u16, 2, 3, 4, 5];
        let runs = derive_runs(&table(&[0, 2, 4]), 5);
        assert_eq!(runs[1].slice(&text), &[3, 4]);
        assert_eq!(runs[2].slice(&text[..4]), &[] as &[u16]);
    }
}
