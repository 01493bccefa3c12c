//! Text analysis sink

use std::collections::BTreeMap;

use super::{NumberSubstitution, ScriptAnalysis, ScriptRun, derive_runs};
use crate::{Result, TextError};

/// Whether a line may break at a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakCondition {
    #[default]
    Neutral,
    CanBreak,
    MayNotBreak,
    MustBreak,
}

/// Line breaking properties of one code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineBreakpoint {
    pub break_condition_before: BreakCondition,
    pub break_condition_after: BreakCondition,
    pub is_whitespace: bool,
    pub is_soft_hyphen: bool,
}

/// Receiver for analyzer results
pub trait TextAnalysisSink {
    fn set_script_analysis(&mut self, position: u32, length: u32, analysis: &ScriptAnalysis) -> Result<()>;

    fn set_line_breakpoints(&mut self, position: u32, length: u32, breakpoints: &[LineBreakpoint]) -> Result<()>;

    fn set_bidi_level(&mut self, position: u32, length: u32, explicit_level: u8, resolved_level: u8) -> Result<()>;

    fn set_number_substitution(
        &mut self,
        position: u32,
        length: u32,
        substitution: Option<NumberSubstitution>,
    ) -> Result<()>;
}

/// Sink that only records script analysis, keyed by run position
///
/// Reported runs are assumed to be position ordered, non-overlapping and
/// gap free, so lengths are not stored: a run ends where the next begins.
#[derive(Debug, Clone, Default)]
pub struct ScriptRunSink {
    analyses: BTreeMap<u32, ScriptAnalysis>,
}

impl ScriptRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded analyses by starting position
    pub fn script_analyses(&self) -> &BTreeMap<u32, ScriptAnalysis> {
        &self.analyses
    }

    /// Recorded runs with lengths derived against `text_length`
    pub fn runs(&self, text_length: u32) -> Vec<ScriptRun> {
        derive_runs(&self.analyses, text_length)
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}

impl TextAnalysisSink for ScriptRunSink {
    fn set_script_analysis(&mut self, position: u32, _length: u32, analysis: &ScriptAnalysis) -> Result<()> {
        self.analyses.insert(position, *analysis);
        Ok(())
    }

    fn set_line_breakpoints(&mut self, _position: u32, _length: u32, _breakpoints: &[LineBreakpoint]) -> Result<()> {
        Err(TextError::NotImplemented("line breakpoints"))
    }

    fn set_bidi_level(&mut self, _position: u32, _length: u32, _explicit_level: u8, _resolved_level: u8) -> Result<()> {
        Err(TextError::NotImplemented("bidi levels"))
    }

    fn set_number_substitution(
        &mut self,
        _position: u32,
        _length: u32,
        _substitution: Option<NumberSubstitution>,
    ) -> Result<()> {
        Err(TextError::NotImplemented("number substitution"))
    }
}
