//! Text analysis adapters
//!
//! A [`TextAnalysisSource`] feeds UTF-16 text to an analyzer and a
//! [`TextAnalysisSink`] receives what the analyzer finds. Positions and
//! lengths are always in UTF-16 code units.

mod source;
mod sink;
mod script;
mod runs;

pub use source::{NumberSubstitution, ReadingDirection, TextAnalysisSource, Utf16Source};
pub use sink::{BreakCondition, LineBreakpoint, ScriptRunSink, TextAnalysisSink};
pub use script::{ScriptAnalysis, ScriptShapes, segment_scripts};
pub use runs::{ScriptRun, derive_runs};
