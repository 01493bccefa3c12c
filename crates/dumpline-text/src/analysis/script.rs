//! Script analysis descriptors and segmentation

use unicode_script::{Script, UnicodeScript};

/// Shaping flags attached to a script run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptShapes {
    #[default]
    Default,
    /// Control characters with no visual representation
    NoVisual,
}

/// Result of script analysis for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptAnalysis {
    pub script: Script,
    pub shapes: ScriptShapes,
}

impl ScriptAnalysis {
    pub fn new(script: Script, shapes: ScriptShapes) -> Self {
        Self { script, shapes }
    }

    /// ISO 15924 code of the script, e.g. `Arab`
    pub fn tag(&self) -> &'static str {
        self.script.short_name()
    }
}

struct Unit {
    len: u32,
    script: Script,
    shapes: ScriptShapes,
}

fn is_weak(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited)
}

/// Split UTF-16 text into maximal runs of one script analysis
///
/// Common and inherited characters take the script of the run before them;
/// leading ones take the first explicit script that follows. Returns
/// `(position, length, analysis)` triples relative to the start of `text`.
pub fn segment_scripts(text: &[u16]) -> Vec<(u32, u32, ScriptAnalysis)> {
    let mut units: Vec<Unit> = char::decode_utf16(text.iter().copied())
        .map(|decoded| {
            let (ch, len) = match decoded {
                Ok(ch) => (ch, ch.len_utf16() as u32),
                Err(_) => (char::REPLACEMENT_CHARACTER, 1),
            };
            let shapes = if ch.is_control() { ScriptShapes::NoVisual } else { ScriptShapes::Default };
            Unit { len, script: ch.script(), shapes }
        })
        .collect();

    let leading = units
        .iter()
        .map(|u| u.script)
        .find(|&s| !is_weak(s))
        .unwrap_or(Script::Common);

    let mut current = leading;
    for unit in &mut units {
        if is_weak(unit.script) {
            unit.script = current;
        } else {
            current = unit.script;
        }
    }

    let mut runs: Vec<(u32, u32, ScriptAnalysis)> = Vec::new();
    let mut position = 0u32;
    for unit in units {
        let analysis = ScriptAnalysis::new(unit.script, unit.shapes);
        match runs.last_mut() {
            Some((_, length, last)) if *last == analysis => *length += unit.len,
            _ => runs.push((position, unit.len, analysis)),
        }
        position += unit.len;
    }

    runs
}
