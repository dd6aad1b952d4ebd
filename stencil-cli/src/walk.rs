//! Step a stencil automaton through a list of text chunks and record what
//! happened at each step.

use std::fmt;

use serde::Serialize;

use stencil_core::CharSet;
use stencil_runtime::StencilAutomaton;

/// Outcome of feeding one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub chunk: String,
    /// Cursor before the chunk was fed.
    pub cursor: usize,
    /// Characters allowed at `cursor`, sorted.
    pub allowed: Vec<char>,
    /// Cursor after the chunk, or `None` if it was rejected.
    pub advanced_to: Option<usize>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub positions: usize,
    pub steps: Vec<StepReport>,
    pub cursor: usize,
    /// Characters allowed after the last accepted chunk, sorted.
    pub allowed: Vec<char>,
    pub can_end: bool,
}

impl WalkReport {
    /// True if every chunk was accepted and the stencil was fully matched.
    pub fn is_complete(&self) -> bool {
        self.can_end && !self.is_rejected()
    }

    /// True if some chunk was rejected.
    pub fn is_rejected(&self) -> bool {
        self.steps.iter().any(|s| s.error.is_some())
    }

    /// Whether the process should exit successfully. A rejected chunk always
    /// fails; with `check`, an unfinished stencil fails too.
    pub fn exit_ok(&self, check: bool) -> bool {
        if check {
            self.is_complete()
        } else {
            !self.is_rejected()
        }
    }
}

/// Feed `chunks` in order, stopping at the first rejected chunk. The report
/// describes the last valid state.
pub fn walk(automaton: &StencilAutomaton, chunks: &[String]) -> WalkReport {
    let mut state = automaton.clone();
    let mut steps = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let cursor = state.cursor();
        let allowed = sorted(state.allowed_characters());
        match state.advance(chunk) {
            Ok(next) => {
                steps.push(StepReport {
                    chunk: chunk.clone(),
                    cursor,
                    allowed,
                    advanced_to: Some(next.cursor()),
                    error: None,
                });
                state = next;
            }
            Err(e) => {
                tracing::debug!("chunk {chunk:?} rejected at cursor {cursor}: {e}");
                steps.push(StepReport {
                    chunk: chunk.clone(),
                    cursor,
                    allowed,
                    advanced_to: None,
                    error: Some(e.to_string()),
                });
                break;
            }
        }
    }

    WalkReport {
        positions: state.len(),
        steps,
        cursor: state.cursor(),
        allowed: sorted(state.allowed_characters()),
        can_end: state.can_end(),
    }
}

/// Sorted copy of a character set for stable display.
pub fn sorted(set: &CharSet) -> Vec<char> {
    let mut chars: Vec<char> = set.iter().copied().collect();
    chars.sort_unstable();
    chars
}

fn render(chars: &[char]) -> String {
    let joined: String = chars.iter().collect();
    format!("{{{joined:?}}}")
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] allowed {} <- {:?}",
            self.cursor,
            render(&self.allowed),
            self.chunk
        )?;
        match (&self.advanced_to, &self.error) {
            (Some(next), _) => write!(f, " -> {next}"),
            (None, Some(e)) => write!(f, " !! {e}"),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for WalkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        write!(
            f,
            "[{}/{}] allowed {} can_end={}",
            self.cursor,
            self.positions,
            render(&self.allowed),
            self.can_end
        )
    }
}
