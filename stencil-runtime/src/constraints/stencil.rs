//! Stencil constraint: a fixed sequence of literal characters and charset
//! references, matched one character per position.

use std::sync::Arc;

use stencil_core::{
    CharSet, CompileError, MatchError, Result, StencilOptions, StencilPosition,
};

use super::fsm::CharacterConstraint;

/// One character set per stencil position, built once and shared read-only
/// by every automaton state derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTargets {
    sets: Vec<CharSet>,
    /// Returned for any cursor at or past the end.
    empty: CharSet,
}

impl CompiledTargets {
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Accepted set at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<&CharSet> {
        self.sets.get(position)
    }

    pub fn as_slice(&self) -> &[CharSet] {
        &self.sets
    }
}

/// Flatten a stencil against its charset table.
///
/// Literals contribute one singleton set per character; charset references
/// contribute the deduplicated characters of the referenced charset. Absent
/// charsets behave as an empty table, so any reference fails.
pub fn compile(
    stencil: &[StencilPosition],
    charsets: Option<&[String]>,
) -> std::result::Result<CompiledTargets, CompileError> {
    let table: Vec<CharSet> = charsets
        .unwrap_or(&[])
        .iter()
        .map(|charset| charset.chars().collect())
        .collect();

    let capacity = stencil
        .iter()
        .map(|position| match position {
            StencilPosition::Literal(text) => text.chars().count(),
            StencilPosition::Charset(_) => 1,
        })
        .sum();
    let mut sets = Vec::with_capacity(capacity);

    for position in stencil {
        match position {
            StencilPosition::Literal(text) => {
                sets.extend(text.chars().map(|c| CharSet::from([c])));
            }
            StencilPosition::Charset(index) => {
                let set = table
                    .get(*index)
                    .ok_or(CompileError::IndexOutOfRange(*index))?;
                sets.push(set.clone());
            }
        }
    }

    tracing::debug!(
        "compiled stencil: {} entries, {} charsets, {} positions",
        stencil.len(),
        table.len(),
        sets.len()
    );

    Ok(CompiledTargets {
        sets,
        empty: CharSet::new(),
    })
}

/// Cursor over shared [`CompiledTargets`].
///
/// Cloning is cheap (an `Arc` and an index) and every successful
/// [`advance`](StencilAutomaton::advance) returns a new value, so older
/// states keep answering for their own cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StencilAutomaton {
    targets: Arc<CompiledTargets>,
    cursor: usize,
}

impl StencilAutomaton {
    /// Initial state (cursor 0) over already compiled targets.
    pub fn new(targets: Arc<CompiledTargets>) -> Self {
        Self { targets, cursor: 0 }
    }

    /// Compile a stencil and return its initial state.
    pub fn compile(
        stencil: &[StencilPosition],
        charsets: Option<&[String]>,
    ) -> std::result::Result<Self, CompileError> {
        let targets = compile(stencil, charsets)?;
        Ok(Self::new(Arc::new(targets)))
    }

    pub fn from_options(options: &StencilOptions) -> std::result::Result<Self, CompileError> {
        Self::compile(&options.stencil, options.charsets.as_deref())
    }

    /// Parse JSON stencil options and compile them.
    pub fn from_json(text: &str) -> Result<Self> {
        let options = StencilOptions::from_json(text)?;
        Ok(Self::from_options(&options)?)
    }

    pub fn targets(&self) -> &Arc<CompiledTargets> {
        &self.targets
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of positions in the stencil.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Positions still to be matched.
    pub fn remaining(&self) -> usize {
        self.targets.len().saturating_sub(self.cursor)
    }

    /// Characters accepted at the cursor; the empty set once the stencil has
    /// been fully matched.
    pub fn allowed_characters(&self) -> &CharSet {
        self.targets.get(self.cursor).unwrap_or(&self.targets.empty)
    }

    /// True iff every position has been matched.
    pub fn can_end(&self) -> bool {
        self.cursor >= self.targets.len()
    }

    /// Validate `text` against consecutive positions from the cursor and
    /// return the state after it. Stops at the first failing character;
    /// `self` is never modified.
    pub fn advance(&self, text: &str) -> std::result::Result<Self, MatchError> {
        let mut consumed = 0;
        for (offset, character) in text.chars().enumerate() {
            let set = self
                .targets
                .get(self.cursor + offset)
                .ok_or(MatchError::PastEnd)?;
            if !set.contains(&character) {
                return Err(MatchError::Rejected { offset, character });
            }
            consumed += 1;
        }
        Ok(self.move_forward(consumed))
    }

    /// Number of leading characters of `text` that would be accepted from the
    /// cursor, stopping at the first rejection or at the end of the stencil.
    pub fn accepted_prefix_len(&self, text: &str) -> usize {
        text.chars()
            .enumerate()
            .take_while(|&(offset, character)| {
                self.targets
                    .get(self.cursor + offset)
                    .is_some_and(|set| set.contains(&character))
            })
            .count()
    }

    fn move_forward(&self, count: usize) -> Self {
        Self {
            targets: Arc::clone(&self.targets),
            cursor: self.cursor + count,
        }
    }
}

impl CharacterConstraint for StencilAutomaton {
    fn allowed_characters(&self) -> &CharSet {
        StencilAutomaton::allowed_characters(self)
    }

    fn can_end(&self) -> bool {
        StencilAutomaton::can_end(self)
    }

    fn advance(&self, text: &str) -> std::result::Result<Self, MatchError> {
        StencilAutomaton::advance(self, text)
    }
}
