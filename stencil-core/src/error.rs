use thiserror::Error;

/// Failure while flattening a stencil into per-position character sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("stencil charset index {0} out of range")]
    IndexOutOfRange(usize),
}

/// Failure while advancing an automaton by a chunk of text.
///
/// `offset` counts characters from the start of the submitted text, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("cannot advance past the end of the stencil")]
    PastEnd,

    #[error("character {character:?} rejected at offset {offset}")]
    Rejected { offset: usize, character: char },
}

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StencilError>;
