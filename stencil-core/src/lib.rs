//! Stencil core types and error definitions.

pub mod error;
pub mod types;

pub use error::{CompileError, MatchError, Result, StencilError};
pub use types::*;
