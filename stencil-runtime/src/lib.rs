//! Stencil runtime: character-level constraints for guided decoding.

pub mod constraints;

pub use constraints::{CharacterConstraint, CompiledTargets, StencilAutomaton};
