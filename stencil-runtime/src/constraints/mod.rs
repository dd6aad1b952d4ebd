//! Structured output constraints at character granularity.
//!
//! A constraint reports which characters may come next, whether generation
//! may stop, and produces a successor state for each accepted chunk of text.
//! The **stencil** constraint compiles a fixed template of literal characters
//! and charset references into one character set per position and walks it
//! with a single cursor.

pub mod fsm;
pub mod stencil;

pub use fsm::CharacterConstraint;
pub use stencil::{compile, CompiledTargets, StencilAutomaton};
