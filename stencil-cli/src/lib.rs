//! Command-line front end for stencil constraints.

pub mod walk;
