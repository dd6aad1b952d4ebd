//! Core trait for character-level generation constraints.

use stencil_core::{CharSet, MatchError};

/// A character-level constraint that a decoding driver steps through.
///
/// States are values: `advance` returns a successor and leaves `self`
/// untouched, so a driver can branch into several candidate continuations
/// from one parent state and simply drop the ones that fail.
pub trait CharacterConstraint: Clone + Send + Sync {
    /// Characters accepted as the next character. Empty once the
    /// constraint has been fully matched.
    fn allowed_characters(&self) -> &CharSet;

    /// Whether generation may stop at this state.
    fn can_end(&self) -> bool;

    /// Consume `text` and return the resulting state.
    fn advance(&self, text: &str) -> Result<Self, MatchError>;

    /// Check whether `text` would be accepted from this state.
    fn accepts(&self, text: &str) -> bool {
        self.advance(text).is_ok()
    }
}
