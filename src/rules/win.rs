//! Win detection.

use crate::core::GameState;

/// Check whether every pair has been found.
///
/// Pure predicate over the state: the round is won exactly when the
/// number of matched identities equals the pair count. Re-checked by the
/// session after every match resolution.
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    state.matched_count() == state.pair_count()
}
