//! Pure game rules: match evaluation and win detection.

pub mod evaluator;
pub mod win;

pub use evaluator::{evaluate, MatchOutcome};
pub use win::is_won;
