//! Core engine types: RNG, session configuration, game state.
//!
//! These are the building blocks the session state machine is made of.
//! Hosts configure a round via `SessionConfig` rather than modifying the
//! engine.

pub mod rng;
pub mod config;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
pub use state::{AttemptRecord, GameState, Phase};
