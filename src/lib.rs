//! # pelmanism
//!
//! A memory-matching (concentration) card game engine.
//!
//! A player reveals two cards per turn. Matching pairs stay face-up;
//! mismatches are hidden again after a delay. The round ends when every
//! pair has been found.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: the crate owns deck construction, the flip
//!    state machine, match detection, attempt counting, and win
//!    detection. Rendering, animation, and input belong to the host.
//!
//! 2. **Explicit state**: play state is a `GameState` value transformed
//!    by the session's transition methods. Observers take cheap
//!    snapshots backed by `im` persistent structures.
//!
//! 3. **Host-driven time**: the engine never sleeps. A mismatch mints a
//!    `ResetTicket`; the host runs the delay and hands the ticket back.
//!    Starting a new round invalidates outstanding tickets, so a stale
//!    timer can never touch a replaced state.
//!
//! ## Modules
//!
//! - `core`: RNG, session configuration, game state
//! - `cards`: card identities and the catalog
//! - `deck`: deck construction and shuffling
//! - `rules`: match evaluation and win detection
//! - `session`: the flip state machine
//! - `error`: engine error types

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    AttemptRecord, GameRng, GameRngState, GameState, Phase, SessionConfig,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId};

pub use crate::deck::{build_deck, shuffle, DeckEntry};

pub use crate::rules::{evaluate, is_won, MatchOutcome};

pub use crate::session::{FlipOutcome, GameSession, RejectReason, ResetTicket};

pub use crate::error::EngineError;
