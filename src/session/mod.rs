//! The flip state machine.
//!
//! A `GameSession` owns one round's state and processes flip events in
//! arrival order. Mismatch resets are host-driven: see
//! [`reset`](crate::session::reset) for the ticket contract.

pub mod machine;
pub mod reset;

pub use machine::{FlipOutcome, GameSession, RejectReason};
pub use reset::ResetTicket;
