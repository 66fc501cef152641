//! The game session state machine.
//!
//! ## Transitions
//!
//! - `Idle` --flip--> `OnePicked`
//! - `OnePicked` --flip--> match: back to `Idle` (or `Won`), selection
//!   cleared immediately
//! - `OnePicked` --flip--> mismatch: `Resolving`, both cards stay
//!   face-up until the host redeems the reset ticket
//! - `Resolving` --resolve--> `Idle`
//!
//! Flips are processed strictly in call order. While a mismatch reset is
//! pending, further flips are rejected no-ops: at most one unresolved
//! turn exists at a time, so a third card can never be exposed before
//! the first two are hidden again.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

use crate::cards::{CardCatalog, CardId};
use crate::core::{GameRng, GameState, Phase, SessionConfig};
use crate::deck::{build_deck, shuffle, DeckEntry};
use crate::error::EngineError;
use crate::rules::{evaluate, is_won, MatchOutcome};

use super::reset::ResetTicket;

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The position is already part of the unresolved selection.
    AlreadyFaceUp,
    /// The card at the position was matched earlier.
    AlreadyMatched,
    /// A mismatch reset is still pending; no third card may be exposed.
    ResetPending,
    /// The round is over.
    RoundWon,
}

/// Result of a processed flip event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The flip was a defined no-op; state is unchanged.
    Rejected(RejectReason),

    /// First card of a turn revealed.
    FirstFlip { position: usize },

    /// Second card matched the first. `won` is set when this was the
    /// final pair.
    Matched { card_id: CardId, won: bool },

    /// Second card did not match. Both stay face-up until the host
    /// redeems `ticket` after the mismatch delay.
    Mismatched {
        positions: [usize; 2],
        ticket: ResetTicket,
    },
}

/// One game session: a dealt deck plus the flip state machine.
///
/// ## Example
///
/// ```
/// use pelmanism::cards::CardCatalog;
/// use pelmanism::core::SessionConfig;
/// use pelmanism::session::GameSession;
///
/// let session = GameSession::new(CardCatalog::demo(), SessionConfig::default(), 42).unwrap();
/// assert_eq!(session.state().deck_len(), 12);
/// ```
#[derive(Debug)]
pub struct GameSession {
    catalog: CardCatalog,
    config: SessionConfig,
    rng: GameRng,
    state: GameState,
    /// Bumped on every redeal; outstanding reset tickets reference the
    /// old value and become stale.
    round: u64,
    pending: Option<ResetTicket>,
}

impl GameSession {
    /// Deal a fresh round from the catalog.
    ///
    /// Fails with [`EngineError::InsufficientCards`] (or
    /// [`EngineError::InvalidPairCount`]) before any state is created.
    pub fn new(
        catalog: CardCatalog,
        config: SessionConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let rng = GameRng::new(seed);
        let state = Self::deal(&catalog, config.pair_count, &rng, 0)?;
        debug!(pair_count = config.pair_count, seed, "dealt opening round");

        Ok(Self {
            catalog,
            config,
            rng,
            state,
            round: 0,
            pending: None,
        })
    }

    /// Start a session over a prearranged deck.
    ///
    /// For deterministic replays and scripted tests. Positions are
    /// reassigned to layout order; the pair count is taken from the
    /// deck, overriding `config.pair_count`. The catalog and seed are
    /// still used if [`new_round`](Self::new_round) is called later.
    ///
    /// Fails with [`EngineError::MalformedDeck`] unless every identity
    /// appears exactly twice.
    pub fn from_deck(
        catalog: CardCatalog,
        deck: Vec<DeckEntry>,
        config: SessionConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let pair_count = validate_pairing(&deck)?;

        let deck: Vector<DeckEntry> = deck
            .into_iter()
            .enumerate()
            .map(|(position, entry)| DeckEntry::new(position, entry.card_id))
            .collect();

        Ok(Self {
            catalog,
            config: config.with_pair_count(pair_count),
            rng: GameRng::new(seed),
            state: GameState::new(deck, pair_count),
            round: 0,
            pending: None,
        })
    }

    /// Sample identities and shuffle them into a fresh state.
    ///
    /// Sampling and permutation draw from independent per-round context
    /// streams, so either can be reproduced in isolation.
    fn deal(
        catalog: &CardCatalog,
        pair_count: usize,
        rng: &GameRng,
        round: u64,
    ) -> Result<GameState, EngineError> {
        let mut sample_rng = rng.for_context(&format!("sample/{round}"));
        let mut shuffle_rng = rng.for_context(&format!("shuffle/{round}"));

        let unshuffled = build_deck(catalog, pair_count, &mut sample_rng)?;
        let deck: Vector<DeckEntry> = shuffle(&unshuffled, &mut shuffle_rng).into();

        Ok(GameState::new(deck, pair_count))
    }

    // === Observation ===

    /// Current state, borrowed.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cheap owned snapshot for an observing renderer.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The catalog this session deals from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The ticket of the mismatch reset currently awaiting its delay.
    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending
    }

    /// How long the host should wait before redeeming a mismatch ticket.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.config.mismatch_delay
    }

    /// Completed two-card turns so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        is_won(&self.state)
    }

    /// Current round generation.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    // === Transitions ===

    /// Process a flip event.
    ///
    /// Out-of-range positions are an error. In-range flips that the
    /// guard refuses (already face-up, already matched, reset pending,
    /// round won) are reported as [`FlipOutcome::Rejected`] and leave
    /// the state untouched.
    pub fn flip_card(&mut self, position: usize) -> Result<FlipOutcome, EngineError> {
        let entry = self
            .state
            .entry_at(position)
            .ok_or(EngineError::InvalidPosition {
                position,
                deck_len: self.state.deck_len(),
            })?;

        match self.state.phase() {
            Phase::Won => {
                trace!(position, "flip ignored: round already won");
                return Ok(FlipOutcome::Rejected(RejectReason::RoundWon));
            }
            Phase::Resolving => {
                trace!(position, "flip ignored: mismatch reset pending");
                return Ok(FlipOutcome::Rejected(RejectReason::ResetPending));
            }
            Phase::Idle | Phase::OnePicked => {}
        }

        if self.state.flipped().contains(&position) {
            trace!(position, "flip ignored: already face-up");
            return Ok(FlipOutcome::Rejected(RejectReason::AlreadyFaceUp));
        }
        if self.state.is_matched(entry.card_id) {
            trace!(position, card = %entry.card_id, "flip ignored: already matched");
            return Ok(FlipOutcome::Rejected(RejectReason::AlreadyMatched));
        }

        if self.state.flipped().is_empty() {
            self.state.begin_turn(position);
            debug!(position, "first card flipped");
            return Ok(FlipOutcome::FirstFlip { position });
        }

        // Second pick: the turn completes now, match or not.
        let first_position = self.state.flipped()[0];
        let first = self
            .state
            .entry_at(first_position)
            .expect("flipped position is in deck range");

        self.state.push_flip(position);
        let attempt = self.state.bump_attempts();
        let positions = [first_position, position];

        match evaluate(&first, &entry) {
            MatchOutcome::Match => {
                self.state.apply_match(entry.card_id, positions);
                let won = is_won(&self.state);
                if won {
                    self.state.set_phase(Phase::Won);
                    debug!(attempt, card = %entry.card_id, "final pair found, round won");
                } else {
                    debug!(attempt, card = %entry.card_id, "pair matched");
                }
                Ok(FlipOutcome::Matched {
                    card_id: entry.card_id,
                    won,
                })
            }
            MatchOutcome::Mismatch => {
                self.state.apply_mismatch(positions);
                let ticket = ResetTicket::new(self.round, attempt);
                self.pending = Some(ticket);
                debug!(
                    attempt,
                    first = first_position,
                    second = position,
                    "pair mismatched, reset scheduled"
                );
                Ok(FlipOutcome::Mismatched { positions, ticket })
            }
        }
    }

    /// Redeem a mismatch reset after its delay.
    ///
    /// Hides the mismatched pair and returns `true` iff `ticket` is the
    /// currently pending reset. Stale tickets -- superseded by
    /// [`new_round`](Self::new_round) or already redeemed -- are inert
    /// and return `false`.
    pub fn resolve_mismatch(&mut self, ticket: ResetTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            self.state.hide_flipped();
            debug!(attempt = ticket.attempt(), "mismatched pair hidden");
            true
        } else {
            trace!(?ticket, "stale reset ticket ignored");
            false
        }
    }

    /// Deal a fresh round, replacing all play state.
    ///
    /// Any outstanding reset ticket is invalidated: a timer scheduled
    /// for the old round can no longer mutate the new one. On error the
    /// session is left untouched.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        let state = Self::deal(&self.catalog, self.config.pair_count, &self.rng, self.round + 1)?;

        self.round += 1;
        self.pending = None;
        self.state = state;
        debug!(round = self.round, "dealt new round");

        Ok(())
    }
}

/// Check that a prearranged deck consists of exact pairs.
///
/// Returns the pair count.
fn validate_pairing(deck: &[DeckEntry]) -> Result<usize, EngineError> {
    if deck.is_empty() {
        return Err(EngineError::MalformedDeck {
            reason: "deck is empty".to_string(),
        });
    }
    if deck.len() % 2 != 0 {
        return Err(EngineError::MalformedDeck {
            reason: format!("deck length {} is odd", deck.len()),
        });
    }

    let mut counts: FxHashMap<CardId, usize> = FxHashMap::default();
    for entry in deck {
        *counts.entry(entry.card_id).or_insert(0) += 1;
    }
    if let Some((card_id, count)) = counts.iter().find(|&(_, &count)| count != 2) {
        return Err(EngineError::MalformedDeck {
            reason: format!("{} appears {} time(s), expected 2", card_id, count),
        });
    }

    Ok(deck.len() / 2)
}
