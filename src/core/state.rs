//! Game state: one value per round, replaced atomically on transition.
//!
//! ## GameState
//!
//! Everything an observer needs to draw the table:
//! - The shuffled deck (slot -> identity)
//! - Positions currently face-up and unresolved
//! - Identities permanently matched
//! - Attempt count and phase
//! - A record of every resolved turn
//!
//! Uses `im` persistent data structures so `snapshot()` clones are O(1)
//! and a rendering collaborator can hold onto old snapshots freely.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::deck::DeckEntry;
use crate::rules::MatchOutcome;

/// Where the flip state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No unresolved cards are face-up.
    Idle,
    /// One card is face-up, awaiting the second pick.
    OnePicked,
    /// Two mismatched cards are face-up, awaiting the reset delay.
    Resolving,
    /// Every pair has been found. Terminal.
    Won,
}

/// A resolved two-card turn.
///
/// One record per attempt, match or mismatch, in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number.
    pub attempt: u32,

    /// The two positions revealed this turn, in pick order.
    pub positions: [usize; 2],

    /// How the turn resolved.
    pub outcome: MatchOutcome,
}

/// Complete state of one round.
///
/// Mutated only by the owning [`GameSession`](crate::session::GameSession);
/// observers read accessors or take snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The shuffled deck. Fixed for the round.
    deck: Vector<DeckEntry>,

    /// Positions face-up and unresolved. Size 0, 1, or (while a
    /// mismatch reset is pending) 2.
    flipped: SmallVec<[usize; 2]>,

    /// Identities permanently resolved as matched.
    matched: ImHashSet<CardId>,

    /// Completed two-card turns, match or mismatch.
    attempts: u32,

    phase: Phase,
    pair_count: usize,

    /// Every resolved turn, in play order.
    history: Vector<AttemptRecord>,
}

impl GameState {
    /// Create the initial state for a freshly dealt round.
    pub(crate) fn new(deck: Vector<DeckEntry>, pair_count: usize) -> Self {
        debug_assert_eq!(deck.len(), 2 * pair_count);
        Self {
            deck,
            flipped: SmallVec::new(),
            matched: ImHashSet::new(),
            attempts: 0,
            phase: Phase::Idle,
            pair_count,
            history: Vector::new(),
        }
    }

    // === Observation ===

    /// The deck, in position order.
    #[must_use]
    pub fn entries(&self) -> &Vector<DeckEntry> {
        &self.deck
    }

    /// The entry at a position, if in range.
    #[must_use]
    pub fn entry_at(&self, position: usize) -> Option<DeckEntry> {
        self.deck.get(position).copied()
    }

    /// Number of slots in the deck (`2 * pair_count`).
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Number of distinct identities in play.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Positions currently face-up and unresolved, in pick order.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Whether the renderer should draw this slot face-up: either part
    /// of the unresolved selection or permanently matched.
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        if self.flipped.contains(&position) {
            return true;
        }
        self.entry_at(position)
            .is_some_and(|entry| self.matched.contains(&entry.card_id))
    }

    /// Whether an identity has been permanently matched.
    #[must_use]
    pub fn is_matched(&self, card_id: CardId) -> bool {
        self.matched.contains(&card_id)
    }

    /// Number of identities matched so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Iterate over matched identities (unordered).
    pub fn matched(&self) -> impl Iterator<Item = CardId> + '_ {
        self.matched.iter().copied()
    }

    /// Completed two-card turns so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Current phase of the flip state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every resolved turn, in play order.
    #[must_use]
    pub fn history(&self) -> &Vector<AttemptRecord> {
        &self.history
    }

    // === Transitions (session-only) ===

    /// First pick of a turn.
    pub(crate) fn begin_turn(&mut self, position: usize) {
        self.flipped.push(position);
        self.phase = Phase::OnePicked;
    }

    /// Second pick of a turn; the selection transiently holds two.
    pub(crate) fn push_flip(&mut self, position: usize) {
        self.flipped.push(position);
    }

    /// Count a completed turn. Returns the new attempt number.
    pub(crate) fn bump_attempts(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    /// Resolve the turn as a match: the identity stays revealed and the
    /// selection clears immediately.
    pub(crate) fn apply_match(&mut self, card_id: CardId, positions: [usize; 2]) {
        self.matched.insert(card_id);
        self.flipped.clear();
        self.history.push_back(AttemptRecord {
            attempt: self.attempts,
            positions,
            outcome: MatchOutcome::Match,
        });
        self.phase = Phase::Idle;
    }

    /// Resolve the turn as a mismatch: both cards stay face-up for the
    /// renderer until the reset delay elapses.
    pub(crate) fn apply_mismatch(&mut self, positions: [usize; 2]) {
        self.history.push_back(AttemptRecord {
            attempt: self.attempts,
            positions,
            outcome: MatchOutcome::Mismatch,
        });
        self.phase = Phase::Resolving;
    }

    /// The delayed hide after a mismatch.
    pub(crate) fn hide_flipped(&mut self) {
        self.flipped.clear();
        self.phase = Phase::Idle;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
