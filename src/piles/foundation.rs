//! The four foundation piles, one per suit.
//!
//! A foundation pile is always rank-contiguous from the Ace up: acceptance
//! is gated on the card being the Ace of its suit (empty pile) or exactly
//! one rank above the current top. This is deliberately a different policy
//! from the tableau comparison rule.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit, CARDS_PER_DECK};

use super::pile::Pile;

/// Number of foundation piles.
pub const PILE_COUNT: usize = 4;

/// The suit-sorted completion piles. A game is won when all 52 cards have
/// arrived here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    piles: [Pile; PILE_COUNT],
}

impl Foundation {
    /// Create four empty foundation piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild foundations from explicit piles (layout construction).
    pub(crate) fn from_piles(piles: [Pile; PILE_COUNT]) -> Self {
        Self { piles }
    }

    /// The top card of the pile for `suit`, or `None` if no card of that
    /// suit has been played up yet.
    #[must_use]
    pub fn top_of(&self, suit: Suit) -> Option<&Card> {
        self.piles[suit.index()].peek()
    }

    /// True only when all four suit piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.iter().all(Pile::is_empty)
    }

    /// Would `accept` take this card right now? Non-mutating form of the
    /// acceptance rule, for callers probing legality without moving.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        match self.top_of(card.suit()) {
            None => card.rank() == Rank::Ace,
            Some(top) => card.rank().value() == top.rank().value() + 1,
        }
    }

    /// Accept a card onto the pile of its own suit if it continues the
    /// Ace-contiguous sequence. Returns whether the card was taken; on
    /// rejection the caller still owns the card and no pile changed.
    pub fn accept(&mut self, card: Card) -> bool {
        if !self.can_accept(card) {
            return false;
        }
        self.piles[card.suit().index()].push(card);
        true
    }

    /// Remove the top card of the pile for `suit` (undo compensation).
    pub fn remove_top(&mut self, suit: Suit) -> Option<Card> {
        self.piles[suit.index()].pop()
    }

    /// Total cards across all four piles; 52 exactly at a won game.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// True iff every card has reached the foundations.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_count() == CARDS_PER_DECK
    }

    /// Read-only view of the pile for `suit`, bottom to top.
    #[must_use]
    pub fn pile(&self, suit: Suit) -> &[Card] {
        self.piles[suit.index()].cards()
    }
}
