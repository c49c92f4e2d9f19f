//! The uniform stack-disciplined card container.
//!
//! Every zone in the game (stock, tableau columns, foundation piles) stores
//! its cards in a `Pile`: insertion and removal happen only at the top, and
//! the pile owns its cards exclusively. Moving a card between piles is an
//! ownership transfer by value, never a copy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// Inline capacity covering the stock after the deal (24 cards); larger
/// piles spill to the heap.
const INLINE_CARDS: usize = 24;

/// An ordered pile of cards with stack discipline.
///
/// Index 0 is the bottom; the last element is the top. The slice view
/// exposed by [`Pile::cards`] is read-only; mutation goes through
/// `push`/`pop` so the stack discipline cannot be bypassed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: SmallVec<[Card; INLINE_CARDS]>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the top card (used for reveal flips).
    pub fn peek_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards currently in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Read-only view of the whole pile, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
