//! The stock: all 52 cards, shuffled face-down.
//!
//! The deck starts from the canonical suit-by-suit, Ace-through-King order,
//! then applies a uniformly random permutation. The top of the pile is the
//! last element of the shuffled sequence; only relative order matters.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit, CARDS_PER_DECK};
use crate::core::rng::GameRng;

use super::pile::Pile;

/// The draw pile. Shrinks as cards are dealt; regains cards only through
/// undo compensation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pile: Pile,
}

impl Deck {
    /// Build a full face-down deck and shuffle it with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        rng.shuffle(&mut cards);

        Self {
            pile: cards.into_iter().collect(),
        }
    }

    /// Rebuild a stock from explicit cards, bottom to top (layout
    /// construction).
    pub(crate) fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            pile: cards.into_iter().collect(),
        }
    }

    /// Remove and return the top card, or `None` once exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    /// Return a card to the top of the stock (undo compensation).
    pub fn put_back(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// Number of cards left in the stock.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Read-only view of the stock, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_deck_is_complete() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.remaining(), CARDS_PER_DECK);

        let pairs: HashSet<(Suit, Rank)> =
            deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
        assert_eq!(pairs.len(), CARDS_PER_DECK);
    }

    #[test]
    fn test_shuffled_deck_is_face_down() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);
        assert!(deck.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let mut deck_a = Deck::shuffled(&mut GameRng::new(9));
        let mut deck_b = Deck::shuffled(&mut GameRng::new(9));

        for _ in 0..CARDS_PER_DECK {
            assert_eq!(deck_a.deal(), deck_b.deal());
        }
        assert_eq!(deck_a.deal(), None);
    }

    #[test]
    fn test_put_back_restores_top() {
        let mut deck = Deck::shuffled(&mut GameRng::new(3));
        let card = deck.deal().unwrap();
        let remaining = deck.remaining();

        deck.put_back(card);
        assert_eq!(deck.remaining(), remaining + 1);
        assert_eq!(deck.deal(), Some(card));
    }
}
