//! The seven tableau columns.
//!
//! Columns are dealt in the standard triangular layout and keep the
//! reveal-on-removal behavior: whenever the top card of a column is
//! removed, the newly exposed card (if any) is flipped face-up. Within a
//! column, face-down cards sit strictly below face-up ones, and a
//! non-empty column always shows its top face-up.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;

use super::deck::Deck;
use super::pile::Pile;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// Number of cards consumed from the deck by the initial deal.
pub const DEAL_SIZE: usize = 28;

/// The seven main playing columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    columns: [Pile; COLUMN_COUNT],
}

impl Tableau {
    /// Deal the triangular layout from the deck: column `i` receives `i + 1`
    /// cards, all face-down except the last, consuming exactly 28 cards.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than 28 cards. A freshly shuffled
    /// deck always satisfies this.
    #[must_use]
    pub fn deal_from(deck: &mut Deck) -> Self {
        let mut columns: [Pile; COLUMN_COUNT] = Default::default();
        for (i, column) in columns.iter_mut().enumerate() {
            for j in 0..=i {
                let mut card = deck
                    .deal()
                    .expect("deck holds at least 28 cards for the deal");
                if j == i {
                    card.flip_up();
                }
                column.push(card);
            }
        }
        Self { columns }
    }

    /// Rebuild a tableau from explicit columns (layout construction).
    pub(crate) fn from_columns(columns: [Pile; COLUMN_COUNT]) -> Self {
        Self { columns }
    }

    /// The top card of a column without removing it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`. The engine validates indices before calling.
    #[must_use]
    pub fn top_of(&self, index: usize) -> Option<&Card> {
        self.columns[index].peek()
    }

    /// Remove the top card of a column. If cards remain afterwards, the new
    /// top is flipped face-up (idempotent if it already was).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`.
    pub fn remove_top(&mut self, index: usize) -> Option<Card> {
        let card = self.columns[index].pop()?;
        if let Some(next) = self.columns[index].peek_mut() {
            next.flip_up();
        }
        Some(card)
    }

    /// Push a card onto a column. The card keeps its current orientation;
    /// no card beneath it changes state.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`.
    pub fn push_card(&mut self, index: usize, card: Card) {
        self.columns[index].push(card);
    }

    /// Would removing the top of this column flip a face-down card face-up?
    ///
    /// Used by the engine to record reveals so undo can reverse them.
    #[must_use]
    pub fn would_reveal(&self, index: usize) -> bool {
        let cards = self.columns[index].cards();
        cards.len() >= 2 && !cards[cards.len() - 2].is_face_up()
    }

    /// Turn the top card of a column face-down. Undo compensation only:
    /// this is the single path that reverses a reveal flip.
    pub fn conceal_top(&mut self, index: usize) {
        if let Some(top) = self.columns[index].peek_mut() {
            top.flip_down();
        }
    }

    /// Read-only view of one column, bottom to top.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`.
    #[must_use]
    pub fn column(&self, index: usize) -> &[Card] {
        self.columns[index].cards()
    }

    /// Total number of cards across all columns.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.columns.iter().map(Pile::len).sum()
    }
}
