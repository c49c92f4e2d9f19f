//! Read-only snapshots of the game for display.
//!
//! The CLI (or any other front end) renders from a `GameView`; it never
//! touches the piles directly. A view is a plain value: cloning or holding
//! it has no effect on the game.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Suit};
use crate::piles::tableau::COLUMN_COUNT;

use super::game::{Game, GameStatus};

/// A full snapshot of every pile, bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cards left in the stock (face-down draw pile), bottom to top.
    pub stock: Vec<Card>,
    /// The waste slot, if occupied.
    pub waste: Option<Card>,
    /// The seven tableau columns, bottom to top.
    pub columns: Vec<Vec<Card>>,
    /// The four foundation piles in [`Suit::ALL`] order, bottom to top.
    pub foundations: Vec<Vec<Card>>,
    /// Terminal-state signal at the time of the snapshot.
    pub status: GameStatus,
}

impl GameView {
    pub(crate) fn of(game: &Game) -> Self {
        Self {
            stock: game.stock_cards().to_vec(),
            waste: game.waste().copied(),
            columns: (0..COLUMN_COUNT)
                .map(|i| game.column_cards(i).to_vec())
                .collect(),
            foundations: Suit::ALL
                .into_iter()
                .map(|suit| game.foundation_pile(suit).to_vec())
                .collect(),
            status: game.status(),
        }
    }

    /// Total cards across all piles in the snapshot; always 52 for a view
    /// taken from a live game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + usize::from(self.waste.is_some())
            + self.columns.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
    }
}
