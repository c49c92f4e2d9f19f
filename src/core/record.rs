//! Move records: the reversible-action log consumed by undo.
//!
//! Every successful command pushes one record; one undo request pops and
//! compensates exactly one record. Records carry the true source and
//! destination indices plus whether the move revealed a face-down tableau
//! card, so the compensating transfer is exact (see DESIGN.md on the undo
//! fidelity decision).

use serde::{Deserialize, Serialize};

use super::card::Card;

/// The kind of a recorded move, for reporting and dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    StockToWaste,
    WasteToFoundation,
    WasteToTableau,
    TableauToFoundation,
    TableauToTableau,
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveKind::StockToWaste => "Stock to Waste",
            MoveKind::WasteToFoundation => "Waste to Foundation",
            MoveKind::WasteToTableau => "Waste to Tableau",
            MoveKind::TableauToFoundation => "Tableau to Foundation",
            MoveKind::TableauToTableau => "Tableau to Tableau",
        };
        write!(f, "{name}")
    }
}

/// One reversible action.
///
/// `revealed` marks that removing the card from its source column flipped
/// the newly exposed card face-up; undo turns that card back face-down so
/// the column's face states are restored exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    StockToWaste { card: Card },
    WasteToFoundation { card: Card },
    WasteToTableau { card: Card, column: usize },
    TableauToFoundation { card: Card, column: usize, revealed: bool },
    TableauToTableau { card: Card, from: usize, to: usize, revealed: bool },
}

impl MoveRecord {
    /// The kind of move this record captures.
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self {
            MoveRecord::StockToWaste { .. } => MoveKind::StockToWaste,
            MoveRecord::WasteToFoundation { .. } => MoveKind::WasteToFoundation,
            MoveRecord::WasteToTableau { .. } => MoveKind::WasteToTableau,
            MoveRecord::TableauToFoundation { .. } => MoveKind::TableauToFoundation,
            MoveRecord::TableauToTableau { .. } => MoveKind::TableauToTableau,
        }
    }

    /// The card that moved.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            MoveRecord::StockToWaste { card }
            | MoveRecord::WasteToFoundation { card }
            | MoveRecord::WasteToTableau { card, .. }
            | MoveRecord::TableauToFoundation { card, .. }
            | MoveRecord::TableauToTableau { card, .. } => card,
        }
    }
}
