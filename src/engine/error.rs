//! Error taxonomy for move requests.
//!
//! Every condition here is recoverable by the player: the engine reports a
//! structured error and leaves the game state exactly as it was. Nothing in
//! this module aborts the process.

use thiserror::Error;

/// Result alias used by all command operations.
pub type MoveResult = Result<(), MoveError>;

/// Why a move request was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No card is available at the attempted origin.
    #[error("nothing to move: {0}")]
    EmptySource(&'static str),

    /// A placement rule rejected the move.
    #[error("illegal placement: {0}")]
    IllegalPlacement(&'static str),

    /// A tableau column index outside `0..7`.
    #[error("invalid column index {0}")]
    InvalidIndex(usize),

    /// Undo was requested with an empty move log.
    #[error("no moves to undo")]
    NothingToUndo,
}

pub(crate) const REASON_STOCK_EMPTY: &str = "no cards left in the stock";
pub(crate) const REASON_WASTE_EMPTY: &str = "no card in the waste slot";
pub(crate) const REASON_COLUMN_EMPTY: &str = "no card in that tableau column";
pub(crate) const REASON_WASTE_OCCUPIED: &str = "the waste slot already holds a card";
pub(crate) const REASON_NOT_STACKABLE: &str = "card must be opposite in color and lower in rank";
pub(crate) const REASON_FOUNDATION_ORDER: &str =
    "card must start its suit's foundation with an Ace or continue it in rank order";
pub(crate) const REASON_SAME_COLUMN: &str = "a card cannot move onto its own column";

/// Why an explicit layout was rejected by [`Game::from_layout`].
///
/// [`Game::from_layout`]: crate::engine::Game::from_layout
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The 52-card set check failed: some canonical card appears zero or
    /// multiple times across the piles.
    #[error("layout does not contain each of the 52 cards exactly once")]
    NotAFullDeck,

    /// A foundation pile is not Ace-contiguous for its suit.
    #[error("foundation pile for {0} is not rank-contiguous from the Ace")]
    BrokenFoundation(crate::core::Suit),

    /// A tableau column has a face-up card buried under a face-down one.
    #[error("tableau column {0} has a face-up card under a face-down card")]
    BuriedFaceUp(usize),
}
