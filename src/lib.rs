//! # klondike-engine
//!
//! A Klondike-style solitaire game-state engine: pile data model,
//! move-legality rules, card-ownership transfer between piles, undo, and
//! win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine, not interface**: the engine performs no I/O. Front ends
//!    issue commands and render from read-only [`GameView`] snapshots.
//!
//! 2. **Ownership transfer, never copies**: a card lives in exactly one
//!    pile; moves transfer it by value through the engine.
//!
//! 3. **Atomic commands**: every move either completes (state mutated,
//!    undo record logged) or is rejected with a structured [`MoveError`]
//!    and no state change at all.
//!
//! 4. **Deterministic deals**: same seed, same game, via a seeded ChaCha8
//!    shuffle.
//!
//! ## House rules
//!
//! Tableau placements use a non-traditional comparison rule: a card may
//! rest on another iff the colors differ and its rank is strictly lower
//! (not exactly one lower). Foundations use the usual Ace-contiguous rule.
//!
//! ## Modules
//!
//! - `core`: cards, the shuffle RNG, and move records
//! - `piles`: the stack container and the stock/tableau/foundation zones
//! - `engine`: the move engine, error taxonomy, and display snapshots

pub mod core;
pub mod engine;
pub mod piles;

// Re-export commonly used types
pub use crate::core::{Card, Color, GameRng, MoveKind, MoveRecord, Rank, Suit, CARDS_PER_DECK};

pub use crate::piles::{Deck, Foundation, Pile, Tableau, COLUMN_COUNT};

pub use crate::engine::{Game, GameStatus, GameView, Layout, LayoutError, MoveError, MoveResult};
