//! Core value types: cards, shuffle RNG, and move records.
//!
//! These are the leaf building blocks the pile containers and the move
//! engine are assembled from.

pub mod card;
pub mod record;
pub mod rng;

pub use card::{Card, Color, Rank, Suit, CARDS_PER_DECK};
pub use record::{MoveKind, MoveRecord};
pub use rng::GameRng;
