//! Pile containers: the uniform stack plus the three specialized zones
//! built on it (stock, tableau columns, foundation piles).

pub mod deck;
pub mod foundation;
pub mod pile;
pub mod tableau;

pub use deck::Deck;
pub use foundation::Foundation;
pub use pile::Pile;
pub use tableau::{Tableau, COLUMN_COUNT};
