//! The move engine: command operations, error taxonomy, and display
//! snapshots.

pub mod error;
pub mod game;
pub mod view;

pub use error::{LayoutError, MoveError, MoveResult};
pub use game::{Game, GameStatus, Layout};
pub use view::GameView;
