//! The move engine.
//!
//! [`Solitaire`] owns the deck, the piles and the move history of one game.
//! Every move follows the same path: baseline checks, then the variant's
//! checker list, then `transfer`, which records the move for undo.
//!
//! ## Key Components
//!
//! - [`Solitaire`]: game state, setup and read access
//! - move operations: build, free, lane, sort, match, turn, undo
//! - [`PendingMove`]: a checked move, kept for [`Solitaire::alternate`]
//! - [`MoveRecord`]: one entry of the undo history
//! - [`Layout`]: explicit positions for puzzles and tests

mod checks;
mod game;
mod history;
mod layout;
mod moves;
mod turn;

pub use game::{Chooser, GameOutcome, GameStatus, Solitaire};
pub use history::MoveRecord;
pub use layout::Layout;
pub use moves::PendingMove;
