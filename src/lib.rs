//! # solitaire-engine
//!
//! A generalized, rule-checker-driven solitaire engine.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: No game is hardcoded. Klondike, FreeCell, Spider
//!    and the rest are configs that compose checkers and dealers.
//!
//! 2. **Checkers Over Code**: Legality is an ordered list of small
//!    predicates per move type. The first failing checker supplies the
//!    message the player sees.
//!
//! 3. **All or Nothing**: A move validates completely before any card moves.
//!    A rejected move changes nothing.
//!
//! ## Architecture
//!
//! - **Arena Piles**: Cards are ids into the deck; piles are ids into a pile
//!   arena, and each card keeps a back-reference to its pile.
//!
//! - **Persistent History**: Move records live in an `im::Vector`, so cloning
//!   a game is cheap. Alternates use clones as snapshots.
//!
//! - **Reproducible Deals**: Seeded ChaCha shuffles, or the classic numbered
//!   deals for FreeCell.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, ids, RNG, configuration, errors
//! - `piles`: The pile arena
//! - `rules`: Checker families and the `RuleSet`
//! - `dealers`: The setup pipeline
//! - `engine`: Game state and the move operations
//! - `games`: Presets for the classic variants
//!
//! ## Example
//!
//! ```
//! use solitaire_engine::{games, Solitaire};
//!
//! let mut game = Solitaire::new(games::freecell_numbered(1)).unwrap();
//! assert_eq!(game.cells().len(), 0);
//!
//! // The Jack of Diamonds is buried at the bottom of the first pile.
//! let err = game.free_text("JD").unwrap_err();
//! assert_eq!(err.to_string(), "The Jack of Diamonds is not available to be freed.");
//! ```

pub mod core;
pub mod piles;
pub mod rules;
pub mod dealers;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, PileId, PileKind,
    Card, Color, Rank, Suit,
    Deck, DeckSpec, GameRng,
    DealMode, FoundationRule, SolitaireConfig, TurnMode,
    CardParseError, MoveError, SetupError,
};

pub use crate::piles::PileSet;

pub use crate::rules::{
    BuildChecker, CheckResult, FreeChecker, LaneChecker, MatchChecker, PairChecker,
    RuleSet, SortChecker,
};

pub use crate::dealers::Dealer;

pub use crate::engine::{GameOutcome, GameStatus, Layout, MoveRecord, PendingMove, Solitaire};
