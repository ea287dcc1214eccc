//! Core types: card and pile ids, cards, the deck, RNG, configuration, errors.
//!
//! These are variant-agnostic. Variants configure them through
//! `SolitaireConfig` rather than modifying the core.

pub mod entity;
pub mod card;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, PileId, PileKind};
pub use card::{Card, Color, Rank, Suit};
pub use deck::{CardQuery, Candidates, Deck, DeckSpec, LocationTag};
pub use rng::{DealRng, GameRng};
pub use config::{DealMode, FoundationRule, SolitaireConfig, TurnMode};
pub use error::{CardParseError, MoveError, SetupError};
