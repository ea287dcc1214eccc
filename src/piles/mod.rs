//! Pile system for card locations.
//!
//! Piles are **layout-configured**: the number of tableau, foundation and
//! reserve piles comes from `SolitaireConfig`.
//!
//! ## Key Types
//!
//! - `PileId`: Opaque pile identifier (from `core::entity`)
//! - `PileKind`: The role of a pile (tableau, foundation, ...)
//! - `PileSet`: Card location tracking and movement

pub mod manager;

pub use manager::PileSet;

pub use crate::core::entity::{PileId, PileKind};
