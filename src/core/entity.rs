//! Card and pile identification.
//!
//! Every physical card in a deal has a unique `CardId`, and every pile on the
//! table has a unique `PileId`. Both are arena handles: a `CardId` indexes the
//! deck's card list, a `PileId` indexes the pile set.
//!
//! Two cards with the same rank and suit (multi-deck games) are still
//! distinct because their ids differ.
//!
//! ## Usage
//!
//! ```
//! use solitaire_engine::core::{CardId, PileId};
//!
//! let card = CardId::new(12);
//! assert_eq!(card.index(), 12);
//! assert_eq!(format!("{}", card), "Card(12)");
//!
//! let pile = PileId::new(3);
//! assert_eq!(pile.raw(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position of the card in the deck arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier for a pile in the pile set.
///
/// The pile set assigns meaning via `PileKind`; the id itself is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position of the pile in the pile arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// The role a pile plays on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Main play area where stacks are built.
    Tableau,
    /// Destination piles; the game is won when they hold every live card.
    Foundation,
    /// Auxiliary piles whose top card is playable.
    Reserve,
    /// The free cells, held as a single capacity-limited pile.
    Cells,
    /// Face-down draw pile.
    Stock,
    /// Face-up discard from the stock.
    Waste,
}

impl PileKind {
    /// Lowercase name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PileKind::Tableau => "tableau",
            PileKind::Foundation => "foundation",
            PileKind::Reserve => "reserve",
            PileKind::Cells => "free cell",
            PileKind::Stock => "stock",
            PileKind::Waste => "waste",
        }
    }
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
        assert_eq!(CardId(7).raw(), 7);
        assert_eq!(CardId(7).index(), 7);
    }

    #[test]
    fn test_pile_id_display() {
        assert_eq!(format!("{}", PileId::new(2)), "Pile(2)");
    }

    #[test]
    fn test_ordering() {
        assert!(CardId(1) < CardId(2));
        assert!(PileId(0) < PileId(10));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PileKind::Cells.to_string(), "free cell");
        assert_eq!(PileKind::Tableau.to_string(), "tableau");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(42);
        let json = serde_json::to_string(&id).unwrap();
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let kind = PileKind::Waste;
        let json = serde_json::to_string(&kind).unwrap();
        let back: PileKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
