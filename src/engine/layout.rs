//! Explicit table layouts.
//!
//! A `Layout` places named cards on named piles instead of running the
//! dealer pipeline. It is how tests and puzzles set up exact positions.
//!
//! ```
//! use solitaire_engine::core::SolitaireConfig;
//! use solitaire_engine::engine::{Layout, Solitaire};
//!
//! let layout = Layout::new()
//!     .tableau(0, &["#KS", "QH"])
//!     .tableau(1, &["JC"])
//!     .foundation(0, &["AC"]);
//! let game = Solitaire::from_layout(SolitaireConfig::new("Puzzle"), &layout).unwrap();
//!
//! assert_eq!(game.tableau(0).len(), 2);
//! assert!(!game.is_face_up(game.tableau(0)[0]));
//! // Cards the layout does not name are out of play.
//! assert_eq!(game.deck().live_count(), 4);
//! ```

use super::game::Solitaire;
use crate::core::{Deck, PileId, SetupError, SolitaireConfig};

/// A pile named by kind and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Tableau(usize),
    Foundation(usize),
    Reserve(usize),
    Cells,
    Stock,
    Waste,
}

/// Cards to place, pile by pile. Tokens are card names such as `"7H"`; a
/// leading `#` places the card face down.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    entries: Vec<(Slot, Vec<String>)>,
    rest_to_stock: bool,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards for tableau pile `index`, bottom first.
    #[must_use]
    pub fn tableau(self, index: usize, cards: &[&str]) -> Self {
        self.with(Slot::Tableau(index), cards)
    }

    #[must_use]
    pub fn foundation(self, index: usize, cards: &[&str]) -> Self {
        self.with(Slot::Foundation(index), cards)
    }

    #[must_use]
    pub fn reserve(self, index: usize, cards: &[&str]) -> Self {
        self.with(Slot::Reserve(index), cards)
    }

    #[must_use]
    pub fn cells(self, cards: &[&str]) -> Self {
        self.with(Slot::Cells, cards)
    }

    /// Stock cards, bottom first. Stock cards are always face down.
    #[must_use]
    pub fn stock(self, cards: &[&str]) -> Self {
        self.with(Slot::Stock, cards)
    }

    #[must_use]
    pub fn waste(self, cards: &[&str]) -> Self {
        self.with(Slot::Waste, cards)
    }

    /// Put every card the layout does not name into the stock instead of
    /// taking it out of play.
    #[must_use]
    pub fn rest_to_stock(mut self) -> Self {
        self.rest_to_stock = true;
        self
    }

    fn with(mut self, slot: Slot, cards: &[&str]) -> Self {
        self.entries
            .push((slot, cards.iter().map(|card| (*card).to_string()).collect()));
        self
    }
}

impl Solitaire {
    /// Set up a game from an explicit layout. The config's dealers and deal
    /// mode are ignored.
    pub fn from_layout(config: SolitaireConfig, layout: &Layout) -> Result<Self, SetupError> {
        let mut game = Self::empty(config)?;

        for (slot, tokens) in &layout.entries {
            let pile = game.slot_pile(*slot)?;
            for token in tokens {
                let (text, down) = match token.strip_prefix('#') {
                    Some(text) => (text, true),
                    None => (token.as_str(), false),
                };
                let query = Deck::parse(text)?;
                let card = game
                    .deck
                    .matching(query.rank, query.suit)
                    .into_iter()
                    .find(|card| game.deck.undealt().contains(card))
                    .ok_or_else(|| SetupError::MissingCard(text.to_string()))?;
                let up = !down && *slot != Slot::Stock;
                game.place_card(card, pile, up);
            }
        }

        let stock = game.piles.stock();
        let rest: Vec<_> = game.deck.undealt().to_vec();
        for card in rest {
            if layout.rest_to_stock {
                game.place_card(card, stock, false);
            } else {
                game.discard_card(card);
            }
        }

        game.start();
        Ok(game)
    }

    fn slot_pile(&self, slot: Slot) -> Result<PileId, SetupError> {
        let piles = &self.piles;
        let found = match slot {
            Slot::Tableau(index) => piles.tableau().get(index).copied(),
            Slot::Foundation(index) => piles.foundations().get(index).copied(),
            Slot::Reserve(index) => piles.reserve().get(index).copied(),
            Slot::Cells => Some(piles.cells()),
            Slot::Stock => Some(piles.stock()),
            Slot::Waste => Some(piles.waste()),
        };
        found.ok_or_else(|| SetupError::InvalidConfig(format!("layout names missing pile {:?}", slot)))
    }
}
