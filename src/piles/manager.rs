//! Pile set: card locations, pile contents, and face-up state.
//!
//! The `PileSet` is an arena of ordered piles addressed by `PileId`. It keeps
//! a back reference from every placed card to its pile, so "where is this
//! card" is a map lookup rather than a scan of the table.
//!
//! Index 0 of a pile is the bottom card; the last index is the top.
//!
//! ## Usage
//!
//! ```
//! use solitaire_engine::core::{CardId, PileKind};
//! use solitaire_engine::piles::PileSet;
//!
//! let mut piles = PileSet::new(7, 4, 0, 0);
//! let first = piles.tableau()[0];
//!
//! piles.push(first, CardId(10), false);
//! piles.push(first, CardId(11), true);
//!
//! assert_eq!(piles.top(first), Some(CardId(11)));
//! assert_eq!(piles.location(CardId(10)), Some(first));
//! assert_eq!(piles.kind(first), PileKind::Tableau);
//! assert!(!piles.is_face_up(CardId(10)));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::entity::{CardId, PileId, PileKind};

/// Every pile on the table plus card location tracking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileSet {
    piles: Vec<Vec<CardId>>,

    /// Kind of each pile and its position among piles of that kind.
    kinds: Vec<(PileKind, usize)>,

    tableau: Vec<PileId>,
    foundations: Vec<PileId>,
    reserve: Vec<PileId>,
    cells: PileId,
    stock: PileId,
    waste: PileId,
    cell_capacity: usize,

    /// Card locations: card -> pile.
    locations: FxHashMap<CardId, PileId>,

    face_up: FxHashSet<CardId>,
}

impl PileSet {
    /// Create the piles for a table layout. Cells, stock and waste always
    /// exist, even when a variant never uses them.
    #[must_use]
    pub fn new(
        num_tableau: usize,
        num_foundations: usize,
        num_reserve: usize,
        cell_capacity: usize,
    ) -> Self {
        let mut set = Self {
            piles: Vec::new(),
            kinds: Vec::new(),
            tableau: Vec::new(),
            foundations: Vec::new(),
            reserve: Vec::new(),
            cells: PileId(0),
            stock: PileId(0),
            waste: PileId(0),
            cell_capacity,
            locations: FxHashMap::default(),
            face_up: FxHashSet::default(),
        };

        let tableau: Vec<PileId> = (0..num_tableau)
            .map(|i| set.add_pile(PileKind::Tableau, i))
            .collect();
        let foundations: Vec<PileId> = (0..num_foundations)
            .map(|i| set.add_pile(PileKind::Foundation, i))
            .collect();
        let reserve: Vec<PileId> = (0..num_reserve)
            .map(|i| set.add_pile(PileKind::Reserve, i))
            .collect();
        set.tableau = tableau;
        set.foundations = foundations;
        set.reserve = reserve;
        set.cells = set.add_pile(PileKind::Cells, 0);
        set.stock = set.add_pile(PileKind::Stock, 0);
        set.waste = set.add_pile(PileKind::Waste, 0);
        set
    }

    fn add_pile(&mut self, kind: PileKind, position: usize) -> PileId {
        let id = PileId(self.piles.len() as u16);
        self.piles.push(Vec::new());
        self.kinds.push((kind, position));
        id
    }

    // === Layout ===

    #[must_use]
    pub fn tableau(&self) -> &[PileId] {
        &self.tableau
    }

    #[must_use]
    pub fn foundations(&self) -> &[PileId] {
        &self.foundations
    }

    #[must_use]
    pub fn reserve(&self) -> &[PileId] {
        &self.reserve
    }

    #[must_use]
    pub fn cells(&self) -> PileId {
        self.cells
    }

    #[must_use]
    pub fn stock(&self) -> PileId {
        self.stock
    }

    #[must_use]
    pub fn waste(&self) -> PileId {
        self.waste
    }

    #[must_use]
    pub fn cell_capacity(&self) -> usize {
        self.cell_capacity
    }

    /// Number of empty free cells.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.cell_capacity.saturating_sub(self.len(self.cells))
    }

    /// All pile ids, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = PileId> {
        (0..self.piles.len() as u16).map(PileId)
    }

    #[must_use]
    pub fn kind(&self, pile: PileId) -> PileKind {
        self.kinds[pile.index()].0
    }

    /// Position of a pile among piles of its kind (tableau pile 0, 1, ...).
    #[must_use]
    pub fn position(&self, pile: PileId) -> usize {
        self.kinds[pile.index()].1
    }

    // === Contents ===

    /// Cards in a pile, bottom to top.
    #[must_use]
    pub fn cards(&self, pile: PileId) -> &[CardId] {
        &self.piles[pile.index()]
    }

    #[must_use]
    pub fn len(&self, pile: PileId) -> usize {
        self.piles[pile.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self, pile: PileId) -> bool {
        self.piles[pile.index()].is_empty()
    }

    #[must_use]
    pub fn top(&self, pile: PileId) -> Option<CardId> {
        self.piles[pile.index()].last().copied()
    }

    /// Empty tableau piles, left to right.
    pub fn empty_tableau(&self) -> impl Iterator<Item = PileId> + '_ {
        self.tableau.iter().copied().filter(move |&p| self.is_empty(p))
    }

    /// Total cards on the foundations.
    #[must_use]
    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(|&p| self.len(p)).sum()
    }

    /// Total cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    // === Cards ===

    /// Pile holding a card, or `None` if the card is not on the table.
    #[must_use]
    pub fn location(&self, card: CardId) -> Option<PileId> {
        self.locations.get(&card).copied()
    }

    /// Index of a card within its pile.
    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        let pile = self.location(card)?;
        self.cards(pile).iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn is_top(&self, card: CardId) -> bool {
        self.location(card)
            .map_or(false, |pile| self.top(pile) == Some(card))
    }

    #[must_use]
    pub fn is_face_up(&self, card: CardId) -> bool {
        self.face_up.contains(&card)
    }

    pub fn set_face_up(&mut self, card: CardId, up: bool) {
        if up {
            self.face_up.insert(card);
        } else {
            self.face_up.remove(&card);
        }
    }

    // === Movement ===

    /// Place a card that is not yet on the table on top of a pile.
    ///
    /// Panics if the card is already on the table.
    pub fn push(&mut self, pile: PileId, card: CardId, up: bool) {
        if self.locations.contains_key(&card) {
            panic!("{} is already on the table", card);
        }
        self.locations.insert(card, pile);
        self.piles[pile.index()].push(card);
        self.set_face_up(card, up);
    }

    /// Place cards on top of a pile, in order, all with the same facing.
    pub fn extend(&mut self, pile: PileId, cards: &[CardId], up: bool) {
        for &card in cards {
            self.push(pile, card, up);
        }
    }

    /// Put cards back at a given index of a pile, restoring each facing.
    pub fn insert_at(&mut self, pile: PileId, index: usize, cards: &[CardId], faces: &[bool]) {
        let index = index.min(self.len(pile));
        for (offset, &card) in cards.iter().enumerate() {
            if self.locations.contains_key(&card) {
                panic!("{} is already on the table", card);
            }
            self.locations.insert(card, pile);
            self.piles[pile.index()].insert(index + offset, card);
            self.set_face_up(card, faces.get(offset).copied().unwrap_or(true));
        }
    }

    /// Remove `count` cards starting at `start` and return them, bottom first.
    ///
    /// Removed cards are off the table until placed again.
    pub fn remove_range(&mut self, pile: PileId, start: usize, count: usize) -> Vec<CardId> {
        let cards = &mut self.piles[pile.index()];
        let end = (start + count).min(cards.len());
        let removed: Vec<CardId> = cards.drain(start.min(end)..end).collect();
        for card in &removed {
            self.locations.remove(card);
        }
        removed
    }

    /// Remove a single card from wherever it is.
    pub fn remove(&mut self, card: CardId) -> Option<PileId> {
        let pile = self.location(card)?;
        let index = self.index_of(card)?;
        self.remove_range(pile, index, 1);
        Some(pile)
    }

    /// Reverse the order of a pile in place.
    pub fn reverse(&mut self, pile: PileId) {
        self.piles[pile.index()].reverse();
    }
}
