//! The game: configuration, deck, piles, history and counters.
//!
//! ## Lifecycle
//!
//! `Dealing → Playing → (Won | Abandoned)`. [`Solitaire::new`] shuffles the
//! deck, runs the dealer pipeline, checks that every card landed somewhere
//! and starts play. Moves are only accepted while `Playing`.
//!
//! ## Cloning
//!
//! The history is an `im::Vector`, so cloning a game shares the move records.
//! Alternates and layouts use clones as cheap snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::history::MoveRecord;
use super::moves::PendingMove;
use crate::core::{
    Candidates, Card, CardId, DealMode, Deck, FoundationRule, GameRng, LocationTag, MoveError,
    PileId, PileKind, Rank, SetupError, SolitaireConfig,
};
use crate::piles::PileSet;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Dealing,
    Playing,
    Won,
    Abandoned,
}

impl GameStatus {
    /// Won or abandoned.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Abandoned)
    }
}

/// End-of-game summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub moves: u32,
    pub undos: u32,
    pub score: i64,
}

/// Picks one of the offered cards during a selective deal. Returns an index
/// into the slice.
pub type Chooser<'a> = dyn FnMut(&[Card]) -> usize + 'a;

/// A game of solitaire.
#[derive(Clone, Debug)]
pub struct Solitaire {
    pub(crate) config: SolitaireConfig,
    pub(crate) deck: Deck,
    pub(crate) piles: PileSet,

    /// Stream used by the random dealers.
    pub(crate) rng: GameRng,

    pub(crate) history: Vector<MoveRecord>,

    /// Untried legal moves for the last ambiguous command.
    pub(crate) alternatives: Vec<PendingMove>,

    pub(crate) status: GameStatus,

    // === Counters ===
    pub(crate) stock_passes: u32,
    pub(crate) move_count: u32,
    pub(crate) undo_count: u32,
    /// Consecutive moves that ended on a foundation.
    pub(crate) last_sort: u32,

    pub(crate) foundation_rank: Rank,

    /// Reserve piles at or left of this index are blocked.
    pub(crate) blocked: Option<usize>,

    /// Stock passes made when the player switched to turning one card.
    pub(crate) switched_at: Option<u32>,
}

impl Solitaire {
    /// Set up a game: shuffle, deal, and start play.
    ///
    /// A `Selective` dealer takes the first offered card; use
    /// [`Solitaire::new_with_chooser`] to pick.
    pub fn new(config: SolitaireConfig) -> Result<Self, SetupError> {
        Self::new_with_chooser(config, &mut |_: &[Card]| 0)
    }

    /// Set up a game, asking `chooser` whenever a dealer needs a decision.
    pub fn new_with_chooser(
        config: SolitaireConfig,
        chooser: &mut Chooser<'_>,
    ) -> Result<Self, SetupError> {
        let mut game = Self::empty(config)?;
        game.shuffle();

        let dealers = game.config.dealers.clone();
        for dealer in &dealers {
            dealer.deal(&mut game, chooser)?;
            log::trace!("{}: ran dealer {}", game.config.name, dealer.name());
        }

        let left = game.deck.undealt().len();
        if left > 0 {
            return Err(SetupError::UndealtCards(left));
        }

        game.start();
        Ok(game)
    }

    /// A game with every card still in the deck and nothing shuffled.
    pub(crate) fn empty(config: SolitaireConfig) -> Result<Self, SetupError> {
        if config.num_foundations == 0 {
            return Err(SetupError::InvalidConfig(
                "a game needs at least one foundation".into(),
            ));
        }
        if config.num_tableau > usize::from(u16::MAX / 2) {
            return Err(SetupError::InvalidConfig("too many tableau piles".into()));
        }
        if config.turn_count == 0 {
            return Err(SetupError::InvalidConfig(
                "a turn must turn over at least one card".into(),
            ));
        }

        let base = match config.deal {
            DealMode::Random { seed: Some(seed) } => GameRng::new(seed),
            DealMode::Random { seed: None } => GameRng::from_entropy(),
            DealMode::Numbered(number) => GameRng::new(u64::from(number)),
            DealMode::Unshuffled => GameRng::new(0),
        };

        let piles = PileSet::new(
            config.num_tableau,
            config.num_foundations,
            config.num_reserve,
            config.num_cells,
        );

        Ok(Self {
            deck: Deck::new(&config.deck),
            piles,
            rng: base,
            history: Vector::new(),
            alternatives: Vec::new(),
            status: GameStatus::Dealing,
            stock_passes: 0,
            move_count: 0,
            undo_count: 0,
            last_sort: 0,
            foundation_rank: config.foundation_rank,
            blocked: None,
            switched_at: None,
            config,
        })
    }

    fn shuffle(&mut self) {
        match self.config.deal {
            DealMode::Random { .. } => {
                let mut shuffle_rng = self.rng.clone();
                self.deck.shuffle(&mut shuffle_rng);
            }
            DealMode::Numbered(number) => self.deck.shuffle_numbered(number),
            DealMode::Unshuffled => {}
        }
        self.rng = self.rng.for_context("deal");
    }

    /// Leave `Dealing`. A deal can already be a win (every card pre-sorted).
    pub(crate) fn start(&mut self) {
        self.status = GameStatus::Playing;
        log::debug!(
            "{}: dealt {} cards ({} discarded)",
            self.config.name,
            self.piles.total_cards(),
            self.deck.discarded().len()
        );
        self.check_win();
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SolitaireConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn piles(&self) -> &PileSet {
        &self.piles
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.deck.card(id)
    }

    #[must_use]
    pub fn wrap_ranks(&self) -> bool {
        self.config.wrap_ranks
    }

    /// Rank that starts an empty foundation under `SortChecker::StartRank`.
    #[must_use]
    pub fn foundation_rank(&self) -> Rank {
        self.foundation_rank
    }

    /// Index of the rightmost blocked reserve pile, if any are blocked.
    #[must_use]
    pub fn blocked_reserve(&self) -> Option<usize> {
        self.blocked
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn undo_count(&self) -> u32 {
        self.undo_count
    }

    #[must_use]
    pub fn stock_passes(&self) -> u32 {
        self.stock_passes
    }

    /// Cards turned per turn. One after [`Solitaire::switch_one`].
    #[must_use]
    pub fn turn_count(&self) -> usize {
        if self.switched_at.is_some() {
            1
        } else {
            self.config.turn_count
        }
    }

    /// Passes allowed through the stock. A switch to one card leaves one
    /// more pass.
    #[must_use]
    pub fn max_passes(&self) -> Option<u32> {
        self.switched_at
            .map(|passes| passes + 1)
            .or(self.config.max_passes)
    }

    /// Moves `alternate` could still try.
    #[must_use]
    pub fn alternatives(&self) -> &[PendingMove] {
        &self.alternatives
    }

    // === Pile views ===

    /// Cards of tableau pile `index`, bottom to top. Empty if out of range.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &[CardId] {
        self.pile_of(self.piles.tableau().get(index).copied())
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> &[CardId] {
        self.pile_of(self.piles.foundations().get(index).copied())
    }

    #[must_use]
    pub fn reserve(&self, index: usize) -> &[CardId] {
        self.pile_of(self.piles.reserve().get(index).copied())
    }

    #[must_use]
    pub fn cells(&self) -> &[CardId] {
        self.piles.cards(self.piles.cells())
    }

    #[must_use]
    pub fn stock(&self) -> &[CardId] {
        self.piles.cards(self.piles.stock())
    }

    #[must_use]
    pub fn waste(&self) -> &[CardId] {
        self.piles.cards(self.piles.waste())
    }

    fn pile_of(&self, pile: Option<PileId>) -> &[CardId] {
        match pile {
            Some(pile) => self.piles.cards(pile),
            None => &[],
        }
    }

    #[must_use]
    pub fn is_face_up(&self, card: CardId) -> bool {
        self.piles.is_face_up(card)
    }

    /// Pile holding a card, or `None` for undealt and discarded cards.
    #[must_use]
    pub fn location(&self, card: CardId) -> Option<PileId> {
        self.piles.location(card)
    }

    /// Kind of the pile holding a card.
    #[must_use]
    pub fn location_kind(&self, card: CardId) -> Option<PileKind> {
        self.piles.location(card).map(|pile| self.piles.kind(pile))
    }

    // === Card lookup ===

    /// Every card a token names, filtered by its location tag.
    ///
    /// ```
    /// use solitaire_engine::games;
    /// use solitaire_engine::engine::Solitaire;
    ///
    /// let game = Solitaire::new(games::freecell_numbered(1)).unwrap();
    /// let jacks = game.find("JD").unwrap();
    /// assert_eq!(jacks.len(), 1);
    /// assert_eq!(game.tableau(0)[0], jacks[0]);
    ///
    /// assert!(game.find("JD-T2").is_err());
    /// ```
    pub fn find(&self, text: &str) -> Result<Candidates, MoveError> {
        let query = crate::core::Deck::parse(text)?;
        let mut cards = self.deck.matching(query.rank, query.suit);
        if let Some(tag) = query.location {
            let pile = self.tagged_pile(tag);
            cards.retain(|card| pile.is_some() && self.piles.location(*card) == pile);
        }
        if cards.is_empty() {
            return Err(MoveError::UnknownCard(text.trim().to_string()));
        }
        Ok(cards)
    }

    fn tagged_pile(&self, tag: LocationTag) -> Option<PileId> {
        match tag {
            LocationTag::Tableau(index) => self.piles.tableau().get(index).copied(),
            LocationTag::Reserve(index) => self.piles.reserve().get(index).copied(),
            LocationTag::Cells => Some(self.piles.cells()),
            LocationTag::Waste => Some(self.piles.waste()),
        }
    }

    /// Foundations a card may be sorted to, in preference order.
    ///
    /// `BySuit` gives the suit's foundation in every deck (suit index plus a
    /// multiple of the suit count); `Single` always gives the first. The
    /// two-set rules pick between the suit's first and second foundation.
    #[must_use]
    pub fn find_foundation(&self, card: CardId) -> SmallVec<[PileId; 4]> {
        let foundations = self.piles.foundations();
        if self.config.foundation_rule == FoundationRule::Single {
            return foundations.iter().take(1).copied().collect();
        }

        let spec = self.deck.spec();
        let suits = spec.suits.len().max(1);
        let Some(start) = spec.suit_index(self.card(card).suit()) else {
            return SmallVec::new();
        };
        let (first, second) = (foundations.get(start), foundations.get(start + suits));
        match self.config.foundation_rule {
            FoundationRule::Single => SmallVec::new(),
            FoundationRule::BySuit => foundations
                .iter()
                .copied()
                .skip(start)
                .step_by(suits)
                .collect(),
            FoundationRule::UpThenDown => second.into_iter().chain(first).copied().collect(),
            FoundationRule::RankSplit { low, high } => {
                let rank = self.card(card).rank();
                let pick = if (low..=high).contains(&rank) { second } else { first };
                pick.into_iter().copied().collect()
            }
        }
    }

    // === Dealing ===

    /// Deal the top card of the deck onto a pile.
    pub(crate) fn deal_card(&mut self, pile: PileId, up: bool) -> Option<CardId> {
        let card = self.deck.deal()?;
        self.piles.push(pile, card, up);
        Some(card)
    }

    /// Move a specific undealt card onto a pile. False if it was not in the deck.
    pub(crate) fn place_card(&mut self, card: CardId, pile: PileId, up: bool) -> bool {
        if self.deck.take(card).is_none() {
            return false;
        }
        self.piles.push(pile, card, up);
        true
    }

    /// Take an undealt card out of the game.
    pub(crate) fn discard_card(&mut self, card: CardId) {
        self.deck.discard(card);
    }

    pub(crate) fn set_foundation_rank(&mut self, rank: Rank) {
        self.foundation_rank = rank;
    }

    pub(crate) fn piles_mut(&mut self) -> &mut PileSet {
        &mut self.piles
    }

    pub(crate) fn deal_rng(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    // === Outcome ===

    /// The foundations hold every live card.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.piles.foundation_total() == self.deck.live_count()
    }

    pub(crate) fn check_win(&mut self) {
        if self.status == GameStatus::Playing && self.is_won() {
            self.status = GameStatus::Won;
            log::debug!("{}: won in {} moves", self.config.name, self.move_count);
        }
    }

    /// Give up. Later moves return `GameOver`.
    pub fn abandon(&mut self) {
        if !self.status.is_over() {
            self.status = GameStatus::Abandoned;
            log::debug!("{}: abandoned after {} moves", self.config.name, self.move_count);
        }
    }

    /// Five points per sorted card, minus one per live card, per move and
    /// two per undo. A win doubles the sorted points and, with no undos,
    /// adds five per move in the final run of sorts.
    #[must_use]
    pub fn score(&self) -> i64 {
        let sorted = self.piles.foundation_total() as i64;
        let live = self.deck.live_count() as i64;
        let mut score =
            sorted * 5 - live - i64::from(self.move_count) - i64::from(self.undo_count) * 2;
        if self.status == GameStatus::Won {
            score += sorted * 5;
            if self.undo_count == 0 {
                score += i64::from(self.last_sort) * 5;
            }
        }
        score
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            status: self.status,
            moves: self.move_count,
            undos: self.undo_count,
            score: self.score(),
        }
    }

    pub(crate) fn ensure_playing(&self) -> Result<(), MoveError> {
        if self.status == GameStatus::Playing {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dealers::Dealer;

    fn unshuffled(dealers: Vec<Dealer>) -> SolitaireConfig {
        SolitaireConfig::new("Test")
            .with_deal(DealMode::Unshuffled)
            .with_dealers(dealers)
    }

    #[test]
    fn test_new_deals_everything() {
        let game = Solitaire::new(unshuffled(vec![Dealer::All])).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.piles().total_cards(), 52);
        assert!(game.deck().undealt().is_empty());
        assert_eq!(game.tableau(0).len(), 8);
        assert_eq!(game.tableau(6).len(), 7);
    }

    #[test]
    fn test_undealt_cards_rejected() {
        let config = unshuffled(vec![Dealer::N { count: 10, up: true }]);
        let err = Solitaire::new(config).unwrap_err();
        assert_eq!(err, SetupError::UndealtCards(42));
    }

    #[test]
    fn test_no_foundations_rejected() {
        let config = unshuffled(vec![Dealer::All]).with_foundations(0);
        assert!(matches!(Solitaire::new(config), Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn test_seeded_games_repeat() {
        let config = SolitaireConfig::new("Seeded").with_seed(7);
        let a = Solitaire::new(config.clone()).unwrap();
        let b = Solitaire::new(config).unwrap();
        assert_eq!(a.piles(), b.piles());
    }

    #[test]
    fn test_find_foundation_by_suit() {
        let config = unshuffled(vec![Dealer::All])
            .with_foundations(8)
            .with_deck(crate::core::DeckSpec::standard().with_decks(2));
        let game = Solitaire::new(config).unwrap();

        let hearts = game.deck().find("AH").unwrap();
        let foundations = game.find_foundation(hearts[0]);
        let all = game.piles().foundations();
        assert_eq!(foundations.as_slice(), &[all[2], all[6]]);
    }

    #[test]
    fn test_find_foundation_single() {
        let config = unshuffled(vec![Dealer::All])
            .with_foundations(1)
            .with_foundation_rule(FoundationRule::Single);
        let game = Solitaire::new(config).unwrap();
        let card = game.tableau(0)[0];
        assert_eq!(game.find_foundation(card).as_slice(), &[game.piles().foundations()[0]]);
    }

    #[test]
    fn test_find_with_location() {
        let game = Solitaire::new(unshuffled(vec![Dealer::All])).unwrap();
        let bottom = game.tableau(2)[0];
        let text = format!("{}-3", game.card(bottom));
        assert_eq!(game.find(&text).unwrap().as_slice(), &[bottom]);

        let elsewhere = format!("{}-T4", game.card(bottom));
        assert_eq!(game.find(&elsewhere), Err(MoveError::UnknownCard(elsewhere.clone())));
    }

    #[test]
    fn test_abandon() {
        let mut game = Solitaire::new(unshuffled(vec![Dealer::All])).unwrap();
        game.abandon();
        assert_eq!(game.status(), GameStatus::Abandoned);
        assert_eq!(game.outcome().status, GameStatus::Abandoned);
        assert_eq!(game.turn(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_initial_score() {
        let game = Solitaire::new(unshuffled(vec![Dealer::All])).unwrap();
        assert_eq!(game.score(), -52);
    }
}
