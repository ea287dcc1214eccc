//! Game configuration.
//!
//! A variant is fully described by an immutable `SolitaireConfig`:
//! - the table layout (tableau, foundations, reserve, free cells)
//! - stock handling (turn count, passes, turn mode)
//! - the deck composition and how it is shuffled
//! - the rule checker lists (`RuleSet`)
//! - the dealer pipeline
//!
//! The engine never hardcodes a variant. Presets in `games` are just
//! configs built with the `with_*` methods below.
//!
//! ```
//! use solitaire_engine::core::SolitaireConfig;
//! use solitaire_engine::dealers::Dealer;
//! use solitaire_engine::rules::{LaneChecker, PairChecker, RuleSet, SortChecker};
//!
//! let config = SolitaireConfig::new("Klondike")
//!     .with_tableau(7)
//!     .with_turn_count(3)
//!     .with_rules(
//!         RuleSet::new()
//!             .with_pair(PairChecker::Down)
//!             .with_pair(PairChecker::AltColor)
//!             .with_lane(LaneChecker::King)
//!             .with_sort(SortChecker::Ace)
//!             .with_sort(SortChecker::Up),
//!     )
//!     .with_dealers(vec![Dealer::Klondike, Dealer::StockAll]);
//!
//! assert_eq!(config.num_foundations, 4);
//! ```

use serde::{Deserialize, Serialize};

use super::card::Rank;
use super::deck::DeckSpec;
use crate::dealers::Dealer;
use crate::rules::RuleSet;

/// What the turn command does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnMode {
    /// Turn `turn_count` cards from the stock to the waste, recycling the
    /// waste when the stock is empty.
    Waste,
    /// Deal one stock card onto every tableau pile.
    Tableau {
        /// Allow dealing while some tableau piles are empty.
        allow_empty: bool,
    },
    /// Close gaps in the tableau, then refill empty piles from the stock.
    Consolidate,
    /// Shift reserve cards left until every pile but the last holds
    /// `pile_size` cards.
    CompactReserve { pile_size: usize },
}

/// How a card picks its foundation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundationRule {
    /// One foundation per suit per deck.
    BySuit,
    /// Everything goes to the first foundation.
    Single,
    /// Two foundations per suit. The second set is tried before the first.
    UpThenDown,
    /// Two foundations per suit. Ranks from `low` to `high` go to the second
    /// set, every other rank to the first.
    RankSplit { low: Rank, high: Rank },
}

/// How the deck is ordered before dealing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealMode {
    /// Uniform shuffle. `None` seeds from entropy.
    Random { seed: Option<u64> },
    /// Reproducible numbered deal (C `rand()` shuffle).
    Numbered(u32),
    /// No shuffle. Mostly useful in tests.
    Unshuffled,
}

/// Complete description of a solitaire variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolitaireConfig {
    /// Display name of the variant.
    pub name: String,

    pub num_tableau: usize,
    pub num_foundations: usize,
    pub num_reserve: usize,

    /// Capacity of the free cells.
    pub num_cells: usize,

    /// Cards turned per turn in `TurnMode::Waste`.
    pub turn_count: usize,

    /// Passes allowed through the stock. `None` is unlimited.
    pub max_passes: Option<u32>,

    /// The player may switch to turning one card for a final pass.
    #[serde(default)]
    pub switch_one: bool,

    pub turn_mode: TurnMode,

    /// King and Ace are adjacent ranks.
    pub wrap_ranks: bool,

    /// Rank that starts a foundation under `SortChecker::StartRank`.
    /// Dealers such as `StartFoundation` override it.
    pub foundation_rank: Rank,

    pub foundation_rule: FoundationRule,

    /// Columns of the tableau grid used by `MatchChecker::Adjacent`.
    pub grid_width: usize,

    /// Track blocked reserve piles (piles left of the last one played from).
    pub track_blocked: bool,

    /// After a build, move a completed King-to-Ace run to a foundation.
    pub clear_full_runs: bool,

    pub deck: DeckSpec,
    pub deal: DealMode,
    pub rules: RuleSet,
    pub dealers: Vec<Dealer>,
}

impl SolitaireConfig {
    /// Create a config with the classic defaults: seven tableau piles, four
    /// foundations, turn three, unlimited passes, deal everything.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_tableau: 7,
            num_foundations: 4,
            num_reserve: 0,
            num_cells: 0,
            turn_count: 3,
            max_passes: None,
            switch_one: false,
            turn_mode: TurnMode::Waste,
            wrap_ranks: false,
            foundation_rank: Rank::ACE,
            foundation_rule: FoundationRule::BySuit,
            grid_width: 5,
            track_blocked: false,
            clear_full_runs: false,
            deck: DeckSpec::standard(),
            deal: DealMode::Random { seed: None },
            rules: RuleSet::new(),
            dealers: vec![Dealer::All],
        }
    }

    #[must_use]
    pub fn with_tableau(mut self, count: usize) -> Self {
        self.num_tableau = count;
        self
    }

    #[must_use]
    pub fn with_foundations(mut self, count: usize) -> Self {
        self.num_foundations = count;
        self
    }

    #[must_use]
    pub fn with_reserve(mut self, count: usize) -> Self {
        self.num_reserve = count;
        self
    }

    #[must_use]
    pub fn with_cells(mut self, count: usize) -> Self {
        self.num_cells = count;
        self
    }

    #[must_use]
    pub fn with_turn_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Must turn at least 1 card");
        self.turn_count = count;
        self
    }

    #[must_use]
    pub fn with_max_passes(mut self, passes: Option<u32>) -> Self {
        self.max_passes = passes;
        self
    }

    #[must_use]
    pub fn with_switch_one(mut self, allowed: bool) -> Self {
        self.switch_one = allowed;
        self
    }

    #[must_use]
    pub fn with_turn_mode(mut self, mode: TurnMode) -> Self {
        self.turn_mode = mode;
        self
    }

    #[must_use]
    pub fn with_wrap_ranks(mut self, wrap: bool) -> Self {
        self.wrap_ranks = wrap;
        self
    }

    #[must_use]
    pub fn with_foundation_rank(mut self, rank: Rank) -> Self {
        self.foundation_rank = rank;
        self
    }

    #[must_use]
    pub fn with_foundation_rule(mut self, rule: FoundationRule) -> Self {
        self.foundation_rule = rule;
        self
    }

    #[must_use]
    pub fn with_grid_width(mut self, width: usize) -> Self {
        assert!(width > 0, "Grid must have at least 1 column");
        self.grid_width = width;
        self
    }

    #[must_use]
    pub fn with_blocked_tracking(mut self) -> Self {
        self.track_blocked = true;
        self
    }

    #[must_use]
    pub fn with_full_run_clearing(mut self) -> Self {
        self.clear_full_runs = true;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckSpec) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_deal(mut self, deal: DealMode) -> Self {
        self.deal = deal;
        self
    }

    /// Shorthand for a seeded uniform shuffle.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_deal(DealMode::Random { seed: Some(seed) })
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_dealers(mut self, dealers: Vec<Dealer>) -> Self {
        self.dealers = dealers;
        self
    }
}

impl Default for SolitaireConfig {
    fn default() -> Self {
        Self::new("Solitaire")
    }
}
