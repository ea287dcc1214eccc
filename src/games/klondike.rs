//! Klondike and the games built on its deal: Yukon and Thoughtful.

use crate::core::{SolitaireConfig, TurnMode};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, LaneChecker, PairChecker, RuleSet, SortChecker};

/// Options for [`klondike`].
#[derive(Clone, Debug)]
pub struct KlondikeOptions {
    pub piles: usize,
    pub turn_count: usize,
    /// `None` is unlimited.
    pub max_passes: Option<u32>,
    /// Allow one switch to turning a single card for a last pass.
    pub switch_one: bool,
}

impl Default for KlondikeOptions {
    fn default() -> Self {
        Self {
            piles: 7,
            turn_count: 3,
            max_passes: None,
            switch_one: false,
        }
    }
}

/// Build down in alternating colors, kings into empty lanes, aces up.
#[must_use]
pub fn klondike(options: &KlondikeOptions) -> SolitaireConfig {
    SolitaireConfig::new("Klondike")
        .with_tableau(options.piles)
        .with_turn_count(options.turn_count)
        .with_max_passes(options.max_passes)
        .with_switch_one(options.switch_one)
        .with_rules(
            RuleSet::new()
                .with_lane(LaneChecker::King)
                .with_pair(PairChecker::Down)
                .with_pair(PairChecker::AltColor)
                .with_sort(SortChecker::Ace)
                .with_sort(SortChecker::Up),
        )
        .with_dealers(vec![Dealer::Klondike, Dealer::StockAll])
}

/// Options for [`yukon`].
#[derive(Clone, Debug)]
pub struct YukonOptions {
    pub piles: usize,
    /// Build by suit instead of alternating colors (Russian Solitaire).
    pub suits: bool,
}

impl Default for YukonOptions {
    fn default() -> Self {
        Self { piles: 7, suits: false }
    }
}

/// Klondike's deal with everything else face up and no stock. Any face-up
/// card moves with the cards above it.
#[must_use]
pub fn yukon(options: &YukonOptions) -> SolitaireConfig {
    let color = if options.suits {
        BuildChecker::SuitOne
    } else {
        BuildChecker::AltColorOne
    };
    let name = if options.suits { "Russian Solitaire" } else { "Yukon" };

    SolitaireConfig::new(name)
        .with_tableau(options.piles)
        .with_rules(
            RuleSet::new()
                .with_lane(LaneChecker::King)
                .with_build(BuildChecker::DownOne)
                .with_build(color)
                .with_sort(SortChecker::Ace)
                .with_sort(SortChecker::Up),
        )
        .with_dealers(vec![Dealer::Klondike, Dealer::Yukon])
}

/// Options for [`thoughtful`].
#[derive(Clone, Debug)]
pub struct ThoughtfulOptions {
    /// Playing from a reserve pile blocks the piles to its left.
    pub blocking: bool,
}

impl Default for ThoughtfulOptions {
    fn default() -> Self {
        Self { blocking: true }
    }
}

/// Open Klondike with the stock dealt into eight reserve piles of three.
/// Turning compacts the reserve back into piles of three.
#[must_use]
pub fn thoughtful(options: &ThoughtfulOptions) -> SolitaireConfig {
    let config = SolitaireConfig::new("Thoughtful Solitaire")
        .with_reserve(8)
        .with_turn_mode(TurnMode::CompactReserve { pile_size: 3 })
        .with_rules(
            RuleSet::new()
                .with_build(BuildChecker::Unblocked)
                .with_lane(LaneChecker::King)
                .with_lane(LaneChecker::Unblocked)
                .with_pair(PairChecker::Down)
                .with_pair(PairChecker::AltColor)
                .with_sort(SortChecker::Ace)
                .with_sort(SortChecker::Up)
                .with_sort(SortChecker::Unblocked),
        )
        .with_dealers(vec![
            Dealer::Klondike,
            Dealer::ReserveN { count: 24, up: true },
            Dealer::Open,
        ]);
    if options.blocking {
        config.with_blocked_tracking()
    } else {
        config
    }
}
