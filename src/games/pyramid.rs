//! Matching games: Pyramid and Monte Carlo.

use crate::core::{FoundationRule, SolitaireConfig, TurnMode};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, FreeChecker, LaneChecker, MatchChecker, RuleSet, SortChecker};

/// Options for [`pyramid`].
#[derive(Clone, Debug)]
pub struct PyramidOptions {
    pub max_passes: Option<u32>,
    pub turn_count: usize,
    /// A card may match the card directly covering it.
    pub relaxed_match: bool,
    pub cells: usize,
    pub reserve_piles: usize,
    /// Cards per reserve pile.
    pub reserve_rows: usize,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self {
            max_passes: Some(1),
            turn_count: 1,
            relaxed_match: false,
            cells: 0,
            reserve_piles: 0,
            reserve_rows: 1,
        }
    }
}

/// Remove pairs of exposed cards summing to thirteen, kings alone.
#[must_use]
pub fn pyramid(options: &PyramidOptions) -> SolitaireConfig {
    let mut rules = RuleSet::new()
        .with_build(BuildChecker::Forbidden)
        .with_lane(LaneChecker::Forbidden)
        .with_sort(SortChecker::KingsOnly)
        .with_sort(SortChecker::Pyramid);
    rules = if options.relaxed_match {
        rules
            .with_match(MatchChecker::TopTwo)
            .with_match(MatchChecker::PyramidRelaxed)
    } else {
        rules
            .with_match(MatchChecker::Top)
            .with_match(MatchChecker::Pyramid)
    };
    rules = rules.with_match(MatchChecker::Thirteen);
    if options.cells > 0 {
        rules = rules.with_free(FreeChecker::Pyramid);
    }

    let mut dealers = vec![Dealer::Pyramid];
    if options.reserve_piles > 0 {
        dealers.push(Dealer::ReserveN {
            count: options.reserve_piles * options.reserve_rows,
            up: true,
        });
    }
    dealers.push(Dealer::StockAll);

    SolitaireConfig::new("Pyramid")
        .with_tableau(7)
        .with_foundations(1)
        .with_foundation_rule(FoundationRule::Single)
        .with_reserve(options.reserve_piles)
        .with_cells(options.cells)
        .with_turn_count(options.turn_count)
        .with_max_passes(options.max_passes)
        .with_rules(rules)
        .with_dealers(dealers)
}

/// Options for [`monte_carlo`].
#[derive(Clone, Debug)]
pub struct MonteCarloOptions {
    /// Rows of five in the grid.
    pub rows: usize,
    /// Match pairs summing to thirteen (kings alone) instead of pairs of
    /// equal rank.
    pub thirteen: bool,
}

impl Default for MonteCarloOptions {
    fn default() -> Self {
        Self { rows: 5, thirteen: false }
    }
}

/// Remove adjacent pairs from a five-wide grid, then close the gaps.
#[must_use]
pub fn monte_carlo(options: &MonteCarloOptions) -> SolitaireConfig {
    let mut rules = RuleSet::new()
        .with_build(BuildChecker::Forbidden)
        .with_lane(LaneChecker::Forbidden)
        .with_match(MatchChecker::TableauOnly)
        .with_match(MatchChecker::Adjacent);
    rules = if options.thirteen {
        rules
            .with_match(MatchChecker::Thirteen)
            .with_sort(SortChecker::KingsOnly)
    } else {
        rules
            .with_match(MatchChecker::SameRank)
            .with_sort(SortChecker::Forbidden)
    };

    let piles = options.rows * 5;
    SolitaireConfig::new("Monte Carlo")
        .with_tableau(piles)
        .with_foundations(1)
        .with_foundation_rule(FoundationRule::Single)
        .with_grid_width(5)
        .with_turn_mode(TurnMode::Consolidate)
        .with_rules(rules)
        .with_dealers(vec![Dealer::N { count: piles, up: true }, Dealer::StockAll])
}
