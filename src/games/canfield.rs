//! Canfield.

use crate::core::{Rank, SolitaireConfig};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, LaneChecker, PairChecker, RuleSet, SortChecker};

/// Options for [`canfield`].
#[derive(Clone, Debug)]
pub struct CanfieldOptions {
    pub piles: usize,
    pub reserve_size: usize,
    /// Deal the reserve face up.
    pub visible_reserve: bool,
    /// Fixed foundation rank instead of the first card dealt.
    pub foundation: Option<Rank>,
    /// Let the player pick the foundation card.
    pub selective: bool,
    pub turn_count: usize,
    pub max_passes: Option<u32>,
    /// How cards pair in the tableau; `None` builds down regardless of suit.
    pub pair: Option<PairChecker>,
    /// Any card may fill an empty lane.
    pub free_lane: bool,
    /// Allow moving part of a stack.
    pub partial_move: bool,
}

impl Default for CanfieldOptions {
    fn default() -> Self {
        Self {
            piles: 4,
            reserve_size: 13,
            visible_reserve: false,
            foundation: None,
            selective: false,
            turn_count: 3,
            max_passes: None,
            pair: Some(PairChecker::AltColor),
            free_lane: false,
            partial_move: false,
        }
    }
}

/// A thirteen-card reserve, foundations starting from the first card
/// dealt, building around the corner from King to Ace.
#[must_use]
pub fn canfield(options: &CanfieldOptions) -> SolitaireConfig {
    let mut rules = RuleSet::new()
        .with_pair(PairChecker::Down)
        .with_sort(SortChecker::StartRank)
        .with_sort(SortChecker::Up);
    if let Some(pair) = &options.pair {
        rules = rules.with_pair(pair.clone());
    }
    if !options.partial_move {
        rules = rules.with_build(BuildChecker::Whole);
    }
    if !options.free_lane {
        rules = rules.with_lane(LaneChecker::ReserveOrWaste);
    }

    let reserve = Dealer::ReserveN {
        count: options.reserve_size,
        up: options.visible_reserve,
    };
    let dealers = if let Some(rank) = options.foundation {
        vec![Dealer::RankFoundations(rank), reserve, Dealer::OneRow, Dealer::StockAll]
    } else if options.selective {
        vec![reserve, Dealer::Selective, Dealer::StockAll]
    } else {
        vec![reserve, Dealer::StartFoundation, Dealer::OneRow, Dealer::StockAll]
    };

    let config = SolitaireConfig::new("Canfield")
        .with_tableau(options.piles)
        .with_reserve(1)
        .with_wrap_ranks(true)
        .with_turn_count(options.turn_count)
        .with_max_passes(options.max_passes)
        .with_rules(rules)
        .with_dealers(dealers);
    match options.foundation {
        Some(rank) => config.with_foundation_rank(rank),
        None => config,
    }
}
