//! Games with two foundations per suit: Bisley and Quadrille.
//!
//! Both use `SortChecker::UpDown`: the first four foundations build down,
//! the second four build up.

use crate::core::{FoundationRule, Rank, SolitaireConfig};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, LaneChecker, PairChecker, RuleSet, SortChecker};

/// Aces start the upper foundations, kings start the lower ones as they come
/// free. Thirteen open piles, built one card at a time in suit, up or down.
#[must_use]
pub fn bisley() -> SolitaireConfig {
    SolitaireConfig::new("Bisley")
        .with_tableau(13)
        .with_foundations(8)
        .with_foundation_rule(FoundationRule::UpThenDown)
        .with_rules(
            RuleSet::new()
                .with_build(BuildChecker::MoveOne)
                .with_lane(LaneChecker::Forbidden)
                .with_pair(PairChecker::Suit)
                .with_pair(PairChecker::UpDown)
                .with_sort(SortChecker::King)
                .with_sort(SortChecker::UpDown),
        )
        .with_dealers(vec![Dealer::AcesUp, Dealer::Bisley])
}

/// Options for [`quadrille`].
#[derive(Clone, Debug)]
pub struct QuadrilleOptions {
    pub max_passes: Option<u32>,
}

impl Default for QuadrilleOptions {
    fn default() -> Self {
        Self { max_passes: Some(3) }
    }
}

/// The queens sit out. Fives build down around the corner to the kings,
/// sixes build up to the jacks, all from a stock turned one card at a time.
#[must_use]
pub fn quadrille(options: &QuadrilleOptions) -> SolitaireConfig {
    SolitaireConfig::new("Quadrille")
        .with_tableau(0)
        .with_foundations(8)
        .with_foundation_rule(FoundationRule::RankSplit {
            low: Rank::SEVEN,
            high: Rank::JACK,
        })
        .with_wrap_ranks(true)
        .with_turn_count(1)
        .with_max_passes(options.max_passes)
        .with_rules(
            RuleSet::new()
                .with_build(BuildChecker::Forbidden)
                .with_lane(LaneChecker::Forbidden)
                .with_sort(SortChecker::UpDown),
        )
        .with_dealers(vec![Dealer::QueensOut, Dealer::FiveSix, Dealer::StockAll])
}
