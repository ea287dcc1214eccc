//! Lane checkers: may this stack move into an empty tableau pile?

use serde::{Deserialize, Serialize};

use super::support::{in_blocked_reserve, move_one_size, on_reserve_top};
use super::{CheckResult, CustomCheck};
use crate::core::{CardId, Rank};
use crate::engine::Solitaire;

/// Signature of a custom lane checker: game, card, moving stack.
pub type LaneFn = fn(&Solitaire, CardId, &[CardId]) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LaneChecker {
    /// The moving stack must descend by one rank throughout.
    Down,
    /// Only kings may be moved into an empty lane.
    King,
    /// Nothing may be moved into an empty lane.
    Forbidden,
    /// The stack must be movable one card at a time via cells and lanes.
    MoveOne,
    /// Only reserve tops may fill a lane.
    ReserveOnly,
    /// Reserve tops fill lanes; once the reserve is empty, the waste top does.
    ReserveOrWaste,
    /// The moving stack must be a single suit.
    Suit,
    /// Nothing may be laned from a blocked reserve pile.
    Unblocked,
    #[serde(skip)]
    Custom(CustomCheck<LaneFn>),
}

impl LaneChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: LaneFn) -> Self {
        LaneChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(&self, game: &Solitaire, card: CardId, stack: &[CardId]) -> CheckResult {
        let wrap = game.wrap_ranks();
        let piles = game.piles();

        match self {
            LaneChecker::Down => {
                let descending = stack
                    .windows(2)
                    .all(|pair| game.card(pair[1]).below(game.card(pair[0]), 1, wrap));
                if !descending {
                    return Err(
                        "Only stacks of descending rank may be moved into an empty lane.".into()
                    );
                }
            }
            LaneChecker::King => {
                if game.card(card).rank() != Rank::KING {
                    return Err("You can only move kings into an empty lane.".into());
                }
            }
            LaneChecker::Forbidden => {
                return Err("Cards may not be moved to empty lanes.".into());
            }
            LaneChecker::MoveOne => {
                let max = move_one_size(game, true);
                if stack.len() > max {
                    return Err(format!("You can only move {} cards to a lane at the moment.", max));
                }
            }
            LaneChecker::ReserveOnly => {
                if !on_reserve_top(game, card) {
                    return Err("You can only lane the top card from the reserve.".into());
                }
            }
            LaneChecker::ReserveOrWaste => {
                let reserve_empty = piles.reserve().iter().all(|&pile| piles.is_empty(pile));
                if reserve_empty {
                    if piles.top(piles.waste()) != Some(card) {
                        return Err(
                            "If the reserve is empty, you can only lane cards from the waste."
                                .into(),
                        );
                    }
                } else if !on_reserve_top(game, card) {
                    return Err("You can only move cards from the reserve into an empty lane.".into());
                }
            }
            LaneChecker::Suit => {
                let suit = game.card(card).suit();
                if stack.iter().any(|&other| game.card(other).suit() != suit) {
                    return Err("Only stacks of the same suit may be moved to empty lanes.".into());
                }
            }
            LaneChecker::Unblocked => {
                let base = stack.first().copied().unwrap_or(card);
                if in_blocked_reserve(game, piles.location(base)) {
                    return Err("You cannot lane cards from blocked reserve piles.".into());
                }
            }
            LaneChecker::Custom(custom) => return (custom.check)(game, card, stack),
        }
        Ok(())
    }
}
