//! Sort checkers: may this card go onto this foundation?

use serde::{Deserialize, Serialize};

use super::support::{in_blocked_reserve, pyramid_blocker};
use super::{CheckResult, CustomCheck};
use crate::core::{CardId, PileId, Rank};
use crate::engine::Solitaire;

/// Signature of a custom sort checker: game, card, foundation.
pub type SortFn = fn(&Solitaire, CardId, PileId) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SortChecker {
    /// Empty foundations start with an ace.
    Ace,
    /// Empty foundations start with a king.
    King,
    /// Only kings may be sorted.
    KingsOnly,
    /// Only foundation starters may be sorted while the first reserve pile
    /// has cards.
    NoReserve,
    /// No sorting at all.
    Forbidden,
    /// Cards covered in a pyramid layout may not be sorted.
    Pyramid,
    /// Empty foundations start with the game's foundation rank.
    StartRank,
    /// Nothing may be sorted from a blocked reserve pile.
    Unblocked,
    /// Foundations build up by one rank (wrapping if the game wraps).
    Up,
    /// The first four foundations build down, the rest build up.
    UpDown,
    #[serde(skip)]
    Custom(CustomCheck<SortFn>),
}

impl SortChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: SortFn) -> Self {
        SortChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(&self, game: &Solitaire, card: CardId, foundation: PileId) -> CheckResult {
        let piles = game.piles();
        let c = game.card(card);
        let top = piles.top(foundation).map(|id| game.card(id));
        let wrap = game.wrap_ranks();

        match self {
            SortChecker::Ace => {
                if top.is_none() && c.rank() != Rank::ACE {
                    return Err("Only aces can be sorted to empty foundations.".into());
                }
            }
            SortChecker::King => {
                if top.is_none() && c.rank() != Rank::KING {
                    return Err("Only kings can be sorted to empty foundations.".into());
                }
            }
            SortChecker::KingsOnly => {
                if c.rank() != Rank::KING {
                    return Err("Only kings may be sorted.".into());
                }
            }
            SortChecker::NoReserve => {
                let reserve_has_cards = piles
                    .reserve()
                    .first()
                    .map_or(false, |&pile| !piles.is_empty(pile));
                if reserve_has_cards && top.is_some() {
                    return Err("Only base cards can be sorted before the reserve is emptied.".into());
                }
            }
            SortChecker::Forbidden => {
                return Err("Sorting is not allowed in this game.".into());
            }
            SortChecker::Pyramid => {
                if let Some(blocker) = pyramid_blocker(game, card) {
                    return Err(format!(
                        "The {} is blocked by the {}.",
                        c,
                        game.card(blocker)
                    ));
                }
            }
            SortChecker::StartRank => {
                let rank = game.foundation_rank();
                if top.is_none() && c.rank() != rank {
                    return Err(format!(
                        "Only {} can be sorted to empty foundations.",
                        rank.plural()
                    ));
                }
            }
            SortChecker::Unblocked => {
                if in_blocked_reserve(game, piles.location(card)) {
                    return Err("You cannot sort cards from blocked reserve piles.".into());
                }
            }
            SortChecker::Up => {
                if let Some(top) = top {
                    if !c.above(top, 1, wrap) {
                        return Err(format!("{} is not one rank higher than {}.", c, top));
                    }
                }
            }
            SortChecker::UpDown => {
                if let Some(top) = top {
                    if piles.position(foundation) < 4 {
                        if !c.below(top, 1, wrap) {
                            return Err(format!(
                                "The {} is not one rank below the {}.",
                                c.name(),
                                top.name()
                            ));
                        }
                    } else if !c.above(top, 1, wrap) {
                        return Err(format!(
                            "The {} is not one rank above the {}.",
                            c.name(),
                            top.name()
                        ));
                    }
                }
            }
            SortChecker::Custom(custom) => return (custom.check)(game, card, foundation),
        }
        Ok(())
    }
}
