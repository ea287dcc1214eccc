//! Pair checkers: may `mover` sit directly on `target`?
//!
//! Pair checkers apply to a build (mover onto the target's pile) and to every
//! adjacent pair inside a moving stack, which is how the engine decides what
//! counts as a movable stack.

use serde::{Deserialize, Serialize};

use super::{CheckResult, CustomCheck};
use crate::core::CardId;
use crate::engine::Solitaire;

/// Signature of a custom pair checker.
pub type PairFn = fn(&Solitaire, CardId, CardId) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PairChecker {
    /// Build in alternating colors.
    AltColor,
    /// Build in matching colors.
    SameColor,
    /// Build down by one rank.
    Down,
    /// Build in anything but the same suit.
    NotSuit,
    /// Build in suit.
    Suit,
    /// Build up or down by one rank.
    UpDown,
    #[serde(skip)]
    Custom(CustomCheck<PairFn>),
}

impl PairChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: PairFn) -> Self {
        PairChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(&self, game: &Solitaire, mover: CardId, target: CardId) -> CheckResult {
        let m = game.card(mover);
        let t = game.card(target);
        let wrap = game.wrap_ranks();

        let failed = match self {
            PairChecker::AltColor => m.color() == t.color(),
            PairChecker::SameColor => m.color() != t.color(),
            PairChecker::Down => !m.below(t, 1, wrap),
            PairChecker::NotSuit => m.suit() == t.suit(),
            PairChecker::Suit => m.suit() != t.suit(),
            PairChecker::UpDown => !m.below(t, 1, wrap) && !m.above(t, 1, wrap),
            PairChecker::Custom(custom) => return (custom.check)(game, mover, target),
        };
        if !failed {
            return Ok(());
        }

        let relation = match self {
            PairChecker::AltColor => "is not the opposite color of",
            PairChecker::SameColor => "is not the same color as",
            PairChecker::Down => "is not one rank lower than",
            PairChecker::NotSuit => "is the same suit as",
            PairChecker::Suit => "is not the same suit as",
            _ => "is not one rank higher or lower than",
        };
        Err(format!("The {} {} the {}", m.name(), relation, t.name()))
    }
}
