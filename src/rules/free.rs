//! Free checkers: may this card move into a free cell?

use serde::{Deserialize, Serialize};

use super::support::pyramid_blocker;
use super::{CheckResult, CustomCheck};
use crate::core::CardId;
use crate::engine::Solitaire;

/// Signature of a custom free checker.
pub type FreeFn = fn(&Solitaire, CardId) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum FreeChecker {
    /// Cards covered in a pyramid layout may not be freed.
    Pyramid,
    #[serde(skip)]
    Custom(CustomCheck<FreeFn>),
}

impl FreeChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: FreeFn) -> Self {
        FreeChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(&self, game: &Solitaire, card: CardId) -> CheckResult {
        match self {
            FreeChecker::Pyramid => match pyramid_blocker(game, card) {
                Some(blocker) => Err(format!(
                    "The {} is blocked by the {}.",
                    game.card(card),
                    game.card(blocker)
                )),
                None => Ok(()),
            },
            FreeChecker::Custom(custom) => (custom.check)(game, card),
        }
    }
}
