//! Build checkers: may this stack be built onto the target card?
//!
//! Called after the baseline build checks and the pair checkers, with the
//! stack that would move (`stack[0]` is the mover).

use serde::{Deserialize, Serialize};

use super::support::{in_blocked_reserve, move_one_size};
use super::{CheckResult, CustomCheck};
use crate::core::{CardId, PileKind};
use crate::engine::Solitaire;

/// Signature of a custom build checker: game, mover, target, moving stack.
pub type BuildFn = fn(&Solitaire, CardId, CardId, &[CardId]) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BuildChecker {
    /// The mover must be the opposite color of the target.
    AltColorOne,
    /// The moving stack must descend by one rank throughout.
    Down,
    /// The mover must be one rank below the target.
    DownOne,
    /// No building at all.
    Forbidden,
    /// The stack must be movable one card at a time via cells and lanes.
    MoveOne,
    /// Only the top card of the first reserve pile may be built.
    ReserveOnly,
    /// The moving stack must be a single suit.
    Suit,
    /// The mover must be the same suit as the target.
    SuitOne,
    /// Nothing may be built from a blocked reserve pile.
    Unblocked,
    /// Only complete stacks (face-down card or nothing beneath) may move.
    Whole,
    #[serde(skip)]
    Custom(CustomCheck<BuildFn>),
}

impl BuildChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: BuildFn) -> Self {
        BuildChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(
        &self,
        game: &Solitaire,
        mover: CardId,
        target: CardId,
        stack: &[CardId],
    ) -> CheckResult {
        let wrap = game.wrap_ranks();
        let piles = game.piles();
        let m = game.card(mover);
        let t = game.card(target);

        match self {
            BuildChecker::AltColorOne => {
                if m.color() == t.color() {
                    return Err(format!(
                        "The {} is not the opposite color of the {}",
                        m.name(),
                        t.name()
                    ));
                }
            }
            BuildChecker::Down => {
                let descending = stack
                    .windows(2)
                    .all(|pair| game.card(pair[1]).below(game.card(pair[0]), 1, wrap));
                if !descending {
                    return Err("Only stacks of descending rank may be moved together.".into());
                }
            }
            BuildChecker::DownOne => {
                if !m.below(t, 1, wrap) {
                    return Err(format!("The {} is not one lower than the {}.", m.name(), t.name()));
                }
            }
            BuildChecker::Forbidden => {
                return Err("Building is not allowed in this game.".into());
            }
            BuildChecker::MoveOne => {
                let max = move_one_size(game, false);
                if stack.len() > max {
                    return Err(format!("You may only move {} cards at this time.", max));
                }
            }
            BuildChecker::ReserveOnly => {
                let first = piles.reserve().first().and_then(|&pile| piles.top(pile));
                if first != Some(mover) {
                    return Err("You may only build the top card from the reserve.".into());
                }
            }
            BuildChecker::Suit => {
                if stack.iter().any(|&card| game.card(card).suit() != m.suit()) {
                    return Err("Only stacks of the same suit may be moved together.".into());
                }
            }
            BuildChecker::SuitOne => {
                if m.suit() != t.suit() {
                    return Err(format!(
                        "The {} is not the same suit as the {}.",
                        m.name(),
                        t.name()
                    ));
                }
            }
            BuildChecker::Unblocked => {
                if in_blocked_reserve(game, piles.location(mover)) {
                    return Err("You cannot build cards from blocked reserve piles.".into());
                }
            }
            BuildChecker::Whole => {
                let pile = piles.location(mover);
                let index = piles.index_of(mover).unwrap_or(0);
                if let Some(pile) = pile.filter(|&p| piles.kind(p) == PileKind::Tableau) {
                    if index > 0 && piles.is_face_up(piles.cards(pile)[index - 1]) {
                        return Err("Only complete stacks may be moved on the tableau.".into());
                    }
                }
            }
            BuildChecker::Custom(custom) => return (custom.check)(game, mover, target, stack),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SolitaireConfig;
    use crate::engine::Layout;

    fn game() -> Solitaire {
        let layout = Layout::new()
            .tableau(0, &["#2C", "9H", "8S"])
            .tableau(1, &["TC"])
            .tableau(2, &["TH"])
            .reserve(0, &["5D", "JS"])
            .reserve(1, &["QD"]);
        let config = SolitaireConfig::new("Builds").with_tableau(3).with_reserve(2);
        Solitaire::from_layout(config, &layout).unwrap()
    }

    fn id(game: &Solitaire, text: &str) -> CardId {
        game.find(text).unwrap()[0]
    }

    /// Check a single-card build of `mover` onto `target`.
    fn check(game: &Solitaire, checker: &BuildChecker, mover: &str, target: &str) -> CheckResult {
        let mover = id(game, mover);
        checker.check(game, mover, id(game, target), &[mover])
    }

    #[test]
    fn test_alt_color_one() {
        let game = game();
        assert_eq!(check(&game, &BuildChecker::AltColorOne, "9H", "TC"), Ok(()));
        assert_eq!(
            check(&game, &BuildChecker::AltColorOne, "9H", "TH"),
            Err("The Nine of Hearts is not the opposite color of the Ten of Hearts".into())
        );
    }

    #[test]
    fn test_down_stack() {
        let game = game();
        let (nine, eight, ten) = (id(&game, "9H"), id(&game, "8S"), id(&game, "TC"));
        assert_eq!(BuildChecker::Down.check(&game, nine, ten, &[nine, eight]), Ok(()));
        assert_eq!(
            BuildChecker::Down.check(&game, eight, ten, &[eight, nine]),
            Err("Only stacks of descending rank may be moved together.".into())
        );
    }

    #[test]
    fn test_down_one() {
        let game = game();
        assert_eq!(check(&game, &BuildChecker::DownOne, "9H", "TC"), Ok(()));
        assert_eq!(
            check(&game, &BuildChecker::DownOne, "JS", "TC"),
            Err("The Jack of Spades is not one lower than the Ten of Clubs.".into())
        );
    }

    #[test]
    fn test_forbidden() {
        let game = game();
        assert_eq!(
            check(&game, &BuildChecker::Forbidden, "9H", "TC"),
            Err("Building is not allowed in this game.".into())
        );
    }

    #[test]
    fn test_move_one() {
        let game = game();
        let (nine, eight, ten) = (id(&game, "9H"), id(&game, "8S"), id(&game, "TC"));
        assert_eq!(BuildChecker::MoveOne.check(&game, eight, ten, &[eight]), Ok(()));
        assert_eq!(
            BuildChecker::MoveOne.check(&game, nine, ten, &[nine, eight]),
            Err("You may only move 1 cards at this time.".into())
        );
    }

    #[test]
    fn test_reserve_only() {
        let game = game();
        assert_eq!(check(&game, &BuildChecker::ReserveOnly, "JS", "TH"), Ok(()));
        for mover in ["QD", "9H"] {
            assert_eq!(
                check(&game, &BuildChecker::ReserveOnly, mover, "TC"),
                Err("You may only build the top card from the reserve.".into())
            );
        }
    }

    #[test]
    fn test_suit_stack() {
        let game = game();
        let (nine, eight, ten) = (id(&game, "9H"), id(&game, "8S"), id(&game, "TH"));
        assert_eq!(BuildChecker::Suit.check(&game, nine, ten, &[nine]), Ok(()));
        assert_eq!(
            BuildChecker::Suit.check(&game, nine, ten, &[nine, eight]),
            Err("Only stacks of the same suit may be moved together.".into())
        );
    }

    #[test]
    fn test_suit_one() {
        let game = game();
        assert_eq!(check(&game, &BuildChecker::SuitOne, "9H", "TH"), Ok(()));
        assert_eq!(
            check(&game, &BuildChecker::SuitOne, "9H", "TC"),
            Err("The Nine of Hearts is not the same suit as the Ten of Clubs.".into())
        );
    }

    #[test]
    fn test_unblocked() {
        let mut game = game();
        assert_eq!(check(&game, &BuildChecker::Unblocked, "JS", "TH"), Ok(()));

        game.blocked = Some(0);
        assert_eq!(
            check(&game, &BuildChecker::Unblocked, "JS", "TH"),
            Err("You cannot build cards from blocked reserve piles.".into())
        );
        assert_eq!(check(&game, &BuildChecker::Unblocked, "QD", "TH"), Ok(()));
    }

    /// Canfield moves whole tableau stacks only: the mover must sit on a
    /// face-down card or on nothing.
    #[test]
    fn test_whole() {
        let game = game();
        assert_eq!(check(&game, &BuildChecker::Whole, "9H", "TC"), Ok(()));
        assert_eq!(check(&game, &BuildChecker::Whole, "TC", "TH"), Ok(()));
        assert_eq!(check(&game, &BuildChecker::Whole, "JS", "TC"), Ok(()));
        assert_eq!(
            check(&game, &BuildChecker::Whole, "8S", "TH"),
            Err("Only complete stacks may be moved on the tableau.".into())
        );
    }

    #[test]
    fn test_custom() {
        fn only_nines(game: &Solitaire, mover: CardId, _: CardId, _: &[CardId]) -> CheckResult {
            if game.card(mover).rank().value() == 9 {
                Ok(())
            } else {
                Err("Only nines.".into())
            }
        }
        let game = game();
        let checker = BuildChecker::custom("only-nines", only_nines);
        assert_eq!(check(&game, &checker, "9H", "TC"), Ok(()));
        assert_eq!(check(&game, &checker, "8S", "TH"), Err("Only nines.".into()));
    }
}
