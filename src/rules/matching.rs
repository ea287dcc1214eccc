//! Match checkers: may these two cards be removed together?
//!
//! A legal match moves both cards to the first foundation as one move.

use serde::{Deserialize, Serialize};

use super::support::pyramid_blocker;
use super::{CheckResult, CustomCheck};
use crate::core::{CardId, PileKind};
use crate::engine::Solitaire;

/// Signature of a custom match checker.
pub type MatchFn = fn(&Solitaire, CardId, CardId) -> CheckResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MatchChecker {
    /// The cards sit in neighbouring tableau piles of the grid
    /// (orthogonally or diagonally).
    Adjacent,
    /// No matching at all.
    Forbidden,
    /// The cards have the same rank.
    SameRank,
    /// Neither card is covered in the pyramid.
    Pyramid,
    /// Neither card is covered, except by the other card.
    PyramidRelaxed,
    /// Both cards are in the tableau.
    TableauOnly,
    /// The ranks sum to thirteen.
    Thirteen,
    /// Both cards are on top of a pile (or in a free cell).
    Top,
    /// Like `Top`, but the two cards may be the top two of one pile.
    TopTwo,
    #[serde(skip)]
    Custom(CustomCheck<MatchFn>),
}

impl MatchChecker {
    /// Wrap a function as a named custom checker.
    pub fn custom(name: &'static str, check: MatchFn) -> Self {
        MatchChecker::Custom(CustomCheck::new(name, check))
    }

    pub fn check(&self, game: &Solitaire, a: CardId, b: CardId) -> CheckResult {
        let (card_a, card_b) = (game.card(a), game.card(b));

        match self {
            MatchChecker::Adjacent => {
                if !adjacent(game, a, b) {
                    return Err(format!(
                        "{} and {} are not adjacent to each other on the tableau.",
                        card_a, card_b
                    ));
                }
            }
            MatchChecker::Forbidden => {
                return Err("Matching cards is not allowed in this game.".into());
            }
            MatchChecker::SameRank => {
                if card_a.rank() != card_b.rank() {
                    return Err(format!("{} and {} are not the same rank.", card_a, card_b));
                }
            }
            MatchChecker::Pyramid | MatchChecker::PyramidRelaxed => {
                let relaxed = matches!(self, MatchChecker::PyramidRelaxed);
                for card in [a, b] {
                    if let Some(blocker) = pyramid_blocker(game, card) {
                        if relaxed && (blocker == a || blocker == b) {
                            continue;
                        }
                        return Err(format!(
                            "{} is blocked by the {}.",
                            game.card(card),
                            game.card(blocker)
                        ));
                    }
                }
            }
            MatchChecker::TableauOnly => {
                let piles = game.piles();
                for card in [a, b] {
                    let in_tableau = piles
                        .location(card)
                        .map_or(false, |pile| piles.kind(pile) == PileKind::Tableau);
                    if !in_tableau {
                        return Err(format!("{} is not in the tableau", game.card(card)));
                    }
                }
            }
            MatchChecker::Thirteen => {
                if card_a.rank().value() + card_b.rank().value() != 13 {
                    return Err(format!(
                        "The ranks of {} and {} do not sum to thirteen.",
                        card_a, card_b
                    ));
                }
            }
            MatchChecker::Top => return both_on_top(game, a, b),
            MatchChecker::TopTwo => {
                let piles = game.piles();
                if let Some(pile) = piles.location(a) {
                    let cards = piles.cards(pile);
                    if cards.len() >= 2 {
                        let top_two = &cards[cards.len() - 2..];
                        if top_two == [a, b] || top_two == [b, a] {
                            return Ok(());
                        }
                    }
                }
                return both_on_top(game, a, b);
            }
            MatchChecker::Custom(custom) => return (custom.check)(game, a, b),
        }
        Ok(())
    }
}

fn both_on_top(game: &Solitaire, a: CardId, b: CardId) -> CheckResult {
    let piles = game.piles();
    for card in [a, b] {
        let in_cells = piles.location(card) == Some(piles.cells());
        if !in_cells && !piles.is_top(card) {
            return Err(format!("{} is not on the top of a pile.", game.card(card)));
        }
    }
    Ok(())
}

/// Grid adjacency of two tableau piles, including diagonals.
fn adjacent(game: &Solitaire, a: CardId, b: CardId) -> bool {
    let piles = game.piles();
    let width = game.config().grid_width.max(1);
    let cell = |card: CardId| {
        let pile = piles.location(card)?;
        if piles.kind(pile) != PileKind::Tableau {
            return None;
        }
        let position = piles.position(pile);
        Some((position / width, position % width))
    };

    match (cell(a), cell(b)) {
        (Some((row_a, col_a)), Some((row_b, col_b))) => {
            let rows = row_a.abs_diff(row_b);
            let cols = col_a.abs_diff(col_b);
            rows.max(cols) == 1
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SolitaireConfig;
    use crate::engine::Layout;

    /// Pile 0 is covered by the top of pile 1, pile 2 by the top of pile 3.
    fn game() -> Solitaire {
        let layout = Layout::new()
            .tableau(0, &["9C", "4D"])
            .tableau(1, &["8S", "5H"])
            .tableau(2, &["KD"])
            .tableau(3, &["4S"])
            .cells(&["7H"])
            .waste(&["6C"]);
        let config = SolitaireConfig::new("Matches").with_tableau(4).with_cells(1);
        Solitaire::from_layout(config, &layout).unwrap()
    }

    fn check(game: &Solitaire, checker: &MatchChecker, a: &str, b: &str) -> CheckResult {
        let a = game.find(a).unwrap()[0];
        checker.check(game, a, game.find(b).unwrap()[0])
    }

    #[test]
    fn test_adjacent() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::Adjacent, "4D", "5H"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::Adjacent, "4D", "4S"),
            Err("4D and 4S are not adjacent to each other on the tableau.".into())
        );
        assert!(check(&game, &MatchChecker::Adjacent, "4D", "6C").is_err());
    }

    #[test]
    fn test_forbidden() {
        let game = game();
        assert_eq!(
            check(&game, &MatchChecker::Forbidden, "4D", "4S"),
            Err("Matching cards is not allowed in this game.".into())
        );
    }

    #[test]
    fn test_same_rank() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::SameRank, "4D", "4S"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::SameRank, "4D", "5H"),
            Err("4D and 5H are not the same rank.".into())
        );
    }

    #[test]
    fn test_pyramid() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::Pyramid, "5H", "4S"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::Pyramid, "4D", "5H"),
            Err("4D is blocked by the 5H.".into())
        );
        assert_eq!(
            check(&game, &MatchChecker::Pyramid, "4S", "KD"),
            Err("KD is blocked by the 4S.".into())
        );
    }

    /// A card covered only by its partner may still be matched.
    #[test]
    fn test_pyramid_relaxed() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::PyramidRelaxed, "4D", "5H"), Ok(()));
        assert_eq!(check(&game, &MatchChecker::PyramidRelaxed, "KD", "4S"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::PyramidRelaxed, "4D", "4S"),
            Err("4D is blocked by the 5H.".into())
        );
    }

    #[test]
    fn test_tableau_only() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::TableauOnly, "4D", "4S"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::TableauOnly, "4D", "6C"),
            Err("6C is not in the tableau".into())
        );
        assert_eq!(
            check(&game, &MatchChecker::TableauOnly, "7H", "4S"),
            Err("7H is not in the tableau".into())
        );
    }

    #[test]
    fn test_thirteen() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::Thirteen, "4D", "9C"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::Thirteen, "4D", "5H"),
            Err("The ranks of 4D and 5H do not sum to thirteen.".into())
        );
    }

    #[test]
    fn test_top() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::Top, "5H", "4S"), Ok(()));
        assert_eq!(check(&game, &MatchChecker::Top, "7H", "6C"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::Top, "8S", "5H"),
            Err("8S is not on the top of a pile.".into())
        );
    }

    #[test]
    fn test_top_two() {
        let game = game();
        assert_eq!(check(&game, &MatchChecker::TopTwo, "8S", "5H"), Ok(()));
        assert_eq!(check(&game, &MatchChecker::TopTwo, "4D", "9C"), Ok(()));
        assert_eq!(check(&game, &MatchChecker::TopTwo, "4D", "7H"), Ok(()));
        assert_eq!(
            check(&game, &MatchChecker::TopTwo, "9C", "5H"),
            Err("9C is not on the top of a pile.".into())
        );
    }

    #[test]
    fn test_custom() {
        fn same_suit(game: &Solitaire, a: CardId, b: CardId) -> CheckResult {
            if game.card(a).suit() == game.card(b).suit() {
                Ok(())
            } else {
                Err("Different suits.".into())
            }
        }
        let game = game();
        let checker = MatchChecker::custom("same-suit", same_suit);
        assert_eq!(check(&game, &checker, "9C", "6C"), Ok(()));
        assert_eq!(check(&game, &checker, "9C", "4D"), Err("Different suits.".into()));
    }
}
