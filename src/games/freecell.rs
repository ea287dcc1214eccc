//! FreeCell and Baker's Game.

use crate::core::{DealMode, SolitaireConfig};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, LaneChecker, PairChecker, RuleSet, SortChecker};

/// Options for [`freecell`] and [`bakers_game`].
#[derive(Clone, Debug)]
pub struct FreeCellOptions {
    pub cells: usize,
    pub piles: usize,
    /// Start with the last cards dealt in the free cells.
    pub fill_free: bool,
    /// Only kings may move into empty lanes.
    pub kings_only: bool,
    /// Deal the twos, then the aces, to the bottom of the tableau.
    pub challenge: bool,
    /// Deal the aces, then the twos, to the bottom of the tableau.
    pub egnellahc: bool,
    /// Turn one random card per pile face down.
    pub supercell: bool,
}

impl Default for FreeCellOptions {
    fn default() -> Self {
        Self {
            cells: 4,
            piles: 8,
            fill_free: false,
            kings_only: false,
            challenge: false,
            egnellahc: false,
            supercell: false,
        }
    }
}

/// Everything dealt face up; stacks move as far as the free cells and empty
/// lanes allow.
#[must_use]
pub fn freecell(options: &FreeCellOptions) -> SolitaireConfig {
    open_cells("FreeCell", options, PairChecker::AltColor)
}

/// FreeCell's ancestor: build down by suit.
#[must_use]
pub fn bakers_game(options: &FreeCellOptions) -> SolitaireConfig {
    open_cells("Baker's Game", options, PairChecker::Suit)
}

/// Standard FreeCell with a numbered deal, so deal 1 lays out the same
/// cards as every other FreeCell program.
#[must_use]
pub fn freecell_numbered(number: u32) -> SolitaireConfig {
    freecell(&FreeCellOptions::default()).with_deal(DealMode::Numbered(number))
}

fn open_cells(name: &str, options: &FreeCellOptions, pair: PairChecker) -> SolitaireConfig {
    let mut rules = RuleSet::new()
        .with_build(BuildChecker::MoveOne)
        .with_lane(LaneChecker::MoveOne);
    if options.kings_only {
        rules = rules.with_lane(LaneChecker::King);
    }
    let rules = rules
        .with_pair(PairChecker::Down)
        .with_pair(pair)
        .with_sort(SortChecker::Ace)
        .with_sort(SortChecker::Up);

    let mut dealers = if options.challenge {
        vec![Dealer::Twos, Dealer::Aces]
    } else if options.egnellahc {
        vec![Dealer::Aces, Dealer::Twos]
    } else {
        Vec::new()
    };
    dealers.push(Dealer::All);
    if options.fill_free {
        dealers.push(Dealer::Free);
    }
    if options.supercell {
        dealers.push(Dealer::FlipRandom);
    }

    SolitaireConfig::new(name)
        .with_tableau(options.piles)
        .with_cells(options.cells)
        .with_rules(rules)
        .with_dealers(dealers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;
    use crate::engine::Solitaire;

    #[test]
    fn test_numbered_deal_one() {
        let game = Solitaire::new(freecell_numbered(1)).unwrap();
        let text = |index: usize| -> Vec<String> {
            game.tableau(index)
                .iter()
                .map(|&card| game.card(card).to_string())
                .collect()
        };
        assert_eq!(text(0), ["JD", "KD", "2S", "4C", "3S", "6D", "6S"]);
        assert_eq!(game.tableau(4).len(), 6);
        assert!(game.stock().is_empty());
    }

    #[test]
    fn test_fill_free_starts_with_full_cells() {
        let options = FreeCellOptions { fill_free: true, ..FreeCellOptions::default() };
        let game = Solitaire::new(freecell(&options).with_seed(8)).unwrap();
        assert_eq!(game.cells().len(), 4);
        assert_eq!(game.piles().free_cells(), 0);
        assert!((0..8).all(|index| game.tableau(index).len() == 6));
    }

    #[test]
    fn test_kings_only_lanes() {
        let options = FreeCellOptions { kings_only: true, ..FreeCellOptions::default() };
        let config = freecell(&options);
        assert!(config.rules.lanes_need_kings());
        assert!(!freecell(&FreeCellOptions::default()).rules.lanes_need_kings());
    }

    #[test]
    fn test_challenge_deals_twos_then_aces() {
        let options = FreeCellOptions { challenge: true, ..FreeCellOptions::default() };
        let game = Solitaire::new(freecell(&options).with_seed(2)).unwrap();
        let bottom = |index: usize| game.card(game.tableau(index)[0]).rank();
        assert!((0..4).all(|index| bottom(index) == Rank::TWO));
        assert!((4..8).all(|index| bottom(index) == Rank::ACE));

        let options = FreeCellOptions { egnellahc: true, ..FreeCellOptions::default() };
        let game = Solitaire::new(freecell(&options).with_seed(2)).unwrap();
        let bottom = |index: usize| game.card(game.tableau(index)[0]).rank();
        assert!((0..4).all(|index| bottom(index) == Rank::ACE));
        assert!((4..8).all(|index| bottom(index) == Rank::TWO));
    }

    #[test]
    fn test_supercell_hides_one_card_per_pile() {
        let options = FreeCellOptions { supercell: true, ..FreeCellOptions::default() };
        let game = Solitaire::new(freecell(&options).with_seed(4)).unwrap();
        for index in 0..8 {
            let pile = game.tableau(index);
            let down = pile.iter().filter(|&&card| !game.is_face_up(card)).count();
            assert_eq!(down, 1);
            assert!(game.is_face_up(*pile.last().unwrap()));
        }
    }

    #[test]
    fn test_bakers_game_pairs_by_suit() {
        let config = bakers_game(&FreeCellOptions::default());
        assert!(matches!(
            config.rules.pair.as_slice(),
            [PairChecker::Down, PairChecker::Suit]
        ));
        assert_eq!(config.num_cells, 4);
    }
}
