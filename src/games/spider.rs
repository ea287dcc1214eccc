//! Two-deck building games: Spider and Forty Thieves.

use crate::core::{DeckSpec, SolitaireConfig, Suit, TurnMode};
use crate::dealers::Dealer;
use crate::rules::{BuildChecker, LaneChecker, PairChecker, RuleSet, SortChecker};

/// How many suits a Spider deck uses. The deck always holds 104 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpiderSuits {
    One,
    Two,
    Four,
}

impl SpiderSuits {
    fn deck(self) -> DeckSpec {
        match self {
            SpiderSuits::One => DeckSpec::standard()
                .with_suits(&[Suit::Spades])
                .with_decks(8),
            SpiderSuits::Two => DeckSpec::standard()
                .with_suits(&[Suit::Hearts, Suit::Spades])
                .with_decks(4),
            SpiderSuits::Four => DeckSpec::standard().with_decks(2),
        }
    }
}

/// Options for [`spider`].
#[derive(Clone, Debug)]
pub struct SpiderOptions {
    pub suits: SpiderSuits,
    /// Deal the tableau face up.
    pub open: bool,
    /// Allow dealing from the stock while a tableau pile is empty.
    pub relaxed_turn: bool,
}

impl Default for SpiderOptions {
    fn default() -> Self {
        Self {
            suits: SpiderSuits::Four,
            open: false,
            relaxed_turn: false,
        }
    }
}

/// Build down regardless of suit, move only single-suit runs, and clear
/// completed King-to-Ace runs to the foundations.
#[must_use]
pub fn spider(options: &SpiderOptions) -> SolitaireConfig {
    SolitaireConfig::new("Spider")
        .with_tableau(10)
        .with_foundations(8)
        .with_deck(options.suits.deck())
        .with_turn_mode(TurnMode::Tableau { allow_empty: options.relaxed_turn })
        .with_full_run_clearing()
        .with_rules(
            RuleSet::new()
                .with_build(BuildChecker::Suit)
                .with_build(BuildChecker::Down)
                .with_lane(LaneChecker::Suit)
                .with_lane(LaneChecker::Down)
                .with_pair(PairChecker::Down)
                .with_sort(SortChecker::Forbidden),
        )
        .with_dealers(vec![
            Dealer::N { count: 54, up: options.open },
            Dealer::StockAll,
        ])
}

/// Options for [`forty_thieves`].
#[derive(Clone, Debug)]
pub struct FortyThievesOptions {
    pub piles: usize,
    /// Cards per pile in the initial deal.
    pub rows: usize,
    /// Rows dealt face down (the top row is always face up).
    pub down_rows: usize,
    /// Start with the aces on the foundations.
    pub found_aces: bool,
    /// Allow moving whole sequences instead of one card at a time.
    pub move_sequences: bool,
    /// How cards pair in the tableau besides descending rank.
    pub pair: PairChecker,
}

impl Default for FortyThievesOptions {
    fn default() -> Self {
        Self {
            piles: 10,
            rows: 4,
            down_rows: 0,
            found_aces: false,
            move_sequences: false,
            pair: PairChecker::Suit,
        }
    }
}

/// Two decks, ten piles of four, one pass through the stock one card at a
/// time.
#[must_use]
pub fn forty_thieves(options: &FortyThievesOptions) -> SolitaireConfig {
    let mut rules = RuleSet::new()
        .with_pair(PairChecker::Down)
        .with_pair(options.pair.clone())
        .with_sort(SortChecker::Ace)
        .with_sort(SortChecker::Up);
    if !options.move_sequences {
        rules = rules
            .with_build(BuildChecker::MoveOne)
            .with_lane(LaneChecker::MoveOne);
    }

    let mut dealers = Vec::new();
    if options.found_aces {
        dealers.push(Dealer::AcesUp);
    }
    let down_rows = if options.down_rows > 0 {
        (options.down_rows + 1).min(options.rows)
    } else {
        0
    };
    if down_rows > 0 {
        dealers.push(Dealer::N { count: options.piles * down_rows, up: false });
    }
    let up_rows = options.rows - down_rows;
    if up_rows > 0 {
        dealers.push(Dealer::N { count: options.piles * up_rows, up: true });
    }
    dealers.push(Dealer::StockAll);

    SolitaireConfig::new("Forty Thieves")
        .with_tableau(options.piles)
        .with_foundations(8)
        .with_deck(DeckSpec::standard().with_decks(2))
        .with_turn_count(1)
        .with_max_passes(Some(1))
        .with_rules(rules)
        .with_dealers(dealers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;
    use crate::engine::Solitaire;

    #[test]
    fn test_spider_deal() {
        let game = Solitaire::new(spider(&SpiderOptions::default()).with_seed(5)).unwrap();
        assert_eq!(game.tableau(0).len(), 6);
        assert_eq!(game.tableau(9).len(), 5);
        assert_eq!(game.stock().len(), 50);
        assert!(!game.is_face_up(game.tableau(0)[0]));
    }

    #[test]
    fn test_one_suit_deck() {
        let config = spider(&SpiderOptions {
            suits: SpiderSuits::One,
            ..SpiderOptions::default()
        });
        let game = Solitaire::new(config.with_seed(1)).unwrap();
        assert_eq!(game.deck().len(), 104);
        assert!(game.deck().cards().iter().all(|card| card.suit() == Suit::Spades));
    }

    #[test]
    fn test_forty_thieves_found_aces() {
        let config = forty_thieves(&FortyThievesOptions {
            found_aces: true,
            down_rows: 1,
            ..FortyThievesOptions::default()
        });
        assert!(matches!(
            config.dealers.as_slice(),
            [
                Dealer::AcesUp,
                Dealer::N { count: 20, up: false },
                Dealer::N { count: 20, up: true },
                Dealer::StockAll
            ]
        ));

        let game = Solitaire::new(config.with_seed(8)).unwrap();
        assert!((0..8).all(|index| game.card(game.foundation(index)[0]).rank() == Rank::ACE));
        assert_eq!(game.stock().len(), 104 - 8 - 40);
    }
}
