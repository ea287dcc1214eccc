//! Dealer integration tests.
//!
//! Every preset must place every card exactly once, deal the same layout
//! for the same seed, and leave nothing in the deck.

use solitaire_engine::core::{Card, CardId, Rank, SetupError, SolitaireConfig};
use solitaire_engine::dealers::Dealer;
use solitaire_engine::engine::Solitaire;
use solitaire_engine::games::{self, *};

fn presets() -> Vec<SolitaireConfig> {
    vec![
        games::klondike(&KlondikeOptions::default()),
        games::klondike(&KlondikeOptions { turn_count: 1, max_passes: Some(3), ..KlondikeOptions::default() }),
        games::yukon(&YukonOptions::default()),
        games::yukon(&YukonOptions { suits: true, ..YukonOptions::default() }),
        games::thoughtful(&ThoughtfulOptions::default()),
        games::freecell(&FreeCellOptions::default()),
        games::bakers_game(&FreeCellOptions::default()),
        games::freecell(&FreeCellOptions { cells: 2, piles: 10, ..FreeCellOptions::default() }),
        games::freecell(&FreeCellOptions { fill_free: true, challenge: true, ..FreeCellOptions::default() }),
        games::freecell(&FreeCellOptions { egnellahc: true, supercell: true, ..FreeCellOptions::default() }),
        games::canfield(&CanfieldOptions::default()),
        games::canfield(&CanfieldOptions { foundation: Some(Rank::ACE), ..CanfieldOptions::default() }),
        games::canfield(&CanfieldOptions { selective: true, piles: 5, ..CanfieldOptions::default() }),
        games::pyramid(&PyramidOptions::default()),
        games::pyramid(&PyramidOptions { cells: 1, reserve_piles: 3, ..PyramidOptions::default() }),
        games::monte_carlo(&MonteCarloOptions::default()),
        games::monte_carlo(&MonteCarloOptions { rows: 4, thirteen: true }),
        games::spider(&SpiderOptions::default()),
        games::spider(&SpiderOptions { suits: SpiderSuits::Two, ..SpiderOptions::default() }),
        games::forty_thieves(&FortyThievesOptions::default()),
        games::forty_thieves(&FortyThievesOptions { found_aces: true, down_rows: 2, ..FortyThievesOptions::default() }),
        games::bisley(),
        games::quadrille(&QuadrilleOptions::default()),
    ]
}

/// Every card is in exactly one pile or discarded.
fn assert_complete(game: &Solitaire) {
    let deck = game.deck();
    assert!(deck.undealt().is_empty(), "{}: cards left in the deck", game.config().name);
    assert_eq!(
        game.piles().total_cards() + deck.discarded().len(),
        deck.len(),
        "{}: cards missing",
        game.config().name
    );
    for index in 0..deck.len() {
        let card = CardId(index as u16);
        assert_ne!(
            game.location(card).is_some(),
            deck.is_discarded(card),
            "{}: card {} placed and discarded",
            game.config().name,
            game.card(card)
        );
    }
}

// =============================================================================
// Completeness
// =============================================================================

#[test]
fn test_presets_deal_every_card() {
    for config in presets() {
        for seed in 0..20 {
            let game = Solitaire::new(config.clone().with_seed(seed)).unwrap();
            assert_complete(&game);
        }
    }
}

#[test]
fn test_numbered_deals_are_complete() {
    for number in [1, 617, 11982, 32000] {
        let game = Solitaire::new(games::freecell_numbered(number)).unwrap();
        assert_complete(&game);
        assert_eq!(game.tableau(0).len(), 7);
        assert_eq!(game.tableau(7).len(), 6);
    }
}

/// The same seed deals the same layout; another seed almost surely does not.
#[test]
fn test_seeded_deals_repeat() {
    for config in presets() {
        let first = Solitaire::new(config.clone().with_seed(77)).unwrap();
        let second = Solitaire::new(config.clone().with_seed(77)).unwrap();
        let other = Solitaire::new(config.with_seed(78)).unwrap();
        assert_eq!(first.piles(), second.piles());
        assert_ne!(first.piles(), other.piles());
    }
}

// =============================================================================
// Dealer Failures
// =============================================================================

#[test]
fn test_leftover_cards_are_an_error() {
    let config = SolitaireConfig::new("Short")
        .with_tableau(4)
        .with_dealers(vec![Dealer::N { count: 8, up: true }]);
    assert_eq!(Solitaire::new(config).unwrap_err(), SetupError::UndealtCards(44));
}

#[test]
fn test_missing_reserve_is_an_error() {
    let config = SolitaireConfig::new("No Reserve")
        .with_dealers(vec![Dealer::ReserveN { count: 13, up: false }, Dealer::StockAll]);
    assert!(matches!(
        Solitaire::new(config),
        Err(SetupError::MissingPiles { .. })
    ));
}

#[test]
fn test_overdeal_is_an_error() {
    let config = SolitaireConfig::new("Greedy")
        .with_tableau(10)
        .with_dealers(vec![Dealer::N { count: 60, up: true }]);
    assert!(matches!(
        Solitaire::new(config),
        Err(SetupError::DeckExhausted { dealer: "n" })
    ));
}

// =============================================================================
// Selective Deal
// =============================================================================

/// The chooser sees one more card than there are tableau piles, and its
/// pick fixes the foundation rank.
#[test]
fn test_selective_chooser() {
    let config = games::canfield(&CanfieldOptions { selective: true, ..CanfieldOptions::default() });
    let mut offered = Vec::new();
    let mut chooser = |cards: &[Card]| {
        offered = cards.to_vec();
        cards.len() - 1
    };
    let game = Solitaire::new_with_chooser(config.with_seed(3), &mut chooser).unwrap();

    assert_eq!(offered.len(), 5);
    let chosen = offered[4];
    let starter = game
        .piles()
        .foundations()
        .iter()
        .find_map(|&pile| game.piles().top(pile))
        .unwrap();
    assert_eq!(*game.card(starter), chosen);
    assert_eq!(game.foundation_rank(), chosen.rank());
    assert_complete(&game);
}

#[test]
fn test_selective_bad_choice() {
    let config = games::canfield(&CanfieldOptions { selective: true, ..CanfieldOptions::default() });
    let result = Solitaire::new_with_chooser(config.with_seed(3), &mut |_: &[Card]| 9);
    assert_eq!(result.unwrap_err(), SetupError::InvalidChoice(9));
}
