//! The dealer catalogue.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, PileId, PileKind, Rank, SetupError, Suit};
use crate::engine::{Chooser, Solitaire};

/// One step of the setup pipeline.
///
/// Unless noted, cards are dealt from the top of the deck and tableau piles
/// are filled round-robin from the first pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dealer {
    /// Deal the aces face up onto the tableau, starting at the first
    /// shortest pile.
    Aces,
    /// Deal each ace to the first empty foundation of its suit.
    AcesUp,
    /// Deal the whole deck face up onto the tableau.
    All,
    /// Like `All`, but start at pile 4 so the first four piles are short.
    Bisley,
    /// Deal the fives and sixes of each suit as foundations.
    FiveSix,
    /// Flip every tableau card but the top face down with probability 1/2.
    FlipHalf,
    /// Flip one random non-top card per tableau pile face down.
    FlipRandom,
    /// Fill the free cells with the last cards dealt to the tableau, taking
    /// the top of the rightmost longest pile first and stepping left.
    Free,
    /// Piles of increasing size, only the top card face up.
    Klondike,
    /// Deal `count` cards, then turn every top card face up.
    N { count: usize, up: bool },
    /// One card face up to each tableau pile.
    OneRow,
    /// Turn every tableau card face up.
    Open,
    /// An overlapping pyramid: row `r` deals to piles `0..=r`.
    Pyramid,
    /// Take the queens out of the game.
    QueensOut,
    /// Deal `count` cards to random tableau piles.
    RandomN { count: usize, up: bool },
    /// Deal one card of the given rank per suit to the foundations.
    RankFoundations(Rank),
    /// Fill reserve piles `per_pile` cards at a time until the deck or the
    /// reserve runs out.
    ReserveByN { per_pile: usize, up: bool },
    /// Deal `count` cards round-robin to the reserve.
    ReserveN { count: usize, up: bool },
    /// Offer the top cards to the chooser; the pick starts a foundation and
    /// sets the foundation rank. Then deal one row.
    Selective,
    /// The top card starts its foundation and sets the foundation rank.
    StartFoundation,
    /// Move the rest of the deck to the stock, face down, in deck order.
    StockAll,
    /// Deal `count` cards in a triangle, then round-robin any remainder.
    TriangleN { count: usize, up: bool },
    /// Deal the twos face up onto the tableau, like `Aces`.
    Twos,
    /// Deal the rest of the deck face up to every tableau pile but the first.
    Yukon,
}

impl Dealer {
    /// Short name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Dealer::Aces => "aces",
            Dealer::AcesUp => "aces-up",
            Dealer::All => "all",
            Dealer::Bisley => "bisley",
            Dealer::FiveSix => "five-six",
            Dealer::FlipHalf => "flip-half",
            Dealer::FlipRandom => "flip-random",
            Dealer::Free => "free",
            Dealer::Klondike => "klondike",
            Dealer::N { .. } => "n",
            Dealer::OneRow => "one-row",
            Dealer::Open => "open",
            Dealer::Pyramid => "pyramid",
            Dealer::QueensOut => "queens-out",
            Dealer::RandomN { .. } => "random-n",
            Dealer::RankFoundations(_) => "rank-foundations",
            Dealer::ReserveByN { .. } => "reserve-by-n",
            Dealer::ReserveN { .. } => "reserve-n",
            Dealer::Selective => "selective",
            Dealer::StartFoundation => "start-foundation",
            Dealer::StockAll => "stock-all",
            Dealer::TriangleN { .. } => "triangle-n",
            Dealer::Twos => "twos",
            Dealer::Yukon => "yukon",
        }
    }

    /// Run this dealer against a game that is still being set up.
    pub fn deal(&self, game: &mut Solitaire, chooser: &mut Chooser<'_>) -> Result<(), SetupError> {
        let name = self.name();
        match *self {
            Dealer::Aces => deal_rank_to_tableau(game, Rank::ACE, name),
            Dealer::AcesUp => deal_aces_up(game, name),
            Dealer::All => deal_round_robin(game, 0, name),
            Dealer::Bisley => deal_round_robin(game, 4, name),
            Dealer::FiveSix => deal_five_six(game, name),
            Dealer::FlipHalf => {
                for pile in tableau(game, name)? {
                    let cards = game.piles().cards(pile).to_vec();
                    for &card in cards.iter().take(cards.len().saturating_sub(1)) {
                        let up = game.deal_rng().gen_bool(0.5);
                        game.piles_mut().set_face_up(card, up);
                    }
                }
                Ok(())
            }
            Dealer::FlipRandom => {
                for pile in tableau(game, name)? {
                    let cards = game.piles().cards(pile).to_vec();
                    if cards.len() < 2 {
                        continue;
                    }
                    let index = game.deal_rng().gen_range_usize(0..cards.len() - 1);
                    game.piles_mut().set_face_up(cards[index], false);
                }
                Ok(())
            }
            Dealer::Free => deal_free(game, name),
            Dealer::Klondike => {
                let tableau = tableau(game, name)?;
                for row in 0..tableau.len() {
                    for (index, &pile) in tableau.iter().enumerate().skip(row) {
                        deal_to(game, pile, index == row, name)?;
                    }
                }
                Ok(())
            }
            Dealer::N { count, up } => {
                let tableau = tableau(game, name)?;
                for index in 0..count {
                    deal_to(game, tableau[index % tableau.len()], up, name)?;
                }
                flip_tops(game, &tableau);
                Ok(())
            }
            Dealer::OneRow => deal_one_row(game, name),
            Dealer::Open => {
                for pile in tableau(game, name)? {
                    let cards = game.piles().cards(pile).to_vec();
                    for card in cards {
                        game.piles_mut().set_face_up(card, true);
                    }
                }
                Ok(())
            }
            Dealer::Pyramid => {
                let tableau = tableau(game, name)?;
                for row in 0..tableau.len() {
                    for &pile in &tableau[..=row] {
                        deal_to(game, pile, true, name)?;
                    }
                }
                Ok(())
            }
            Dealer::QueensOut => {
                let queens: Vec<CardId> = game
                    .deck()
                    .undealt()
                    .iter()
                    .copied()
                    .filter(|&card| game.card(card).rank() == Rank::QUEEN)
                    .collect();
                for queen in queens {
                    game.discard_card(queen);
                }
                Ok(())
            }
            Dealer::RandomN { count, up } => {
                let tableau = tableau(game, name)?;
                for _ in 0..count {
                    let index = game.deal_rng().gen_range_usize(0..tableau.len());
                    deal_to(game, tableau[index], up, name)?;
                }
                flip_tops(game, &tableau);
                Ok(())
            }
            Dealer::RankFoundations(rank) => {
                let suits = game.deck().spec().suits.clone();
                for suit in suits {
                    let card = undealt_face(game, rank, suit)?;
                    let foundation = open_foundation(game, card, name)?;
                    game.place_card(card, foundation, true);
                }
                Ok(())
            }
            Dealer::ReserveByN { per_pile, up } => {
                let reserve = reserve(game, name)?;
                for &pile in &reserve {
                    for _ in 0..per_pile {
                        if game.deal_card(pile, up).is_none() {
                            break;
                        }
                    }
                    if game.deck().undealt().is_empty() {
                        break;
                    }
                }
                flip_tops(game, &reserve);
                Ok(())
            }
            Dealer::ReserveN { count, up } => {
                let reserve = reserve(game, name)?;
                for index in 0..count {
                    deal_to(game, reserve[index % reserve.len()], up, name)?;
                }
                flip_tops(game, &reserve);
                Ok(())
            }
            Dealer::Selective => deal_selective(game, chooser, name),
            Dealer::StartFoundation => {
                let card = *game
                    .deck()
                    .undealt()
                    .last()
                    .ok_or(SetupError::DeckExhausted { dealer: name })?;
                let foundation = open_foundation(game, card, name)?;
                game.place_card(card, foundation, true);
                game.set_foundation_rank(game.card(card).rank());
                Ok(())
            }
            Dealer::StockAll => {
                let stock = game.piles().stock();
                let cards = game.deck().undealt().to_vec();
                for card in cards {
                    game.place_card(card, stock, false);
                }
                Ok(())
            }
            Dealer::TriangleN { count, up } => deal_triangle(game, count, up, name),
            Dealer::Twos => deal_rank_to_tableau(game, Rank::TWO, name),
            Dealer::Yukon => {
                let tableau = tableau(game, name)?;
                if tableau.len() < 2 {
                    return Err(SetupError::MissingPiles { dealer: name, kind: PileKind::Tableau });
                }
                let mut index = 0;
                while game.deal_card(tableau[1 + index % (tableau.len() - 1)], true).is_some() {
                    index += 1;
                }
                Ok(())
            }
        }
    }
}

// === Helpers ===

fn tableau(game: &Solitaire, dealer: &'static str) -> Result<Vec<PileId>, SetupError> {
    let piles = game.piles().tableau().to_vec();
    if piles.is_empty() {
        return Err(SetupError::MissingPiles { dealer, kind: PileKind::Tableau });
    }
    Ok(piles)
}

fn reserve(game: &Solitaire, dealer: &'static str) -> Result<Vec<PileId>, SetupError> {
    let piles = game.piles().reserve().to_vec();
    if piles.is_empty() {
        return Err(SetupError::MissingPiles { dealer, kind: PileKind::Reserve });
    }
    Ok(piles)
}

fn deal_to(
    game: &mut Solitaire,
    pile: PileId,
    up: bool,
    dealer: &'static str,
) -> Result<CardId, SetupError> {
    game.deal_card(pile, up).ok_or(SetupError::DeckExhausted { dealer })
}

fn flip_tops(game: &mut Solitaire, piles: &[PileId]) {
    for &pile in piles {
        if let Some(top) = game.piles().top(pile) {
            game.piles_mut().set_face_up(top, true);
        }
    }
}

/// The first undealt card with this face.
fn undealt_face(game: &Solitaire, rank: Rank, suit: Suit) -> Result<CardId, SetupError> {
    let deck = game.deck();
    deck.matching(rank, suit)
        .into_iter()
        .find(|card| deck.undealt().contains(card))
        .ok_or_else(|| SetupError::MissingCard(format!("{}{}", rank.letter(), suit.letter())))
}

/// The first empty foundation for a card, falling back to its first one.
fn open_foundation(
    game: &Solitaire,
    card: CardId,
    dealer: &'static str,
) -> Result<PileId, SetupError> {
    let candidates = game.find_foundation(card);
    candidates
        .iter()
        .copied()
        .find(|&pile| game.piles().is_empty(pile))
        .or_else(|| candidates.first().copied())
        .ok_or(SetupError::MissingPiles { dealer, kind: PileKind::Foundation })
}

fn deal_round_robin(game: &mut Solitaire, offset: usize, dealer: &'static str) -> Result<(), SetupError> {
    let tableau = tableau(game, dealer)?;
    let mut index = offset;
    while game.deal_card(tableau[index % tableau.len()], true).is_some() {
        index += 1;
    }
    Ok(())
}

fn deal_free(game: &mut Solitaire, dealer: &'static str) -> Result<(), SetupError> {
    let tableau = tableau(game, dealer)?;
    if game.piles().cell_capacity() == 0 {
        return Err(SetupError::MissingPiles { dealer, kind: PileKind::Cells });
    }
    let longest = tableau
        .iter()
        .map(|&pile| game.piles().len(pile))
        .max()
        .unwrap_or(0);
    let mut index = tableau
        .iter()
        .rposition(|&pile| game.piles().len(pile) == longest)
        .unwrap_or(0);

    let cells = game.piles().cells();
    for _ in 0..game.piles().free_cells() {
        let card = game
            .piles()
            .top(tableau[index])
            .ok_or(SetupError::DeckExhausted { dealer })?;
        game.piles_mut().remove(card);
        game.piles_mut().push(cells, card, true);
        index = (index + tableau.len() - 1) % tableau.len();
    }
    Ok(())
}

fn deal_one_row(game: &mut Solitaire, dealer: &'static str) -> Result<(), SetupError> {
    for pile in tableau(game, dealer)? {
        deal_to(game, pile, true, dealer)?;
    }
    Ok(())
}

/// Deal every card of `rank`, top of the deck first, round-robin from the
/// first shortest tableau pile.
fn deal_rank_to_tableau(game: &mut Solitaire, rank: Rank, dealer: &'static str) -> Result<(), SetupError> {
    let tableau = tableau(game, dealer)?;
    let shortest = tableau
        .iter()
        .map(|&pile| game.piles().len(pile))
        .min()
        .unwrap_or(0);
    let mut next = tableau
        .iter()
        .position(|&pile| game.piles().len(pile) == shortest)
        .unwrap_or(0);

    let cards: Vec<CardId> = game
        .deck()
        .undealt()
        .iter()
        .rev()
        .copied()
        .filter(|&card| game.card(card).rank() == rank)
        .collect();
    for card in cards {
        game.place_card(card, tableau[next], true);
        next = (next + 1) % tableau.len();
    }
    Ok(())
}

fn deal_aces_up(game: &mut Solitaire, dealer: &'static str) -> Result<(), SetupError> {
    let aces: Vec<CardId> = game
        .deck()
        .undealt()
        .iter()
        .copied()
        .filter(|&card| game.card(card).rank() == Rank::ACE)
        .collect();
    for ace in aces {
        let open = game
            .find_foundation(ace)
            .into_iter()
            .find(|&pile| game.piles().is_empty(pile));
        match open {
            Some(foundation) => {
                game.place_card(ace, foundation, true);
            }
            None if game.find_foundation(ace).is_empty() => {
                return Err(SetupError::MissingPiles { dealer, kind: PileKind::Foundation });
            }
            // More aces than foundations: the extras stay in the deck.
            None => {}
        }
    }
    Ok(())
}

fn deal_five_six(game: &mut Solitaire, dealer: &'static str) -> Result<(), SetupError> {
    let suits = game.deck().spec().suits.clone();
    let foundations = game.piles().foundations().to_vec();
    if foundations.len() < suits.len() * 2 {
        return Err(SetupError::InvalidConfig(format!(
            "the {} dealer needs {} foundations",
            dealer,
            suits.len() * 2
        )));
    }
    for (index, &suit) in suits.iter().enumerate() {
        let five = undealt_face(game, Rank::FIVE, suit)?;
        game.place_card(five, foundations[index], true);
        let six = undealt_face(game, Rank::SIX, suit)?;
        game.place_card(six, foundations[index + suits.len()], true);
    }
    Ok(())
}

fn deal_selective(
    game: &mut Solitaire,
    chooser: &mut Chooser<'_>,
    dealer: &'static str,
) -> Result<(), SetupError> {
    let offer_count = tableau(game, dealer)?.len() + 1;
    let offered: Vec<CardId> = game
        .deck()
        .undealt()
        .iter()
        .rev()
        .take(offer_count)
        .copied()
        .collect();
    if offered.is_empty() {
        return Err(SetupError::DeckExhausted { dealer });
    }

    let faces: Vec<Card> = offered.iter().map(|&card| *game.card(card)).collect();
    let choice = chooser(&faces);
    let card = *offered.get(choice).ok_or(SetupError::InvalidChoice(choice))?;
    log::debug!("{}: selected {} to start the foundations", game.config().name, faces[choice]);

    let foundation = open_foundation(game, card, dealer)?;
    game.place_card(card, foundation, true);
    game.set_foundation_rank(game.card(card).rank());
    deal_one_row(game, dealer)
}

/// Rows of shrinking width (row `r` covers piles `r..`), stopping after
/// `count` cards. Leftovers go round-robin from the first pile.
fn deal_triangle(
    game: &mut Solitaire,
    count: usize,
    up: bool,
    dealer: &'static str,
) -> Result<(), SetupError> {
    let tableau = tableau(game, dealer)?;
    let mut dealt = 0;
    'rows: for row in 0..tableau.len() {
        for &pile in &tableau[row..] {
            if dealt == count {
                break 'rows;
            }
            deal_to(game, pile, up, dealer)?;
            dealt += 1;
        }
    }
    for index in 0..count - dealt {
        deal_to(game, tableau[index % tableau.len()], up, dealer)?;
    }
    if !up {
        flip_tops(game, &tableau);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DealMode, DeckSpec, SolitaireConfig};

    fn config(dealers: Vec<Dealer>) -> SolitaireConfig {
        SolitaireConfig::new("Dealers")
            .with_deal(DealMode::Unshuffled)
            .with_dealers(dealers)
    }

    fn dealt(config: SolitaireConfig) -> Solitaire {
        Solitaire::new(config).unwrap()
    }

    fn top_is_up(game: &Solitaire, cards: &[CardId]) -> bool {
        cards.last().map_or(true, |&card| game.is_face_up(card))
    }

    #[test]
    fn test_klondike_shape() {
        let game = dealt(config(vec![Dealer::Klondike, Dealer::StockAll]));
        for index in 0..7 {
            let pile = game.tableau(index);
            assert_eq!(pile.len(), index + 1);
            assert!(top_is_up(&game, pile));
            assert_eq!(pile.iter().filter(|&&card| game.is_face_up(card)).count(), 1);
        }
        assert_eq!(game.stock().len(), 24);
        assert!(game.stock().iter().all(|&card| !game.is_face_up(card)));
    }

    #[test]
    fn test_stock_all_keeps_deck_order() {
        let mut game = Solitaire::empty(config(vec![])).unwrap();
        let order = game.deck().undealt().to_vec();
        Dealer::StockAll.deal(&mut game, &mut |_: &[Card]| 0).unwrap();
        assert_eq!(game.stock(), order.as_slice());
    }

    #[test]
    fn test_n_flips_tops() {
        let game = dealt(config(vec![Dealer::N { count: 17, up: false }, Dealer::StockAll]));
        assert_eq!(game.tableau(0).len(), 3);
        assert_eq!(game.tableau(3).len(), 2);
        for index in 0..7 {
            let pile = game.tableau(index);
            assert!(top_is_up(&game, pile));
            assert!(!game.is_face_up(pile[0]));
        }
    }

    #[test]
    fn test_deck_exhausted() {
        let err = Solitaire::new(config(vec![Dealer::N { count: 60, up: true }])).unwrap_err();
        assert_eq!(err, SetupError::DeckExhausted { dealer: "n" });
    }

    #[test]
    fn test_missing_reserve() {
        let err = Solitaire::new(config(vec![Dealer::ReserveN { count: 13, up: false }]))
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::MissingPiles { dealer: "reserve-n", kind: PileKind::Reserve }
        );
    }

    #[test]
    fn test_aces_round_robin() {
        let game = dealt(config(vec![Dealer::Aces, Dealer::All]));
        for index in 0..4 {
            let bottom = game.tableau(index)[0];
            assert_eq!(game.card(bottom).rank(), Rank::ACE);
        }
        assert_ne!(game.card(game.tableau(4)[0]).rank(), Rank::ACE);
    }

    #[test]
    fn test_aces_up_two_decks() {
        let config = config(vec![Dealer::AcesUp, Dealer::All])
            .with_foundations(8)
            .with_deck(DeckSpec::standard().with_decks(2));
        let game = dealt(config);
        for index in 0..8 {
            let foundation = game.foundation(index);
            assert_eq!(foundation.len(), 1);
            assert_eq!(game.card(foundation[0]).rank(), Rank::ACE);
        }
    }

    #[test]
    fn test_five_six() {
        let game = dealt(config(vec![Dealer::FiveSix, Dealer::All]).with_foundations(8));
        assert_eq!(game.card(game.foundation(0)[0]).rank(), Rank::FIVE);
        assert_eq!(game.card(game.foundation(0)[0]).suit(), Suit::Clubs);
        assert_eq!(game.card(game.foundation(7)[0]).rank(), Rank::SIX);
        assert_eq!(game.card(game.foundation(7)[0]).suit(), Suit::Spades);
    }

    #[test]
    fn test_five_six_needs_eight_foundations() {
        let err = Solitaire::new(config(vec![Dealer::FiveSix])).unwrap_err();
        assert!(matches!(err, SetupError::InvalidConfig(_)));
    }

    #[test]
    fn test_free_takes_last_dealt_cards() {
        let config = config(vec![Dealer::All]).with_tableau(8).with_cells(4);
        let dealt_only = dealt(config.clone());
        let last: Vec<CardId> = (0..4)
            .map(|index| *dealt_only.tableau(3 - index).last().unwrap())
            .collect();

        let game = dealt(config.with_dealers(vec![Dealer::All, Dealer::Free]));
        assert_eq!(game.cells(), last.as_slice());
        assert!(game.cells().iter().all(|&card| game.is_face_up(card)));
        assert_eq!(game.piles().free_cells(), 0);
        assert_eq!(game.tableau(3).len(), 6);
        assert_eq!(game.tableau(4).len(), 6);
        assert_eq!(game.piles().total_cards(), 52);
    }

    #[test]
    fn test_free_wraps_to_the_last_pile() {
        let config = config(vec![Dealer::N { count: 9, up: true }, Dealer::Free, Dealer::StockAll])
            .with_tableau(4)
            .with_cells(3);
        let game = dealt(config);
        // Pile 0 holds the ninth card; then piles 3 and 2.
        assert_eq!(game.tableau(0).len(), 2);
        assert_eq!(game.tableau(3).len(), 1);
        assert_eq!(game.tableau(2).len(), 1);
        assert_eq!(game.cells().len(), 3);
    }

    #[test]
    fn test_free_needs_cells() {
        let err = Solitaire::new(config(vec![Dealer::All, Dealer::Free])).unwrap_err();
        assert_eq!(err, SetupError::MissingPiles { dealer: "free", kind: PileKind::Cells });
    }

    #[test]
    fn test_pyramid_shape() {
        let game = dealt(config(vec![Dealer::Pyramid, Dealer::StockAll]));
        for index in 0..7 {
            assert_eq!(game.tableau(index).len(), 7 - index);
        }
        assert_eq!(game.stock().len(), 24);
    }

    #[test]
    fn test_queens_out() {
        let game = dealt(config(vec![Dealer::QueensOut, Dealer::All]));
        assert_eq!(game.deck().discarded().len(), 4);
        assert_eq!(game.deck().live_count(), 48);
        assert_eq!(game.piles().total_cards(), 48);
    }

    #[test]
    fn test_rank_foundations() {
        let game = dealt(config(vec![Dealer::RankFoundations(Rank::KING), Dealer::All]));
        for index in 0..4 {
            assert_eq!(game.card(game.foundation(index)[0]).rank(), Rank::KING);
        }
    }

    #[test]
    fn test_reserve_by_n() {
        let config = config(vec![Dealer::ReserveByN { per_pile: 4, up: false }]).with_reserve(13);
        let game = dealt(config);
        for index in 0..13 {
            let pile = game.reserve(index);
            assert_eq!(pile.len(), 4);
            assert!(top_is_up(&game, pile));
            assert!(!game.is_face_up(pile[0]));
        }
    }

    #[test]
    fn test_start_foundation_sets_rank() {
        let mut game = Solitaire::empty(config(vec![])).unwrap();
        let top = *game.deck().undealt().last().unwrap();
        Dealer::StartFoundation.deal(&mut game, &mut |_: &[Card]| 0).unwrap();
        assert_eq!(game.foundation_rank(), game.card(top).rank());
        assert_eq!(game.location(top), game.find_foundation(top).first().copied());
    }

    #[test]
    fn test_selective_uses_choice() {
        let config = config(vec![Dealer::Selective, Dealer::StockAll]).with_tableau(4);
        let mut offered = Vec::new();
        let game = Solitaire::new_with_chooser(config, &mut |cards: &[Card]| {
            offered = cards.to_vec();
            2
        })
        .unwrap();

        assert_eq!(offered.len(), 5);
        assert_eq!(game.foundation_rank(), offered[2].rank());
        assert_eq!(game.piles().foundation_total(), 1);
        assert!((0..4).all(|index| game.tableau(index).len() == 1));
    }

    #[test]
    fn test_selective_invalid_choice() {
        let config = config(vec![Dealer::Selective, Dealer::StockAll]);
        let err = Solitaire::new_with_chooser(config, &mut |_: &[Card]| 99).unwrap_err();
        assert_eq!(err, SetupError::InvalidChoice(99));
    }

    #[test]
    fn test_triangle_remainder() {
        let config = config(vec![Dealer::TriangleN { count: 30, up: false }, Dealer::StockAll]);
        let game = dealt(config);
        // 28 in the triangle, two more round-robin.
        assert_eq!(game.tableau(0).len(), 2);
        assert_eq!(game.tableau(1).len(), 3);
        assert_eq!(game.tableau(6).len(), 7);
        assert!(top_is_up(&game, game.tableau(6)));
    }

    #[test]
    fn test_yukon_skips_first_pile() {
        let game = dealt(config(vec![Dealer::Klondike, Dealer::Yukon]));
        assert_eq!(game.tableau(0).len(), 1);
        let total: usize = (1..7).map(|index| game.tableau(index).len()).sum();
        assert_eq!(total, 51);
        assert!(game.tableau(6).iter().skip(6).all(|&card| game.is_face_up(card)));
    }

    #[test]
    fn test_flip_dealers_are_seeded() {
        let config = SolitaireConfig::new("Flip")
            .with_seed(11)
            .with_dealers(vec![Dealer::All, Dealer::FlipRandom, Dealer::FlipHalf]);
        let a = dealt(config.clone());
        let b = dealt(config);
        assert_eq!(a.piles(), b.piles());
        for index in 0..7 {
            assert!(top_is_up(&a, a.tableau(index)));
        }
    }

    #[test]
    fn test_flip_random_one_per_pile() {
        let config = config(vec![Dealer::All, Dealer::FlipRandom]);
        let game = dealt(config);
        for index in 0..7 {
            let pile = game.tableau(index);
            let down = pile.iter().filter(|&&card| !game.is_face_up(card)).count();
            assert_eq!(down, 1);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Dealer::ReserveN { count: 1, up: true }.name(), "reserve-n");
        assert_eq!(Dealer::StockAll.name(), "stock-all");
        assert_eq!(Dealer::RankFoundations(Rank::ACE).name(), "rank-foundations");
    }
}
