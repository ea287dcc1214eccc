//! The deck: card arena, undealt cards, discards, and card lookup.
//!
//! The deck owns every `Card` of a game (one or more physical decks) and
//! hands out `CardId`s. Undealt cards are kept in a list whose end is the
//! top of the deck; dealers pop from it.
//!
//! ## Shuffles
//!
//! - `shuffle` is a uniform shuffle driven by `GameRng`.
//! - `shuffle_numbered` reproduces the classic numbered deals: cards are
//!   sorted by (rank, suit), then repeatedly a `rand() % len` card is swapped
//!   to the end and removed. Cards come off the deck in removal order.
//!
//! ## Card lookup
//!
//! ```
//! use solitaire_engine::core::{Deck, DeckSpec, LocationTag};
//!
//! let deck = Deck::new(&DeckSpec::standard().with_decks(2));
//! let kings = deck.find("ks").unwrap();
//! assert_eq!(kings.len(), 2);
//!
//! let query = Deck::parse("KS-T3").unwrap();
//! assert_eq!(query.location, Some(LocationTag::Tableau(2)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use super::entity::CardId;
use super::error::CardParseError;
use super::rng::{DealRng, GameRng};

/// Candidate cards for one card token. Two decks is the common case.
pub type Candidates = SmallVec<[CardId; 2]>;

/// Composition of the deck: how many physical decks and which suits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Number of physical decks shuffled together.
    pub decks: u8,
    /// Suits present in each deck (one- and two-suit Spider use fewer).
    pub suits: Vec<Suit>,
}

impl DeckSpec {
    /// One standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            decks: 1,
            suits: Suit::ALL.to_vec(),
        }
    }

    /// Set the number of decks.
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        assert!(decks > 0, "Must have at least 1 deck");
        self.decks = decks;
        self
    }

    /// Restrict the suits of each deck.
    #[must_use]
    pub fn with_suits(mut self, suits: &[Suit]) -> Self {
        assert!(!suits.is_empty(), "Must have at least 1 suit");
        self.suits = suits.to_vec();
        self
    }

    /// Total number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        usize::from(self.decks) * self.suits.len() * usize::from(Rank::COUNT)
    }

    /// Position of a suit in the suit list.
    #[must_use]
    pub fn suit_index(&self, suit: Suit) -> Option<usize> {
        self.suits.iter().position(|&s| s == suit)
    }
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self::standard()
    }
}

/// Location filter attached to a card token (`-T3`, `-R`, `-F`, `-W`).
///
/// Pile numbers are 0-based here; the text form is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationTag {
    Tableau(usize),
    Reserve(usize),
    Cells,
    Waste,
}

/// A parsed card token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardQuery {
    pub rank: Rank,
    pub suit: Suit,
    pub location: Option<LocationTag>,
}

/// The card arena plus the undealt and discarded card lists.
#[derive(Clone, Debug)]
pub struct Deck {
    spec: DeckSpec,
    cards: Vec<Card>,
    undealt: Vec<CardId>,
    discarded: Vec<CardId>,
}

impl Deck {
    /// Build an unshuffled deck: deck by deck, suit by suit, Ace to King.
    #[must_use]
    pub fn new(spec: &DeckSpec) -> Self {
        let mut cards = Vec::with_capacity(spec.size());
        for deck_index in 0..spec.decks {
            for &suit in &spec.suits {
                for rank in Rank::all() {
                    let id = CardId(cards.len() as u16);
                    cards.push(Card::new(id, rank, suit, deck_index));
                }
            }
        }
        let undealt = cards.iter().map(Card::id).collect();
        Self {
            spec: spec.clone(),
            cards,
            undealt,
            discarded: Vec::new(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &DeckSpec {
        &self.spec
    }

    /// Look up a card by id.
    ///
    /// Panics if the id did not come from this deck.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Every card in the game, in id order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total number of cards, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Undealt cards; the last entry is the top of the deck.
    #[must_use]
    pub fn undealt(&self) -> &[CardId] {
        &self.undealt
    }

    #[must_use]
    pub fn discarded(&self) -> &[CardId] {
        &self.discarded
    }

    /// Cards that count toward the win: everything not discarded.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cards.len() - self.discarded.len()
    }

    /// Uniformly shuffle the undealt cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.undealt);
    }

    /// Shuffle the undealt cards as numbered deal `number`.
    pub fn shuffle_numbered(&mut self, number: u32) {
        let cards = &self.cards;
        self.undealt.sort_by_key(|&id| {
            let card = &cards[id.index()];
            (card.rank(), card.suit(), card.deck_index())
        });

        let mut rng = DealRng::new(number);
        let mut removed = Vec::with_capacity(self.undealt.len());
        while !self.undealt.is_empty() {
            let swap = rng.next_value() as usize % self.undealt.len();
            let last = self.undealt.len() - 1;
            self.undealt.swap(swap, last);
            removed.extend(self.undealt.pop());
        }
        removed.reverse();
        self.undealt = removed;
    }

    /// Take the top undealt card.
    pub fn deal(&mut self) -> Option<CardId> {
        self.undealt.pop()
    }

    /// Take a specific undealt card out of the deck.
    pub fn take(&mut self, id: CardId) -> Option<CardId> {
        let index = self.undealt.iter().position(|&c| c == id)?;
        Some(self.undealt.remove(index))
    }

    /// Remove a card from the game. Discarded cards do not count toward the win.
    pub fn discard(&mut self, id: CardId) {
        self.undealt.retain(|&c| c != id);
        if !self.discarded.contains(&id) {
            self.discarded.push(id);
        }
    }

    #[must_use]
    pub fn is_discarded(&self, id: CardId) -> bool {
        self.discarded.contains(&id)
    }

    /// All physical cards with the given rank and suit, in id order.
    #[must_use]
    pub fn matching(&self, rank: Rank, suit: Suit) -> Candidates {
        self.cards
            .iter()
            .filter(|card| card.rank() == rank && card.suit() == suit)
            .map(Card::id)
            .collect()
    }

    /// Find every physical card a token names, ignoring any location tag.
    pub fn find(&self, text: &str) -> Result<Candidates, CardParseError> {
        let query = Self::parse(text)?;
        Ok(self.matching(query.rank, query.suit))
    }

    /// Parse a card token: rank, suit, and an optional `-location` tag.
    pub fn parse(text: &str) -> Result<CardQuery, CardParseError> {
        let text = text.trim();
        let (card_text, location_text) = match text.split_once('-') {
            Some((card, location)) => (card, Some(location)),
            None => (text, None),
        };

        let malformed = || CardParseError::Malformed(text.to_string());
        let suit_letter = card_text.chars().last().ok_or_else(malformed)?;
        let suit = Suit::from_letter(suit_letter).ok_or_else(malformed)?;
        let rank_text = &card_text[..card_text.len() - suit_letter.len_utf8()];
        let rank = Rank::from_text(rank_text).ok_or_else(malformed)?;

        let location = location_text.map(parse_location).transpose()?;
        Ok(CardQuery { rank, suit, location })
    }
}

fn parse_location(text: &str) -> Result<LocationTag, CardParseError> {
    let upper = text.trim().to_ascii_uppercase();
    let bad = || CardParseError::BadLocation(text.to_string());

    // Bare numbers name tableau piles.
    if !upper.is_empty() && upper.chars().all(|c| c.is_ascii_digit()) {
        return pile_number(&upper).map(LocationTag::Tableau).ok_or_else(bad);
    }

    let mut chars = upper.chars();
    let kind = chars.next().ok_or_else(bad)?;
    let number = chars.as_str();
    let index = if number.is_empty() {
        Some(0)
    } else {
        pile_number(number)
    };

    match (kind, index) {
        ('T', Some(index)) => Ok(LocationTag::Tableau(index)),
        ('R', Some(index)) => Ok(LocationTag::Reserve(index)),
        ('F', _) if number.is_empty() => Ok(LocationTag::Cells),
        ('W', _) if number.is_empty() => Ok(LocationTag::Waste),
        _ => Err(bad()),
    }
}

fn pile_number(text: &str) -> Option<usize> {
    let number: usize = text.parse().ok()?;
    number.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::new(&DeckSpec::standard());
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.undealt().len(), 52);
        assert_eq!(deck.live_count(), 52);

        let first = deck.card(CardId(0));
        assert_eq!(first.rank(), Rank::ACE);
        assert_eq!(first.suit(), Suit::Clubs);
    }

    #[test]
    fn test_multi_deck() {
        let spec = DeckSpec::standard().with_decks(2).with_suits(&[Suit::Spades, Suit::Hearts]);
        let deck = Deck::new(&spec);
        assert_eq!(deck.len(), 52);
        assert_eq!(spec.suit_index(Suit::Hearts), Some(1));
        assert_eq!(spec.suit_index(Suit::Clubs), None);

        let aces = deck.find("AS").unwrap();
        assert_eq!(aces.len(), 2);
        assert_ne!(aces[0], aces[1]);
        assert!(deck.find("AC").unwrap().is_empty());
    }

    #[test]
    fn test_parse() {
        let query = Deck::parse("7h").unwrap();
        assert_eq!(query.rank, Rank::new(7).unwrap());
        assert_eq!(query.suit, Suit::Hearts);
        assert_eq!(query.location, None);

        assert_eq!(Deck::parse("10D").unwrap().rank, Rank::new(10).unwrap());
        assert_eq!(Deck::parse("KS-3").unwrap().location, Some(LocationTag::Tableau(2)));
        assert_eq!(Deck::parse("KS-t10").unwrap().location, Some(LocationTag::Tableau(9)));
        assert_eq!(Deck::parse("KS-R").unwrap().location, Some(LocationTag::Reserve(0)));
        assert_eq!(Deck::parse("KS-r2").unwrap().location, Some(LocationTag::Reserve(1)));
        assert_eq!(Deck::parse("KS-F").unwrap().location, Some(LocationTag::Cells));
        assert_eq!(Deck::parse("KS-w").unwrap().location, Some(LocationTag::Waste));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Deck::parse(""), Err(CardParseError::Malformed(_))));
        assert!(matches!(Deck::parse("ZH"), Err(CardParseError::Malformed(_))));
        assert!(matches!(Deck::parse("7X"), Err(CardParseError::Malformed(_))));
        assert!(matches!(Deck::parse("7H-Q"), Err(CardParseError::BadLocation(_))));
        assert!(matches!(Deck::parse("7H-0"), Err(CardParseError::BadLocation(_))));
        assert!(matches!(Deck::parse("7H-F2"), Err(CardParseError::BadLocation(_))));
    }

    #[test]
    fn test_deal_and_take() {
        let mut deck = Deck::new(&DeckSpec::standard());
        let top = deck.deal().unwrap();
        assert_eq!(deck.card(top).rank(), Rank::KING);
        assert_eq!(deck.undealt().len(), 51);

        let ace = deck.find("AH").unwrap()[0];
        assert_eq!(deck.take(ace), Some(ace));
        assert_eq!(deck.take(ace), None);
        assert_eq!(deck.undealt().len(), 50);
    }

    #[test]
    fn test_discard() {
        let mut deck = Deck::new(&DeckSpec::standard());
        let queen = deck.find("QS").unwrap()[0];
        deck.discard(queen);
        deck.discard(queen);
        assert!(deck.is_discarded(queen));
        assert_eq!(deck.live_count(), 51);
        assert_eq!(deck.undealt().len(), 51);
    }

    #[test]
    fn test_uniform_shuffle_is_seeded() {
        let mut a = Deck::new(&DeckSpec::standard());
        let mut b = Deck::new(&DeckSpec::standard());
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a.undealt(), b.undealt());

        let unshuffled = Deck::new(&DeckSpec::standard());
        assert_ne!(a.undealt(), unshuffled.undealt());
    }

    #[test]
    fn test_numbered_shuffle_deal_one() {
        // FreeCell deal #1 starts JD 2D 9H JC 5D 7H 7C 5H.
        let mut deck = Deck::new(&DeckSpec::standard());
        deck.shuffle_numbered(1);
        let dealt: Vec<String> = (0..8)
            .map(|_| {
                let id = deck.deal().unwrap();
                deck.card(id).to_string()
            })
            .collect();
        assert_eq!(dealt, vec!["JD", "2D", "9H", "JC", "5D", "7H", "7C", "5H"]);
    }

    #[test]
    fn test_numbered_shuffle_keeps_every_card() {
        let mut deck = Deck::new(&DeckSpec::standard());
        deck.shuffle_numbered(11982);
        let mut ids = deck.undealt().to_vec();
        ids.sort();
        let expected: Vec<_> = (0..52).map(CardId).collect();
        assert_eq!(ids, expected);
    }
}
