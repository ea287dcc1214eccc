//! Playing cards: rank, suit, color, and rank arithmetic.
//!
//! A `Card` is immutable. Whether it is face up and which pile holds it are
//! tracked by the pile set, not by the card.
//!
//! ## Rank arithmetic
//!
//! Solitaire rules are mostly "one rank above" or "one rank below" checks.
//! With `wrap` enabled, King and Ace are adjacent (K-A-2 builds).
//!
//! ```
//! use solitaire_engine::core::{Card, CardId, Rank, Suit};
//!
//! let seven = Card::new(CardId(0), Rank::new(7).unwrap(), Suit::Hearts, 0);
//! let eight = Card::new(CardId(1), Rank::new(8).unwrap(), Suit::Spades, 0);
//!
//! assert!(seven.below(&eight, 1, false));
//! assert!(eight.above(&seven, 1, false));
//!
//! let ace = Card::new(CardId(2), Rank::ACE, Suit::Clubs, 0);
//! let king = Card::new(CardId(3), Rank::KING, Suit::Clubs, 0);
//! assert!(!ace.above(&king, 1, false));
//! assert!(ace.above(&king, 1, true));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;

const RANK_LETTERS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];

const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King",
];

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit. Declaration order is the deck's sort order (C, D, H, S).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Diamonds and hearts are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Parse a suit letter (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Number of ranks in a suit.
    pub const COUNT: u8 = 13;

    /// Create a rank from its ordinal. Returns `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=Self::COUNT).map(Rank)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Single-character rank symbol (`T` for ten).
    #[must_use]
    pub const fn letter(self) -> char {
        RANK_LETTERS[(self.0 - 1) as usize]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        RANK_NAMES[(self.0 - 1) as usize]
    }

    /// Lowercase plural name, as in "only sixes can be sorted".
    #[must_use]
    pub fn plural(self) -> String {
        let name = self.name().to_lowercase();
        if name.ends_with('x') {
            format!("{}es", name)
        } else {
            format!("{}s", name)
        }
    }

    /// Parse a rank symbol (case-insensitive, `T` or `10` for ten).
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        if text == "10" {
            return Some(Rank(10));
        }
        let mut chars = text.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        RANK_LETTERS
            .iter()
            .position(|&c| c == letter)
            .map(|index| Rank(index as u8 + 1))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A physical playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,
    deck_index: u8,
}

impl Card {
    /// Create a card. `deck_index` is the physical deck it came from.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit, deck_index: u8) -> Self {
        Self { id, rank, suit, deck_index }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn deck_index(&self) -> u8 {
        self.deck_index
    }

    /// Check that this card is `n` ranks above `other`.
    #[must_use]
    pub fn above(&self, other: &Card, n: u8, wrap: bool) -> bool {
        rank_distance(self.rank, other.rank, wrap) == i16::from(n)
    }

    /// Check that this card is `n` ranks below `other`.
    #[must_use]
    pub fn below(&self, other: &Card, n: u8, wrap: bool) -> bool {
        rank_distance(other.rank, self.rank, wrap) == i16::from(n)
    }

    /// Full name, e.g. "Seven of Hearts".
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// True if rank and suit match, regardless of identity.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.letter())
    }
}

fn rank_distance(high: Rank, low: Rank, wrap: bool) -> i16 {
    let mut diff = i16::from(high.0) - i16::from(low.0);
    if wrap && diff < 0 {
        diff += i16::from(Rank::COUNT);
    }
    diff
}
