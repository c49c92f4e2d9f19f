//! Card identity: suit, rank, color, and face orientation.
//!
//! Suit and rank are fixed at construction; only the face orientation
//! mutates. During normal play a card is only ever turned face-up; undo is
//! the one path that turns a revealed card back face-down.

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const CARDS_PER_DECK: usize = 52;

/// Card suit. The discriminant doubles as the foundation pile index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in foundation-pile order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Foundation pile index for this suit.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Derived color: Hearts/Diamonds are red, Clubs/Spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// One-letter abbreviation (H, D, C, S).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        write!(f, "{name}")
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, Ace low through King high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank value: Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Abbreviation used in the compact board rendering.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        write!(f, "{name}")
    }
}

/// A single playing card.
///
/// Equality and hashing cover the full state including orientation, so two
/// snapshots compare equal only when face states match as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up. Idempotent.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down. Only undo compensation uses this.
    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Placement test for tableau columns: this card may rest on `base` iff
    /// the colors differ and this card's rank is strictly lower.
    ///
    /// Deliberately NOT the traditional exactly-one-lower Klondike rule; a
    /// black 5 stacks on a red 8 here. Foundations use their own
    /// contiguity rule instead (see `Foundation::accept`).
    #[must_use]
    pub fn stacks_on(self, base: Card) -> bool {
        self.color() != base.color() && self.rank.value() < base.rank.value()
    }

    /// Compact rendering such as `AH` or `10S`.
    #[must_use]
    pub fn abbreviated(self) -> String {
        format!("{}{}", self.rank.abbreviation(), self.suit.letter())
    }
}

impl std::fmt::Display for Card {
    /// Long form matching the game log: `Ace (red) Hearts`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color = match self.color() {
            Color::Red => "red",
            Color::Black => "black",
        };
        write!(f, "{} ({}) {}", self.rank, color, self.suit)
    }
}
