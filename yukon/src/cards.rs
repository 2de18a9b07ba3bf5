use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card in a standard 52-card deck.
///
/// The identity of a card is its rank and suit. The `hidden` flag only
/// records whether the card currently lies face down, so it is ignored by
/// the comparison traits.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    #[serde(default)]
    pub hidden: bool,
}

/// The suit of a [card](Card), numbered in the order of a fresh deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "H")]
    Hearts = 1,
    #[serde(rename = "D")]
    Diamonds = 2,
    #[serde(rename = "C")]
    Clubs = 3,
    #[serde(rename = "S")]
    Spades = 4,
}

/// The rank of a [card](Card), from Ace (1) to King (13).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// The clubs and spades.
    Black,
    /// The diamonds and hearts.
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// The letter used for this suit in move commands.
    pub fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl Rank {
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

    /// The face value, 1 for Ace up to 13 for King.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[usize::from(value - 1)]),
            _ => None,
        }
    }

    /// The single character used for this rank in move commands.
    ///
    /// Ten is encoded as `0` so that every card code is two characters long.
    pub fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            other => char::from(b'0' + other.value()),
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'A' => Some(Rank::Ace),
            '0' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            '2'..='9' => Self::from_value(c as u8 - b'0'),
            _ => None,
        }
    }

    /// Human-facing label, `10` for ten.
    pub fn label(self) -> &'static str {
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

impl Card {
    /// A face-up card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            hidden: false,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is(&self, rank: Rank, suit: Suit) -> bool {
        self.rank == rank && self.suit == suit
    }

    /// The two-character code of this card as used in move commands, e.g. `5H` or `0D`.
    pub fn code(&self) -> String {
        [self.rank.code(), self.suit.code()].iter().collect()
    }

    /// Position of this card in the canonical deck order, in `0..52`.
    pub fn to_index(&self) -> u8 {
        (self.suit as u8 - 1) * 13 + (self.rank.value() - 1)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        let suit = Suit::ALL[usize::from(index / 13)];
        let rank = Rank::ALL[usize::from(index % 13)];
        Some(Card::new(rank, suit))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.code())
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    TooShort,
    TooLong,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::TooShort => write!(f, "A card code needs a rank and a suit"),
            CardFromStrErr::TooLong => write!(f, "A card code has at most a rank and a suit"),
            CardFromStrErr::InvalidRank => write!(f, "Unknown rank, expected one of A23456789 0 JQK"),
            CardFromStrErr::InvalidSuit => write!(f, "Unknown suit, expected one of HDCS"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses the two-character card code (`5H`, `0D`, `KS`).
    ///
    /// `10D` is accepted as well, since that is how tens are displayed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let owned;
        let s = match s.strip_prefix("10").filter(|rest| !rest.is_empty()) {
            Some(rest) => {
                owned = format!("0{rest}");
                owned.as_str()
            }
            None => s,
        };
        let mut chars = s.chars();
        let rank_char = chars.next().ok_or(CardFromStrErr::TooShort)?;
        let suit_char = chars.next().ok_or(CardFromStrErr::TooShort)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::TooLong);
        }
        let rank = Rank::from_code(rank_char).ok_or(CardFromStrErr::InvalidRank)?;
        let suit = Suit::from_code(suit_char).ok_or(CardFromStrErr::InvalidSuit)?;
        Ok(Card::new(rank, suit))
    }
}

/// Shorthand for creating face-up cards from their card code.
///
/// The first character is the [rank](Rank) (note: 10 is `0`, `10` works too),
/// the second is the [suit](Suit) letter (H, D, C or S).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use yukon::{card, Card, Rank, Suit};
/// assert_eq!(card!("0H"), Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card!("10H"), card!("0H"));
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
