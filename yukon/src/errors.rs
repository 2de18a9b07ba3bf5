use crate::{Card, PileRef, Rank, Suit};

/// Why a located card can not be placed at its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    /// The card is not exactly one rank below the card it is placed onto.
    RankNotAdjacent,
    SameColor,
    SameSuit,
    /// Foundations are built up in a single suit.
    WrongSuit,
    /// Only an Ace can start a foundation.
    NotAnAce,
    /// Only a King can be placed on an empty column.
    NotAKing,
    /// Foundations take one card at a time.
    StackToFoundation,
    /// Only the top card of a foundation can be taken back.
    NotFoundationTop,
}

impl std::error::Error for RuleViolation {}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::RankNotAdjacent => {
                write!(f, "The card must be exactly one rank lower than the card it is placed on")
            }
            RuleViolation::SameColor => write!(f, "Cards in a column must alternate in color"),
            RuleViolation::SameSuit => write!(f, "Cards in a column must not share a suit"),
            RuleViolation::WrongSuit => write!(f, "A foundation only holds cards of one suit"),
            RuleViolation::NotAnAce => write!(f, "An empty foundation can only take an Ace"),
            RuleViolation::NotAKing => write!(f, "An empty column can only take a King"),
            RuleViolation::StackToFoundation => {
                write!(f, "Only a single card can be moved to a foundation")
            }
            RuleViolation::NotFoundationTop => {
                write!(f, "Only the top card of a foundation can be moved")
            }
        }
    }
}

/// The error type for one move command.
///
/// None of these are fatal: the board is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    MalformedCommand {
        command: String,
    },
    InvalidLocation {
        tab: char,
        index: u32,
    },
    EmptyPile {
        pile: PileRef,
    },
    NotFound {
        pile: PileRef,
        rank: Rank,
        suit: Suit,
    },
    FaceDownCard {
        pile: PileRef,
    },
    SamePile {
        pile: PileRef,
    },
    MoveRejected {
        card: Card,
        onto: Option<Card>,
        dest: PileRef,
        err: RuleViolation,
    },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::MoveRejected { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::MalformedCommand { command } => write!(
                f,
                "Could not understand '{}', expected e.g. C1->C4 or C2:5H->C5",
                command
            ),
            IllegalMove::InvalidLocation { tab, index } => write!(
                f,
                "There is no pile {}{}, use C1 to C7 or F1 to F4",
                tab, index
            ),
            IllegalMove::EmptyPile { pile } => write!(f, "Pile {} has no cards", pile),
            IllegalMove::NotFound { pile, rank, suit } => write!(
                f,
                "Pile {} does not contain {}{}",
                pile,
                rank.label(),
                suit.code()
            ),
            IllegalMove::FaceDownCard { pile } => {
                write!(f, "The selected card in {} is face down", pile)
            }
            IllegalMove::SamePile { pile } => {
                write!(f, "Source and destination are both {}", pile)
            }
            IllegalMove::MoveRejected {
                card,
                onto: Some(onto),
                dest,
                err: _,
            } => write!(f, "Move not allowed: {} can not go on {} in {}", card, onto, dest),
            IllegalMove::MoveRejected {
                card,
                onto: None,
                dest,
                err: _,
            } => write!(f, "Move not allowed: {} can not go on the empty {}", card, dest),
        }
    }
}

/// The error type for dealing. This indicates a broken deck and aborts the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealError {
    DeckExhausted {
        column: usize,
        needed: usize,
        available: usize,
    },
}

impl std::error::Error for DealError {}

impl std::fmt::Display for DealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DealError::DeckExhausted {
                column,
                needed,
                available,
            } => write!(
                f,
                "Deck exhausted while dealing column {}: needed {} cards, {} left",
                column, needed, available
            ),
        }
    }
}
