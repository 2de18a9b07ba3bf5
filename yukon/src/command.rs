//! Parsing of move commands such as `C1->C4` or `C2:5H->C5`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{IllegalMove, Rank, Suit, NUM_COLUMNS, NUM_FOUNDATIONS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Column,
    Foundation,
}

impl PileKind {
    /// The letter identifying this kind of pile in commands.
    pub fn tab(self) -> char {
        match self {
            PileKind::Column => 'C',
            PileKind::Foundation => 'F',
        }
    }

    pub fn from_tab(tab: char) -> Option<Self> {
        match tab {
            'C' => Some(PileKind::Column),
            'F' => Some(PileKind::Foundation),
            _ => None,
        }
    }

    /// How many piles of this kind are on the board.
    pub fn count(self) -> usize {
        match self {
            PileKind::Column => NUM_COLUMNS,
            PileKind::Foundation => NUM_FOUNDATIONS,
        }
    }
}

/// A reference to one pile on the board, such as `C3` or `F1`.
///
/// Can only be constructed with an index in range for its kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPileRef")]
pub struct PileRef {
    kind: PileKind,
    /// 1-based
    index: u8,
}

impl PileRef {
    /// Resolves a tab letter and a 1-based index.
    pub fn new(tab: char, index: u32) -> Result<Self, IllegalMove> {
        PileKind::from_tab(tab)
            .and_then(|kind| Self::of_kind(kind, index))
            .ok_or(IllegalMove::InvalidLocation { tab, index })
    }

    pub fn of_kind(kind: PileKind, index: u32) -> Option<Self> {
        let in_range = index >= 1 && index as usize <= kind.count();
        in_range.then(|| Self {
            kind,
            index: index as u8,
        })
    }

    /// Column `index`, counted from 1.
    pub fn column(index: u32) -> Option<Self> {
        Self::of_kind(PileKind::Column, index)
    }

    /// Foundation `index`, counted from 1.
    pub fn foundation(index: u32) -> Option<Self> {
        Self::of_kind(PileKind::Foundation, index)
    }

    pub fn kind(self) -> PileKind {
        self.kind
    }

    /// The 1-based index.
    pub fn index(self) -> u32 {
        u32::from(self.index)
    }

    pub(crate) fn slot(self) -> usize {
        usize::from(self.index) - 1
    }
}

/// The serialized form of a [`PileRef`], before its index is checked.
#[derive(Deserialize)]
struct UncheckedPileRef {
    kind: PileKind,
    index: u32,
}

impl TryFrom<UncheckedPileRef> for PileRef {
    type Error = IllegalMove;

    fn try_from(unchecked: UncheckedPileRef) -> Result<Self, Self::Error> {
        let UncheckedPileRef { kind, index } = unchecked;
        PileRef::of_kind(kind, index).ok_or(IllegalMove::InvalidLocation {
            tab: kind.tab(),
            index,
        })
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.tab(), self.index)
    }
}

/// Which card of the source pile to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSpec {
    /// The exposed card of the pile.
    Topmost,
    /// A card named in the command, moved together with the cards on top of it.
    Explicit { rank: Rank, suit: Suit },
}

/// A parsed move command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: PileRef,
    pub card: CardSpec,
    pub dest: PileRef,
}

/// Parses a move command.
///
/// The form with an explicit card (`C2:5H->C5`) is tried first, then the
/// short form (`C1->C4`). Tens are written as `0`. Surrounding whitespace is
/// ignored.
///
/// A command that has the right shape but names a pile that does not exist,
/// e.g. `C8->C1`, fails with [`IllegalMove::InvalidLocation`]. Anything else
/// that does not match fails with [`IllegalMove::MalformedCommand`].
pub fn parse_command(command: &str) -> Result<MoveRequest, IllegalMove> {
    let trimmed = command.trim();
    let (source, card, dest) = Scanner::new(trimmed)
        .explicit_form()
        .or_else(|| Scanner::new(trimmed).short_form())
        .ok_or_else(|| IllegalMove::MalformedCommand {
            command: String::from(trimmed),
        })?;
    Ok(MoveRequest {
        source: PileRef::new(source.0, source.1)?,
        card,
        dest: PileRef::new(dest.0, dest.1)?,
    })
}

type Location = (char, u32);

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn explicit_form(mut self) -> Option<(Location, CardSpec, Location)> {
        let source = self.location()?;
        self.literal(":")?;
        let card = self.card()?;
        self.literal("->")?;
        let dest = self.location()?;
        self.end()?;
        Some((source, card, dest))
    }

    fn short_form(mut self) -> Option<(Location, CardSpec, Location)> {
        let source = self.location()?;
        self.literal("->")?;
        let dest = self.location()?;
        self.end()?;
        Some((source, CardSpec::Topmost, dest))
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn location(&mut self) -> Option<Location> {
        let tab = self.next_char().filter(char::is_ascii_alphabetic)?;
        let num_digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(num_digits);
        if digits.is_empty() {
            return None;
        }
        // Only overflow can fail here; such a pile does not exist either
        let index = digits.parse::<u32>().unwrap_or(u32::MAX);
        self.rest = rest;
        Some((tab, index))
    }

    fn card(&mut self) -> Option<CardSpec> {
        let rank = Rank::from_code(self.next_char()?)?;
        let suit = Suit::from_code(self.next_char()?)?;
        Some(CardSpec::Explicit { rank, suit })
    }

    fn literal(&mut self, lit: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    fn end(&self) -> Option<()> {
        self.rest.is_empty().then_some(())
    }
}

impl FromStr for MoveRequest {
    type Err = IllegalMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}

/// Formats the request in command notation, so that it parses back to itself.
impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card {
            CardSpec::Topmost => write!(f, "{}->{}", self.source, self.dest),
            CardSpec::Explicit { rank, suit } => write!(
                f,
                "{}:{}{}->{}",
                self.source,
                rank.code(),
                suit.code(),
                self.dest
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::CommandInput;

    fn column(index: u32) -> PileRef {
        PileRef::column(index).unwrap()
    }

    #[test]
    fn explicit_card() {
        assert_eq!(
            parse_command("C2:5H->C5"),
            Ok(MoveRequest {
                source: column(2),
                card: CardSpec::Explicit {
                    rank: Rank::Five,
                    suit: Suit::Hearts
                },
                dest: column(5),
            })
        );
    }

    #[test]
    fn topmost_card() {
        assert_eq!(
            parse_command("C1->C4"),
            Ok(MoveRequest {
                source: column(1),
                card: CardSpec::Topmost,
                dest: column(4),
            })
        );
        assert_eq!(
            parse_command("  C7->F4\n").map(|req| req.dest),
            Ok(PileRef::foundation(4).unwrap())
        );
    }

    #[test]
    fn ten_is_zero() {
        let req = parse_command("C3:0D->C6").unwrap();
        assert_eq!(
            req.card,
            CardSpec::Explicit {
                rank: Rank::Ten,
                suit: Suit::Diamonds
            }
        );
        assert!(matches!(
            parse_command("C3:10D->C6"),
            Err(IllegalMove::MalformedCommand { .. })
        ));
    }

    #[test]
    fn malformed() {
        for command in [
            "Z9", "", "C1", "C1->", "->C4", "C1-C4", "C1->C4x", "C1:5X->C4", "C1:5H", "C->C4",
            "1C->C4", "C1:->C4", "C1 -> C4",
        ] {
            assert_eq!(
                parse_command(command),
                Err(IllegalMove::MalformedCommand {
                    command: String::from(command.trim())
                }),
                "{command:?}"
            );
        }
    }

    #[test]
    fn invalid_location() {
        assert_eq!(
            parse_command("C8->C1"),
            Err(IllegalMove::InvalidLocation { tab: 'C', index: 8 })
        );
        assert_eq!(
            parse_command("C1->F5"),
            Err(IllegalMove::InvalidLocation { tab: 'F', index: 5 })
        );
        assert_eq!(
            parse_command("C0->C1"),
            Err(IllegalMove::InvalidLocation { tab: 'C', index: 0 })
        );
        assert_eq!(
            parse_command("X1:AH->C1"),
            Err(IllegalMove::InvalidLocation { tab: 'X', index: 1 })
        );
    }

    #[test]
    fn huge_index_is_an_invalid_location() {
        assert_eq!(
            parse_command("C99999999999->C1"),
            Err(IllegalMove::InvalidLocation {
                tab: 'C',
                index: u32::MAX
            })
        );
        assert_eq!(
            parse_command("C1:AH->F4294967296"),
            Err(IllegalMove::InvalidLocation {
                tab: 'F',
                index: u32::MAX
            })
        );
    }

    #[test]
    fn deserialized_piles_are_checked() {
        let column = |index: u32| format!(r#"{{"kind":"Column","index":{index}}}"#);
        assert!(serde_json::from_str::<PileRef>(&column(9)).is_err());
        assert!(serde_json::from_str::<PileRef>(&column(0)).is_err());
        assert_eq!(
            serde_json::from_str::<PileRef>(&column(7)).unwrap(),
            PileRef::column(7).unwrap()
        );

        let request = r#"{"source":{"kind":"Column","index":9},"card":"Topmost","dest":{"kind":"Column","index":1}}"#;
        assert!(serde_json::from_str::<MoveRequest>(request).is_err());

        let valid = parse_command("F2:0C->C3").unwrap();
        let json = serde_json::to_string(&valid).unwrap();
        assert_eq!(serde_json::from_str::<MoveRequest>(&json).unwrap(), valid);
    }

    #[test]
    fn display_is_command_notation() {
        for command in ["C2:5H->C5", "C1->C4", "F1->C7", "C6:0C->F2", "C1:KS->C2"] {
            assert_eq!(parse_command(command).unwrap().to_string(), command);
        }
    }

    quickcheck! {
        fn parser_accepts_exactly_valid_locations(input: CommandInput) -> bool {
            match parse_command(&input.text) {
                Ok(req) => input.is_valid() && req.to_string() == input.text,
                Err(IllegalMove::InvalidLocation { .. }) => !input.is_valid(),
                Err(_) => false,
            }
        }
    }
}
