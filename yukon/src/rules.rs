//! Placement rules for tableau columns and foundations.
//!
//! All functions here are pure predicates over card values. The `check_*`
//! variants report which rule was broken, the `*_allowed` variants only
//! answer yes or no.

use serde::{Deserialize, Serialize};

use crate::{Card, Rank, RuleViolation};

/// Which cards may be stacked onto each other in a tableau column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableauRule {
    /// Standard solitaire: red on black, black on red.
    #[default]
    AlternatingColor,
    /// Looser variant that only forbids stacking a suit on itself.
    DifferentSuit,
}

impl TableauRule {
    /// Can `from` be placed onto `to`, the exposed card of a column?
    pub fn check(self, from: Card, to: Card) -> Result<(), RuleViolation> {
        if from.rank.value() + 1 != to.rank.value() {
            return Err(RuleViolation::RankNotAdjacent);
        }
        match self {
            TableauRule::AlternatingColor if from.color() == to.color() => {
                Err(RuleViolation::SameColor)
            }
            TableauRule::DifferentSuit if from.suit == to.suit => Err(RuleViolation::SameSuit),
            _ => Ok(()),
        }
    }

    pub fn allows(self, from: Card, to: Card) -> bool {
        self.check(from, to).is_ok()
    }
}

/// Column placement under the standard alternating-color rule.
pub fn column_move_allowed(from: Card, to: Card) -> bool {
    TableauRule::AlternatingColor.allows(from, to)
}

pub fn check_foundation_move(from: Card, to_top: Option<Card>) -> Result<(), RuleViolation> {
    match to_top {
        None if from.rank == Rank::Ace => Ok(()),
        None => Err(RuleViolation::NotAnAce),
        Some(top) if top.suit != from.suit => Err(RuleViolation::WrongSuit),
        Some(top) if top.rank.value() + 1 != from.rank.value() => {
            Err(RuleViolation::RankNotAdjacent)
        }
        Some(_) => Ok(()),
    }
}

/// Foundations start with an Ace and go up one rank at a time in the same suit.
pub fn foundation_move_allowed(from: Card, to_top: Option<Card>) -> bool {
    check_foundation_move(from, to_top).is_ok()
}

pub fn check_empty_column_move(from: Card) -> Result<(), RuleViolation> {
    if from.rank == Rank::King {
        Ok(())
    } else {
        Err(RuleViolation::NotAKing)
    }
}

pub fn empty_column_move_allowed(from: Card) -> bool {
    check_empty_column_move(from).is_ok()
}
