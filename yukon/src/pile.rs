use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{Card, Rank, Suit};

/// An ordered sequence of cards: a tableau column, a foundation or the deck.
///
/// Index 0 is the head of the pile, which is drawn first in the terminal
/// table. The last card is the exposed one, i.e. the card that can be played
/// and that other cards are placed onto.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Puts a card in front of the head.
    pub fn append_front(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Puts a card after the exposed card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at position `index`, counted from the head.
    ///
    /// Returns `None` if the pile has no such card.
    pub fn pop_index(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// The position of the first card with this rank and suit.
    pub fn position_of(&self, rank: Rank, suit: Suit) -> Option<usize> {
        self.cards.iter().position(|card| card.is(rank, suit))
    }

    /// Detaches the card at `at` together with everything stacked after it.
    ///
    /// Panics if `at > len`.
    #[must_use]
    pub fn split_off(&mut self, at: usize) -> Pile {
        Pile {
            cards: self.cards.split_off(at),
        }
    }

    /// Splices another pile on after the exposed card.
    pub fn extend(&mut self, other: Pile) {
        self.cards.extend(other.cards);
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }
}

impl Deref for Pile {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pile {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    fn pile(codes: &[&str]) -> Pile {
        codes.iter().map(|code| code.parse::<Card>().unwrap()).collect()
    }

    #[test]
    fn append_front_and_pop_index() {
        let mut p = Pile::new();
        p.append_front(card!("2H"));
        p.append_front(card!("3H"));
        assert_eq!(&p[..], &[card!("3H"), card!("2H")]);
        assert_eq!(p.len(), 2);

        assert_eq!(p.pop_index(2), None);
        assert_eq!(p.pop_index(1), Some(card!("2H")));
        assert_eq!(p.pop_index(0), Some(card!("3H")));
        assert!(p.is_empty());
        assert_eq!(p.pop_index(0), None);
    }

    #[test]
    fn split_off_carries_the_tail() {
        let mut p = pile(&["KS", "QH", "JC", "0D"]);
        let tail = p.split_off(1);
        assert_eq!(p, pile(&["KS"]));
        assert_eq!(tail, pile(&["QH", "JC", "0D"]));

        let mut other = pile(&["AS"]);
        other.extend(tail);
        assert_eq!(other.len(), 4);
        assert_eq!(other.last(), Some(&card!("0D")));
    }

    #[test]
    fn split_off_at_zero_empties_the_pile() {
        let mut p = pile(&["5H"]);
        let tail = p.split_off(0);
        assert!(p.is_empty());
        assert_eq!(tail, pile(&["5H"]));
    }

    #[test]
    fn position_of_returns_first_match() {
        let p = pile(&["5H", "6S", "5H"]);
        assert_eq!(p.position_of(Rank::Five, Suit::Hearts), Some(0));
        assert_eq!(p.position_of(Rank::Six, Suit::Spades), Some(1));
        assert_eq!(p.position_of(Rank::Six, Suit::Hearts), None);
    }
}
