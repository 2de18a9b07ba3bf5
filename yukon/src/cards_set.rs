use crate::Card;

/// A compact set of [`Card`]s, ignoring whether they are face down.
///
/// Used to check that every card of the deck is present exactly once.
///
/// ```
/// use yukon::{card, CardsSet};
/// let set = CardsSet::from_iter([card!("7H"), card!("7H"), card!("2H")]);
/// assert_ne!(set, CardsSet::full_deck());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardsSet {
    // Only the low 52 bits are used.
    bits: u64,
}

impl CardsSet {
    /// The set of all 52 cards.
    pub fn full_deck() -> Self {
        Self {
            bits: (1u64 << 52) - 1,
        }
    }
}

impl FromIterator<Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let bits = iter
            .into_iter()
            .fold(0, |bits, card| bits | (1u64 << card.to_index()));
        Self { bits }
    }
}
