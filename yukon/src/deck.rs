use rand::Rng;

use crate::{Card, Pile, Rank, Suit};

/// The number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Creates the 52 cards in canonical order: hearts, diamonds, clubs, spades,
/// each from Ace to King.
pub fn new_standard_deck() -> Pile {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Shuffles the pile in place.
///
/// Every position `i` except the last swaps with a position drawn uniformly
/// from `i..len`, so each permutation is equally likely.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut Pile, rng: &mut R) {
    let cards = deck.as_mut_slice();
    let len = cards.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let swap = rng.gen_range(i..len);
        if swap != i {
            cards.swap(i, swap);
        }
    }
}
