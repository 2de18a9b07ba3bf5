use crate::{DealError, Pile, NUM_COLUMNS};

/// How many cards each column receives.
pub const COLUMN_SIZES: [usize; NUM_COLUMNS] = [1, 6, 7, 8, 9, 10, 11];

/// Deals the deck out into the seven columns.
///
/// Cards are taken from the front of the deck and put in front of the
/// column, so the first card dealt to a column ends up as its exposed card.
/// With `face_down`, the first `k - 1` cards of column `k` are turned face
/// down, counted from the head.
pub fn deal(
    deck: &mut Pile,
    columns: &mut [Pile; NUM_COLUMNS],
    face_down: bool,
) -> Result<(), DealError> {
    for (i, (column, &needed)) in columns.iter_mut().zip(COLUMN_SIZES.iter()).enumerate() {
        if deck.len() < needed {
            return Err(DealError::DeckExhausted {
                column: i + 1,
                needed,
                available: deck.len(),
            });
        }
        for _ in 0..needed {
            // Can't fail, the length was checked above
            if let Some(card) = deck.pop_index(0) {
                column.append_front(card);
            }
        }
        if face_down {
            for card in column.as_mut_slice().iter_mut().take(i) {
                card.hidden = true;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_standard_deck, Card, CardsSet, DECK_SIZE};

    #[test]
    fn column_sizes_add_up_to_a_deck() {
        assert_eq!(COLUMN_SIZES.iter().sum::<usize>(), DECK_SIZE);
    }

    #[test]
    fn deals_whole_deck() {
        let mut deck = new_standard_deck();
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        deal(&mut deck, &mut columns, false).unwrap();

        assert!(deck.is_empty());
        assert_eq!(columns.clone().map(|c| c.len()), COLUMN_SIZES);
        let all: Vec<Card> = columns.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(all.len(), DECK_SIZE);
        assert_eq!(CardsSet::from_iter(all), CardsSet::full_deck());
        assert!(columns.iter().flatten().all(|card| !card.hidden));
    }

    #[test]
    fn first_card_dealt_is_exposed() {
        let mut deck = new_standard_deck();
        let ordered = deck.clone();
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        deal(&mut deck, &mut columns, false).unwrap();

        assert_eq!(&columns[0][..], &ordered[..1]);
        // Column 2 gets deck cards 1..7, in reverse
        assert_eq!(columns[1].last(), Some(&ordered[1]));
        assert_eq!(columns[1].first(), Some(&ordered[6]));
    }

    #[test]
    fn face_down_deal() {
        let mut deck = new_standard_deck();
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        deal(&mut deck, &mut columns, true).unwrap();

        for (i, column) in columns.iter().enumerate() {
            let hidden = column.iter().filter(|card| card.hidden).count();
            assert_eq!(hidden, i);
            assert!(column.iter().take(i).all(|card| card.hidden));
            assert!(!column.last().unwrap().hidden);
        }
    }

    #[test]
    fn short_deck_is_exhausted() {
        let mut deck: Pile = new_standard_deck().iter().copied().take(20).collect();
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        assert_eq!(
            deal(&mut deck, &mut columns, false),
            Err(DealError::DeckExhausted {
                column: 4,
                needed: 8,
                available: 6
            })
        );
    }
}
