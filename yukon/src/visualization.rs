use crate::{BoardSnapshot, Card, NUM_COLUMNS, NUM_FOUNDATIONS};

/// Draws the board as a text table, one pile per column.
///
/// ```text
///   C1    C2    C3    C4  ...
///  5H    []    []    []
///       10D    []    []
///              QS    []
/// ```
///
/// Rows are drawn from the head of each pile, so the exposed cards end up
/// at the bottom. Face-down cards are drawn as `[]`.
pub fn visualize_board(snapshot: &BoardSnapshot) -> String {
    let mut result = String::from(" ");
    for i in 1..=NUM_COLUMNS {
        result += &format!(" C{}   ", i);
    }
    for i in 1..=NUM_FOUNDATIONS {
        result += &format!(" F{}   ", i);
    }
    result = result.trim_end().to_string();
    result.push('\n');

    let piles = snapshot
        .columns
        .iter()
        .chain(snapshot.foundations.iter());
    for row in 0..snapshot.depth() {
        let mut line = String::new();
        for pile in piles.clone() {
            line += &cell(pile.get(row));
            line += "  ";
        }
        result += line.trim_end();
        result.push('\n');
    }
    result
}

fn cell(card: Option<&Card>) -> String {
    match card {
        Some(card) if card.hidden => String::from(" [] "),
        Some(card) => format!("{:>2}{:<2}", card.rank.label(), card.suit.code()),
        None => String::from("    "),
    }
}
