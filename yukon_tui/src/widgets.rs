use ratatui::{prelude::*, widgets::*};
use yukon::{Card, Color as CardColor};

pub const CARD_WIDTH: u16 = 8;
pub const CARD_HEIGHT: u16 = 4;
/// How many rows of a card stay visible when another card is stacked after it.
const FAN_OFFSET: u16 = 1;

/// Draws one pile, fanned downwards so that every card's label is visible.
pub struct PileWidget<'a> {
    pub title: String,
    pub cards: &'a [Card],
    /// Position of the selected card, which is highlighted with everything after it.
    pub selected: Option<usize>,
    /// Foundations only show their top card.
    pub fanned: bool,
}

fn card_style(card: &Card) -> Style {
    if card.hidden {
        return Style::new().fg(Color::Blue);
    }
    match card.color() {
        CardColor::Red => Style::new().fg(Color::Red),
        CardColor::Black => Style::new().fg(Color::White),
    }
}

fn card_label(card: &Card) -> String {
    if card.hidden {
        String::from("░░░")
    } else {
        format!("{}{}", card.rank.label(), card.suit.symbol())
    }
}

impl<'a> Widget for PileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(area.x + 1, area.y, &self.title, Style::new().bold());
        let area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        let visible: Vec<(usize, &Card)> = if self.fanned {
            self.cards.iter().enumerate().collect()
        } else {
            self.cards.iter().enumerate().last().into_iter().collect()
        };

        if visible.is_empty() {
            let outline = Rect {
                x: area.x,
                y: area.y,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            }
            .intersection(area);
            Block::new()
                .border_type(BorderType::Plain)
                .borders(Borders::all())
                .border_style(Style::new().fg(Color::DarkGray))
                .render(outline, buf);
            return;
        }

        for (row, (position, card)) in visible.into_iter().enumerate() {
            let rect = Rect {
                x: area.x,
                y: area.y + row as u16 * FAN_OFFSET,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            }
            .intersection(area);
            if rect.is_empty() {
                break;
            }
            let highlighted = self.selected.is_some_and(|selected| position >= selected);
            let border_style = if highlighted {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new()
            };
            // Draw over whatever the previous card left
            Clear.render(rect, buf);
            Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all())
                .border_style(border_style)
                .title(Span::styled(card_label(card), card_style(card)))
                .render(rect, buf);
        }
    }
}

/// Which card of a pile with `len` cards is drawn at `row`, counted from
/// the first row below the pile's title.
///
/// The first rows belong to the cards in order; the remaining rows of the
/// last card's outline belong to the last card.
pub fn card_at_row(len: usize, row: u16, fanned: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let row = usize::from(row);
    let last = len - 1;
    let first_row_of_last = if fanned { last * usize::from(FAN_OFFSET) } else { 0 };
    if row < first_row_of_last {
        Some(row / usize::from(FAN_OFFSET))
    } else if row < first_row_of_last + usize::from(CARD_HEIGHT) {
        Some(last)
    } else {
        None
    }
}
