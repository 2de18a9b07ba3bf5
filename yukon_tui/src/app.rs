use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    prelude::*,
    widgets::*,
};
use yukon::{
    CardSpec, GameSession, IllegalMove, MoveOutcome, MoveRequest, PileKind, PileRef, NUM_COLUMNS,
    NUM_FOUNDATIONS,
};

use crate::widgets::{card_at_row, PileWidget, CARD_HEIGHT, CARD_WIDTH};

const PILE_SPACING: u16 = 2;

/// Everything the terminal UI shows, and the input that is being typed.
pub struct App {
    pub session: GameSession,
    pub input: String,
    pub status: String,
    /// A card picked with the mouse, waiting for a click on its destination.
    pub selection: Option<(PileRef, usize)>,
    pub should_quit: bool,
    /// Where each pile was drawn last, for mapping clicks to piles.
    pile_areas: Vec<(PileRef, Rect)>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input: String::new(),
            status: String::from("Type a command like C1->C4 or C2:5H->C5, or click a card and then a pile"),
            selection: None,
            should_quit: false,
            pile_areas: Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if is_command_char(c) => self.input.push(c.to_ascii_uppercase()),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.click(mouse.column, mouse.row);
        }
    }

    fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.selection = None;
        let command = std::mem::take(&mut self.input);
        let result = self.session.submit(&command);
        self.show_result(result);
    }

    /// The first click selects a card, the second one moves it with
    /// everything on top of it to the clicked pile.
    fn click(&mut self, x: u16, y: u16) {
        let Some((pile_ref, area)) = self
            .pile_areas
            .iter()
            .copied()
            .find(|(_, area)| x >= area.x && x < area.right() && y >= area.y && y < area.bottom())
        else {
            self.selection = None;
            return;
        };

        match self.selection.take() {
            None => {
                let pile = self.session.board().pile(pile_ref);
                // Row 0 is the pile's title
                let position = y
                    .checked_sub(area.y + 1)
                    .and_then(|row| card_at_row(pile.len(), row, pile_ref.kind() == PileKind::Column));
                if let Some(position) = position {
                    let card = pile[position];
                    self.selection = Some((pile_ref, position));
                    self.status = if card.hidden {
                        format!("Selected a face-down card in {}", pile_ref)
                    } else {
                        format!("Selected {} in {}", card, pile_ref)
                    };
                }
            }
            Some((source, _)) if source == pile_ref => {
                self.status = String::from("Selection cleared");
            }
            Some((source, position)) => {
                // A typed command may have changed the pile since the selection
                let Some(&card) = self.session.board().pile(source).get(position) else {
                    self.status = String::from("Selection cleared");
                    return;
                };
                let request = MoveRequest {
                    source,
                    card: CardSpec::Explicit {
                        rank: card.rank,
                        suit: card.suit,
                    },
                    dest: pile_ref,
                };
                let result = self.session.apply(&request);
                self.show_result(result);
            }
        }
    }

    fn show_result(&mut self, result: Result<MoveOutcome, IllegalMove>) {
        self.status = match result {
            Ok(outcome) if outcome.won => String::from("You have won. Press Esc to quit."),
            Ok(outcome) => match outcome.turned_face_up {
                Some(card) => format!("{}, {} is turned face up", outcome.request, card),
                None => outcome.request.to_string(),
            },
            Err(err) => match std::error::Error::source(&err) {
                Some(rule) => format!("{}. {}", err, rule),
                None => err.to_string(),
            },
        };
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(CARD_HEIGHT + 1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ],
        )
        .split(frame.size());

        self.pile_areas.clear();
        let foundations = (1..=NUM_FOUNDATIONS as u32).filter_map(PileRef::foundation);
        let columns = (1..=NUM_COLUMNS as u32).filter_map(PileRef::column);
        for (row_area, piles) in [
            (main_layout[0], foundations.collect::<Vec<_>>()),
            (main_layout[1], columns.collect::<Vec<_>>()),
        ] {
            let areas = Layout::new(
                Direction::Horizontal,
                piles
                    .iter()
                    .map(|_| Constraint::Length(CARD_WIDTH + PILE_SPACING))
                    .chain([Constraint::Min(0)]),
            )
            .split(row_area);
            for (&pile_ref, &area) in piles.iter().zip(areas.iter()) {
                let area = Rect {
                    width: CARD_WIDTH,
                    ..area
                };
                let selected = self
                    .selection
                    .filter(|(source, _)| *source == pile_ref)
                    .map(|(_, position)| position);
                frame.render_widget(
                    PileWidget {
                        title: pile_ref.to_string(),
                        cards: self.session.board().pile(pile_ref),
                        selected,
                        fanned: pile_ref.kind() == PileKind::Column,
                    },
                    area,
                );
                self.pile_areas.push((pile_ref, area));
            }
        }

        frame.render_widget(
            Paragraph::new(self.status.as_str()).style(Style::new().fg(Color::Gray)),
            main_layout[2],
        );
        frame.render_widget(
            Paragraph::new(self.input.as_str()).block(
                Block::new()
                    .borders(Borders::all())
                    .title(" Enter command (Esc to quit) "),
            ),
            main_layout[3],
        );
    }
}

fn is_command_char(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'C' | 'F' | 'H' | 'D' | 'S' | 'A' | 'J' | 'Q' | 'K' | '0'..='9' | ':' | '-' | '>'
    )
}
