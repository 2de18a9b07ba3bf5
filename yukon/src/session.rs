use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    deal, new_standard_deck, parse_command, shuffle, Board, BoardSnapshot, Card, DealError,
    IllegalMove, Lookup, MoveRequest, Pile, TableauRule, NUM_COLUMNS, NUM_FOUNDATIONS,
};

/// Rule options for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tableau_rule: TableauRule,
    pub lookup: Lookup,
    /// Deal the lower cards of columns 2 to 7 face down.
    pub face_down_deal: bool,
}

/// Summarizes an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub request: MoveRequest,
    /// The card that was selected, i.e. the bottom of the moved stack.
    pub card: Card,
    pub num_cards: usize,
    pub turned_face_up: Option<Card>,
    /// All columns are empty after this move.
    pub won: bool,
}

/// One game of Yukon: the board and the rules it is played by.
///
/// Commands are handled one at a time: parse, locate, validate, then apply
/// or reject. A rejected command never changes the board.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    config: GameConfig,
}

impl GameSession {
    /// Shuffles a fresh deck and deals it.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, DealError> {
        let mut deck = new_standard_deck();
        shuffle(&mut deck, rng);
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        deal(&mut deck, &mut columns, config.face_down_deal)?;
        debug_assert!(deck.is_empty());
        let foundations: [Pile; NUM_FOUNDATIONS] = Default::default();
        Ok(Self::from_board(config, Board::new(columns, foundations)))
    }

    /// Continues a game from an arbitrary position.
    pub fn from_board(config: GameConfig, board: Board) -> Self {
        Self { board, config }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_cleared()
    }

    /// Parses and plays a move command.
    pub fn submit(&mut self, command: &str) -> Result<MoveOutcome, IllegalMove> {
        let request = parse_command(command)?;
        debug!(%request, "Parsed");
        self.apply(&request)
    }

    /// Plays a move if it is legal.
    pub fn apply(&mut self, request: &MoveRequest) -> Result<MoveOutcome, IllegalMove> {
        let plan = match self.board.calculate(request, &self.config) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(%request, %err, "Rejected");
                return Err(err);
            }
        };
        debug!(%request, card = %plan.card, num_cards = plan.num_cards, "Validated");
        let card = plan.card;
        let num_cards = plan.num_cards;
        let turned_face_up = plan.turned_face_up;
        self.board = plan.execute();

        let won = self.is_won();
        if won {
            info!("All columns cleared");
        }
        Ok(MoveOutcome {
            request: *request,
            card,
            num_cards,
            turned_face_up,
            won,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{card, PileRef, RuleViolation, COLUMN_SIZES};

    fn pile(codes: &[&str]) -> Pile {
        codes.iter().map(|code| code.parse::<Card>().unwrap()).collect()
    }

    #[test]
    fn new_game_is_dealt() {
        let session = GameSession::new(GameConfig::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        let lengths = session.board().columns().clone().map(|c| c.len());
        assert_eq!(lengths, COLUMN_SIZES);
        assert!(session.board().foundations().iter().all(|f| f.is_empty()));
        assert!(session.board().holds_full_deck());
        assert!(!session.is_won());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = GameSession::new(GameConfig::default(), &mut StdRng::seed_from_u64(11)).unwrap();
        let b = GameSession::new(GameConfig::default(), &mut StdRng::seed_from_u64(11)).unwrap();
        let c = GameSession::new(GameConfig::default(), &mut StdRng::seed_from_u64(12)).unwrap();
        assert_eq!(a.board(), b.board());
        assert_ne!(a.board(), c.board());
    }

    #[test]
    fn top_to_top_move_only_when_allowed() {
        let board = Board::new(
            [
                pile(&["2D", "5H"]),
                pile(&["3D"]),
                pile(&["4C"]),
                pile(&["KC", "6S"]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
            ],
            Default::default(),
        );
        let mut session = GameSession::from_board(GameConfig::default(), board.clone());

        // 5H can not go on 4C
        let err = session.submit("C1->C3").unwrap_err();
        assert!(matches!(
            err,
            IllegalMove::MoveRejected {
                err: RuleViolation::RankNotAdjacent,
                ..
            }
        ));
        assert_eq!(session.board(), &board);

        let outcome = session.submit("C1->C4").unwrap();
        assert_eq!(outcome.card, card!("5H"));
        assert_eq!(outcome.num_cards, 1);
        assert!(!outcome.won);
        assert_eq!(session.board().columns()[0], pile(&["2D"]));
        assert_eq!(session.board().columns()[3], pile(&["KC", "6S", "5H"]));
    }

    #[test]
    fn malformed_command_changes_nothing() {
        let mut session = GameSession::new(GameConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let before = session.board().clone();
        for command in ["Z9", "C9->C1", "C1->C1", "hello"] {
            assert!(session.submit(command).is_err());
            assert_eq!(session.board(), &before);
        }
    }

    #[test]
    fn clearing_all_columns_wins() {
        let board = Board::new(
            [
                pile(&["2H"]),
                pile(&["AH"]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
                pile(&["AS"]),
            ],
            Default::default(),
        );
        let mut session = GameSession::from_board(GameConfig::default(), board);
        assert!(!session.submit("C2->F1").unwrap().won);
        assert!(!session.submit("C1->F1").unwrap().won);
        assert!(!session.is_won());
        let outcome = session.submit("C7->F4").unwrap();
        assert!(outcome.won);
        assert!(session.is_won());
        assert_eq!(
            session.board().pile(PileRef::foundation(1).unwrap()),
            &pile(&["AH", "2H"])
        );
    }

    #[test]
    fn face_down_deal_hides_lower_cards() {
        let config = GameConfig {
            face_down_deal: true,
            ..GameConfig::default()
        };
        let session = GameSession::new(config, &mut StdRng::seed_from_u64(1)).unwrap();
        let columns = session.board().columns();
        assert!(!columns[0][0].hidden);
        assert!(columns[1][0].hidden);
        assert!(columns[1].iter().skip(1).all(|c| !c.hidden));
        assert_eq!(columns[6].iter().filter(|c| c.hidden).count(), 6);
    }

    #[test]
    fn exposed_face_down_card_is_turned_up() {
        let mut hidden = pile(&["3S", "KH"]);
        hidden.as_mut_slice()[0].hidden = true;
        let board = Board::new(
            [
                hidden,
                pile(&[]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
                pile(&[]),
            ],
            Default::default(),
        );
        let mut session = GameSession::from_board(GameConfig::default(), board);
        assert!(matches!(
            session.submit("C1:3S->C2"),
            Err(IllegalMove::FaceDownCard { .. })
        ));

        let outcome = session.submit("C1->C2").unwrap();
        assert_eq!(outcome.turned_face_up, Some(card!("3S")));
        let first = &session.board().columns()[0];
        assert_eq!(first, &pile(&["3S"]));
        assert!(!first[0].hidden);
    }

    #[test]
    fn config_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"tableau_rule": "different-suit", "face_down_deal": true}"#)
                .unwrap();
        assert_eq!(config.tableau_rule, TableauRule::DifferentSuit);
        assert_eq!(config.lookup, Lookup::Lenient);
        assert!(config.face_down_deal);
        assert_eq!(
            serde_json::from_str::<GameConfig>("{}").unwrap(),
            GameConfig::default()
        );
    }
}
