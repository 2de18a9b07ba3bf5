use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::rules::{check_empty_column_move, check_foundation_move};
use crate::{
    BoardSnapshot, Card, CardSpec, CardsSet, GameConfig, IllegalMove, MoveRequest, Pile, PileKind,
    PileRef, RuleViolation, DECK_SIZE,
};

/// The number of tableau columns.
pub const NUM_COLUMNS: usize = 7;
/// The number of foundations, one per suit.
pub const NUM_FOUNDATIONS: usize = 4;

/// How an explicitly named source card is looked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lookup {
    /// If the named card is not in the pile, the pile's exposed card is used instead.
    #[default]
    Lenient,
    /// If the named card is not in the pile, the lookup fails.
    Strict,
}

/// All piles of a game after the deal: seven columns and four foundations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Pile; NUM_COLUMNS],
    foundations: [Pile; NUM_FOUNDATIONS],
}

/// A validated move, ready to be applied to the board it was calculated on.
#[derive(Debug)]
pub struct MovePlan<'a> {
    /// The board this plan was calculated on.
    board: &'a Board,
    source: PileRef,
    /// Position of the moved card in the source pile.
    position: usize,
    dest: PileRef,
    /// The card that was named or selected, i.e. the bottom of the moved stack.
    pub card: Card,
    /// How many cards move, including the cards stacked after `card`.
    pub num_cards: usize,
    /// The source's new exposed card, if it has to be turned face up.
    pub turned_face_up: Option<Card>,
}

impl Board {
    pub fn new(columns: [Pile; NUM_COLUMNS], foundations: [Pile; NUM_FOUNDATIONS]) -> Self {
        Self {
            columns,
            foundations,
        }
    }

    pub fn columns(&self) -> &[Pile; NUM_COLUMNS] {
        &self.columns
    }

    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn pile(&self, at: PileRef) -> &Pile {
        match at.kind() {
            PileKind::Column => &self.columns[at.slot()],
            PileKind::Foundation => &self.foundations[at.slot()],
        }
    }

    fn pile_mut(&mut self, at: PileRef) -> &mut Pile {
        match at.kind() {
            PileKind::Column => &mut self.columns[at.slot()],
            PileKind::Foundation => &mut self.foundations[at.slot()],
        }
    }

    /// Finds the position of a card in a pile.
    ///
    /// [`CardSpec::Topmost`] selects the exposed (last) card. An explicit
    /// card selects the first card with that rank and suit; when there is
    /// none, [`Lookup`] decides between the exposed card and
    /// [`IllegalMove::NotFound`].
    pub fn locate(&self, at: PileRef, card: CardSpec, lookup: Lookup) -> Result<usize, IllegalMove> {
        let pile = self.pile(at);
        if pile.is_empty() {
            return Err(IllegalMove::EmptyPile { pile: at });
        }
        let last = pile.len() - 1;
        match card {
            CardSpec::Topmost => Ok(last),
            CardSpec::Explicit { rank, suit } => match (pile.position_of(rank, suit), lookup) {
                (Some(position), _) => Ok(position),
                (None, Lookup::Lenient) => {
                    trace!(pile = %at, "Named card not found, using the exposed card");
                    Ok(last)
                }
                (None, Lookup::Strict) => Err(IllegalMove::NotFound {
                    pile: at,
                    rank,
                    suit,
                }),
            },
        }
    }

    /// Removes the card at `position` and all cards after it from a pile.
    ///
    /// The detached cards keep their order. Panics if `position` is past the end.
    #[must_use]
    pub fn detach(&mut self, at: PileRef, position: usize) -> Pile {
        self.pile_mut(at).split_off(position)
    }

    /// Locates a card and detaches it together with the cards stacked after it.
    ///
    /// This bypasses the placement rules, see [`Self::calculate()`] for moves.
    pub fn take(&mut self, at: PileRef, card: CardSpec, lookup: Lookup) -> Result<Pile, IllegalMove> {
        let position = self.locate(at, card, lookup)?;
        Ok(self.detach(at, position))
    }

    /// Checks a move against the board and the rules, and plans it out.
    ///
    /// The returned struct has a method to actually apply the move and get
    /// a new board.
    pub fn calculate(
        &self,
        request: &MoveRequest,
        config: &GameConfig,
    ) -> Result<MovePlan<'_>, IllegalMove> {
        let MoveRequest { source, card, dest } = *request;
        if source == dest {
            return Err(IllegalMove::SamePile { pile: source });
        }

        // Located
        let position = self.locate(source, card, config.lookup)?;
        let source_pile = self.pile(source);
        let moving = source_pile[position];
        let num_cards = source_pile.len() - position;
        let onto = self.pile(dest).last().copied();
        trace!(%moving, num_cards, onto = ?onto, "Located");

        // Validated
        if moving.hidden {
            return Err(IllegalMove::FaceDownCard { pile: source });
        }
        let verdict = if source.kind() == PileKind::Foundation && num_cards > 1 {
            Err(RuleViolation::NotFoundationTop)
        } else {
            match (dest.kind(), onto) {
                (PileKind::Column, Some(to)) => config.tableau_rule.check(moving, to),
                (PileKind::Column, None) => check_empty_column_move(moving),
                (PileKind::Foundation, _) if num_cards > 1 => {
                    Err(RuleViolation::StackToFoundation)
                }
                (PileKind::Foundation, to_top) => check_foundation_move(moving, to_top),
            }
        };
        verdict.map_err(|err| IllegalMove::MoveRejected {
            card: moving,
            onto,
            dest,
            err,
        })?;

        let turned_face_up = position
            .checked_sub(1)
            .map(|below| source_pile[below])
            .filter(|card| card.hidden)
            .map(|card| Card::new(card.rank, card.suit));

        Ok(MovePlan {
            board: self,
            source,
            position,
            dest,
            card: moving,
            num_cards,
            turned_face_up,
        })
    }

    /// Have all columns been cleared?
    pub fn is_cleared(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }

    pub fn num_cards(&self) -> usize {
        self.columns
            .iter()
            .chain(self.foundations.iter())
            .map(|pile| pile.len())
            .sum()
    }

    /// All cards on the board, ignoring duplicates.
    pub fn cards(&self) -> CardsSet {
        self.columns
            .iter()
            .chain(self.foundations.iter())
            .flat_map(|pile| pile.iter().copied())
            .collect()
    }

    /// Is every card of the deck on the board exactly once?
    pub fn holds_full_deck(&self) -> bool {
        self.num_cards() == DECK_SIZE && self.cards() == CardsSet::full_deck()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone().map(|pile| pile.to_vec()),
            foundations: self.foundations.clone().map(|pile| pile.to_vec()),
        }
    }
}

impl<'a> MovePlan<'a> {
    /// The source pile and position of the moved card.
    pub fn source(&self) -> (PileRef, usize) {
        (self.source, self.position)
    }

    pub fn dest(&self) -> PileRef {
        self.dest
    }

    /// Applies the move to a copy of the board.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        let stack = board.detach(self.source, self.position);
        if self.turned_face_up.is_some() {
            if let Some(exposed) = board.pile_mut(self.source).last_mut() {
                exposed.hidden = false;
            }
        }
        board.pile_mut(self.dest).extend(stack);
        board
    }
}
