use serde::{Deserialize, Serialize};

use crate::{Card, NUM_COLUMNS, NUM_FOUNDATIONS};

/// A read-only copy of all piles, for renderers.
///
/// Each pile is listed from its head to its exposed card. Face-down cards
/// still carry their rank and suit; it is up to the renderer to hide them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: [Vec<Card>; NUM_COLUMNS],
    pub foundations: [Vec<Card>; NUM_FOUNDATIONS],
}

impl BoardSnapshot {
    /// The number of rows needed to draw the tallest pile.
    pub fn depth(&self) -> usize {
        self.columns
            .iter()
            .chain(self.foundations.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    pub fn is_won(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}
