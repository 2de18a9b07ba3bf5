pub use board::*;
pub use cards::*;
pub use cards_set::*;
pub use command::*;
pub use deal::*;
pub use deck::*;
pub use errors::*;
pub use pile::*;
pub use rules::*;
pub use session::*;
pub use snapshot::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod cards_set;
mod command;
mod deal;
mod deck;
mod errors;
mod pile;
pub mod rules;
mod session;
mod snapshot;
mod visualization;
