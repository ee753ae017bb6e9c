pub mod board;
pub mod error;
pub mod moves;
pub mod rules;
pub mod search;
pub mod simulation;

#[cfg(feature = "python")]
mod python;

pub use board::{Board, Player, Slot, SlotKind, NUM_SLOTS, STANDARD_COUNTS};
pub use error::{BoardError, Result};
pub use moves::{FreeTurn, SowReport};
pub use rules::{FreeTurnPolicy, SearchConfig};
pub use search::MoveEvaluation;
pub use simulation::{is_terminal, play_greedy, GameRecord, StopReason, Turn};
