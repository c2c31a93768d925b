//! Move commands and undo history.
//!
//! ## Key Types
//!
//! - `Move`: Closed set of performable, undoable actions
//! - `CardMove`: A card relocation with its captured origin
//! - `RevealTopMove`: Turning an uncovered tableau card face up
//! - `MoveHistory`: LIFO of performed moves

pub mod command;
pub mod history;

pub use command::{CardMove, Move, RevealTopMove};
pub use history::MoveHistory;
