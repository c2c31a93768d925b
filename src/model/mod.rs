//! The game model: owned board state, undo history, and listeners.
//!
//! ## Key Types
//!
//! - `GameModel`: The facade; all mutation goes through it
//! - `Board`: Piles plus the card location index (crate-internal)
//! - `GameModelListener`: Change observer
//! - `ListenerRegistry`: Listeners in registration order

mod board;
pub mod game;
pub mod listener;

pub(crate) use board::Board;
pub use game::GameModel;
pub use listener::{GameModelListener, ListenerId, ListenerRegistry};
