//! Game state machine
//!
//! Everything the player can do goes through [`InputEvent`] and a single owned
//! [`GameSession`]. Rendering is a projection of the session ([`BoardView`]) with
//! no state of its own.

mod guess;
mod input;
mod keyboard;
mod session;
mod stats;
mod view;

pub use guess::GuessState;
pub use input::{InputEvent, LineError, events_from_line};
pub use keyboard::{VirtualKey, is_accepted_letter, keyboard_rows};
pub use session::{
    EvaluatedRow, GameError, GameSession, GameStatus, MAX_ATTEMPTS, SubmitOutcome,
};
pub use stats::Statistics;
pub use view::{BoardView, CellState, CellView};
