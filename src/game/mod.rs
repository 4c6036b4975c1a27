pub(crate) mod board;
pub mod cell;
pub(crate) mod notation;
pub(crate) mod options;
pub mod player;

pub use board::{Board, Entry, GameState, History, Square};
pub use cell::{Cell, Direction};
pub use notation::Move;
pub use options::BoardOptions;
pub use player::Player;
