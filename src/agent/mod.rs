use crate::prelude::*;

pub mod clock;
pub mod evaluators;
pub mod players;
pub mod scalars;
pub mod search;
pub mod variation;

pub use clock::*;
pub use evaluators::*;
pub use players::*;
pub use scalars::*;
pub use search::*;
pub use variation::*;

/// Anything that can take a seat in a game of isolation.
pub trait Agent
{
    /// Chooses a move for the active player on the given board.
    ///
    /// Returns [`Move::Forfeit`] rather than an error when the active player is stuck.
    fn get_move(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Result<Move>;

    /// A short name for logs and tallies.
    fn name(&self) -> String;

    /// Whether the game loop should hold this agent to the per-move time limit.
    fn timed(&self) -> bool
    {
        true
    }
}
