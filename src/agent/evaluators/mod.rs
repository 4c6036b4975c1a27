use crate::prelude::*;

mod heuristics;

pub use heuristics::{CenterScore, ImprovedScore, NullScore, OpenMoves};

/// A scoring function for positions at the search frontier.
///
/// Implementations must be pure functions of the board, must not consult the time budget, and should only be asked
/// about positions that are still in play. Any error returned here is fatal to the search that asked.
pub trait Evaluate
{
    /// Scores the board from the given player's perspective; larger is better for them.
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>;
}

impl<F> Evaluate for F
where
    F: Fn(&Board, Player) -> Score,
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        Ok(self(board, player))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
/// The reference heuristics, selectable at runtime.
pub enum Heuristic
{
    Null,
    Open,
    #[default]
    Improved,
    Center,
}

impl Evaluate for Heuristic
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        match self
        {
            | Self::Null => NullScore.evaluate(board, player),
            | Self::Open => OpenMoves.evaluate(board, player),
            | Self::Improved => ImprovedScore.evaluate(board, player),
            | Self::Center => CenterScore.evaluate(board, player),
        }
    }
}

impl std::fmt::Display for Heuristic
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Null => "null",
            | Self::Open => "open",
            | Self::Improved => "improved",
            | Self::Center => "center",
        };
        write!(f, "{repr}")
    }
}
