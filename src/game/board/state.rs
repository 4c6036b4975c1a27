use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    NotStarted,
    InProgress,
    PlayerOneWins,
    PlayerTwoWins,
}

impl GameState
{
    /// The state in which the given player has won.
    pub fn won_by(player: Player) -> Self
    {
        match player
        {
            | Player::One => Self::PlayerOneWins,
            | Player::Two => Self::PlayerTwoWins,
        }
    }
}
