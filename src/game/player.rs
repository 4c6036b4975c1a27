use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The two players in a game of isolation. Player one always moves first.
pub enum Player
{
    One = 0,
    Two = 1,
}

impl Player
{
    /// Both players in turn order.
    pub const fn all() -> [Player; 2]
    {
        [Self::One, Self::Two]
    }

    /// Gets the next player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::One => Self::Two,
            | Self::Two => Self::One,
        }
    }

    /// The index of this player, for use in per-player arrays.
    pub fn index(&self) -> usize
    {
        *self as usize
    }

    /// Returns the glyph for this player, for use in board renderings.
    pub fn short(&self) -> char
    {
        match self
        {
            | Self::One => '1',
            | Self::Two => '2',
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::One => "Player 1",
            | Self::Two => "Player 2",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "1" | "one" | "Player 1" => Ok(Self::One),
            | "2" | "two" | "Player 2" => Ok(Self::Two),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
