use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref CELL_PATTERN: Regex = Regex::new(r"^\(?\s*(?<row>[0-9]+)\s*[, ]\s*(?<col>[0-9]+)\s*\)?$").unwrap();
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Represents a single ply in a game of isolation.
///
/// A move names only its destination; the mover is always the active player.
pub enum Move
{
    To(Cell),
    /// The signal that the active player has no legal move and concedes the game.
    #[default]
    Forfeit,
}

impl From<Cell> for Move
{
    fn from(value: Cell) -> Self
    {
        Move::To(value)
    }
}

impl Move
{
    /// The destination of this move, if it has one.
    pub fn cell(&self) -> Option<Cell>
    {
        match self
        {
            | Self::To(cell) => Some(*cell),
            | Self::Forfeit => None,
        }
    }

    /// Whether this move concedes the game.
    pub fn is_forfeit(&self) -> bool
    {
        matches!(self, Self::Forfeit)
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::To(cell) => write!(f, "{}", cell),
            | Self::Forfeit => write!(f, "forfeit"),
        }
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let trimmed = s.trim();
        if trimmed == "forfeit"
        {
            return Ok(Move::Forfeit);
        }

        let Some(caps) = CELL_PATTERN.captures(trimmed)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let row_str = &caps["row"];
        let Ok(row) = row_str.parse::<u16>()
        else
        {
            let err = Error::new(Kind::ParseError, format!("Row '{}' is out of range.", row_str));
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let col_str = &caps["col"];
        let Ok(col) = col_str.parse::<u16>()
        else
        {
            let err = Error::new(Kind::ParseError, format!("Column '{}' is out of range.", col_str));
            return Err(err.chain_parse::<Self>(s.into()));
        };

        Ok(Move::To(Cell::new(row, col)))
    }
}
