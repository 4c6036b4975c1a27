use crate::prelude::*;

use super::cell::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The options applied to a game of isolation.
pub struct BoardOptions
{
    /// The number of columns.
    pub width: Coordinate,

    /// The number of rows.
    pub height: Coordinate,
}

impl Default for BoardOptions
{
    fn default() -> Self
    {
        BoardOptions {
            width:  Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

impl BoardOptions
{
    /// The side length of the classic board.
    pub const DEFAULT_SIZE: Coordinate = 7;

    /// Creates a set of options for a board of the given dimensions.
    pub fn new(width: Coordinate, height: Coordinate) -> Self
    {
        BoardOptions { width, height }
    }

    /// The total number of cells on the board.
    pub fn cells(&self) -> usize
    {
        self.width as usize * self.height as usize
    }

    /// Ensures the dimensions describe a real grid.
    pub fn validate(&self) -> Result<()>
    {
        if self.width == 0 || self.height == 0
        {
            let err_msg = format!("Board dimensions must be positive (got {}x{}).", self.width, self.height);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(())
    }
}
