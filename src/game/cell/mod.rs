mod direction;

pub use direction::Direction;

/// The coordinate type along either axis of the grid.
pub type Coordinate = u16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A point on the grid, addressed by row then column from the top-left corner.
///
/// A cell knows nothing about the bounds of a particular board; the board filters steps that leave it.
pub struct Cell
{
    pub row: Coordinate,
    pub col: Coordinate,
}

impl From<(Coordinate, Coordinate)> for Cell
{
    fn from((row, col): (Coordinate, Coordinate)) -> Self
    {
        Cell::new(row, col)
    }
}

impl Cell
{
    /// Constructs a new cell.
    pub const fn new(row: Coordinate, col: Coordinate) -> Cell
    {
        Cell { row, col }
    }

    /// The cell one step away in the given direction, unless that would leave the coordinate space.
    pub fn step(&self, direction: Direction) -> Option<Cell>
    {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }

    /// If the target lies on one of the eight rays leaving this cell, returns the direction and distance to it.
    pub fn ray_to(&self, target: Cell) -> Option<(Direction, usize)>
    {
        let dr = target.row as i32 - self.row as i32;
        let dc = target.col as i32 - self.col as i32;

        if (dr, dc) == (0, 0) || !(dr == 0 || dc == 0 || dr.abs() == dc.abs())
        {
            return None;
        }

        let direction = Direction::from_offset(dr.signum() as i16, dc.signum() as i16)?;
        let distance = dr.abs().max(dc.abs()) as usize;
        Some((direction, distance))
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.row, self.col)
    }
}
