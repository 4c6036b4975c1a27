#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One of the eight directions a queen can slide in.
pub enum Direction
{
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction
{
    #[inline]
    /// Returns a list of all directions in clockwise order, starting from north.
    ///
    /// Move generation walks rays in exactly this order, so it fixes the search's enumeration order.
    pub const fn all() -> [Direction; 8]
    {
        [
            Self::North,
            Self::Northeast,
            Self::East,
            Self::Southeast,
            Self::South,
            Self::Southwest,
            Self::West,
            Self::Northwest,
        ]
    }

    /// Finds the direction with the given unit offset.
    pub fn from_offset(dr: i16, dc: i16) -> Option<Direction>
    {
        Direction::all().into_iter().find(|direction| direction.offset() == (dr, dc))
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::North => "north",
            | Self::Northeast => "northeast",
            | Self::East => "east",
            | Self::Southeast => "southeast",
            | Self::South => "south",
            | Self::Southwest => "southwest",
            | Self::West => "west",
            | Self::Northwest => "northwest",
        }
    }

    /// The (row, column) unit offset of a single step. Rows grow southwards.
    pub const fn offset(&self) -> (i16, i16)
    {
        match self
        {
            | Self::North => (-1, 0),
            | Self::Northeast => (-1, 1),
            | Self::East => (0, 1),
            | Self::Southeast => (1, 1),
            | Self::South => (1, 0),
            | Self::Southwest => (1, -1),
            | Self::West => (0, -1),
            | Self::Northwest => (-1, -1),
        }
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}
