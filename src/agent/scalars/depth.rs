use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A ply-representation of search depth.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl From<Depth> for usize
{
    fn from(value: Depth) -> Self
    {
        value.0 as usize
    }
}

impl Depth
{
    /// Zero plies; the search frontier.
    pub const NIL: Depth = Depth::new(0);

    /// One ply.
    pub const PLY: Depth = Depth::new(1);

    /// The max search depth is 128 plies.
    pub const MAX: Depth = Depth::new(1 + i8::MAX as u8);

    /// Whether this depth is at the frontier, where the evaluator takes over.
    pub const fn is_frontier(&self) -> bool
    {
        self.0 == 0
    }

    /// Constructs a new depth.
    pub const fn new(value: u8) -> Depth
    {
        Depth(value)
    }

    /// The number of plies this depth covers.
    pub const fn plies(&self) -> u8
    {
        self.0
    }
}

impl Add<u8> for Depth
{
    type Output = Self;
    fn add(self, rhs: u8) -> Self::Output
    {
        Depth(self.0.saturating_add(rhs))
    }
}

impl AddAssign<u8> for Depth
{
    fn add_assign(&mut self, rhs: u8)
    {
        *self = *self + rhs;
    }
}

impl Sub<u8> for Depth
{
    type Output = Self;
    fn sub(self, rhs: u8) -> Self::Output
    {
        Depth(self.0.saturating_sub(rhs))
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
