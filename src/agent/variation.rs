use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug, Default)]
/// A particular line taken by the search, which is a continuation and a corresponding score.
pub struct Variation
{
    pub moves: ArrayVec<Move, { scalars::MAXIMUM_PLY }>,
    pub score: Score,
}

impl Variation
{
    /// The first move of the line, which is the one to actually play.
    pub fn best(&self) -> Option<Move>
    {
        self.moves.first().copied()
    }

    /// Forgets the line, keeping the allocation.
    pub fn clear(&mut self)
    {
        self.moves.clear();
    }

    /// Replaces this line with the given move followed by the rest of a child's line.
    pub fn load(&mut self, mv: Move, rest: &Variation)
    {
        self.moves.clear();
        self.moves.push(mv);
        let room = self.moves.remaining_capacity();
        self.moves.extend(rest.moves.iter().copied().take(room));
    }
}

impl std::fmt::Display for Variation
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let line = self.moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>().join(" ");
        write!(f, "[{}] scored {}", line, self.score)
    }
}
