use super::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {:?}, to_move: {:?}, positions: {:?}, {:?} }}",
            self.options, self.to_move, self.positions, self.history
        )
    }

    /// Pretty print, which is the grid followed by the history.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.grid(f)?;
        write!(f, "\nwith {:#?}", self.history)
    }

    /// Renders the grid with row and column labels.
    ///
    /// Open cells are `.`, burned cells are `#`, and each player is shown by their number.
    pub(super) fn grid(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "   ")?;
        for col in 0..self.width()
        {
            write!(f, " {: >2}", col)?;
        }

        for row in 0..self.height()
        {
            write!(f, "\n{: >2} ", row)?;
            for col in 0..self.width()
            {
                let glyph = match self.squares[self.index(Cell::new(row, col))]
                {
                    | Square::Empty => '.',
                    | Square::Blocked => '#',
                    | Square::Occupied(player) => player.short(),
                };
                write!(f, "  {}", glyph)?;
            }
        }

        Ok(())
    }
}
