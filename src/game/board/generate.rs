use itertools::iproduct;

use super::*;

impl Board
{
    /// Returns every open cell, in row-major order.
    pub fn blank_cells(&self) -> Vec<Cell>
    {
        iproduct!(0..self.height(), 0..self.width())
            .map(Cell::from)
            .filter(|cell| self.is_open(*cell))
            .collect()
    }

    /// Generates all legal moves for the given player into the buffer.
    ///
    /// An unplaced player may land on any open cell, visited in row-major order. A placed player slides like a queen,
    /// walking each ray clockwise from north and stopping at the first cell that is blocked, occupied, or off the grid.
    pub fn generate_moves_into(&self, player: Player, moves: &mut Vec<Move>)
    {
        let Some(origin) = self.position(player)
        else
        {
            moves.extend(self.blank_cells().into_iter().map(Move::To));
            return;
        };

        for direction in Direction::all()
        {
            moves.extend(self.ray(origin, direction).map(Move::To));
        }
    }

    /// Gets all legal moves for the given player. Empty when the player is stuck.
    pub fn legal_moves(&self, player: Player) -> Vec<Move>
    {
        let mut moves = Vec::new();
        self.generate_moves_into(player, &mut moves);
        moves
    }

    /// Counts the legal moves for the given player without collecting them.
    pub fn mobility(&self, player: Player) -> usize
    {
        match self.position(player)
        {
            | None => self.blank,
            | Some(origin) => Direction::all().into_iter().map(|direction| self.ray(origin, direction).count()).sum(),
        }
    }

    /// Lazily walks the open cells along one ray, excluding the origin.
    fn ray(&self, origin: Cell, direction: Direction) -> impl Iterator<Item = Cell> + '_
    {
        std::iter::successors(Some(origin), move |cell| cell.step(direction))
            .skip(1)
            .take_while(move |cell| self.is_open(*cell))
    }
}
