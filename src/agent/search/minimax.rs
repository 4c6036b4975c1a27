use super::*;

impl<'a> Search<'a>
{
    /// Plain depth-limited minimax.
    ///
    /// Every legal move at every node is expanded, in generation order, and the first of any equally-scored moves wins.
    pub(super) fn minimax(&mut self, board: &Board, depth: Depth, variation: &mut Variation) -> Result<Score>
    {
        self.enter()?;
        variation.clear();

        let moves = board.legal_moves(board.to_move());
        if depth.is_frontier() || moves.is_empty()
        {
            return self.leaf(board, moves.is_empty());
        }

        let maximizing = self.maximizing(board);
        let mut best: Option<Score> = None;
        let mut line = Variation::default();

        for mv in moves
        {
            let child = board.apply_move(mv)?;
            let score = self.minimax(&child, depth - 1, &mut line)?;

            if improves(score, best, maximizing)
            {
                best = Some(score);
                variation.load(mv, &line);
            }
        }

        // The move list was non-empty, so something was scored.
        Ok(best.unwrap_or_else(|| board.utility(self.perspective)))
    }
}
