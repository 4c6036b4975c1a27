use super::*;

impl<'a> Search<'a>
{
    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Siblings after a cutoff are never entered, so they contribute nothing to the node count. At the root the window
    /// is full, so the move and score agree with [`Search::minimax`] for the same move order.
    pub(super) fn alpha_beta(&mut self, board: &Board, depth: Depth, window: Window, variation: &mut Variation) -> Result<Score>
    {
        self.enter()?;
        variation.clear();

        let moves = board.legal_moves(board.to_move());
        if depth.is_frontier() || moves.is_empty()
        {
            return self.leaf(board, moves.is_empty());
        }

        let maximizing = self.maximizing(board);
        let mut window = window;
        let mut best: Option<Score> = None;
        let mut line = Variation::default();

        for mv in moves
        {
            let child = board.apply_move(mv)?;
            let score = self.alpha_beta(&child, depth - 1, window, &mut line)?;

            if improves(score, best, maximizing)
            {
                best = Some(score);
                variation.load(mv, &line);
            }

            if maximizing
            {
                window.alpha = window.alpha.max(score);
            }
            else
            {
                window.beta = window.beta.min(score);
            }

            if window.closed()
            {
                break;
            }
        }

        Ok(best.unwrap_or_else(|| board.utility(self.perspective)))
    }
}
