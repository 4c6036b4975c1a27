use crate::prelude::*;

#[derive(Clone, Debug)]
/// An agent that looks one ply ahead and takes whichever move its evaluator likes best.
///
/// Ties keep the earliest move in generation order.
pub struct GreedyAgent<E: Evaluate>
{
    evaluator: E,
}

impl<E: Evaluate> GreedyAgent<E>
{
    /// Creates a new greedy agent.
    pub fn new(evaluator: E) -> Self
    {
        GreedyAgent { evaluator }
    }
}

impl<E: Evaluate> Agent for GreedyAgent<E>
{
    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeLeft) -> Result<Move>
    {
        let me = board.to_move();
        let mut best: Option<(Score, Move)> = None;

        for mv in board.legal_moves(me)
        {
            let next = board.apply_move(mv)?;
            let score = if next.is_terminal() { next.utility(me) } else { self.evaluator.evaluate(&next, me)? };

            if best.map_or(true, |(incumbent, _)| score > incumbent)
            {
                best = Some((score, mv));
            }
        }

        Ok(best.map(|(_, mv)| mv).unwrap_or(Move::Forfeit))
    }

    fn name(&self) -> String
    {
        "greedy".into()
    }
}
