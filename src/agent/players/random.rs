use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Debug)]
/// An agent that plays a uniformly random legal move.
pub struct RandomAgent
{
    rng: StdRng,
}

impl RandomAgent
{
    /// Creates a new random agent, seeded for reproducibility if a seed is given.
    pub fn new(seed: Option<u64>) -> Self
    {
        let rng = match seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent
{
    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeLeft) -> Result<Move>
    {
        let moves = board.legal_moves(board.to_move());
        Ok(moves.choose(&mut self.rng).copied().unwrap_or(Move::Forfeit))
    }

    fn name(&self) -> String
    {
        "random".into()
    }
}
