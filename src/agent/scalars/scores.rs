/// A utility value. Evaluators are free to use any finite range; the infinities are reserved for decided games.
pub type Score = f64;

pub mod consts
{
    use super::Score;

    /// The score of a position the perspective player has already won.
    pub const WIN: Score = f64::INFINITY;

    /// The score of a position the perspective player has already lost.
    pub const LOSS: Score = f64::NEG_INFINITY;
}

pub use consts::*;

/// Whether a score proves the outcome of the game.
pub fn decided(score: Score) -> bool
{
    score == WIN || score == LOSS
}
