use super::*;

/// Returns the terminal utility if the game is already decided.
fn decided_utility(board: &Board, player: Player) -> Option<Score>
{
    board.is_terminal().then(|| board.utility(player))
}

#[derive(Clone, Copy, Debug, Default)]
/// Scores every undecided position as zero. Useful for testing search plumbing without any policy.
pub struct NullScore;

impl Evaluate for NullScore
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        Ok(decided_utility(board, player).unwrap_or(0.0))
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// The number of moves open to the player.
pub struct OpenMoves;

impl Evaluate for OpenMoves
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        Ok(decided_utility(board, player).unwrap_or(board.mobility(player) as Score))
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// The player's mobility minus their opponent's.
pub struct ImprovedScore;

impl Evaluate for ImprovedScore
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        if let Some(utility) = decided_utility(board, player)
        {
            return Ok(utility);
        }

        let own = board.mobility(player) as Score;
        let theirs = board.mobility(player.flip()) as Score;
        Ok(own - theirs)
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// The squared distance of the player from the centre of the board.
///
/// Larger is better, which pushes a player out of the contested middle. Unplaced players score zero.
pub struct CenterScore;

impl Evaluate for CenterScore
{
    fn evaluate(&self, board: &Board, player: Player) -> Result<Score>
    {
        if let Some(utility) = decided_utility(board, player)
        {
            return Ok(utility);
        }

        let Some(cell) = board.position(player)
        else
        {
            return Ok(0.0);
        };

        let (mid_row, mid_col) = (board.height() as Score / 2.0, board.width() as Score / 2.0);
        let (dr, dc) = (cell.row as Score - mid_row, cell.col as Score - mid_col);
        Ok(dr * dr + dc * dc)
    }
}
