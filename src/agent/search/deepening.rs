use std::time::{Duration, Instant};

use super::*;

#[derive(Clone, Debug)]
/// The result of one top-level move decision.
pub struct Decision
{
    /// The move to play; a forfeit only when the active player has no legal move.
    pub mv: Move,

    /// The deepest depth that ran to completion, or [`Depth::NIL`] if none did.
    pub depth: Depth,

    /// The principal variation at that depth. Empty if no depth completed.
    pub variation: Variation,

    /// Nodes entered across every depth, including any abandoned one.
    pub expanded: u64,

    /// Wall time spent deciding.
    pub elapsed: Duration,
}

impl Decision
{
    /// The decision for a player with nowhere to go.
    fn forfeit() -> Decision
    {
        Decision {
            mv:        Move::Forfeit,
            depth:     Depth::NIL,
            variation: Variation::default(),
            expanded:  0,
            elapsed:   Duration::ZERO,
        }
    }

    /// The score of the completed search, if one completed.
    pub fn score(&self) -> Option<Score>
    {
        (!self.depth.is_frontier()).then_some(self.variation.score)
    }
}

/// Runs the chosen search at increasing depth until the budget, the depth cap, or the game tree runs out.
///
/// The budget is polled before each depth and on entry to every node. A depth interrupted by the budget is thrown
/// away, and the move from the deepest completed depth is returned instead; if even the first depth could not
/// complete, the first legal move is. Only evaluator errors escape.
pub fn iterative_deepening(board: &Board, evaluator: &dyn Evaluate, clock: &dyn TimeLeft, options: &SearchOptions) -> Result<Decision>
{
    let start = Instant::now();

    let Some(&fallback) = board.legal_moves(board.to_move()).first()
    else
    {
        log::debug!("{} has no legal moves and forfeits", board.to_move());
        return Ok(Decision::forfeit());
    };

    let mut search = Search::new(evaluator, clock, options.margin, board.to_move());
    let mut completed: Option<(Depth, Variation)> = None;
    let limit = options.depth_limit();
    let mut depth = Depth::PLY;

    while depth <= limit
    {
        if search.out_of_time()
        {
            log::trace!("out of time before depth {}", depth);
            break;
        }

        let variation = match search.run(options.strategy, board, depth)
        {
            | Ok(variation) => variation,
            | Err(err) if err.is_timeout() =>
            {
                log::trace!("abandoned depth {} after {} nodes", depth, search.expanded());
                break;
            }
            | Err(err) => return Err(err),
        };

        log::debug!("depth {: >3}: {} ({} nodes)", depth, variation, search.expanded());

        // Once the root is proven, or the tree is fully explored, deeper searches cannot change the answer.
        let finished = decided(variation.score) || usize::from(depth) >= board.blank_count();
        completed = Some((depth, variation));

        if finished || depth == Depth::MAX
        {
            break;
        }
        depth += 1;
    }

    let (depth, variation) = completed.unwrap_or_default();
    let mv = variation.best().unwrap_or(fallback);

    Ok(Decision {
        mv,
        depth,
        variation,
        expanded: search.expanded(),
        elapsed: start.elapsed(),
    })
}
