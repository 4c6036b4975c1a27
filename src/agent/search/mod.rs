use crate::prelude::*;

mod alphabeta;
mod deepening;
mod minimax;

pub use deepening::{iterative_deepening, Decision};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which tree search the driver runs at each depth.
///
/// Both variants share a signature and, for a fixed move order, agree on the move and score they return.
pub enum Strategy
{
    Minimax,
    #[default]
    AlphaBeta,
}

impl std::fmt::Display for Strategy
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Minimax => "minimax",
            | Self::AlphaBeta => "alphabeta",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Options with which the caller can control a search.
pub struct SearchOptions
{
    pub strategy: Strategy,

    /// Milliseconds of budget to leave unspent; the search abandons its current depth once fewer remain.
    pub margin: f64,

    /// A hard cap on iterative deepening. Unbounded (up to [`Depth::MAX`]) when `None`.
    pub max_depth: Option<Depth>,
}

impl Default for SearchOptions
{
    fn default() -> Self
    {
        SearchOptions {
            strategy:  Strategy::default(),
            margin:    SearchOptions::DEFAULT_MARGIN,
            max_depth: None,
        }
    }
}

impl SearchOptions
{
    /// The default safety margin, in milliseconds.
    pub const DEFAULT_MARGIN: f64 = 10.0;

    /// The deepest the driver may go.
    pub fn depth_limit(&self) -> Depth
    {
        self.max_depth.unwrap_or(Depth::MAX).min(Depth::MAX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The alpha-beta bounds. Plain minimax carries the full window and never narrows it.
pub struct Window
{
    /// The best score the maximizer can already guarantee.
    pub alpha: Score,

    /// The best score the minimizer can already guarantee.
    pub beta: Score,
}

impl Window
{
    /// The unbounded window used at the root.
    pub const FULL: Window = Window { alpha: LOSS, beta: WIN };

    /// Whether the bounds have crossed, so the rest of the node cannot matter.
    pub fn closed(&self) -> bool
    {
        self.alpha >= self.beta
    }
}

/// A single depth-limited search from one root position.
///
/// The search owns its node counter; every recursive frame bumps it exactly once, leaves included.
pub struct Search<'a>
{
    evaluator:   &'a dyn Evaluate,
    clock:       &'a dyn TimeLeft,
    margin:      f64,
    perspective: Player,
    expanded:    u64,
}

impl<'a> Search<'a>
{
    /// Creates a search that scores positions for the given player.
    pub fn new(evaluator: &'a dyn Evaluate, clock: &'a dyn TimeLeft, margin: f64, perspective: Player) -> Search<'a>
    {
        Search {
            evaluator,
            clock,
            margin,
            perspective,
            expanded: 0,
        }
    }

    /// The number of frames entered so far, across every call to [`Search::run`].
    pub fn expanded(&self) -> u64
    {
        self.expanded
    }

    /// Whether the remaining budget has reached the safety margin.
    ///
    /// A budget of exactly `margin` counts as spent.
    pub fn out_of_time(&self) -> bool
    {
        self.clock.time_left() <= self.margin
    }

    /// Searches the board to a fixed depth, returning the best line found.
    ///
    /// Fails with [`Kind::Timeout`] if the budget runs out partway, or with whatever the evaluator raised.
    pub fn run(&mut self, strategy: Strategy, board: &Board, depth: Depth) -> Result<Variation>
    {
        let mut variation = Variation::default();
        variation.score = match strategy
        {
            | Strategy::Minimax => self.minimax(board, depth, &mut variation)?,
            | Strategy::AlphaBeta => self.alpha_beta(board, depth, Window::FULL, &mut variation)?,
        };
        Ok(variation)
    }
}

impl<'a> Search<'a>
{
    /// Bookkeeping at the top of every frame: polls the clock, then counts the node.
    fn enter(&mut self) -> Result<()>
    {
        if self.out_of_time()
        {
            return Err(Error::empty(Kind::Timeout));
        }

        self.expanded += 1;
        Ok(())
    }

    /// Scores a frontier or terminal position from the perspective player's side.
    fn leaf(&self, board: &Board, terminal: bool) -> Result<Score>
    {
        if terminal
        {
            Ok(board.utility(self.perspective))
        }
        else
        {
            self.evaluator.evaluate(board, self.perspective)
        }
    }

    /// Whether the side to move here is the one trying to raise the score.
    fn maximizing(&self, board: &Board) -> bool
    {
        board.to_move() == self.perspective
    }
}

/// Whether a child's score should replace the incumbent. Ties keep the earlier move.
fn improves(score: Score, incumbent: Option<Score>, maximizing: bool) -> bool
{
    match incumbent
    {
        | None => true,
        | Some(best) if maximizing => score > best,
        | Some(best) => score < best,
    }
}
