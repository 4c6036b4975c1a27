use crate::prelude::*;

#[derive(Debug)]
/// An agent that picks moves by time-bounded iterative deepening over minimax or alpha-beta.
///
/// The two strategies are interchangeable from the game loop's point of view.
pub struct SearchAgent<E: Evaluate>
{
    evaluator: E,
    options:   SearchOptions,
    expanded:  u64,
    last:      Option<Decision>,
}

impl<E: Evaluate> SearchAgent<E>
{
    /// An agent that runs alpha-beta at each depth.
    pub fn alpha_beta(evaluator: E) -> Self
    {
        SearchAgent::new(evaluator, SearchOptions {
            strategy: Strategy::AlphaBeta,
            ..Default::default()
        })
    }

    /// The number of nodes entered during the most recent call to `get_move`.
    pub fn expanded(&self) -> u64
    {
        self.expanded
    }

    /// The full result of the most recent decision, if one has been made.
    pub fn last_decision(&self) -> Option<&Decision>
    {
        self.last.as_ref()
    }

    /// An agent that runs plain minimax at each depth.
    pub fn minimax(evaluator: E) -> Self
    {
        SearchAgent::new(evaluator, SearchOptions {
            strategy: Strategy::Minimax,
            ..Default::default()
        })
    }

    /// Creates a new agent with the given options.
    pub fn new(evaluator: E, options: SearchOptions) -> Self
    {
        SearchAgent {
            evaluator,
            options,
            expanded: 0,
            last: None,
        }
    }

    /// Gets the options this agent searches with.
    pub fn options(&self) -> &SearchOptions
    {
        &self.options
    }

    /// Caps iterative deepening at the given depth.
    pub fn with_max_depth(mut self, depth: Depth) -> Self
    {
        self.options.max_depth = Some(depth);
        self
    }

    /// Sets the safety margin, in milliseconds.
    pub fn with_margin(mut self, margin: f64) -> Self
    {
        self.options.margin = margin;
        self
    }
}

impl<E: Evaluate> Agent for SearchAgent<E>
{
    fn get_move(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Result<Move>
    {
        self.expanded = 0;
        self.last = None;

        let decision = iterative_deepening(board, &self.evaluator, time_left, &self.options)?;
        self.expanded = decision.expanded;

        let seconds = decision.elapsed.as_secs_f64();
        let rate = if seconds > 0.0 { (decision.expanded as f64 / seconds).floor() as u64 } else { 0 };
        let score = decision.score().map(|s| s.to_string()).unwrap_or("n/a".into());

        log::debug!("found {: ^10}: scored {: >6}", decision.mv, score);
        log::debug!("took {: >3.3}s and reached depth {}", seconds, decision.depth);
        log::debug!("visited {:09} nodes ({: >8} N/s)", decision.expanded, rate);

        let mv = decision.mv;
        self.last = Some(decision);
        Ok(mv)
    }

    fn name(&self) -> String
    {
        self.options.strategy.to_string()
    }
}
