use std::time::Duration;

use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ArenaOptions
{
    #[arg(long, default_value_t = BoardOptions::DEFAULT_SIZE)]
    /// number of columns on the board
    pub width: u16,

    #[arg(long, default_value_t = BoardOptions::DEFAULT_SIZE)]
    /// number of rows on the board
    pub height: u16,

    #[arg(short, long, default_value_t = 150)]
    /// per-move time limit in milliseconds
    pub time_limit: u64,

    #[arg(short, long, default_value_t = SearchOptions::DEFAULT_MARGIN)]
    /// milliseconds of each budget the search leaves unspent
    pub margin: f64,

    #[arg(long, value_enum, default_value_t = Seat::AlphaBeta)]
    /// the agent playing first
    pub one: Seat,

    #[arg(long, value_enum, default_value_t = Seat::Greedy)]
    /// the agent playing second
    pub two: Seat,

    #[arg(long, value_enum, default_value_t = Heuristic::Improved)]
    /// the evaluator used by greedy and search agents
    pub heuristic: Heuristic,

    #[arg(short, long)]
    /// maximum depth for search agents (unbounded by default)
    pub depth: Option<u8>,

    #[arg(short, long)]
    /// seed for random agents
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = 1)]
    /// number of games to play
    pub games: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// The kinds of agent that can take a seat.
pub enum Seat
{
    Human,
    Random,
    Greedy,
    Minimax,
    #[value(name = "alphabeta")]
    AlphaBeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Why a game ended.
pub enum Reason
{
    /// The loser had no legal move on their turn.
    Isolated,

    /// The loser conceded while legal moves remained.
    Forfeit,

    /// The loser overran the per-move time limit.
    Timeout,

    /// The loser returned a move the board rejected.
    IllegalMove(Move),
}

#[derive(Clone, Debug)]
/// The result of a finished game.
pub struct Outcome
{
    pub winner: Player,
    pub loser:  Player,
    pub reason: Reason,
    pub board:  Board,
}

impl Outcome
{
    /// Every move played, in order.
    pub fn history(&self) -> Vec<Move>
    {
        self.board.history().moves()
    }
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{} wins after {} plies ({:?})", self.winner, self.board.ply(), self.reason)
    }
}

/// A single game between two agents.
pub struct Match
{
    board:      Board,
    agents:     [Box<dyn Agent>; 2],
    time_limit: Duration,
}

impl Match
{
    /// Creates a new match; `one` moves first.
    pub fn new(board: Board, one: Box<dyn Agent>, two: Box<dyn Agent>, time_limit: Duration) -> Self
    {
        Match {
            board,
            agents: [one, two],
            time_limit,
        }
    }

    /// Plays the game out, alternating turns until someone loses.
    pub fn play(mut self) -> Result<Outcome>
    {
        loop
        {
            let player = self.board.to_move();

            if self.board.is_terminal()
            {
                return Ok(self.finish(Reason::Isolated));
            }

            let deadline = Deadline::new(self.time_limit);
            let agent = &mut self.agents[player.index()];
            let mv = agent.get_move(&self.board, &deadline)?;

            if agent.timed() && deadline.expired()
            {
                log::warn!("{} ({}) took {:?} and overran the limit", player, agent.name(), deadline.elapsed());
                return Ok(self.finish(Reason::Timeout));
            }

            if mv.is_forfeit()
            {
                return Ok(self.finish(Reason::Forfeit));
            }

            let next = match self.board.apply_move(mv)
            {
                | Ok(next) => next,
                | Err(err) if err.kind == Kind::InvalidMove =>
                {
                    log::warn!("rejected move from {}:\n{}", agent.name(), err);
                    return Ok(self.finish(Reason::IllegalMove(mv)));
                }
                | Err(err) => return Err(err),
            };

            if let Some(entry) = next.history().prev()
            {
                log::info!("{: >3}. {} ({})", next.ply(), entry, agent.name());
            }
            self.board = next;
        }
    }

    /// Ends the game with the active player as the loser.
    fn finish(self, reason: Reason) -> Outcome
    {
        let loser = self.board.to_move();
        log::debug!("final position:\n{}", self.board);

        Outcome {
            winner: loser.flip(),
            loser,
            reason,
            board: self.board,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Wins per seat across a series of games.
pub struct Tally
{
    pub wins: [usize; 2],
}

impl std::fmt::Display for Tally
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}: {}, {}: {}", Player::One, self.wins[0], Player::Two, self.wins[1])
    }
}

/// Runs a series of matches configured from the command line.
pub struct Arena
{
    options: ArenaOptions,
    board:   Board,
}

impl Arena
{
    /// Creates a new arena, validating the board options up front.
    pub fn new(options: ArenaOptions) -> Result<Self>
    {
        let board = Board::new(BoardOptions::new(options.width, options.height))?;

        if options.margin < 0.0 || !options.margin.is_finite()
        {
            return Err(Error::new(Kind::InvalidOption, format!("Invalid safety margin {}.", options.margin)));
        }

        if options.depth == Some(0)
        {
            return Err(Error::new(Kind::InvalidOption, "Search depth must be at least one ply.".into()));
        }

        Ok(Arena { options, board })
    }

    /// Plays every game, returning the tally.
    pub fn run(&self) -> Result<Tally>
    {
        let mut tally = Tally::default();

        for game in 0..self.options.games
        {
            let one = self.seat(self.options.one, game, Player::One);
            let two = self.seat(self.options.two, game, Player::Two);
            log::info!("game {}: {} vs {}", game + 1, one.name(), two.name());

            let time_limit = Duration::from_millis(self.options.time_limit);
            let outcome = Match::new(self.board.clone(), one, two, time_limit).play()?;

            log::info!("{}", outcome);
            tally.wins[outcome.winner.index()] += 1;
        }

        log::info!("final tally: {}", tally);
        Ok(tally)
    }

    /// Builds the agent for a seat. Random seeds differ per game and per seat so a series is not one game repeated.
    pub fn seat(&self, seat: Seat, game: usize, player: Player) -> Box<dyn Agent>
    {
        let heuristic = self.options.heuristic;
        let search = |strategy| {
            let options = SearchOptions {
                strategy,
                margin: self.options.margin,
                max_depth: self.options.depth.map(Depth::from),
            };
            Box::new(SearchAgent::new(heuristic, options)) as Box<dyn Agent>
        };

        match seat
        {
            | Seat::Human => Box::new(HumanAgent::stdio()),
            | Seat::Random =>
            {
                let seed = self.options.seed.map(|seed| seed.wrapping_add((2 * game + player.index()) as u64));
                Box::new(RandomAgent::new(seed))
            }
            | Seat::Greedy => Box::new(GreedyAgent::new(heuristic)),
            | Seat::Minimax => search(Strategy::Minimax),
            | Seat::AlphaBeta => search(Strategy::AlphaBeta),
        }
    }
}
