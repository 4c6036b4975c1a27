use crate::prelude::*;

mod generate;
mod history;
mod printers;
mod state;

pub use history::{Entry, History};
pub use state::GameState;

use super::cell::Coordinate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The occupancy of a single cell.
pub enum Square
{
    #[default]
    Empty,

    /// A cell a player has left. It can never be entered again.
    Blocked,

    /// A cell a player currently stands on.
    Occupied(Player),
}

impl Square
{
    /// Whether a player could land here.
    pub fn is_open(&self) -> bool
    {
        matches!(self, Self::Empty)
    }
}

#[derive(Clone)]
/// An immutable-per-ply isolation board.
///
/// The only transition is [`Board::apply_move`], which returns a fresh successor and leaves `self` untouched,
/// so search branches can hold their own boards without any undo bookkeeping.
pub struct Board
{
    /// The dimensions of this game.
    options: BoardOptions,

    /// Row-major occupancy of every cell.
    squares: Vec<Square>,

    /// Where each player stands, or `None` before their first placement.
    positions: [Option<Cell>; 2],

    /// The active player.
    to_move: Player,

    /// Every ply played to reach this position.
    history: History,

    /// The number of cells still open.
    blank: usize,
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        // Two boards are the same position regardless of how they got there.
        self.options == other.options
            && self.to_move == other.to_move
            && self.positions == other.positions
            && self.squares == other.squares
    }
}

impl Eq for Board {}

impl Default for Board
{
    fn default() -> Self
    {
        Board::build(BoardOptions::default())
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.grid(f)
    }
}

impl Board
{
    /// Returns the successor position after the active player makes the given move.
    ///
    /// The mover's previous cell stays blocked for the rest of the game.
    pub fn apply_move(&self, mv: Move) -> Result<Board>
    {
        let to = self.check(mv)?;
        let mut next = self.clone();
        next.play_unchecked(to);
        Ok(next)
    }

    /// The number of open cells.
    pub fn blank_count(&self) -> usize
    {
        self.blank
    }

    /// Ensures a move is legal for the active player, or returns an error explaining why it isn't.
    ///
    /// On success, gives back the destination cell.
    pub fn check(&self, mv: Move) -> Result<Cell>
    {
        let Move::To(to) = mv
        else
        {
            return Err(self.reject(mv, "A forfeit does not change the board.".into()));
        };

        if !self.contains(to)
        {
            let err_msg = format!("{} is outside the {}x{} grid.", to, self.width(), self.height());
            return Err(self.reject(mv, err_msg));
        }

        if !self.is_open(to)
        {
            let err_msg = format!("{} is {:?}.", to, self.squares[self.index(to)]);
            return Err(self.reject(mv, err_msg));
        }

        let Some(from) = self.position(self.to_move)
        else
        {
            return Ok(to);
        };

        let Some((direction, distance)) = from.ray_to(to)
        else
        {
            return Err(self.reject(mv, format!("{} is not a queen move away from {}.", to, from)));
        };

        let mut cursor = from;
        for _ in 1..distance
        {
            // Intermediate cells are strictly inside the grid, since both endpoints are.
            cursor = cursor.step(direction).unwrap_or(cursor);
            if !self.is_open(cursor)
            {
                let err_msg = format!("The path {} from {} is blocked at {}.", direction, from, cursor);
                return Err(self.reject(mv, err_msg));
            }
        }

        Ok(to)
    }

    /// Whether the cell lies on this board.
    pub fn contains(&self, cell: Cell) -> bool
    {
        cell.row < self.height() && cell.col < self.width()
    }

    /// The number of rows.
    pub fn height(&self) -> Coordinate
    {
        self.options.height
    }

    /// Gets the history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// The player waiting for their turn.
    pub fn inactive_player(&self) -> Player
    {
        self.to_move.flip()
    }

    /// Whether the player to move is stuck, and has therefore lost.
    pub fn is_terminal(&self) -> bool
    {
        self.mobility(self.to_move) == 0
    }

    /// Whether the given player has lost this game.
    pub fn is_loser(&self, player: Player) -> bool
    {
        player == self.to_move && self.is_terminal()
    }

    /// Whether a cell is on the board and free to be entered.
    pub fn is_open(&self, cell: Cell) -> bool
    {
        self.square(cell).is_some_and(|square| square.is_open())
    }

    /// Whether the given player has won this game.
    pub fn is_winner(&self, player: Player) -> bool
    {
        player != self.to_move && self.is_terminal()
    }

    /// Creates a new empty board with the given options, with player one to move.
    pub fn new(options: BoardOptions) -> Result<Board>
    {
        options.validate()?;
        Ok(Board::build(options))
    }

    /// Gets the options configured for this game.
    pub fn options(&self) -> BoardOptions
    {
        self.options
    }

    /// The number of plies played so far.
    pub fn ply(&self) -> usize
    {
        self.history.len()
    }

    /// Where the given player stands, if they have been placed.
    pub fn position(&self, player: Player) -> Option<Cell>
    {
        self.positions[player.index()]
    }

    /// The occupancy of a cell, or `None` off the board.
    pub fn square(&self, cell: Cell) -> Option<Square>
    {
        self.contains(cell).then(|| self.squares[self.index(cell)])
    }

    /// The state of the game.
    pub fn state(&self) -> GameState
    {
        if self.history.is_empty()
        {
            GameState::NotStarted
        }
        else if self.is_terminal()
        {
            GameState::won_by(self.inactive_player())
        }
        else
        {
            GameState::InProgress
        }
    }

    /// The active player.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// The value of a decided position from the given player's perspective.
    ///
    /// This is `+inf` when the perspective's opponent is stuck on their turn, `-inf` when the perspective is, and zero
    /// for any position that is still being played out; the search hands those to an evaluator instead.
    pub fn utility(&self, perspective: Player) -> Score
    {
        if !self.is_terminal()
        {
            0.0
        }
        else if perspective == self.to_move
        {
            LOSS
        }
        else
        {
            WIN
        }
    }

    /// The number of columns.
    pub fn width(&self) -> Coordinate
    {
        self.options.width
    }
}

impl Board
{
    /// Builds an empty board with options that are already known to be valid.
    fn build(options: BoardOptions) -> Board
    {
        let cells = options.cells();
        Board {
            options,
            squares: vec![Square::Empty; cells],
            positions: [None; 2],
            to_move: Player::One,
            history: History::default(),
            blank: cells,
        }
    }

    /// The row-major index of an on-board cell.
    fn index(&self, cell: Cell) -> usize
    {
        cell.row as usize * self.width() as usize + cell.col as usize
    }

    /// Builds the error for an illegal move.
    fn reject(&self, mv: Move, reason: String) -> Error
    {
        let base = Error::new(Kind::InvalidMove, format!("{} cannot play {}.", self.to_move, mv));
        Error::new(Kind::InvalidMove, reason).chain(base)
    }

    /// Moves the active player to a cell known to be legal, then passes the turn.
    fn play_unchecked(&mut self, to: Cell)
    {
        let player = self.to_move;
        let from = self.positions[player.index()];

        if let Some(origin) = from
        {
            let index = self.index(origin);
            self.squares[index] = Square::Blocked;
        }

        let index = self.index(to);
        self.squares[index] = Square::Occupied(player);
        self.positions[player.index()] = Some(to);
        self.blank -= 1;

        self.history.play(Entry { player, from, to });
        self.to_move = player.flip();
    }
}
