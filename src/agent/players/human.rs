use std::io::{BufRead, Write};

use crate::prelude::*;

/// An agent that asks a person for each move.
///
/// Reads one move per line in `(row, col)` notation, prompting again until the move is legal.
pub struct HumanAgent<R: BufRead, W: Write>
{
    input:  R,
    output: W,
}

impl HumanAgent<std::io::StdinLock<'static>, std::io::Stdout>
{
    /// A human at the terminal.
    pub fn stdio() -> Self
    {
        HumanAgent::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W>
{
    /// Creates a new human agent over the given streams.
    pub fn new(input: R, output: W) -> Self
    {
        HumanAgent { input, output }
    }

    /// Reads lines until one names a legal move.
    fn prompt(&mut self, board: &Board, legal: &[Move]) -> Result<Move>
    {
        loop
        {
            write!(self.output, "{} to move> ", board.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0
            {
                return Err(Error::new(Kind::IoError, "Input closed before a move was chosen.".into()));
            }

            match line.parse::<Move>()
            {
                | Ok(mv) if legal.contains(&mv) => return Ok(mv),
                | Ok(mv) => writeln!(self.output, "{} is not legal here.", mv)?,
                | Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W>
{
    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeLeft) -> Result<Move>
    {
        let legal = board.legal_moves(board.to_move());
        if legal.is_empty()
        {
            return Ok(Move::Forfeit);
        }

        writeln!(self.output, "{}", board)?;
        let listing = legal.iter().map(|mv| mv.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(self.output, "legal moves: {}", listing)?;

        self.prompt(board, &legal)
    }

    fn name(&self) -> String
    {
        "human".into()
    }

    fn timed(&self) -> bool
    {
        false
    }
}
