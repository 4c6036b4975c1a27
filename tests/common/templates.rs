use isolation::prelude::*;

/// A budget that never runs out.
pub fn forever() -> f64
{
    2000.0
}

/// A budget that has already run out.
pub fn never() -> f64
{
    0.0
}

/// Builds a board of the given size by playing each move in order, panicking on the first illegal one.
pub fn board_after(width: u16, height: u16, moves: &[(u16, u16)]) -> Board
{
    let board = Board::new(BoardOptions::new(width, height));
    assert!(board.is_ok(), "\tdue to {}", board.unwrap_err());

    moves.iter().fold(board.unwrap(), |board, &(row, col)| {
        let next = board.apply_move(Move::To(Cell::new(row, col)));
        assert!(next.is_ok(), "\tdue to {}", next.unwrap_err());
        next.unwrap()
    })
}

/// Runs a fixed-depth search from the active player's perspective, returning the line and the node count.
pub fn search_to(strategy: Strategy, board: &Board, depth: u8, evaluator: &dyn Evaluate) -> (Variation, u64)
{
    let clock = forever;
    let mut search = Search::new(evaluator, &clock, SearchOptions::DEFAULT_MARGIN, board.to_move());
    let variation = search.run(strategy, board, Depth::new(depth));
    assert!(variation.is_ok(), "\tdue to {}", variation.unwrap_err());
    (variation.unwrap(), search.expanded())
}

/// A small position that is still in progress, with both players placed and a few cells burned.
pub fn midgame() -> Board
{
    board_after(5, 5, &[(2, 2), (0, 0), (4, 4), (0, 3), (1, 4)])
}
