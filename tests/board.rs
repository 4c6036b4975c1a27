mod common;
use common::*;

#[cfg(test)]
mod board
{
    use super::*;
    use isolation::prelude::*;

    #[test]
    fn empty_board_offers_every_cell()
    {
        let _setup = setup::setup();
        let board = Board::default();

        let moves = board.legal_moves(Player::One);
        assert_eq!(moves.len(), 49);
        assert_eq!(moves[0], Move::To(Cell::new(0, 0)));
        assert_eq!(moves[1], Move::To(Cell::new(0, 1)));
        assert_eq!(moves[48], Move::To(Cell::new(6, 6)));
        assert_eq!(board.state(), GameState::NotStarted);
        assert_eq!(board.to_move(), Player::One);
    }

    #[test]
    fn invalid_dimensions()
    {
        let _setup = setup::setup();
        let err = Board::new(BoardOptions::new(0, 7)).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidOption);
    }

    #[test]
    fn unplaced_player_may_land_on_any_open_cell()
    {
        let _setup = setup::setup();
        let board = templates::board_after(3, 3, &[(1, 1)]);

        let moves = board.legal_moves(Player::Two);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::To(Cell::new(1, 1))));
    }

    #[test]
    fn queen_rays_in_clockwise_order()
    {
        let _setup = setup::setup();
        let board = templates::board_after(3, 3, &[(1, 1), (2, 2)]);

        let expected: Vec<Move> = [(0, 1), (0, 2), (1, 2), (2, 1), (2, 0), (1, 0), (0, 0)]
            .into_iter()
            .map(|(row, col)| Move::To(Cell::new(row, col)))
            .collect();
        assert_eq!(board.legal_moves(Player::One), expected);
        assert_eq!(board.mobility(Player::One), expected.len());
    }

    #[test]
    fn rays_stop_at_blocked_cells()
    {
        let _setup = setup::setup();
        // One stands at (0, 0) with Two at (0, 2), which cuts the east ray short.
        let board = templates::board_after(5, 1, &[(0, 0), (0, 2)]);

        assert_eq!(board.legal_moves(Player::One), vec![Move::To(Cell::new(0, 1))]);
        assert_eq!(
            board.legal_moves(Player::Two),
            vec![Move::To(Cell::new(0, 3)), Move::To(Cell::new(0, 4)), Move::To(Cell::new(0, 1))]
        );
    }

    #[test]
    fn apply_move_marks_destination_and_burns_origin()
    {
        let _setup = setup::setup();
        let board = templates::board_after(5, 5, &[(0, 0), (4, 4)]);
        let next = board.apply_move(Move::To(Cell::new(2, 2))).unwrap();

        assert_eq!(next.square(Cell::new(2, 2)), Some(Square::Occupied(Player::One)));
        assert_eq!(next.square(Cell::new(0, 0)), Some(Square::Blocked));
        assert_eq!(next.position(Player::One), Some(Cell::new(2, 2)));
        assert_eq!(next.to_move(), Player::Two);
        assert_eq!(next.ply(), 3);
        assert_eq!(next.blank_count(), 22);

        // The parent board is untouched.
        assert_eq!(board.square(Cell::new(0, 0)), Some(Square::Occupied(Player::One)));
        assert_eq!(board.to_move(), Player::One);
        assert_eq!(board.ply(), 2);
    }

    #[test]
    fn history_records_every_ply()
    {
        let _setup = setup::setup();
        let board = templates::board_after(5, 5, &[(0, 0), (4, 4), (2, 2)]);

        let entries: Vec<Entry> = board.history().iter().copied().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Entry { player: Player::One, from: None, to: Cell::new(0, 0) });
        assert_eq!(entries[2], Entry { player: Player::One, from: Some(Cell::new(0, 0)), to: Cell::new(2, 2) });
        assert_eq!(board.history().moves()[1], Move::To(Cell::new(4, 4)));
    }

    #[test]
    fn illegal_moves_are_rejected()
    {
        let _setup = setup::setup();
        let board = templates::board_after(5, 5, &[(0, 0), (0, 2)]);

        let cases = [
            // Occupied.
            Move::To(Cell::new(0, 2)),
            // Behind the opponent on the same ray.
            Move::To(Cell::new(0, 3)),
            // A knight's hop.
            Move::To(Cell::new(1, 2)),
            // Off the grid.
            Move::To(Cell::new(5, 0)),
            Move::Forfeit,
        ];

        for mv in cases
        {
            let err = board.apply_move(mv).unwrap_err();
            assert_eq!(err.kind, Kind::InvalidMove, "{} should be illegal", mv);
        }

        assert!(board.apply_move(Move::To(Cell::new(4, 4))).is_ok());
    }

    #[test]
    fn burned_cells_are_never_reentered()
    {
        let _setup = setup::setup();
        let board = templates::board_after(5, 5, &[(0, 0), (4, 4), (0, 4)]);

        assert_eq!(board.square(Cell::new(0, 0)), Some(Square::Blocked));
        assert!(!board.legal_moves(Player::Two).contains(&Move::To(Cell::new(0, 0))));

        let next = board.apply_move(Move::To(Cell::new(4, 0))).unwrap();
        assert_eq!(next.apply_move(Move::To(Cell::new(0, 0))).unwrap_err().kind, Kind::InvalidMove);
    }

    #[test]
    fn stuck_player_is_terminal_and_loses()
    {
        let _setup = setup::setup();
        // One slides into (0, 1), walling Two into the corner.
        let board = templates::board_after(3, 1, &[(0, 0), (0, 2), (0, 1)]);

        assert!(board.is_terminal());
        assert!(board.legal_moves(Player::Two).is_empty());
        assert_eq!(board.utility(Player::One), WIN);
        assert_eq!(board.utility(Player::Two), LOSS);
        assert!(board.is_winner(Player::One));
        assert!(board.is_loser(Player::Two));
        assert_eq!(board.state(), GameState::PlayerOneWins);
    }

    #[test]
    fn live_positions_have_no_utility()
    {
        let _setup = setup::setup();
        let board = templates::midgame();

        assert!(!board.is_terminal());
        assert_eq!(board.utility(Player::One), 0.0);
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn display_renders_the_grid()
    {
        let _setup = setup::setup();
        let board = templates::board_after(3, 2, &[(0, 0), (1, 2), (1, 0)]);

        let rendered = format!("{}", board);
        assert_eq!(rendered, "     0  1  2\n 0   #  .  .\n 1   1  .  2");
    }

    #[test]
    fn move_notation()
    {
        let _setup = setup::setup();

        assert_eq!("(3, 4)".parse::<Move>().unwrap(), Move::To(Cell::new(3, 4)));
        assert_eq!("3,4".parse::<Move>().unwrap(), Move::To(Cell::new(3, 4)));
        assert_eq!(" 0 6 \n".parse::<Move>().unwrap(), Move::To(Cell::new(0, 6)));
        assert_eq!("forfeit".parse::<Move>().unwrap(), Move::Forfeit);
        assert_eq!(Move::To(Cell::new(3, 4)).to_string(), "(3, 4)");
        assert_eq!("a1".parse::<Move>().unwrap_err().kind, Kind::ParseError);
        assert_eq!("(1, 99999)".parse::<Move>().unwrap_err().kind, Kind::ParseError);
    }

    #[test]
    fn ray_geometry()
    {
        let _setup = setup::setup();
        let origin = Cell::new(3, 3);

        assert_eq!(origin.ray_to(Cell::new(0, 0)), Some((Direction::Northwest, 3)));
        assert_eq!(origin.ray_to(Cell::new(3, 6)), Some((Direction::East, 3)));
        assert_eq!(origin.ray_to(Cell::new(4, 5)), None);
        assert_eq!(origin.ray_to(origin), None);
        assert_eq!(Cell::new(0, 0).step(Direction::North), None);
        assert_eq!(Direction::from_offset(1, -1), Some(Direction::Southwest));
    }
}
