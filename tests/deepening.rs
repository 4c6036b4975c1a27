mod common;
use common::*;

#[cfg(test)]
mod deepening
{
    use std::time::Duration;

    use super::*;
    use isolation::prelude::*;

    #[derive(Clone, Copy, Debug)]
    /// An evaluator that refuses to score anything.
    struct Broken;

    impl Evaluate for Broken
    {
        fn evaluate(&self, _board: &Board, _player: Player) -> Result<Score>
        {
            Err(Error::new(Kind::EvaluationError, "no opinion".into()))
        }
    }

    #[test]
    fn depth_cap_counts_every_iteration()
    {
        let _setup = setup::setup();
        let board = Board::default();

        let mut minimax = SearchAgent::minimax(ImprovedScore).with_max_depth(Depth::new(2));
        let mv = minimax.get_move(&board, &templates::forever).unwrap();
        assert_eq!(mv, Move::To(Cell::new(3, 3)));
        assert_eq!(minimax.expanded(), 50 + 2402);

        let mut alpha_beta = SearchAgent::alpha_beta(ImprovedScore).with_max_depth(Depth::new(2));
        let mv = alpha_beta.get_move(&board, &templates::forever).unwrap();
        assert_eq!(mv, Move::To(Cell::new(3, 3)));
        assert_eq!(alpha_beta.expanded(), 50 + 680);

        let decision = alpha_beta.last_decision().unwrap();
        assert_eq!(decision.depth, Depth::new(2));
        assert_eq!(decision.score(), Some(3.0));
    }

    #[test]
    fn counter_resets_between_calls()
    {
        let _setup = setup::setup();
        let board = templates::midgame();
        let mut agent = SearchAgent::minimax(ImprovedScore).with_max_depth(Depth::new(3));

        let first = agent.get_move(&board, &templates::forever).unwrap();
        let first_expanded = agent.expanded();
        let second = agent.get_move(&board, &templates::forever).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_expanded, 11 + 100 + 764);
        assert_eq!(agent.expanded(), first_expanded);
    }

    #[test]
    fn tiny_budget_falls_back_to_first_legal_move()
    {
        let _setup = setup::setup();
        let board = Board::default();

        for mut agent in [SearchAgent::minimax(ImprovedScore), SearchAgent::alpha_beta(ImprovedScore)]
        {
            let mv = agent.get_move(&board, &templates::never).unwrap();
            assert_eq!(mv, Move::To(Cell::new(0, 0)));
            assert_eq!(agent.expanded(), 0);

            let decision = agent.last_decision().unwrap();
            assert_eq!(decision.depth, Depth::NIL);
            assert_eq!(decision.score(), None);
        }
    }

    #[test]
    fn budget_inside_the_margin_counts_as_spent()
    {
        let _setup = setup::setup();
        let board = templates::midgame();
        let legal = board.legal_moves(board.to_move());

        let mut agent = SearchAgent::alpha_beta(ImprovedScore).with_margin(50.0);
        let mv = agent.get_move(&board, &|| 49.0).unwrap();

        assert_eq!(mv, legal[0]);
        assert_eq!(agent.expanded(), 0);
    }

    #[test]
    fn budget_at_the_margin_counts_as_spent()
    {
        let _setup = setup::setup();
        let board = templates::midgame();
        let legal = board.legal_moves(board.to_move());

        for agent in [SearchAgent::minimax(ImprovedScore), SearchAgent::alpha_beta(ImprovedScore)]
        {
            let mut agent = agent.with_margin(50.0);
            let mv = agent.get_move(&board, &|| 50.0).unwrap();

            assert_eq!(mv, legal[0]);
            assert_eq!(agent.expanded(), 0);
            assert_eq!(agent.last_decision().unwrap().depth, Depth::NIL);
        }

        // Just above the margin, the search runs.
        let mut agent = SearchAgent::alpha_beta(ImprovedScore).with_margin(50.0).with_max_depth(Depth::new(2));
        agent.get_move(&board, &|| 50.5).unwrap();
        assert_eq!(agent.expanded(), 11 + 65);
    }

    #[test]
    fn stuck_player_forfeits()
    {
        let _setup = setup::setup();
        let board = templates::board_after(3, 1, &[(0, 0), (0, 2), (0, 1)]);

        let mut agent = SearchAgent::alpha_beta(ImprovedScore);
        let mv = agent.get_move(&board, &templates::forever).unwrap();

        assert_eq!(mv, Move::Forfeit);
        assert_eq!(agent.expanded(), 0);
    }

    #[test]
    fn stops_once_the_root_is_decided()
    {
        let _setup = setup::setup();
        let board = templates::board_after(3, 1, &[(0, 0), (0, 2)]);

        let mut agent = SearchAgent::minimax(ImprovedScore);
        let mv = agent.get_move(&board, &templates::forever).unwrap();

        assert_eq!(mv, Move::To(Cell::new(0, 1)));
        assert_eq!(agent.expanded(), 2);
        assert_eq!(agent.last_decision().unwrap().depth, Depth::PLY);
    }

    #[test]
    fn stops_once_the_tree_is_exhausted()
    {
        let _setup = setup::setup();
        let board = Board::new(BoardOptions::new(3, 1)).unwrap();

        let mut agent = SearchAgent::minimax(ImprovedScore);
        let mv = agent.get_move(&board, &templates::forever).unwrap();
        let decision = agent.last_decision().unwrap();

        assert_eq!(mv, Move::To(Cell::new(0, 1)));
        assert_eq!(decision.depth, Depth::new(3));
        assert_eq!(decision.score(), Some(WIN));
        assert_eq!(agent.expanded(), 4 + 10 + 14);
    }

    #[test]
    fn real_deadline_returns_a_legal_move()
    {
        let _setup = setup::setup();
        let board = Board::default();
        let legal = board.legal_moves(board.to_move());

        for mut agent in [SearchAgent::minimax(ImprovedScore), SearchAgent::alpha_beta(ImprovedScore)]
        {
            let deadline = Deadline::new(Duration::from_millis(60));
            let mv = agent.get_move(&board, &deadline).unwrap();

            assert!(legal.contains(&mv));
            assert!(deadline.elapsed() < Duration::from_millis(500));
        }
    }

    #[test]
    fn evaluator_errors_propagate()
    {
        let _setup = setup::setup();
        let board = templates::midgame();

        let mut agent = SearchAgent::alpha_beta(Broken);
        let err = agent.get_move(&board, &templates::forever).unwrap_err();

        assert_eq!(err.kind, Kind::EvaluationError);
        assert!(err.fatal());
        assert!(agent.last_decision().is_none());
    }
}
