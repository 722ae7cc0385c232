//! End-to-end scenarios and properties of the session engine.

use tictac_engine::{
    Board, GameEngine, GameMode, Mark, MoveError, Outcome, Position, SessionRng, Square,
    WIN_CONDITIONS, invariants,
};

fn started() -> GameEngine {
    let mut engine = GameEngine::with_seed(2024);
    engine.start_session(GameMode::HumanVsHuman);
    engine
}

fn play(engine: &mut GameEngine, indices: &[usize]) -> Outcome {
    let mut last = Outcome::InProgress;
    for &index in indices {
        last = engine.apply_move(index).expect("legal move");
    }
    last
}

#[test]
fn test_top_row_win() {
    let mut engine = started();
    let outcome = play(&mut engine, &[0, 3, 1, 4, 2]);

    match outcome {
        Outcome::Win { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected a win, got {other}"),
    }
    assert!(!engine.is_active());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = started();
    let outcome = play(&mut engine, &[0, 1, 2, 4, 6, 8, 5, 3, 7]);

    assert_eq!(outcome, Outcome::Draw);
    assert!(!engine.is_active());
    assert_eq!(engine.board().count(Mark::X), 5);
    assert_eq!(engine.board().count(Mark::O), 4);
}

#[test]
fn test_second_move_to_same_cell_is_rejected() {
    let mut engine = started();
    engine.apply_move(0).expect("legal move");
    let board_before = engine.board().clone();
    let player_before = engine.current_player();

    assert_eq!(
        engine.apply_move(0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(engine.board(), &board_before);
    assert_eq!(engine.current_player(), player_before);
    assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Mark::X));
}

#[test]
fn test_moves_after_game_over_change_nothing() {
    let mut engine = started();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let board_before = engine.board().clone();

    for index in 0..9 {
        assert_eq!(engine.apply_move(index), Err(MoveError::GameInactive));
    }
    assert_eq!(engine.board(), &board_before);
}

#[test]
fn test_reset_then_exit() {
    let mut engine = started();
    play(&mut engine, &[4, 0, 8]);

    engine.reset().expect("mode selected");
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Mark::X);
    assert!(engine.is_active());
    assert_eq!(engine.mode(), Some(GameMode::HumanVsHuman));

    play(&mut engine, &[2]);
    engine.exit_session();
    assert_eq!(engine.mode(), None);
    assert!(!engine.is_active());
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Mark::X);
}

#[test]
fn test_random_games_uphold_rules() {
    let mut rng = SessionRng::new(0xdecaf);

    for _ in 0..500 {
        let mut engine = started();

        while engine.is_active() {
            let before = engine.board().clone();

            // A move onto an occupied square must change nothing.
            if let Some(taken) = Position::ALL.iter().find(|p| !before.is_empty(**p)) {
                assert!(engine.apply_move(taken.to_index()).is_err());
                assert_eq!(engine.board(), &before);
            }

            let empty = before.empty_positions();
            let pick = empty[rng.random_range(0..empty.len())];
            let outcome = engine.apply_move(pick.to_index()).expect("empty square");
            let board = engine.board();

            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            assert!(x == o || x == o + 1, "balance broken: X={x} O={o}");

            let satisfied = WIN_CONDITIONS.iter().find_map(|line| {
                line.owner(board).map(|mark| (mark, *line))
            });
            let full = board.empty_positions().is_empty();
            match outcome {
                Outcome::Win { mark, line } => assert_eq!(satisfied, Some((mark, line))),
                Outcome::Draw => assert!(full && satisfied.is_none()),
                Outcome::InProgress => assert!(!full && satisfied.is_none()),
            }

            assert_eq!(invariants::check_engine(&engine), Ok(()));
        }
    }
}
