use reversi::{Board, Cell, GameEngine, GameStatus, MoveError, Outcome, Player, TurnOutcome};

fn board(diagram: &str) -> Board {
    diagram.parse().unwrap()
}

#[test]
fn test_new_game() {
    let engine = GameEngine::new();
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_turn(), Player::Black);
    assert_eq!(engine.other_player(), Player::White);
    assert_eq!(engine.piece_counts(), (2, 2));
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_is_valid_move() {
    let engine = GameEngine::new();
    assert!(engine.is_valid_move(2, 3));
    // occupied
    assert!(!engine.is_valid_move(3, 3));
    // out of bounds
    assert!(!engine.is_valid_move(8, 0));
    assert!(!engine.is_valid_move(0, 8));
    // empty but captures nothing
    assert!(!engine.is_valid_move(0, 0));
    assert!(!engine.is_valid_move(2, 2));
}

#[test]
fn test_capture_on_opening() {
    let mut engine = GameEngine::new();
    assert!(engine.attempt_move(2, 3));

    let expected = board(
        "
        ........
        ........
        ...B....
        ...BB...
        ...BW...
        ........
        ........
        ........
        ",
    );
    assert_eq!(engine.board(), &expected);
    assert_eq!(engine.piece_counts(), (4, 1));
    assert_eq!(engine.current_turn(), Player::White);
}

#[test]
fn test_end_to_end_two_moves() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.play(2, 3), Ok(TurnOutcome::Switched));
    assert_eq!(engine.play(2, 4), Ok(TurnOutcome::Switched));

    let expected = board(
        "
        ........
        ........
        ...BW...
        ...BW...
        ...BW...
        ........
        ........
        ........
        ",
    );
    assert_eq!(engine.board(), &expected);
    assert_eq!(engine.piece_counts(), (3, 3));
    assert_eq!(engine.current_turn(), Player::Black);
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    let mut engine = GameEngine::new();
    let before = engine;

    assert!(!engine.attempt_move(0, 0));
    assert!(!engine.attempt_move(3, 3));
    assert!(!engine.attempt_move(8, 2));
    assert!(!engine.attempt_move(usize::MAX, 0));
    assert_eq!(engine, before);
}

#[test]
fn test_play_reports_rejection_reason() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.play(8, 0),
        Err(MoveError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(engine.play(4, 4), Err(MoveError::Occupied { row: 4, col: 4 }));
    assert_eq!(engine.play(0, 0), Err(MoveError::NoCapture { row: 0, col: 0 }));
}

#[test]
fn test_opponent_without_reply_keeps_turn() {
    let mut engine = GameEngine::from_board(
        board(
            "
            .WBB....
            ........
            ........
            ........
            ........
            ........
            ........
            BW......
            ",
        ),
        Player::Black,
    );

    assert_eq!(engine.play(0, 0), Ok(TurnOutcome::OpponentPassed));
    assert_eq!(engine.current_turn(), Player::Black);
    assert!(!engine.has_valid_move(Player::White));
    assert!(engine.has_valid_move(Player::Black));
    assert!(!engine.is_game_over());

    assert_eq!(engine.play(7, 2), Ok(TurnOutcome::GameOver));
    assert_eq!(engine.current_turn(), Player::Black);
    assert!(engine.is_game_over());
    assert_eq!(engine.piece_counts(), (7, 0));
    assert_eq!(engine.status(), GameStatus::Over(Outcome::Black));
}

#[test]
fn test_filling_the_board_ends_game() {
    let mut engine = GameEngine::from_board(
        board(
            "
            .WBBBBBB
            BBBBBBBB
            BBBBBBBB
            BBBBBBBB
            BBBBBBBB
            BBBBBBBB
            BBBBBBBB
            BBBBBBBB
            ",
        ),
        Player::Black,
    );
    assert!(engine.attempt_move(0, 0));
    assert_eq!(engine.current_turn(), Player::Black);
    assert_eq!(engine.piece_counts(), (64, 0));
    assert_eq!(engine.board().count(Cell::Empty), 0);
    assert!(engine.is_game_over());
}

#[test]
fn test_no_moves_accepted_after_game_over() {
    let mut engine = GameEngine::from_board(
        board(
            "
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W
            ",
        ),
        Player::White,
    );
    assert!(engine.is_game_over());
    let before = engine;
    for r in 0..8 {
        for c in 0..8 {
            assert!(!engine.attempt_move(r, c));
        }
    }
    assert_eq!(engine, before);
}

#[test]
fn test_winner_majority_and_draw() {
    let draw = GameEngine::from_board(
        board(
            "
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W
            ",
        ),
        Player::Black,
    );
    assert!(draw.is_game_over());
    assert_eq!(draw.winner(), Outcome::Draw);

    let black = GameEngine::from_board(
        board(
            "
            BB......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W
            ",
        ),
        Player::Black,
    );
    assert!(black.is_game_over());
    assert_eq!(black.winner(), Outcome::Black);
    assert_eq!(black.status(), GameStatus::Over(Outcome::Black));

    let white = GameEngine::from_board(
        board(
            "
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            ......WW
            ",
        ),
        Player::Black,
    );
    assert!(white.is_game_over());
    assert_eq!(white.winner(), Outcome::White);
    assert_eq!(white.piece_counts(), (1, 2));
}

#[test]
fn test_game_over_requires_both_sides_stuck() {
    // White cannot move, Black can.
    let engine = GameEngine::from_board(
        board(
            "
            BBBB....
            ........
            ........
            ........
            ........
            ........
            ........
            BW......
            ",
        ),
        Player::White,
    );
    assert!(!engine.has_valid_move(Player::White));
    assert!(engine.has_valid_move(Player::Black));
    assert!(!engine.is_game_over());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_queries_do_not_mutate() {
    let mut engine = GameEngine::new();
    engine.attempt_move(2, 3);
    let before = engine;
    for _ in 0..3 {
        let _ = engine.is_valid_move(2, 2);
        let _ = engine.has_valid_move(Player::Black);
        let _ = engine.has_valid_move(Player::White);
        let _ = engine.piece_counts();
        let _ = engine.legal_moves().count();
        let _ = engine.is_game_over();
        let _ = engine.winner();
    }
    assert_eq!(engine, before);
}
