//! Tests for the time-travel history.

use strictly_timetravel::{
    GameHistory, HistoryError, HistoryInvariants, InvariantSet, Player, Position, Square,
    board_view, evaluate,
};

fn play_all(history: &mut GameHistory, positions: &[Position]) {
    for pos in positions {
        history.play(*pos).expect("valid play");
    }
}

#[test]
fn test_length_tracks_plays_and_marks_alternate() {
    let mut history = GameHistory::new();
    let positions = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];

    for (n, pos) in positions.iter().enumerate() {
        history.play(*pos).unwrap();
        assert_eq!(history.len(), n + 2);
    }

    for (ply, entry) in history.entries().iter().enumerate().skip(1) {
        let mov = entry.last_move().expect("every ply after the first has a move");
        let expected = if ply % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(mov.player, expected);
        assert_eq!(entry.board().occupied(), ply);
    }
    assert!(HistoryInvariants::check_all(&history).is_ok());
}

#[test]
fn test_top_row_win_ends_play() {
    let mut history = GameHistory::new();
    play_all(
        &mut history,
        &[
            Position::from_coords(0, 0).unwrap(),
            Position::from_coords(1, 1).unwrap(),
            Position::from_coords(0, 1).unwrap(),
            Position::from_coords(1, 0).unwrap(),
            Position::from_coords(0, 2).unwrap(),
        ],
    );

    let winner = evaluate(history.current_board()).expect("X owns the top row");
    assert_eq!(winner.player, Player::X);
    assert_eq!(winner.indices(), [0, 1, 2]);
    assert_eq!(board_view(&history).status.to_string(), "Winner: X");

    let before = history.clone();
    assert_eq!(history.play(Position::BottomRight), Err(HistoryError::GameOver));
    assert_eq!(history, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut history = GameHistory::new();
    play_all(
        &mut history,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );

    assert_eq!(history.len(), 10);
    assert_eq!(evaluate(history.current_board()), None);
    assert!(history.is_decided());
    assert_eq!(board_view(&history).status.to_string(), "Result: Draw");

    for pos in Position::ALL {
        assert_eq!(history.play(pos), Err(HistoryError::SquareOccupied(pos)));
    }
    assert_eq!(history.len(), 10);
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut history = GameHistory::new();
    play_all(
        &mut history,
        &[Position::TopLeft, Position::Center, Position::BottomRight],
    );
    let old_second = history.entries()[2];

    history.jump_to(1).unwrap();
    history.play(Position::TopRight).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.selected(), 2);
    assert_ne!(history.entries()[2], old_second);
    assert_eq!(
        history.current_board().get(Position::TopRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_truncation_law_from_every_ply() {
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
    ];
    let full = GameHistory::replay(&moves).unwrap();

    for k in 0..full.len() - 1 {
        let mut history = full.clone();
        history.jump_to(k).unwrap();
        let free = Position::valid_moves(history.current_board())[0];
        history.play(free).unwrap();

        assert_eq!(history.len(), k + 2);
        assert_eq!(history.entries()[..=k], full.entries()[..=k]);
    }
}

#[test]
fn test_jump_is_idempotent() {
    let mut history = GameHistory::replay(&[Position::TopLeft, Position::Center]).unwrap();

    history.jump_to(1).unwrap();
    let first = (history.clone(), board_view(&history));
    history.jump_to(1).unwrap();
    let second = (history.clone(), board_view(&history));

    assert_eq!(first, second);
}

#[test]
fn test_jumps_allowed_after_game_over() {
    let mut history = GameHistory::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .unwrap();

    history.jump_to(0).unwrap();
    assert_eq!(history.winner(), None);
    assert_eq!(history.next_player(), Player::X);

    history.jump_to(5).unwrap();
    assert!(history.winner().is_some());
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let result = GameHistory::replay(&[Position::Center, Position::Center]);
    assert_eq!(result, Err(HistoryError::SquareOccupied(Position::Center)));
}
