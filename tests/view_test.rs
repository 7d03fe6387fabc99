//! Tests for derived board and move-list views.

use strictly_timetravel::{
    Board, GameHistory, Player, Position, SortOrder, Status, board_view, cell_views, evaluate,
    move_list, status,
};

#[test]
fn test_reverse_twice_restores_order() {
    let history = GameHistory::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
    ])
    .unwrap();

    let ascending = move_list(&history, SortOrder::Ascending);
    let mut reversed = move_list(&history, SortOrder::Ascending.toggle());
    assert_eq!(reversed.len(), ascending.len());
    reversed.reverse();

    assert_eq!(reversed, ascending);
    assert_eq!(
        move_list(&history, SortOrder::Ascending.toggle().toggle()),
        ascending
    );
}

#[test]
fn test_descending_labels_keep_original_numbers() {
    let mut history = GameHistory::replay(&[Position::TopLeft, Position::Center]).unwrap();
    history.jump_to(0).unwrap();

    let labels: Vec<String> = move_list(&history, SortOrder::Descending)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        labels,
        vec![
            "Go to move #2 (1, 1)",
            "Go to move #1 (0, 0)",
            "You are at game start",
        ]
    );
}

#[test]
fn test_exactly_one_current_label() {
    let mut history = GameHistory::replay(&[Position::TopLeft, Position::Center]).unwrap();
    for index in 0..history.len() {
        history.jump_to(index).unwrap();
        let current: Vec<_> = move_list(&history, SortOrder::Ascending)
            .into_iter()
            .filter(|l| l.is_current)
            .map(|l| l.index)
            .collect();
        assert_eq!(current, vec![index]);
    }
}

#[test]
fn test_status_alternates_with_selection() {
    let mut history = GameHistory::replay(&[Position::TopLeft, Position::Center]).unwrap();
    assert_eq!(board_view(&history).status, Status::NextPlayer(Player::X));

    history.jump_to(1).unwrap();
    assert_eq!(board_view(&history).status, Status::NextPlayer(Player::O));
}

#[test]
fn test_cell_views_from_arbitrary_board() {
    let board = Board::new()
        .with_mark(Position::TopRight, Player::O)
        .with_mark(Position::Center, Player::O)
        .with_mark(Position::BottomLeft, Player::O)
        .with_mark(Position::TopLeft, Player::X);
    let winner = evaluate(&board);

    let cells = cell_views(&board, winner.as_ref(), Some(Position::BottomLeft));
    let winning: Vec<_> = cells.iter().filter(|c| c.is_winning).map(|c| c.position).collect();
    assert_eq!(
        winning,
        vec![Position::TopRight, Position::Center, Position::BottomLeft]
    );
    assert!(cells[Position::BottomLeft.to_index()].is_last_marked);
    assert!(!cells[Position::TopLeft.to_index()].is_last_marked);
    assert_eq!(status(&board, winner.as_ref(), 4), Status::Winner(Player::O));
}

#[test]
fn test_no_last_mark_at_game_start() {
    let mut history = GameHistory::replay(&[Position::Center]).unwrap();
    history.jump_to(0).unwrap();
    assert!(board_view(&history).cells.iter().all(|c| !c.is_last_marked));
}
