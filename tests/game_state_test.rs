//! Tests for history, branching and turn order.

use rewind::{GameState, MoveError, Player, Position, Square, Status};

fn play(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for cell in cells {
        game.apply_move_index(*cell);
    }
    game
}

#[test]
fn test_first_move_in_center() {
    let mut game = GameState::new();
    game.apply_move_index(4);

    assert_eq!(game.current_move(), 1);
    assert_eq!(
        game.active().board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    let coordinate = game.active().coordinate().expect("move recorded");
    assert_eq!((coordinate.row, coordinate.column), (2, 2));
}

#[test]
fn test_each_move_appends_one_snapshot() {
    let mut game = GameState::new();
    for (step, cell) in [0, 4, 8, 2].into_iter().enumerate() {
        let before = game.history().len();
        game.apply_move_index(cell);
        assert_eq!(game.history().len(), before + 1, "step {step}");
        assert_eq!(game.current_move(), game.history().len() - 1);
    }
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut game = play(&[4]);
    let before = game.clone();

    game.apply_move_index(4);
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_win_are_no_ops() {
    let mut game = play(&[0, 1, 3, 4, 6]);
    assert_eq!(game.status(), Status::Winner(Player::X));
    let before = game.clone();

    game.apply_move_index(8);
    assert_eq!(game, before);
    assert_eq!(
        game.try_apply_move(Position::BottomRight),
        Err(MoveError::GameOver(Player::X))
    );
}

#[test]
fn test_marks_alternate_starting_with_x() {
    let game = play(&[4, 0, 8, 2, 6]);
    for (i, snapshot) in game.history().iter().enumerate().skip(1) {
        let pos = snapshot.last_move().expect("every later snapshot has a move");
        let expected = if i % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(snapshot.board().get(pos), Square::Occupied(expected));
    }
}

#[test]
fn test_jump_does_not_change_history() {
    let mut game = play(&[0, 4, 8]);
    let history = game.history().to_vec();

    game.jump_to(1).unwrap();
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();
    game.apply_move_index(2);

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(game.active().last_move(), Some(Position::TopRight));
    assert_eq!(
        game.active().board().get(Position::TopRight),
        Square::Occupied(Player::O)
    );
    // The discarded X at index 3 is gone from every snapshot.
    assert!(
        game.history()
            .iter()
            .all(|s| s.board().is_empty(Position::BottomRight))
    );
}

#[test]
fn test_jump_to_start_then_play_restarts() {
    let mut game = play(&[0, 4, 8, 2]);
    game.jump_to(0).unwrap();
    game.apply_move_index(5);

    assert_eq!(game.history().len(), 2);
    assert_eq!(
        game.active().board().get(Position::MiddleRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_jump_back_before_win_allows_play() {
    let mut game = play(&[0, 1, 3, 4, 6]);
    game.jump_to(4).unwrap();
    assert_eq!(game.status(), Status::NextPlayer(Player::X));

    game.apply_move_index(8);
    assert_eq!(game.history().len(), 6);
    assert!(!game.winner().is_win());
}

#[test]
fn test_draw_status() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.history().len(), 10);
    assert!(!game.winner().is_win());
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw");

    let mut full = game.clone();
    full.apply_move_index(0);
    assert_eq!(full, game);
}

#[test]
fn test_sort_toggle_leaves_history_alone() {
    let mut game = play(&[0, 4]);
    let before = game.clone();

    game.toggle_sort_order();
    assert_ne!(game.sort_order(), before.sort_order());
    assert_eq!(game.history(), before.history());
    assert_eq!(game.current_move(), before.current_move());

    game.toggle_sort_order();
    assert_eq!(game, before);
}
