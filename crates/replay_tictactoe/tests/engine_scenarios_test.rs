//! Scenario tests for the game engine: wins, draws, branching, sorting.

use replay_tictactoe::{
    Board, Cell, EngineError, GameEngine, Player, Position, SortOrder, Status,
};

fn play_all(engine: &mut GameEngine, cells: &[usize]) {
    for cell in cells {
        engine.play_at(*cell);
    }
}

fn marks(board: &Board) -> Vec<Option<Player>> {
    board.cells().iter().map(|c| c.player()).collect()
}

#[test]
fn test_column_win() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3, 4, 6]);

    let view = engine.current_view();
    let (x, o) = (Some(Player::X), Some(Player::O));
    assert_eq!(
        marks(view.board()),
        vec![x, o, None, x, o, None, x, None, None]
    );
    assert_eq!(view.status_text(), "Winner: X");
    assert_eq!(*view.status(), Status::Won(Player::X));
    assert_eq!(view.winning_indices(), vec![0, 3, 6]);
    assert!(view.is_highlighted(Position::MiddleLeft));
    assert!(!view.is_highlighted(Position::Center));
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let view = engine.current_view();
    assert!(view.board().is_full());
    assert_eq!(view.status_text(), "Draw: No one wins!");
    assert!(view.winning_line().is_empty());
    assert!(view.status().is_terminal());
    assert_eq!(view.moves().len(), 10);
}

#[test]
fn test_branching_discards_future() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3]);
    assert_eq!(engine.history_len(), 4);
    let old_second = engine.state().history()[2];

    engine.jump_to(1).unwrap();
    engine.play_at(4);

    assert_eq!(engine.history_len(), 3);
    assert_eq!(engine.current_move(), 2);
    let new_second = engine.state().history()[2];
    assert_ne!(new_second, old_second);
    assert_eq!(new_second.get(Position::Center), Cell::Occupied(Player::O));
    assert_eq!(new_second.get(Position::TopCenter), Cell::Empty);
}

#[test]
fn test_toggle_reverses_move_list_only() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0, 8]);
    let before = engine.current_view();

    engine.toggle_sort_order();
    let after = engine.current_view();

    assert_eq!(*after.sort_order(), SortOrder::Descending);
    assert_eq!(after.board(), before.board());
    assert_eq!(after.status(), before.status());
    assert_eq!(after.winning_line(), before.winning_line());

    let mut reversed = before.moves().clone();
    reversed.reverse();
    assert_eq!(after.moves(), &reversed);
    assert_eq!(after.moves()[0].description(), "Go to move #3");
    assert_eq!(after.moves()[3].description(), "Go to game start");

    engine.toggle_sort_order();
    assert_eq!(engine.current_view(), before);
}

#[test]
fn test_current_entry_follows_jumps() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0, 8]);
    engine.jump_to(1).unwrap();

    let view = engine.current_view();
    let current: Vec<usize> = view
        .moves()
        .iter()
        .filter(|m| *m.is_current())
        .map(|m| *m.index())
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(*view.current_move(), 1);
    assert_eq!(view.status_text(), "Next player: O");
}

#[test]
fn test_invalid_jump_is_reported() {
    let mut engine = GameEngine::new();
    let err = engine.jump_to(1).unwrap_err();
    assert_eq!(err, EngineError::InvalidIndex { index: 1, len: 1 });
    assert_eq!(
        err.to_string(),
        "Move index 1 out of range (history has 1 entries)"
    );
    assert_eq!(engine.current_move(), 0);
}

#[test]
fn test_view_serializes_for_remote_ui() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3, 4, 6]);
    let view = engine.current_view();

    let json = serde_json::to_string(&view).unwrap();
    let back: replay_tictactoe::GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert!(json.contains("\"sort_order\":\"ascending\""));
}

#[test]
fn test_saved_engine_round_trips() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0, 8]);
    engine.jump_to(1).unwrap();
    engine.toggle_sort_order();

    let json = serde_json::to_string(&engine).unwrap();
    let back: GameEngine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, engine);
    assert_eq!(back.current_view(), engine.current_view());
}

#[test]
fn test_corrupt_saved_engine_is_rejected() {
    let empty = r#"{"state":{"history":[],"current_move":0},"sort_order":"ascending"}"#;
    assert!(serde_json::from_str::<GameEngine>(empty).is_err());

    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4]);
    let mut value = serde_json::to_value(&engine).unwrap();
    value["state"]["current_move"] = serde_json::json!(7);
    let err = serde_json::from_value::<GameEngine>(value).unwrap_err();
    assert!(err.to_string().starts_with("Invalid game history"));
}
