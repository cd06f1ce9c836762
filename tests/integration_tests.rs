//! Integration tests for the game loop: keys in, snapshots out

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tetris_cli::core::{Board, GameState, Randomizer, ScriptedPieces, SimpleRng, TickOutcome};
use tetris_cli::input::handle_key_event;
use tetris_cli::types::{GameAction, PieceKind};

fn press(state: &mut GameState<ScriptedPieces>, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => state.apply_action(action),
        None => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(ScriptedPieces::repeat(PieceKind::O));
    assert!(state.running());
    assert!(!state.paused());

    let mut locks = 0;
    loop {
        match state.gravity_tick() {
            TickOutcome::Moved => {}
            TickOutcome::Locked { lines } => {
                assert_eq!(lines, 0);
                locks += 1;
            }
            TickOutcome::GameOver => break,
            TickOutcome::Idle => panic!("running game should not idle"),
        }
    }
    assert_eq!(locks, 9);
    assert!(!state.running());
    assert!(state.snapshot().game_over());
}

#[test]
fn test_keys_drive_the_piece() {
    let mut state = GameState::new(ScriptedPieces::new(vec![PieceKind::T, PieceKind::I]));
    let start = state.current();

    assert!(press(&mut state, KeyCode::Left));
    assert_eq!(state.current().x, start.x - 1);
    assert!(press(&mut state, KeyCode::Right));
    assert!(press(&mut state, KeyCode::Down));
    assert_eq!(state.current().y, start.y + 1);
    assert!(press(&mut state, KeyCode::Up));
    assert!(press(&mut state, KeyCode::Char('z')));
    assert_eq!(state.current().rotation, start.rotation);

    assert!(!press(&mut state, KeyCode::Char('k')));

    assert!(press(&mut state, KeyCode::Char(' ')));
    assert_eq!(state.current().kind, PieceKind::I);
    assert_eq!(state.board().filled_count(), 4);
}

#[test]
fn test_enter_and_x_hard_drop() {
    let mut state = GameState::new(ScriptedPieces::repeat(PieceKind::O));
    assert!(press(&mut state, KeyCode::Enter));
    assert!(press(&mut state, KeyCode::Char('X')));
    assert_eq!(state.board().filled_count(), 8);
}

#[test]
fn test_pause_and_restart_keys() {
    let mut state = GameState::new(ScriptedPieces::repeat(PieceKind::L));
    assert!(press(&mut state, KeyCode::Char('p')));
    assert!(state.paused());
    assert!(!press(&mut state, KeyCode::Left));
    assert!(press(&mut state, KeyCode::Char('P')));
    assert!(!state.paused());

    press(&mut state, KeyCode::Char(' '));
    assert!(state.board().filled_count() > 0);
    assert!(press(&mut state, KeyCode::Char('r')));
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_ctrl_c_quits() {
    let mut state = GameState::new(ScriptedPieces::repeat(PieceKind::S));
    let action = handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(action, Some(GameAction::Quit));

    assert!(state.apply_action(GameAction::Quit));
    assert!(!state.running());
}

#[test]
fn test_line_clear_through_gravity() {
    let mut state = GameState::new(ScriptedPieces::repeat(PieceKind::O));
    *state.board_mut() = Board::from_rows(&["####..####", "####..####"]);

    let outcome = loop {
        match state.gravity_tick() {
            TickOutcome::Moved => continue,
            other => break other,
        }
    };
    assert_eq!(outcome, TickOutcome::Locked { lines: 2 });
    assert_eq!(state.score(), 300);
    assert_eq!(state.lines(), 2);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed: u32| {
        let mut state = GameState::new(Randomizer::uniform(seed));
        let mut kinds = Vec::new();
        for _ in 0..30 {
            kinds.push(state.current().kind);
            state.apply_action(GameAction::HardDrop);
            if !state.running() {
                break;
            }
        }
        (kinds, state.snapshot())
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_bag_randomizer_game_deals_each_kind_per_bag() {
    let mut state = GameState::new(Randomizer::bag(9));
    let mut dealt = vec![state.current().kind];
    for _ in 0..6 {
        dealt.push(state.next_kind());
        state.hard_drop();
        state.board_mut().clear();
    }
    dealt.sort_by_key(|k| k.index());
    dealt.dedup();
    assert_eq!(dealt.len(), 7);
}

#[test]
fn test_uniform_source_is_injectable() {
    let mut state = GameState::new(SimpleRng::new(5));
    assert!(state.running());
    state.hard_drop();
    assert!(state.board().filled_count() >= 4);
}
