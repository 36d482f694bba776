//! Tests for the word-search screen state driven by key and mouse input.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pitchside::{CELEBRATION_FRAMES, CELL_WIDTH, PitchsideConfig, WordSearchApp, cell_at, screen};
use pitchside_wordsearch::Cell;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;

const NAMES: [&str; 12] = [
    "Real Madrid",
    "Barcelona",
    "Inter Milan",
    "Chelsea",
    "Liverpool",
    "Racing Club",
    "Juventus",
    "Porto",
    "Ajax",
    "Celtic",
    "Benfica",
    "Napoli",
];

const BOARD: Rect = Rect {
    x: 1,
    y: 4,
    width: 32,
    height: 16,
};

fn new_app(seed: u64) -> WordSearchApp {
    let names = NAMES.iter().map(|n| n.to_string()).collect();
    let config = PitchsideConfig::default().with_word_count(6);
    WordSearchApp::new(names, config, StdRng::seed_from_u64(seed)).expect("Puzzle failed")
}

fn mouse(kind: MouseEventKind, cell: Cell) -> MouseEvent {
    MouseEvent {
        kind,
        column: BOARD.x + cell.col as u16 * CELL_WIDTH,
        row: BOARD.y + cell.row as u16,
        modifiers: KeyModifiers::NONE,
    }
}

/// Canonical words of the current puzzle, in list order.
fn targets(app: &WordSearchApp) -> Vec<String> {
    app.puzzle()
        .words()
        .iter()
        .map(|w| w.canonical().clone())
        .collect()
}

/// Drags the mouse across `word` where it appears on the grid.
fn drag_word(app: &mut WordSearchApp, word: &str) {
    let cells = app.puzzle().grid().find(word).expect("Word is on the grid");
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), cells[0]), BOARD);
    for &cell in &cells[1..] {
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), cell), BOARD);
    }
    let last = cells[cells.len() - 1];
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), last), BOARD);
}

/// Moves the keyboard cursor to `target` with arrow keys.
fn walk_to(app: &mut WordSearchApp, target: Cell) {
    while app.cursor().row < target.row {
        app.handle_key(KeyCode::Down);
    }
    while app.cursor().row > target.row {
        app.handle_key(KeyCode::Up);
    }
    while app.cursor().col < target.col {
        app.handle_key(KeyCode::Right);
    }
    while app.cursor().col > target.col {
        app.handle_key(KeyCode::Left);
    }
}

#[test]
fn test_mouse_play_to_completion() {
    let mut app = new_app(7);
    let words = targets(&app);
    assert_eq!(words.len(), 6);

    for (i, word) in words.iter().enumerate() {
        assert!(app.celebration().is_none(), "celebrated before the last word");
        drag_word(&mut app, word);
        assert_eq!(app.puzzle().found_words().len(), i + 1);
        assert!(app.puzzle().selection().is_idle());
    }

    assert!(app.puzzle().is_completed());
    assert!(app.celebration().is_some());
    assert!(app.status_message().contains("All 6 clubs found"));
}

#[test]
fn test_keyboard_marks_both_ends() {
    let mut app = new_app(11);
    let word = targets(&app)[0].clone();
    let cells = app.puzzle().grid().find(&word).expect("Word is on the grid");

    walk_to(&mut app, cells[0]);
    app.handle_key(KeyCode::Char(' '));
    assert!(!app.puzzle().selection().is_idle());

    walk_to(&mut app, cells[cells.len() - 1]);
    app.handle_key(KeyCode::Char(' '));

    assert!(app.puzzle().selection().is_idle());
    assert!(app.puzzle().is_found(&word));
    assert!(app.status_message().starts_with("Found"));
}

#[test]
fn test_keyboard_off_line_end_matches_nothing() {
    let mut app = new_app(3);

    walk_to(&mut app, Cell::new(0, 0));
    app.handle_key(KeyCode::Char(' '));
    walk_to(&mut app, Cell::new(1, 2));
    app.handle_key(KeyCode::Enter);

    // Only the anchor was selected, which spells no club name.
    assert!(app.puzzle().found_words().is_empty());
    assert!(app.puzzle().selection().is_idle());
}

#[test]
fn test_mouse_outside_board_is_ignored() {
    let mut app = new_app(5);
    let outside = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(outside, BOARD);
    assert!(app.puzzle().selection().is_idle());
}

#[test]
fn test_clicks_past_a_clipped_board_are_ignored() {
    // A terminal too small for a 16x16 grid clips the board.
    let board = screen(Rect::new(0, 0, 24, 12), 16).board;
    assert!(board.height < 16);
    assert_eq!(cell_at(board, 16, board.x, board.bottom()), None);
    assert_eq!(cell_at(board, 16, board.right(), board.y), None);

    let mut app = new_app(23);
    let below = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: board.x,
        row: board.bottom(),
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(below, board);
    assert!(app.puzzle().selection().is_idle());
}

#[test]
fn test_celebration_fades_after_ticks() {
    let mut app = new_app(13);
    for word in targets(&app) {
        drag_word(&mut app, &word);
    }
    let frames = app.celebration().expect("Celebration").frames_left();
    assert_eq!(frames, CELEBRATION_FRAMES);

    for _ in 1..CELEBRATION_FRAMES {
        app.tick();
    }
    assert!(app.celebration().is_some());
    app.tick();
    assert!(app.celebration().is_none());
}

#[test]
fn test_new_game_resets_progress() {
    let mut app = new_app(17);
    for word in targets(&app) {
        drag_word(&mut app, &word);
    }
    assert!(app.puzzle().is_completed());

    app.handle_key(KeyCode::Char('n'));
    assert!(!app.puzzle().is_completed());
    assert!(app.puzzle().found_words().is_empty());
    assert!(app.celebration().is_none());
    assert_eq!(app.cursor(), Cell::new(0, 0));
}

#[test]
fn test_quit_keys() {
    let mut app = new_app(19);
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app(19);
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());
}
