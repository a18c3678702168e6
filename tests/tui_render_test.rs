//! Tests for the terminal UI driven through key presses.

use crossterm::event::KeyCode;
use oxo::{App, draw};
use ratatui::{Terminal, backend::TestBackend};

fn screen(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_scoreboard_accumulates_across_rounds() {
    let mut app = App::new(true);
    type_keys(&mut app, "14253r");
    type_keys(&mut app, "123546879r");
    type_keys(&mut app, "3");

    let state = app.state();
    assert_eq!(state.score_o(), 1);
    assert_eq!(state.draw_count(), 1);
    assert_eq!(state.score_x(), 0);

    let lines = screen(&app);
    assert!(lines.iter().any(|l| l.contains("Player 'O': 1   Draw: 1   Player 'X': 0")));
    assert!(lines.iter().any(|l| l.contains("Player X's Turn")));
}

#[test]
fn test_occupied_tap_changes_nothing() {
    let mut app = App::new(true);
    type_keys(&mut app, "5");
    let before = app.state().clone();
    type_keys(&mut app, "5");
    assert_eq!(app.state(), &before);
}

#[test]
fn test_cursor_stays_on_grid() {
    let mut app = App::new(true);
    for _ in 0..5 {
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('l'));
    }
    assert_eq!(app.cursor().number(), 9);
    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.state().board().mark_count(), 1);
}
