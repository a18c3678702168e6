//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use oxo_engine::{Cell, CellId, GameState, Mark};

use super::app::App;

/// Scoreboard line shown above the board.
pub fn scoreboard(state: &GameState) -> String {
    format!(
        "Player 'O': {}   Draw: {}   Player 'X': {}",
        state.score_o(),
        state.draw_count(),
        state.score_x()
    )
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(1),  // Scoreboard
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Hint
            Constraint::Length(1),  // Keys
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let score = Paragraph::new(scoreboard(state))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    draw_board(frame, chunks[2], app);

    let hint_style = if state.has_won() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let hint = Paragraph::new(state.hint_text())
        .style(hint_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, chunks[3]);

    let keys = Paragraph::new("1-9/Enter: play   arrows: move   r: Play Again   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for column in 0..3 {
        if let Some(cell) = CellId::at(row, column) {
            draw_cell(frame, cols[column * 2], app, cell);
        }
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, id: CellId) {
    let state = app.state();

    let (symbol, base_style) = match state.board().get(id) {
        Cell::Empty if app.show_cell_numbers() => (
            id.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    // Win line first so the strike stays visible under the cursor.
    let style = if state.win_line().is_some_and(|line| line.contains(id)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if id == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(64, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_scoreboard_text() {
        let state = GameState::new();
        assert_eq!(scoreboard(&state), "Player 'O': 0   Draw: 0   Player 'X': 0");
    }

    #[test]
    fn test_renders_turn_prompt_and_numbers() {
        let app = App::new(true);
        let screen = render(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Player O's Turn"));
        assert!(screen.contains("Player 'O': 0"));
        assert!(screen.contains('7'));
        assert!(screen.contains("Play Again"));
    }

    #[test]
    fn test_renders_marks_and_win() {
        let mut app = App::new(false);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Player O Won"));
        assert!(screen.contains("Player 'O': 1"));
        assert!(screen.contains('X'));
        assert!(!screen.contains('7'));
    }
}
