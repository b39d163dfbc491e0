//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and messages. Layout math is shared with mouse hit
//! testing so clicks land on exactly what was drawn.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterResult, WORD_LENGTH};
use crate::game::{CellState, CellView, MAX_ATTEMPTS, VirtualKey, keyboard_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 9;
const KEY_HEIGHT: u16 = 3;
const GAP: u16 = 1;

/// Screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub keyboard: Option<Rect>,
    pub messages: Rect,
    pub status: Rect,
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Key(VirtualKey),
    Tile { row: usize, column: usize },
}

/// Split the screen into regions
#[must_use]
pub fn screen_layout(area: Rect, show_keyboard: bool) -> ScreenLayout {
    let board_height = TILE_HEIGHT * MAX_ATTEMPTS as u16;
    let keyboard_height = KEY_HEIGHT * keyboard_rows().len() as u16;

    let mut constraints = vec![
        Constraint::Length(3),            // Header
        Constraint::Length(board_height), // Board
    ];
    if show_keyboard {
        constraints.push(Constraint::Length(keyboard_height));
    }
    constraints.push(Constraint::Min(4)); // Messages
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if show_keyboard {
        ScreenLayout {
            header: chunks[0],
            board: chunks[1],
            keyboard: Some(chunks[2]),
            messages: chunks[3],
            status: chunks[4],
        }
    } else {
        ScreenLayout {
            header: chunks[0],
            board: chunks[1],
            keyboard: None,
            messages: chunks[2],
            status: chunks[3],
        }
    }
}

/// Center a `width` x `height` box inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Tile rectangles as (row, column, rect), clipped to `area`
#[must_use]
pub fn board_tiles(area: Rect) -> Vec<(usize, usize, Rect)> {
    let width = TILE_WIDTH * WORD_LENGTH as u16 + GAP * (WORD_LENGTH as u16 - 1);
    let grid = centered(area, width, TILE_HEIGHT * MAX_ATTEMPTS as u16);

    let mut tiles = Vec::with_capacity(WORD_LENGTH * MAX_ATTEMPTS);
    for row in 0..MAX_ATTEMPTS {
        for column in 0..WORD_LENGTH {
            let rect = Rect::new(
                grid.x + column as u16 * (TILE_WIDTH + GAP),
                grid.y + row as u16 * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(area);

            if !rect.is_empty() {
                tiles.push((row, column, rect));
            }
        }
    }
    tiles
}

const fn key_width(key: VirtualKey) -> u16 {
    if key.is_wide() { WIDE_KEY_WIDTH } else { KEY_WIDTH }
}

/// On-screen key rectangles, each row centered, clipped to `area`
#[must_use]
pub fn keyboard_keys(area: Rect) -> Vec<(VirtualKey, Rect)> {
    let mut keys = Vec::new();

    for (i, row) in keyboard_rows().into_iter().enumerate() {
        let row_width: u16 =
            row.iter().map(|&key| key_width(key)).sum::<u16>() + GAP * (row.len() as u16 - 1);
        let y = area.y + i as u16 * KEY_HEIGHT;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for key in row {
            let rect = Rect::new(x, y, key_width(key), KEY_HEIGHT).intersection(area);
            if !rect.is_empty() {
                keys.push((key, rect));
            }
            x += key_width(key) + GAP;
        }
    }
    keys
}

/// Find what is drawn at (`column`, `row`)
#[must_use]
pub fn hit_test(area: Rect, show_keyboard: bool, column: u16, row: u16) -> Option<Hit> {
    let layout = screen_layout(area, show_keyboard);
    let position = Position::new(column, row);

    if let Some(keyboard) = layout.keyboard
        && let Some((key, _)) = keyboard_keys(keyboard)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
    {
        return Some(Hit::Key(key));
    }

    board_tiles(layout.board)
        .into_iter()
        .find(|(_, _, rect)| rect.contains(position))
        .map(|(row, column, _)| Hit::Tile { row, column })
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area(), app.show_keyboard);

    render_header(f, layout.header);
    render_board(f, app, layout.board);
    if let Some(keyboard) = layout.keyboard {
        render_keyboard(f, app, keyboard);
    }
    render_messages(f, app, layout.messages);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TERMO 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::Correct => Color::Green,
        LetterResult::Present => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    }
}

fn render_tile(f: &mut Frame, cell: CellView, area: Rect) {
    let (style, border) = match cell.state {
        CellState::Empty => (Style::default(), Style::default().fg(Color::DarkGray)),
        CellState::Typed => (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        ),
        CellState::Scored(result) => {
            let color = result_color(result);
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(color),
            )
        }
    };

    let (border_type, border) = if cell.selected {
        (BorderType::Thick, Style::default().fg(Color::Cyan))
    } else {
        (BorderType::Rounded, border)
    };

    let tile = Paragraph::new(cell.letter.map(String::from).unwrap_or_default())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.view();

    for (row, column, rect) in board_tiles(area) {
        render_tile(f, board.rows[row][column], rect);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (key, rect) in keyboard_keys(area) {
        let style = match key {
            VirtualKey::Letter(ch) => match app.session.hint_for(ch) {
                Some(result) => Style::default().fg(Color::Black).bg(result_color(result)),
                None => Style::default().fg(Color::White),
            },
            VirtualKey::Enter | VirtualKey::Backspace => Style::default().fg(Color::Cyan),
        };

        let button = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(button, rect);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempt_text = match app.input_mode {
        InputMode::Playing => format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            app.session.current_row() + 1
        ),
        InputMode::GameOver => "Game over".to_string(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Enter: Submit | ⌫: Delete | Tab: Keyboard | Ctrl-N: New | Esc: Quit",
        InputMode::GameOver => "Enter: New Game | Tab: Keyboard | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;
    use crate::wordlists::loader::load;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn layout_with_and_without_keyboard() {
        let with = screen_layout(SCREEN, true);
        assert!(with.keyboard.is_some());
        assert_eq!(with.board.height, TILE_HEIGHT * MAX_ATTEMPTS as u16);

        let without = screen_layout(SCREEN, false);
        assert!(without.keyboard.is_none());
        assert!(without.messages.height > with.messages.height);
    }

    #[test]
    fn tiles_cover_board() {
        let layout = screen_layout(SCREEN, true);
        let tiles = board_tiles(layout.board);
        assert_eq!(tiles.len(), WORD_LENGTH * MAX_ATTEMPTS);
        assert!(tiles.iter().all(|(_, _, rect)| layout.board.contains(rect.as_position())));
    }

    #[test]
    fn keys_laid_out_in_rows() {
        let layout = screen_layout(SCREEN, true);
        let keys = keyboard_keys(layout.keyboard.unwrap());
        assert_eq!(keys.len(), 29);
        assert_eq!(keys[0].0, VirtualKey::Letter('Q'));
        assert_eq!(keys[20].0, VirtualKey::Enter);
    }

    #[test]
    fn hit_test_finds_keys_and_tiles() {
        let layout = screen_layout(SCREEN, true);
        let (key, rect) = keyboard_keys(layout.keyboard.unwrap())[0];
        assert_eq!(
            hit_test(SCREEN, true, rect.x + 1, rect.y + 1),
            Some(Hit::Key(key))
        );

        let (row, column, rect) = board_tiles(layout.board)[7];
        assert_eq!(
            hit_test(SCREEN, true, rect.x + 1, rect.y + 1),
            Some(Hit::Tile { row, column })
        );
        assert_eq!((row, column), (1, 2));

        assert_eq!(hit_test(SCREEN, true, 0, 0), None);
    }

    #[test]
    fn hit_test_ignores_hidden_keyboard() {
        let layout = screen_layout(SCREEN, true);
        let (_, rect) = keyboard_keys(layout.keyboard.unwrap())[0];
        assert!(!matches!(
            hit_test(SCREEN, false, rect.x + 1, rect.y + 1),
            Some(Hit::Key(_))
        ));
    }

    #[test]
    fn renders_board_and_keyboard() {
        let words = load("carro\ncarta\n").unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(1)).unwrap();
        app.session = GameSession::new(Word::new("carro").unwrap());
        for ch in "CARTA".chars() {
            app.session.insert_letter(ch).unwrap();
        }
        app.session.submit_guess(&words).unwrap();

        let text = screen_text(&app);
        assert!(text.contains("TERMO"));
        assert!(text.contains("Enter"));
        assert!(text.contains("Attempt 2/6"));
    }

    #[test]
    fn keyboard_keys_colored_by_hints() {
        let words = load("carro\ncarta\n").unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(1)).unwrap();
        app.session = GameSession::new(Word::new("carro").unwrap());
        for ch in "CARTA".chars() {
            app.session.insert_letter(ch).unwrap();
        }
        app.session.submit_guess(&words).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        let keys = keyboard_keys(screen_layout(SCREEN, true).keyboard.unwrap());
        let background = |key: VirtualKey| {
            let (_, rect) = keys.iter().find(|(k, _)| *k == key).unwrap();
            buffer[(rect.x + rect.width / 2, rect.y + 1)].bg
        };

        assert_eq!(background(VirtualKey::Letter('C')), Color::Green);
        // Ç shares the hint of its base letter
        assert_eq!(background(VirtualKey::Letter('Ç')), Color::Green);
        assert_eq!(background(VirtualKey::Letter('T')), Color::DarkGray);
        assert_eq!(background(VirtualKey::Letter('Z')), Color::Reset);
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let words = load("carro\n").unwrap();
        let app = App::new(&words, StdRng::seed_from_u64(1)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
