//! Stateless UI rendering for the word search.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{Celebration, WordSearchApp};
use super::input::CELL_WIDTH;
use pitchside_wordsearch::{Cell, PALETTE, PuzzleInstance};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title bar.
    pub title: Rect,
    /// Border around the letters.
    pub board_frame: Rect,
    /// Where the letters are drawn; mouse positions are mapped against it.
    pub board: Rect,
    /// Word checklist.
    pub words: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Splits `area` into the screen regions for a `grid_size` puzzle.
pub fn screen(area: Rect, grid_size: usize) -> Screen {
    let grid = u16::try_from(grid_size).unwrap_or(u16::MAX);
    let board_width = grid.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = grid.saturating_add(2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(board_height),    // Board and words
            Constraint::Length(3),            // Status
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(20)])
        .split(rows[1]);

    let board_frame = Rect {
        height: body[0].height.min(board_height),
        ..body[0]
    };

    Screen {
        title: rows[0],
        board_frame,
        board: Block::default().borders(Borders::ALL).inner(board_frame),
        words: body[1],
        status: rows[2],
    }
}

/// Renders the whole word-search screen.
pub fn draw(frame: &mut Frame, app: &WordSearchApp) {
    let puzzle = app.puzzle();
    let layout = screen(frame.area(), puzzle.grid().size());

    let title = Paragraph::new("Pitchside - Club Word Search")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    frame.render_widget(
        Block::default().borders(Borders::ALL).title("Grid"),
        layout.board_frame,
    );
    draw_grid(frame, layout.board, puzzle, app.cursor());
    draw_words(frame, layout.words, puzzle);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Drag or arrows+space | N: New puzzle | Q: Quit"),
        );
    frame.render_widget(status, layout.status);

    if let Some(celebration) = app.celebration() {
        let area = frame.area();
        draw_celebration(frame, area, celebration);
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, puzzle: &PuzzleInstance, cursor: Cell) {
    let lines: Vec<Line> = puzzle
        .grid()
        .rows()
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    let cell = Cell::new(row, col);
                    Span::styled(format!("{} ", letter), cell_style(puzzle, cell, cursor))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn cell_style(puzzle: &PuzzleInstance, cell: Cell, cursor: Cell) -> Style {
    let mut style = if puzzle.is_selected(cell) {
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if let Some(found) = puzzle.found_cell(cell) {
        Style::default()
            .bg(hex_color(found.color()))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if cell == cursor && !puzzle.is_completed() {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    style
}

fn draw_words(frame: &mut Frame, area: Rect, puzzle: &PuzzleInstance) {
    let items: Vec<ListItem> = puzzle
        .words()
        .iter()
        .map(|entry| {
            let found = puzzle
                .found_words()
                .iter()
                .find(|found| found.word() == entry.canonical());
            let style = match found {
                Some(found) => Style::default()
                    .fg(hex_color(found.color()))
                    .add_modifier(Modifier::CROSSED_OUT),
                None => Style::default().fg(Color::White),
            };
            ListItem::new(Line::from(Span::styled(entry.display().clone(), style)))
        })
        .collect();

    let title = format!(
        "Clubs {}/{}",
        puzzle.found_words().len(),
        puzzle.words().len()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_celebration(frame: &mut Frame, area: Rect, celebration: &Celebration) {
    let buf = frame.buffer_mut();
    for spark in celebration.sparks() {
        let x = area.x + (spark.x * f32::from(area.width)) as u16;
        let y = area.y + (spark.y * f32::from(area.height)) as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let symbol = if (x + y + celebration.frames_left()) % 2 == 0 { "*" } else { "+" };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol)
                .set_style(Style::default().fg(hex_color(PALETTE[spark.color % PALETTE.len()])));
        }
    }
}

/// Parses `#RRGGBB` into a terminal color, falling back to white.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) if digits.len() == 6 => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_palette() {
        assert_eq!(hex_color("#2E7D32"), Color::Rgb(0x2E, 0x7D, 0x32));
        assert_eq!(hex_color("nonsense"), Color::White);
    }

    #[test]
    fn test_board_sits_inside_frame() {
        let layout = screen(Rect::new(0, 0, 80, 30), 16);
        assert_eq!(layout.board.x, layout.board_frame.x + 1);
        assert_eq!(layout.board.y, layout.title.height + 1);
        assert_eq!(layout.board.width, 32);
        assert_eq!(layout.board.height, 16);
    }
}
