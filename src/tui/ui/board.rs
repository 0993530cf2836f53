//! Board widget rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::super::app::App;
use crate::game::{Cell, Mark};

/// Renders the 3x3 board centered in the given area.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let win_cells = app.engine().winning_line().map(|line| line.cells);
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

    render_row(f, rows[0], app, win_cells, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, win_cells, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, win_cells, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, win_cells: Option<[usize; 3]>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], app, win_cells, start);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], app, win_cells, start + 1);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], app, win_cells, start + 2);
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, win_cells: Option<[usize; 3]>, index: usize) {
    let cell = app.engine().board().get(index).unwrap_or(Cell::Empty);
    let disabled = app.computer_pending() || !app.engine().is_active();

    let (text, mut style) = match cell {
        Cell::Empty => {
            let hint_color = if disabled {
                Color::Black
            } else {
                Color::DarkGray
            };
            (format!("{}", index + 1), Style::default().fg(hint_color))
        }
        Cell::Taken(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Taken(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if win_cells.is_some_and(|cells| cells.contains(&index)) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if index == app.cursor() && !disabled {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
