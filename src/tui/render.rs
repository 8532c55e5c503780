use super::app::App;
use crate::core::Command;
use crate::kernel::FormatOp;
use crate::models::Selection;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_toolbar(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(FormatOp::ALL.len() * 3);
    for op in FormatOp::ALL {
        spans.push(Span::styled(
            op.label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        let mut keys: Vec<String> = app
            .keymap
            .keys_for_command(&Command::Format(op))
            .iter()
            .map(ToString::to_string)
            .collect();
        keys.sort();
        if let Some(key) = keys.first() {
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
    let inner = block.inner(area);
    app.follow_cursor(inner.height);

    let selection = app.surface.selection();
    let lines = highlighted_lines(app.surface.text(), selection);
    let paragraph = Paragraph::new(lines).block(block).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);

    let (row, col) = app.surface.cursor_row_col();
    let row = u16::try_from(row).unwrap_or(u16::MAX).saturating_sub(app.scroll);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    if row < inner.height && col < inner.width {
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let history = app.editor.history();
    let position = history.cursor().map_or(0, |c| c + 1);
    let mut text = format!(
        "Word Count: {}   History: {}/{}",
        app.editor.word_count(),
        position,
        history.len()
    );
    for (available, label) in [(history.can_undo(), "undo"), (history.can_redo(), "redo")] {
        if available {
            text.push_str("  ");
            text.push_str(label);
        }
    }
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Splits `text` into lines with the selected char range reversed.
fn highlighted_lines(text: &str, selection: Selection) -> Vec<Line<'static>> {
    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for raw in text.split('\n') {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_selected = false;

        for ch in raw.chars() {
            let is_selected = selection.contains(offset);
            if is_selected != run_selected && !run.is_empty() {
                let style = if run_selected { selected } else { Style::default() };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_selected = is_selected;
            run.push(ch);
            offset += 1;
        }
        if !run.is_empty() {
            let style = if run_selected { selected } else { Style::default() };
            spans.push(Span::styled(run, style));
        }
        // The newline itself.
        offset += 1;
        lines.push(Line::from(spans));
    }
    lines
}
