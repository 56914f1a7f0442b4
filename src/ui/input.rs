//! Amount input popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_STYLE, TITLE_STYLE};

/// Width of the input popup including borders.
const INPUT_WIDTH: u16 = 40;

/// Height of the input popup including borders.
const INPUT_HEIGHT: u16 = 3;

/// Renders the amount input centered in `area`.
pub fn render_input(frame: &mut Frame, area: Rect, buffer: &str) {
    let popup = centered(area, INPUT_WIDTH, INPUT_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
        .title(Span::styled(" New amount ", TITLE_STYLE))
        .title_bottom(Line::styled(" Enter apply · Esc cancel ", MUTED_STYLE).centered());

    let text = Line::from(vec![Span::raw(buffer.to_string()), Span::raw("_")]);
    frame.render_widget(Paragraph::new(text).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
