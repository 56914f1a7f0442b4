//! Screen layout for the countup TUI.
//!
//! ```text
//! ╭ countup ───────────────────────────╮
//! ╰────────────────────────────────────╯
//! ╭ Amount ────────────────────────────╮
//! │                                    │
//! │₹1234.50                            │
//! │1/3                                 │
//! ╰────────────────────────────────────╯
//!  n next  p prev  r replay  e edit ...
//! ```

pub mod input;
pub mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    app::{App, InputMode},
    theme::{BORDER_STYLE, ERROR_COLOR, KEY_HINT_STYLE, MUTED_STYLE, TITLE_STYLE},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keybinding hints shown in the footer.
const KEY_HINTS: [(&str, &str); 6] = [
    ("n", "next"),
    ("p", "prev"),
    ("r", "replay"),
    ("e", "edit"),
    ("y", "copy"),
    ("q", "quit"),
];

/// Draw the whole screen.
pub fn render(app: &mut App, frame: &mut Frame) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_counter(app, frame, body);
    render_footer(frame, footer);

    if let InputMode::Editing { buffer } = &app.mode {
        input::render_input(frame, frame.area(), buffer);
    }
    if let Some(message) = app.toast() {
        toast::render_toast(frame, frame.area(), message);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(Span::styled(" countup ", TITLE_STYLE));
    let text = Line::from(vec![
        Span::raw("Animated amount display "),
        Span::styled(format!("v{VERSION}"), MUTED_STYLE),
    ]);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_counter(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(Span::styled(" Amount ", TITLE_STYLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, amount_row, status_row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_stateful_widget(app.display(), amount_row, &mut app.counter);

    let (amounts, selected) = app.amounts();
    let mut status = vec![Span::styled(
        format!("{}/{}", selected + 1, amounts.len()),
        MUTED_STYLE,
    )];
    if let Some(err) = app.counter.last_error() {
        status.push(Span::styled(format!("  {err}"), ERROR_COLOR));
    }
    frame.render_widget(Line::from(status), status_row);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key}"), KEY_HINT_STYLE),
                Span::styled(format!(" {label} "), MUTED_STYLE),
            ]
        })
        .collect();
    frame.render_widget(Line::from(spans), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::Action, widgets::AmountDisplay};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::{Duration, Instant};

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        app.tick(now);
        terminal.draw(|frame| render(app, frame)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_counter_settles_on_formatted_amount() {
        let now = Instant::now();
        let mut app = App::new(vec![1234.5, 0.0], AmountDisplay::default_options(), now);

        let first = draw(&mut app, now);
        assert!(first.contains("₹0.00"));
        assert!(first.contains("1/2"));

        let settled = draw(&mut app, now + Duration::from_secs(2));
        assert!(settled.contains("₹1234.50"));
    }

    #[test]
    fn test_footer_lists_keys() {
        let now = Instant::now();
        let mut app = App::new(vec![1.0], AmountDisplay::default_options(), now);
        let screen = draw(&mut app, now);
        assert!(screen.contains("replay"));
        assert!(screen.contains("quit"));
    }

    #[test]
    fn test_rejected_amount_is_reported() {
        let now = Instant::now();
        let mut app = App::new(vec![5.0], AmountDisplay::default_options(), now);
        draw(&mut app, now);

        app.update(Action::StartEditing, now);
        for c in "inf".chars() {
            app.update(Action::InputChar(c), now);
        }
        app.update(Action::SubmitInput, now);

        let screen = draw(&mut app, now + Duration::from_secs(2));
        assert!(screen.contains("₹5.00"));
        assert!(screen.contains("invalid end value: inf"));
        assert!(screen.contains("2/2"));
    }

    #[test]
    fn test_input_popup_and_toast_render() {
        let now = Instant::now();
        let mut app = App::new(vec![5.0], AmountDisplay::default_options(), now);

        app.update(Action::StartEditing, now);
        app.update(Action::InputChar('x'), now);
        let screen = draw(&mut app, now);
        assert!(screen.contains("New amount"));

        app.update(Action::SubmitInput, now);
        let screen = draw(&mut app, now);
        assert!(screen.contains("Not a number: x"));
    }
}
