//! Application state for the countup TUI.
//!
//! [`App`] owns the list of amounts, the hosted [`CounterState`] and the
//! transient UI bits (input buffer, toast). Input is turned into
//! [`Action`]s by the handler and applied with [`App::update`].

use std::time::Instant;

use crate::{
    clipboard::ClipboardManager,
    constants::{MAX_INPUT_LEN, TOAST_DURATION},
    counter::{CountUpOptions, format_number},
    event::Action,
    widgets::{AmountDisplay, CounterState},
};

/// Whether keys drive the counter or the amount input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing {
        buffer: String,
    },
}

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq)]
struct Toast {
    message: String,
    expires: Instant,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    amounts: Vec<f64>,
    selected: usize,
    options: CountUpOptions,
    pub counter: CounterState,
    pub mode: InputMode,
    pub exit: bool,
    toast: Option<Toast>,
    clipboard: ClipboardManager,
}

impl App {
    /// Creates the application. An empty amount list shows a single `0`.
    #[must_use]
    pub fn new(amounts: Vec<f64>, options: CountUpOptions, now: Instant) -> Self {
        let amounts = if amounts.is_empty() { vec![0.0] } else { amounts };
        let mut counter = CounterState::default();
        counter.tick(now);

        Self {
            amounts,
            selected: 0,
            options,
            counter,
            mode: InputMode::Normal,
            exit: false,
            toast: None,
            clipboard: ClipboardManager::new(),
        }
    }

    /// The amount currently displayed.
    #[must_use]
    pub fn current_amount(&self) -> f64 {
        self.amounts[self.selected]
    }

    /// All amounts and the index of the selected one.
    #[must_use]
    pub fn amounts(&self) -> (&[f64], usize) {
        (&self.amounts, self.selected)
    }

    /// The display to render for this frame.
    #[must_use]
    pub fn display(&self) -> AmountDisplay {
        AmountDisplay::new(self.current_amount()).with_options(self.options.clone())
    }

    /// Final formatted text of the current amount.
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        format_number(self.current_amount(), &self.options.format)
    }

    /// Message of the visible toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }

    /// Advance the frame clock and expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        self.counter.tick(now);
        if self.toast.as_ref().is_some_and(|toast| now >= toast.expires) {
            self.toast = None;
        }
    }

    /// Apply an action.
    pub fn update(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.exit = true,
            Action::NextAmount => {
                self.selected = (self.selected + 1) % self.amounts.len();
            }
            Action::PreviousAmount => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.amounts.len() - 1);
            }
            Action::Replay => self.counter.primitive_mut().restart(now),
            Action::CopyAmount => {
                let text = self.formatted_amount();
                match self.clipboard.copy_text(&text) {
                    Ok(()) => self.show_toast(format!("[+] Copied {text}"), now),
                    Err(e) => self.show_toast(format!("[x] {e}"), now),
                }
            }
            Action::StartEditing => {
                self.mode = InputMode::Editing {
                    buffer: String::new(),
                };
            }
            Action::InputChar(c) => {
                if let InputMode::Editing { buffer } = &mut self.mode
                    && buffer.chars().count() < MAX_INPUT_LEN
                {
                    buffer.push(c);
                }
            }
            Action::InputBackspace => {
                if let InputMode::Editing { buffer } = &mut self.mode {
                    buffer.pop();
                }
            }
            Action::CancelInput => self.mode = InputMode::Normal,
            Action::SubmitInput => self.submit_input(now),
        }
    }

    /// Parse the input buffer and select it as a new amount.
    ///
    /// Non-finite values such as `inf` parse fine and are handed to the
    /// display as-is; the counter reports the rejection.
    fn submit_input(&mut self, now: Instant) {
        let InputMode::Editing { buffer } = std::mem::take(&mut self.mode) else {
            return;
        };

        match buffer.trim().parse::<f64>() {
            Ok(amount) => {
                tracing::debug!("new amount entered: {amount}");
                self.amounts.push(amount);
                self.selected = self.amounts.len() - 1;
            }
            Err(_) => self.show_toast(format!("[x] Not a number: {}", buffer.trim()), now),
        }
    }

    fn show_toast(&mut self, message: String, now: Instant) {
        self.toast = Some(Toast {
            message,
            expires: now + TOAST_DURATION,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app_with(amounts: Vec<f64>) -> App {
        App::new(amounts, AmountDisplay::default_options(), Instant::now())
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        app.update(Action::StartEditing, now);
        for c in text.chars() {
            app.update(Action::InputChar(c), now);
        }
        app.update(Action::SubmitInput, now);
    }

    #[test]
    fn test_empty_amounts_default_to_zero() {
        let app = app_with(Vec::new());
        assert_eq!(app.current_amount(), 0.0);
        assert_eq!(app.formatted_amount(), "₹0.00");
    }

    #[test]
    fn test_formatted_amount_matches_settled_counter_on_ties() {
        let now = Instant::now();
        let mut app = App::new(vec![0.125], AmountDisplay::default_options(), now);
        assert_eq!(app.formatted_amount(), "₹0.13");

        let mut buf = ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 10, 1));
        ratatui::widgets::StatefulWidget::render(app.display(), buf.area, &mut buf, &mut app.counter);
        let settled = now + Duration::from_secs(2);
        assert_eq!(
            app.counter.primitive().text_at(settled),
            app.formatted_amount()
        );

        let mut options = AmountDisplay::default_options();
        options.format.decimals = 0;
        let app = App::new(vec![2.5], options, now);
        assert_eq!(app.formatted_amount(), "₹3");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app_with(vec![1.0, 2.0, 3.0]);
        let now = Instant::now();

        app.update(Action::PreviousAmount, now);
        assert_eq!(app.current_amount(), 3.0);
        app.update(Action::NextAmount, now);
        assert_eq!(app.current_amount(), 1.0);
        app.update(Action::NextAmount, now);
        assert_eq!(app.current_amount(), 2.0);
    }

    #[test]
    fn test_submit_adds_and_selects_amount() {
        let mut app = app_with(vec![10.0]);
        let now = Instant::now();

        type_text(&mut app, " 1234.5 ", now);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.amounts(), (&[10.0, 1234.5][..], 1));
        assert_eq!(app.formatted_amount(), "₹1234.50");
        assert_eq!(app.display().amount(), 1234.5);
    }

    #[test]
    fn test_submit_invalid_input_shows_toast() {
        let mut app = app_with(vec![10.0]);
        let now = Instant::now();

        type_text(&mut app, "abc", now);
        assert_eq!(app.current_amount(), 10.0);
        assert_eq!(app.toast(), Some("[x] Not a number: abc"));

        app.tick(now + TOAST_DURATION);
        assert_eq!(app.toast(), None);
    }

    #[test]
    fn test_backspace_and_cancel() {
        let mut app = app_with(vec![10.0]);
        let now = Instant::now();

        app.update(Action::StartEditing, now);
        app.update(Action::InputChar('4'), now);
        app.update(Action::InputChar('2'), now);
        app.update(Action::InputBackspace, now);
        assert_eq!(
            app.mode,
            InputMode::Editing {
                buffer: "4".to_string()
            }
        );

        app.update(Action::CancelInput, now);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.amounts().0.len(), 1);
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut app = app_with(vec![1.0]);
        let now = Instant::now();

        app.update(Action::StartEditing, now);
        for _ in 0..MAX_INPUT_LEN + 5 {
            app.update(Action::InputChar('9'), now);
        }
        let InputMode::Editing { buffer } = &app.mode else {
            panic!("expected editing mode");
        };
        assert_eq!(buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(vec![1.0]);
        app.update(Action::Quit, Instant::now());
        assert!(app.exit);
    }

    #[test]
    fn test_replay_restarts_counter() {
        let now = Instant::now();
        let mut app = App::new(vec![50.0], AmountDisplay::default_options(), now);
        let later = now + Duration::from_secs(5);

        // First frame forwards the amount; by `later` it has settled.
        let mut buf = ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 10, 1));
        ratatui::widgets::StatefulWidget::render(app.display(), buf.area, &mut buf, &mut app.counter);
        app.tick(later);
        assert!(app.counter.is_settled());

        app.update(Action::Replay, later);
        assert!(!app.counter.is_settled());
    }
}
