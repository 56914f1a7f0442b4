use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    app::{App, InputMode},
    event::Action,
};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(*key, app),
        _ => None,
    }
}

/// Handles key press events.
fn handle_key_press(key_event: KeyEvent, app: &App) -> Option<Action> {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Action::Quit);
    }

    match app.mode {
        InputMode::Editing { .. } => handle_input_keys(key_event),
        InputMode::Normal => handle_main_view_keys(key_event),
    }
}

/// Handles key events while the amount input is open.
fn handle_input_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::SubmitInput),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c) if !c.is_control() => Some(Action::InputChar(c)),
        _ => None,
    }
}

/// Handles key events on the counter view.
fn handle_main_view_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Down => Some(Action::NextAmount),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::Up => Some(Action::PreviousAmount),
        KeyCode::Char('r') => Some(Action::Replay),
        KeyCode::Char('y') => Some(Action::CopyAmount),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEditing),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::AmountDisplay;
    use rstest::*;
    use std::time::Instant;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(vec![1.0, 2.0], AmountDisplay::default_options(), Instant::now())
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), Some(Action::Quit))]
    #[case::esc_quits(KeyCode::Esc, Some(Action::Quit))]
    #[case::next(KeyCode::Char('n'), Some(Action::NextAmount))]
    #[case::previous(KeyCode::Left, Some(Action::PreviousAmount))]
    #[case::replay(KeyCode::Char('r'), Some(Action::Replay))]
    #[case::copy(KeyCode::Char('y'), Some(Action::CopyAmount))]
    #[case::edit(KeyCode::Char('e'), Some(Action::StartEditing))]
    #[case::unbound(KeyCode::Char('z'), None)]
    fn test_main_view_keys(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        assert_eq!(handle_event(&app(), &press(code)), expected);
    }

    #[rstest]
    #[case::digit(KeyCode::Char('7'), Some(Action::InputChar('7')))]
    #[case::q_is_text(KeyCode::Char('q'), Some(Action::InputChar('q')))]
    #[case::backspace(KeyCode::Backspace, Some(Action::InputBackspace))]
    #[case::submit(KeyCode::Enter, Some(Action::SubmitInput))]
    #[case::cancel(KeyCode::Esc, Some(Action::CancelInput))]
    fn test_input_keys(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        let mut app = app();
        app.update(Action::StartEditing, Instant::now());
        assert_eq!(handle_event(&app, &press(code)), expected);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let mut app = app();
        assert_eq!(handle_event(&app, &ctrl_c), Some(Action::Quit));

        app.update(Action::StartEditing, Instant::now());
        assert_eq!(handle_event(&app, &ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(handle_event(&app(), &Event::Resize(80, 24)), None);
    }
}
