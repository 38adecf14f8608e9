//! Key bindings: crossterm key events to session input events.
//!
//! Up/Down walk history, Tab accepts the first suggestion, Enter submits.
//! Alt+1..9 opens the n-th project card and Esc closes it. Ctrl+C and
//! Ctrl+D quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::{InputEvent, Key};

/// Map one key event to a session event. Releases, repeats and unbound keys
/// map to nothing.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let event = match key.code {
        KeyCode::Char('c' | 'd') if ctrl => InputEvent::Quit,
        KeyCode::Char(c) if alt => {
            let n = c.to_digit(10).filter(|&d| d > 0)?;
            InputEvent::ProjectClick(n as usize - 1)
        },
        KeyCode::Char(c) if !ctrl => InputEvent::TextInput(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Key(Key::Enter),
        KeyCode::Tab => InputEvent::Key(Key::Tab),
        KeyCode::Up => InputEvent::Key(Key::ArrowUp),
        KeyCode::Down => InputEvent::Key(Key::ArrowDown),
        KeyCode::Esc => InputEvent::CloseModal,
        _ => return None,
    };
    Some(event)
}
