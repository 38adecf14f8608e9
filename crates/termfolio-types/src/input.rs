//! Platform-agnostic input event types.
//!
//! Every front end maps its native input to these enums. The interpreter
//! never sees raw terminal bytes or key codes.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the prompt.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// One of the bound keys pressed.
    Key(Key),
    /// A suggestion in the autocomplete list was clicked.
    SuggestionClick(String),
    /// A project card in a project grid was clicked.
    ProjectClick(usize),
    /// The project modal close button was pressed.
    CloseModal,
    /// User requested quit (EOF, window close, etc.).
    Quit,
}

/// Keys with a binding at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Tab,
    Enter,
}

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryDirection {
    /// Towards older entries.
    Up,
    /// Towards newer entries.
    Down,
}

impl Key {
    /// History direction bound to this key, if any.
    pub fn history_direction(self) -> Option<HistoryDirection> {
        match self {
            Key::ArrowUp => Some(HistoryDirection::Up),
            Key::ArrowDown => Some(HistoryDirection::Down),
            Key::Tab | Key::Enter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_event() {
        let e = InputEvent::TextInput('a');
        assert_eq!(e, InputEvent::TextInput('a'));
        assert_ne!(e, InputEvent::TextInput('b'));
    }

    #[test]
    fn project_click_carries_index() {
        if let InputEvent::ProjectClick(i) = InputEvent::ProjectClick(3) {
            assert_eq!(i, 3);
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn arrow_keys_map_to_history() {
        assert_eq!(Key::ArrowUp.history_direction(), Some(HistoryDirection::Up));
        assert_eq!(
            Key::ArrowDown.history_direction(),
            Some(HistoryDirection::Down)
        );
        assert_eq!(Key::Tab.history_direction(), None);
        assert_eq!(Key::Enter.history_direction(), None);
    }
}
