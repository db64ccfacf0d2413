//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens, paged left/right
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    Settings,
    #[default]
    Control,
    Logs,
}

impl Screen {
    pub fn next(&self) -> Screen {
        match self {
            Screen::Settings => Screen::Control,
            Screen::Control => Screen::Logs,
            Screen::Logs => Screen::Settings,
        }
    }

    pub fn prev(&self) -> Screen {
        match self {
            Screen::Settings => Screen::Logs,
            Screen::Control => Screen::Settings,
            Screen::Logs => Screen::Control,
        }
    }
}

/// Focused field on the settings screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SettingsField {
    #[default]
    OpenUrl,
    CloseUrl,
}

impl SettingsField {
    pub fn next(&self) -> SettingsField {
        match self {
            SettingsField::OpenUrl => SettingsField::CloseUrl,
            SettingsField::CloseUrl => SettingsField::OpenUrl,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Screen navigation
    SwitchScreen(Screen),
    NextScreen,
    PrevScreen,

    // Settings editing
    NextField,
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Control actions
    OpenDoor,
    CloseDoor,

    // Logs
    ScrollUp,
    ScrollDown,
    ClearLogs,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, screen: Screen, input_mode: InputMode) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Screen switching (only in normal mode, not while editing a URL)
    if input_mode == InputMode::Normal {
        match key.code {
            KeyCode::Char('1') => return Some(UiEvent::SwitchScreen(Screen::Settings)),
            KeyCode::Char('2') => return Some(UiEvent::SwitchScreen(Screen::Control)),
            KeyCode::Char('3') => return Some(UiEvent::SwitchScreen(Screen::Logs)),
            KeyCode::Left => return Some(UiEvent::PrevScreen),
            KeyCode::Right => return Some(UiEvent::NextScreen),
            _ => {}
        }
    }

    match screen {
        Screen::Settings => handle_settings_keys(key, input_mode),
        Screen::Control => handle_control_keys(key),
        Screen::Logs => handle_logs_keys(key),
    }
}

/// Handle keys for the settings screen
fn handle_settings_keys(key: KeyEvent, input_mode: InputMode) -> Option<UiEvent> {
    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

/// Handle keys for the control screen
fn handle_control_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('o') => Some(UiEvent::OpenDoor),
        KeyCode::Char('c') => Some(UiEvent::CloseDoor),
        _ => None,
    }
}

/// Handle keys for the logs screen
fn handle_logs_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('d') => Some(UiEvent::ClearLogs),
        KeyCode::Up => Some(UiEvent::ScrollUp),
        KeyCode::Down => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_control_screen_dispatch_keys() {
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('o')), Screen::Control, InputMode::Normal),
            Some(UiEvent::OpenDoor)
        ));
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('c')), Screen::Control, InputMode::Normal),
            Some(UiEvent::CloseDoor)
        ));
    }

    #[test]
    fn test_editing_captures_screen_switch_digits() {
        // While editing a URL, '2' is text input, not a screen switch
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('2')), Screen::Settings, InputMode::Editing),
            Some(UiEvent::CharInput('2'))
        ));
    }

    #[test]
    fn test_screen_cycle_wraps() {
        assert_eq!(Screen::Logs.next(), Screen::Settings);
        assert_eq!(Screen::Settings.prev(), Screen::Logs);
    }
}
