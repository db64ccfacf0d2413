//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Screen, SettingsField};
use crate::models::Endpoints;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Screen
    pub screen: Screen,
    pub input_mode: InputMode,

    // Settings
    pub endpoints: Endpoints,
    pub active_field: SettingsField,
    pub cursor_position: usize,

    // Control
    pub is_loading: bool,

    // Logs
    pub logs: Vec<String>,
    pub log_scroll: u16,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            screen: Screen::Control,
            input_mode: InputMode::Normal,
            endpoints: Endpoints::default(),
            active_field: SettingsField::OpenUrl,
            cursor_position: 0,
            is_loading: false,
            logs: Vec::new(),
            log_scroll: 0,
        }
    }
}
