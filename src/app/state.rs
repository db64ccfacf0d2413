//! App state - endpoint configuration, the log sequence, and UI focus state

use crate::messages::ui_events::{InputMode, Screen, SettingsField};
use crate::messages::RenderState;
use crate::models::Endpoints;
use crate::storage::Storage;

/// Main application state, owned by the app actor
pub struct AppState {
    // Screen navigation
    pub screen: Screen,
    pub input_mode: InputMode,

    // Endpoint configuration (persisted through storage)
    pub endpoints: Endpoints,
    pub active_field: SettingsField,
    pub cursor_position: usize,

    // Dispatch bookkeeping. The loading flag is derived from the number of
    // requests still in flight so it ends false even when dispatches overlap.
    pub in_flight: usize,
    pub next_request_id: u64,

    // Log sequence: append-only, in-memory, cleared only on user action
    pub logs: Vec<String>,
    pub log_scroll: u16,

    // Storage (persisted endpoints)
    pub storage: Storage,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }

    pub fn with_storage(storage: Storage) -> Self {
        let endpoints = storage.load_endpoints();
        AppState {
            screen: Screen::Control,
            input_mode: InputMode::Normal,
            endpoints,
            active_field: SettingsField::OpenUrl,
            cursor_position: 0,
            in_flight: 0,
            next_request_id: 1,
            logs: Vec::new(),
            log_scroll: 0,
            storage,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Whether any dispatched request is still in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            SettingsField::OpenUrl => &self.endpoints.open_url,
            SettingsField::CloseUrl => &self.endpoints.close_url,
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_field {
            SettingsField::OpenUrl => &mut self.endpoints.open_url,
            SettingsField::CloseUrl => &mut self.endpoints.close_url,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.screen,
            input_mode: self.input_mode,
            endpoints: self.endpoints.clone(),
            active_field: self.active_field,
            cursor_position: self.cursor_position,
            is_loading: self.is_loading(),
            logs: self.logs.clone(),
            log_scroll: self.log_scroll,
        }
    }
}
