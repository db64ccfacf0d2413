//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Screen};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::DoorAction;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn prev_screen(&mut self) {
        self.screen = self.screen.prev();
    }

    // ========================
    // Settings editing
    // ========================

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
            self.persist_endpoints();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
            self.persist_endpoints();
        }
    }

    // Settings are written through on every edit
    fn persist_endpoints(&mut self) {
        if let Err(e) = self.storage.save_endpoints(&self.endpoints) {
            tracing::warn!(error = %e, "failed to persist endpoints");
        }
    }

    // ========================
    // Dispatch
    // ========================

    /// Prepare a dispatch command for the network actor. The URL is taken as
    /// configured, with no validation.
    pub fn dispatch(&mut self, action: DoorAction) -> NetworkCommand {
        let id = self.next_id();
        self.in_flight += 1;
        let url = self.endpoints.url_for(action).to_string();
        tracing::info!(id, action = action.as_str(), url = %url, "dispatching");
        NetworkCommand::Dispatch { id, action, url }
    }

    /// Apply a network response to the log sequence and loading state
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if response.is_terminal() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        match response {
            NetworkResponse::Trace { line, .. } => self.push_log(line),
            NetworkResponse::Failed { message, .. } => self.push_log(message),
            NetworkResponse::Completed { .. } => {}
        }
    }

    // ========================
    // Logs
    // ========================

    pub fn push_log(&mut self, line: String) {
        self.logs.push(line);
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
        self.log_scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // The logs screen renders two lines per entry (text + divider)
        let max_lines = u16::try_from(self.logs.len() * 2).unwrap_or(u16::MAX);
        self.log_scroll = self.log_scroll.saturating_add(1).min(max_lines);
    }
}
