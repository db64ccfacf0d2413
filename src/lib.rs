//! # Sesam TUI
//!
//! A minimal terminal application that opens and closes a door by firing
//! HTTP GET requests at two user-configured endpoints.
//!
//! ## Features
//! - Settings, control, and logs screens
//! - Configurable open/close endpoint URLs, persisted between runs
//! - In-memory request/error log with one-key clear
//! - Local HTTP echo server as a development target
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod storage;
pub mod ui;
pub mod server;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{DoorAction, Endpoints};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
pub use storage::Storage;
