//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Port the local echo server binds at startup
pub const ECHO_SERVER_PORT: u16 = 8080;

/// Echo server path for the open action
pub const ECHO_OPEN_PATH: &str = "/abrir";

/// Echo server path for the close action
pub const ECHO_CLOSE_PATH: &str = "/cerrar";

/// Echo server response body for the open path
pub const ECHO_OPEN_RESPONSE: &str = "obrint portes";

/// Echo server response body for the close path
pub const ECHO_CLOSE_RESPONSE: &str = "tancant portes";

/// Default URL for the open action (the local echo server)
pub const DEFAULT_OPEN_URL: &str = "http://localhost:8080/abrir";

/// Default URL for the close action (the local echo server)
pub const DEFAULT_CLOSE_URL: &str = "http://localhost:8080/cerrar";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Sesam TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
