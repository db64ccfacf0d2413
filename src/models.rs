use serde::{Deserialize, Serialize};

/// Door action triggered from the control screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorAction {
    Open,
    Close,
}

impl DoorAction {
    pub fn as_str(&self) -> &str {
        match self {
            DoorAction::Open => "open",
            DoorAction::Close => "close",
        }
    }
}

/// The two user-configured endpoint URLs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub open_url: String,
    pub close_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        use crate::constants::{DEFAULT_CLOSE_URL, DEFAULT_OPEN_URL};
        Endpoints {
            open_url: String::from(DEFAULT_OPEN_URL),
            close_url: String::from(DEFAULT_CLOSE_URL),
        }
    }
}

impl Endpoints {
    /// URL configured for the given action
    pub fn url_for(&self, action: DoorAction) -> &str {
        match action {
            DoorAction::Open => &self.open_url,
            DoorAction::Close => &self.close_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_point_at_echo_server() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.open_url, "http://localhost:8080/abrir");
        assert_eq!(endpoints.close_url, "http://localhost:8080/cerrar");
    }

    #[test]
    fn test_url_for_action() {
        let endpoints = Endpoints {
            open_url: String::from("http://door.local/up"),
            close_url: String::from("http://door.local/down"),
        };
        assert_eq!(endpoints.url_for(DoorAction::Open), "http://door.local/up");
        assert_eq!(endpoints.url_for(DoorAction::Close), "http://door.local/down");
    }
}
