//! Network messages - communication between App and Network layers

use crate::models::DoorAction;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fire a GET request at the configured endpoint
    Dispatch {
        id: u64,
        action: DoorAction,
        url: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A client trace line (request or response), logged regardless of outcome
    Trace { id: u64, line: String },
    /// Request completed with an HTTP status (2xx or not - both count as done)
    Completed { id: u64, status: u16, time_ms: u64 },
    /// Request failed with a transport-level error
    Failed { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Trace { id, .. } => *id,
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    /// Check if this is a terminal response (no more messages expected for this id)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            NetworkResponse::Completed { .. } | NetworkResponse::Failed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_is_not_terminal() {
        let trace = NetworkResponse::Trace {
            id: 1,
            line: String::from("REQUEST: GET http://localhost:8080/abrir"),
        };
        assert!(!trace.is_terminal());
        assert_eq!(trace.id(), 1);
    }

    #[test]
    fn test_completed_and_failed_are_terminal() {
        assert!(NetworkResponse::Completed { id: 2, status: 200, time_ms: 3 }.is_terminal());
        assert!(NetworkResponse::Failed { id: 3, message: String::new() }.is_terminal());
    }
}
