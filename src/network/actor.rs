//! Network actor - runs HTTP dispatches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, dispatch};

/// Network actor that processes dispatch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Dispatch { id, action, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            // One task per request; no coordination between them
                            self.active_requests.spawn(async move {
                                tracing::info!(id, action = action.as_str(), url = %url, "executing dispatch");
                                dispatch(&client, id, url, &response_tx).await;
                                tracing::info!(id, "dispatch finished");
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - responses were already sent from the task
                }
            }
        }
    }
}
