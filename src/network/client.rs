//! HTTP client wrapper - fires GET requests and reports trace lines

use std::time::Instant;
use tokio::sync::mpsc;

use crate::messages::NetworkResponse;

/// Send a trace line to both the log sequence and the tracing log file.
/// Emitted at info level, which the file subscriber records by default.
fn trace(response_tx: &mpsc::UnboundedSender<NetworkResponse>, id: u64, line: String) {
    tracing::info!(target: "http", id, "{line}");
    let _ = response_tx.send(NetworkResponse::Trace { id, line });
}

/// Fire a single GET at the endpoint. Every request and response is traced;
/// any transport error collapses to one Failed response carrying its message.
pub async fn dispatch(
    client: &reqwest::Client,
    id: u64,
    url: String,
    response_tx: &mpsc::UnboundedSender<NetworkResponse>,
) {
    let start = Instant::now();
    trace(response_tx, id, format!("REQUEST: GET {url}"));

    match client.get(&url).send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let elapsed = start.elapsed().as_millis() as u64;
            trace(response_tx, id, format!("RESPONSE: {status} from {url} ({elapsed}ms)"));

            match resp.text().await {
                Ok(body) => {
                    trace(response_tx, id, format!("BODY: {body}"));
                    let _ = response_tx.send(NetworkResponse::Completed {
                        id,
                        status,
                        time_ms: elapsed,
                    });
                }
                Err(e) => {
                    let _ = response_tx.send(NetworkResponse::Failed {
                        id,
                        message: e.to_string(),
                    });
                }
            }
        }
        Err(e) => {
            let _ = response_tx.send(NetworkResponse::Failed {
                id,
                message: e.to_string(),
            });
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc::unbounded_channel;

    /// Captures subscriber output so tests can assert on it
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_trace_lines_reach_the_subscriber_at_default_level() {
        let capture = CaptureWriter::default();
        // Same configuration main installs for the log file
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (tx, mut rx) = unbounded_channel();
        let client = create_client();
        dispatch(&client, 9, String::from("http://127.0.0.1:1/abrir"), &tx).await;

        assert!(matches!(rx.recv().await, Some(NetworkResponse::Trace { .. })));
        assert!(
            capture.contents().contains("REQUEST: GET http://127.0.0.1:1/abrir"),
            "trace line missing from subscriber output: {:?}",
            capture.contents()
        );
    }

    #[tokio::test]
    async fn test_unreachable_address_yields_one_failure() {
        let (tx, mut rx) = unbounded_channel();
        let client = create_client();

        // Port 1 is never listening on loopback
        dispatch(&client, 7, String::from("http://127.0.0.1:1/abrir"), &tx).await;
        drop(tx);

        let mut trace_lines = 0;
        let mut failures = Vec::new();
        while let Some(response) = rx.recv().await {
            match response {
                NetworkResponse::Trace { id, line } => {
                    assert_eq!(id, 7);
                    assert!(line.starts_with("REQUEST: GET"));
                    trace_lines += 1;
                }
                NetworkResponse::Failed { id, message } => {
                    assert_eq!(id, 7);
                    failures.push(message);
                }
                other => panic!("unexpected response: {other:?}"),
            }
        }

        assert_eq!(trace_lines, 1);
        assert_eq!(failures.len(), 1);
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_not_a_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, crate::server::build_router()).await.unwrap();
        });

        let (tx, mut rx) = unbounded_channel();
        let client = create_client();
        dispatch(&client, 1, format!("http://{addr}/nope"), &tx).await;
        drop(tx);

        let mut completed = None;
        while let Some(response) = rx.recv().await {
            match response {
                NetworkResponse::Completed { status, .. } => completed = Some(status),
                NetworkResponse::Failed { message, .. } => panic!("unexpected failure: {message}"),
                NetworkResponse::Trace { .. } => {}
            }
        }
        assert_eq!(completed, Some(404));
    }
}
