//! Local echo server - a stand-in dispatch target for development
//!
//! Binds at process start and serves for the process lifetime; there is no
//! shutdown path. Two fixed routes answer with fixed text, anything else gets
//! the framework's 404.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::constants::{
    ECHO_CLOSE_PATH, ECHO_CLOSE_RESPONSE, ECHO_OPEN_PATH, ECHO_OPEN_RESPONSE,
};

async fn open_handler() -> &'static str {
    ECHO_OPEN_RESPONSE
}

async fn close_handler() -> &'static str {
    ECHO_CLOSE_RESPONSE
}

pub fn build_router() -> Router {
    Router::new()
        .route(ECHO_OPEN_PATH, get(open_handler))
        .route(ECHO_CLOSE_PATH, get(close_handler))
}

/// Bind the given address and serve the echo routes until the process exits
pub async fn run_echo_server(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "echo server listening");
    axum::serve(listener, build_router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn_echo_server() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, build_router()).await.unwrap() });
        addr
    }

    #[tokio::test]
    async fn test_echo_paths_return_their_literals() {
        let addr = spawn_echo_server().await;

        let open = reqwest::get(format!("http://{addr}/abrir")).await.unwrap();
        assert_eq!(open.status().as_u16(), 200);
        assert_eq!(open.text().await.unwrap(), "obrint portes");

        let close = reqwest::get(format!("http://{addr}/cerrar")).await.unwrap();
        assert_eq!(close.status().as_u16(), 200);
        assert_eq!(close.text().await.unwrap(), "tancant portes");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let addr = spawn_echo_server().await;
        let resp = reqwest::get(format!("http://{addr}/ring")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 404);
    }
}
