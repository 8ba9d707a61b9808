//! TCP transport: line-delimited JSON-RPC, one MCP session per connection.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::ListenConfig};
use crate::core::McpServer;

pub struct TcpTransport {
    listen: ListenConfig,
}

impl TcpTransport {
    pub fn new(listen: ListenConfig) -> Self {
        Self { listen }
    }

    /// Accept connections forever. Every session shares the same registry.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.listen.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                    }
                    tokio::spawn(serve_connection(server.clone(), stream, peer));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // avoid spinning on persistent accept errors
                    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                }
            }
        }
    }
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let service = match server.serve(stream).await {
        Ok(service) => {
            info!("Client {} connected", peer);
            service
        }
        Err(e) => {
            warn!("Failed to initialize session for {}: {}", peer, e);
            return;
        }
    };

    match service.waiting().await {
        Ok(_) => info!("Client {} disconnected", peer),
        Err(e) => warn!("Session with {} ended with error: {}", peer, e),
    }
}
