//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Which transport the server is exposed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output, one client per process.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC on a TCP socket, one session per connection.
    #[cfg(feature = "tcp")]
    Tcp(ListenConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Socket address to bind.
#[cfg(any(feature = "tcp", feature = "http"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(flatten)]
    pub listen: ListenConfig,

    /// Path of the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow browser clients from any origin.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(any(feature = "tcp", feature = "http"))]
impl ListenConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Read `{prefix}_HOST` and `{prefix}_PORT`, falling back to the defaults.
    fn from_env(prefix: &str, default_port: u16) -> Self {
        let port = std::env::var(format!("{prefix}_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_port);
        let host = std::env::var(format!("{prefix}_HOST")).unwrap_or_else(|_| default_host());
        Self { host, port }
    }

    /// `host:port` string suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: ListenConfig::new(default_host(), DEFAULT_HTTP_PORT),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_env() -> Self {
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
            .unwrap_or_else(|_| default_cors());
        Self {
            listen: ListenConfig::from_env("MCP_HTTP", DEFAULT_HTTP_PORT),
            rpc_path: std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path()),
            enable_cors,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(ListenConfig::new(default_host(), DEFAULT_TCP_PORT));
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

impl TransportConfig {
    /// Select the transport from `MCP_TRANSPORT` (`stdio`, `tcp`, `http`).
    ///
    /// Unknown or disabled values fall back to the default transport.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(ListenConfig::from_env("MCP_TCP", DEFAULT_TCP_PORT)),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Human-readable description for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(listen) => format!("TCP on {}", listen.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.listen.address(), cfg.rpc_path),
        }
    }
}
