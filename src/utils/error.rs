// src/utils/error.rs
use std::net::SocketAddr;
use thiserror::Error;

// The drafting and analysis core is total over its input, so only the
// surrounding application (CLI, web server) has failure modes.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Server(std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Web server failed: {0}")]
    Serve(#[from] ServeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
