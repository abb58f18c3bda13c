//! Error types for the chat relay

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Failures of the relay server or one of its connections
#[derive(Error, Debug)]
pub enum RelayError {
    /// The listening socket could not be opened
    #[error("Failed to bind chat relay on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// First line was not `<gameID>:<displayName>`
    #[error("Malformed handshake {line:?}: expected \"<gameID>:<displayName>\"")]
    MalformedHandshake { line: String },

    /// The peer hung up before sending a handshake
    #[error("Connection closed before the handshake")]
    ClosedBeforeHandshake,

    /// Reading from or writing to a connection failed
    #[error("Relay I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
