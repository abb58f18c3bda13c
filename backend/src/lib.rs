//! Chat relay for Democracy Chess
//!
//! A line-based TCP relay that groups connections by game identifier. It
//! carries chat text only and shares no state with the rules engine.
//!
//! - `relay` - [`RelayServer`], the handshake parser and the room registry
//! - `config` - clap configuration of the `chat-relay` binary
//! - `error` - [`RelayError`] and the [`RelayResult`] alias

pub mod config;
pub mod error;
pub mod relay;

pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use relay::{parse_handshake, Handshake, RelayServer, Rooms};
