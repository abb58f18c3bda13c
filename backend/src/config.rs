//! Command line and environment configuration of the relay binary

use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Chat relay for Democracy Chess games
#[derive(Parser, Debug, Clone)]
#[command(name = "chat-relay", author, version, about, long_about = None)]
pub struct RelayConfig {
    /// Address to listen on
    #[arg(long, env = "RELAY_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Tracing filter directives; falls back to `RUST_LOG`, then `info`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = RelayConfig::parse_from(["chat-relay"]);
        // RELAY_BIND may be set in the environment running the tests
        if std::env::var_os("RELAY_BIND").is_none() {
            assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
        }
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_bind_flag_overrides() {
        let config = RelayConfig::parse_from(["chat-relay", "--bind", "0.0.0.0:6000"]);
        assert_eq!(config.bind.port(), 6000);
    }
}
