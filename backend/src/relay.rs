//! TCP chat relay keyed by game identifier
//!
//! Protocol, one UTF-8 line per message:
//!
//! 1. The client opens with `"<gameID>:<displayName>"`.
//! 2. Everyone else in that game hears `"System: <name> has joined the chat."`.
//! 3. Each further line `L` is delivered to the others as `"<name>: L"`.
//! 4. On disconnect the others hear `"System: <name> has left the chat."`.
//!
//! The relay never echoes a line back to its sender and never forwards
//! between different games. It knows nothing about chess.

use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, info, warn};

use crate::error::{RelayError, RelayResult};

/// Identifier of one accepted connection
pub type ConnectionId = u64;

/// Messages queued per connection before further lines to it are dropped
pub const OUTBOX_CAPACITY: usize = 256;

type Outbox = mpsc::Sender<Arc<str>>;

/// Parsed opening line of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub game_id: u64,
    pub name: String,
}

/// Parse `"<gameID>:<displayName>"`, splitting on the first `:`
pub fn parse_handshake(line: &str) -> RelayResult<Handshake> {
    let line = line.trim_end_matches(['\r', '\n']);
    let malformed = || RelayError::MalformedHandshake {
        line: line.to_string(),
    };

    let (game_id, name) = line.split_once(':').ok_or_else(malformed)?;
    let game_id = game_id.trim().parse::<u64>().map_err(|_| malformed())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(Handshake {
        game_id,
        name: name.to_string(),
    })
}

/// Open connections grouped by game
///
/// A game's entry exists only while it has at least one connection.
#[derive(Debug, Default)]
pub struct Rooms {
    games: Mutex<HashMap<u64, HashMap<ConnectionId, Outbox>>>,
}

impl Rooms {
    fn join(&self, game_id: u64, connection: ConnectionId, outbox: Outbox) {
        self.games
            .lock()
            .entry(game_id)
            .or_default()
            .insert(connection, outbox);
    }

    fn leave(&self, game_id: u64, connection: ConnectionId) {
        let mut games = self.games.lock();
        if let Some(members) = games.get_mut(&game_id) {
            members.remove(&connection);
            if members.is_empty() {
                games.remove(&game_id);
                debug!("[RELAY] Game {} has no connections left", game_id);
            }
        }
    }

    /// Queue `message` for every connection of `game_id` except `sender`
    ///
    /// A connection whose outbox is full misses the message.
    fn broadcast(&self, game_id: u64, sender: ConnectionId, message: &str) {
        let message: Arc<str> = Arc::from(message);
        let games = self.games.lock();
        let Some(members) = games.get(&game_id) else {
            return;
        };
        for (&connection, outbox) in members {
            if connection == sender {
                continue;
            }
            match outbox.try_send(Arc::clone(&message)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!("[RELAY] Outbox of connection {} is full, dropping message", connection)
                }
                // A closed outbox belongs to a connection that is shutting down
                Err(TrySendError::Closed(_)) => {}
            }
        }
    }

    /// Number of games with at least one connection
    pub fn game_count(&self) -> usize {
        self.games.lock().len()
    }

    /// Number of connections in `game_id`
    pub fn member_count(&self, game_id: u64) -> usize {
        self.games.lock().get(&game_id).map_or(0, HashMap::len)
    }
}

/// Listening relay, ready to [`run`](RelayServer::run)
pub struct RelayServer {
    listener: TcpListener,
    rooms: Arc<Rooms>,
    next_connection: AtomicU64,
}

impl RelayServer {
    pub async fn bind(addr: SocketAddr) -> RelayResult<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RelayError::Bind { addr, source })?;
        Ok(Self {
            listener,
            rooms: Arc::new(Rooms::default()),
            next_connection: AtomicU64::new(1),
        })
    }

    pub fn local_addr(&self) -> RelayResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Shared view of the room registry
    pub fn rooms(&self) -> Arc<Rooms> {
        Arc::clone(&self.rooms)
    }

    /// Accept connections until `shutdown` resolves
    ///
    /// Connections already being served keep their tasks; they end with the
    /// runtime or when their peer disconnects.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> RelayResult<()> {
        let addr = self.local_addr()?;
        info!("[RELAY] Chat relay listening on {}", addr);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("[RELAY] Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let connection = self.next_connection.fetch_add(1, Ordering::Relaxed);
                        let rooms = Arc::clone(&self.rooms);
                        tokio::spawn(async move {
                            if let Err(err) = serve_connection(stream, connection, rooms).await {
                                match err {
                                    RelayError::MalformedHandshake { .. } => {
                                        warn!("[RELAY] Dropping {}: {}", peer, err)
                                    }
                                    _ => error!("[RELAY] Connection {} from {} failed: {}", connection, peer, err),
                                }
                            }
                        });
                    }
                    Err(err) => error!("[RELAY] Accept failed: {}", err),
                },
            }
        }
    }
}

/// Drive one client from handshake to disconnect
async fn serve_connection(stream: TcpStream, connection: ConnectionId, rooms: Arc<Rooms>) -> RelayResult<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    let first = lines.next_line().await?.ok_or(RelayError::ClosedBeforeHandshake)?;
    let Handshake { game_id, name } = parse_handshake(&first)?;

    let (outbox, mut inbox) = mpsc::channel::<Arc<str>>(OUTBOX_CAPACITY);
    let forward = tokio::spawn(async move {
        while let Some(message) = inbox.recv().await {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.shutdown().await
    });

    rooms.join(game_id, connection, outbox);
    info!("[RELAY] {} joined game {}", name, game_id);
    rooms.broadcast(game_id, connection, &format!("System: {name} has joined the chat."));

    let read_result = loop {
        match lines.next_line().await {
            Ok(Some(line)) => rooms.broadcast(game_id, connection, &format!("{name}: {line}")),
            Ok(None) => break Ok(()),
            Err(err) => break Err(RelayError::from(err)),
        }
    };

    rooms.leave(game_id, connection);
    info!("[RELAY] {} left game {}", name, game_id);
    rooms.broadcast(game_id, connection, &format!("System: {name} has left the chat."));

    // Leaving dropped the last sender, so the forwarder drains and stops
    match forward.await {
        Ok(Err(err)) => warn!("[RELAY] Writing to {} failed: {}", name, err),
        Err(err) => error!("[RELAY] Forwarder for {} panicked: {}", name, err),
        Ok(Ok(())) => {}
    }
    read_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handshake() {
        assert_eq!(
            parse_handshake("42:alice\n").unwrap(),
            Handshake {
                game_id: 42,
                name: "alice".to_string()
            }
        );
        assert_eq!(parse_handshake("7:a:b").unwrap().name, "a:b", "split on the first colon");
    }

    #[test]
    fn test_parse_handshake_rejects_malformed() {
        for line in ["", "42", "abc:bob", "42:", "-1:eve"] {
            assert!(
                matches!(parse_handshake(line), Err(RelayError::MalformedHandshake { .. })),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rooms_broadcast_skips_sender() {
        let rooms = Rooms::default();
        let (tx_a, mut rx_a) = mpsc::channel(OUTBOX_CAPACITY);
        let (tx_b, mut rx_b) = mpsc::channel(OUTBOX_CAPACITY);
        rooms.join(1, 1, tx_a);
        rooms.join(1, 2, tx_b);

        rooms.broadcast(1, 1, "alice: hi");

        assert_eq!(rx_b.try_recv().unwrap().as_ref(), "alice: hi");
        assert!(rx_a.try_recv().is_err(), "sender hears nothing");
    }

    #[test]
    fn test_rooms_remove_empty_game() {
        let rooms = Rooms::default();
        let (tx, _rx) = mpsc::channel(OUTBOX_CAPACITY);
        rooms.join(9, 1, tx);
        assert_eq!(rooms.member_count(9), 1);

        rooms.leave(9, 1);
        assert_eq!(rooms.game_count(), 0);
        rooms.leave(9, 1);
    }

    #[test]
    fn test_rooms_broadcast_drops_when_outbox_full() {
        let rooms = Rooms::default();
        let (tx_sender, _rx_sender) = mpsc::channel(OUTBOX_CAPACITY);
        let (tx_stalled, mut rx_stalled) = mpsc::channel(1);
        rooms.join(4, 1, tx_sender);
        rooms.join(4, 2, tx_stalled);

        rooms.broadcast(4, 1, "alice: first");
        rooms.broadcast(4, 1, "alice: second");

        assert_eq!(rx_stalled.try_recv().unwrap().as_ref(), "alice: first");
        assert!(rx_stalled.try_recv().is_err(), "overflowing message is dropped");
        assert_eq!(rooms.member_count(4), 2, "a slow reader stays connected");
    }
}
