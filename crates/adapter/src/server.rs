//! TCP server for the metrics endpoint
//!
//! Handles incoming connections and manages client lifecycle.
//! Uses tokio for async networking.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::protocol::*;
use crate::types::MetricsSnapshot;

pub const DEFAULT_PORT: u16 = 7878;
pub const STREAM_INTERVAL_MS: u64 = 1000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub protocol_version: String,
    pub stream_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            protocol_version: PROTOCOL_VERSION.to_string(),
            stream_interval_ms: STREAM_INTERVAL_MS,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("BUNNYMARK_METRICS_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env::var("BUNNYMARK_METRICS_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            host,
            port,
            ..Self::default()
        }
    }
}

/// Shared server state
pub struct ServerState {
    config: ServerConfig,
    clients: RwLock<Vec<ClientHandle>>,
    latest: RwLock<MetricsSnapshot>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            clients: RwLock::new(Vec::new()),
            latest: RwLock::new(MetricsSnapshot::default()),
        }
    }

    /// Check if the endpoint is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("BUNNYMARK_METRICS_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    pub async fn latest(&self) -> MetricsSnapshot {
        *self.latest.read().await
    }

    /// Store a snapshot and push it to every connected client.
    pub async fn publish(&self, snapshot: MetricsSnapshot) {
        *self.latest.write().await = snapshot;
        let clients = self.clients.read().await;
        for c in clients.iter() {
            let _ = c.tx.send(ClientOutbound::Stream(snapshot));
        }
    }

    /// Answer one client line.
    pub async fn respond(&self, line: &str) -> ClientOutbound {
        match parse_message(line) {
            Ok(ParsedMessage::GetMetrics(req)) => {
                let snap = self.latest().await;
                ClientOutbound::Reply(create_metrics(req.seq, &snap))
            }
            Ok(ParsedMessage::Unknown(u)) => ClientOutbound::Error(create_error(
                u.seq,
                ErrorCode::UnknownType,
                &format!("unknown message type: {}", u.msg_type),
            )),
            Err(e) => ClientOutbound::Error(create_error(
                extract_seq_best_effort(line).unwrap_or(0),
                ErrorCode::InvalidRequest,
                &format!("invalid request: {}", e),
            )),
        }
    }
}

/// Handle to a connected client
pub struct ClientHandle {
    pub id: usize,
    pub tx: mpsc::UnboundedSender<ClientOutbound>, // Channel to send messages to client
}

#[derive(Debug, Clone)]
pub enum ClientOutbound {
    /// Pushed snapshot; the writer stamps the next per-client seq.
    Stream(MetricsSnapshot),
    /// Direct answer carrying the request's seq.
    Reply(MetricsMessage),
    Error(ErrorMessage),
}

/// Start the TCP server
///
/// Binds `config.host:config.port` (port 0 picks a free port), reports the
/// bound address on `ready_tx`, then serves until the task is dropped.
/// Snapshots received on `metrics_rx` are broadcast to every client.
pub async fn run_server(
    config: ServerConfig,
    mut metrics_rx: mpsc::UnboundedReceiver<MetricsSnapshot>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    log::info!("metrics endpoint listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let state = Arc::new(ServerState::new(config));
    let mut client_id_counter = 0usize;

    // Snapshot dispatcher.
    {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(snap) = metrics_rx.recv().await {
                state.publish(snap).await;
            }
        });
    }

    // Accept incoming connections
    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        log::info!("metrics client {} connected from {}", client_id, addr);

        let state_clone = Arc::clone(&state);

        // Spawn task to handle this client
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, Arc::clone(&state_clone)).await {
                log::warn!("metrics client {} error: {}", client_id, e);
            }
            state_clone.clients.write().await.retain(|c| c.id != client_id);
            log::info!("metrics client {} disconnected", client_id);
        });
    }
}

/// Handle a single client connection
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    state: Arc<ServerState>,
) -> anyhow::Result<()> {
    let (reader, writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);

    // Channel to send messages to this client
    let (tx, rx) = mpsc::unbounded_channel::<ClientOutbound>();

    {
        let mut clients = state.clients.write().await;
        clients.push(ClientHandle {
            id: client_id,
            tx: tx.clone(),
        });
    }

    let welcome = create_welcome(
        1,
        &state.config.protocol_version,
        state.config.stream_interval_ms,
    );
    let write_task = tokio::spawn(write_outbound(writer, welcome, rx));

    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // Client disconnected
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let reply = state.respond(trimmed).await;
        if let ClientOutbound::Error(err) = &reply {
            log::debug!("metrics client {} sent bad line: {}", client_id, err.message);
        }
        if tx.send(reply).is_err() {
            break;
        }
    }

    write_task.abort();
    Ok(())
}

/// Write the welcome, then every queued message, one JSON object per line.
pub async fn write_outbound<W>(
    mut writer: W,
    welcome: WelcomeMessage,
    mut rx: mpsc::UnboundedReceiver<ClientOutbound>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut next_seq = welcome.seq + 1;

    serde_json::to_writer(&mut buf, &welcome)?;
    buf.push(b'\n');
    writer.write_all(&buf).await?;
    writer.flush().await?;

    while let Some(msg) = rx.recv().await {
        buf.clear();
        match msg {
            ClientOutbound::Stream(snap) => {
                serde_json::to_writer(&mut buf, &create_metrics(next_seq, &snap))?;
                next_seq += 1;
            }
            ClientOutbound::Reply(m) => serde_json::to_writer(&mut buf, &m)?,
            ClientOutbound::Error(e) => serde_json::to_writer(&mut buf, &e)?,
        }
        buf.push(b'\n');
        writer.write_all(&buf).await?;
        writer.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_json(out: ClientOutbound) -> serde_json::Value {
        match out {
            ClientOutbound::Reply(m) => serde_json::to_value(m).unwrap(),
            ClientOutbound::Error(e) => serde_json::to_value(e).unwrap(),
            ClientOutbound::Stream(_) => panic!("unexpected stream message"),
        }
    }

    #[test]
    fn get_metrics_before_first_snapshot_is_zero() {
        let state = ServerState::new(ServerConfig::default());
        let v = reply_json(tokio_test::block_on(
            state.respond(r#"{"type":"get_metrics","seq":5}"#),
        ));
        assert_eq!(v["type"], "metrics");
        assert_eq!(v["seq"], 5);
        assert_eq!(v["bunnies"], 0);
        assert_eq!(v["fps"], 0.0);
    }

    #[test]
    fn get_metrics_reads_latest_publish() {
        let state = ServerState::new(ServerConfig::default());
        tokio_test::block_on(state.publish(MetricsSnapshot {
            fps: 58.0,
            tps: 60.0,
            bunnies: 100,
        }));
        let v = reply_json(tokio_test::block_on(
            state.respond(r#"{"type":"get_metrics","seq":6}"#),
        ));
        assert_eq!(v["bunnies"], 100);
        assert_eq!(v["tps"], 60.0);
    }

    #[test]
    fn bad_lines_get_error_codes() {
        let state = ServerState::new(ServerConfig::default());

        let v = reply_json(tokio_test::block_on(state.respond(r#"{"type":"spawn","seq":2}"#)));
        assert_eq!(v["type"], "error");
        assert_eq!(v["code"], "unknown_type");
        assert_eq!(v["seq"], 2);

        let v = reply_json(tokio_test::block_on(state.respond(r#"{"seq":3, oops"#)));
        assert_eq!(v["code"], "invalid_request");
        assert_eq!(v["seq"], 3);
    }

    #[test]
    fn disabled_flag_accepts_one_or_true() {
        for (value, expected) in [("1", true), ("TRUE", true), ("0", false), ("yes", false)] {
            std::env::set_var("BUNNYMARK_METRICS_DISABLED", value);
            assert_eq!(ServerState::is_disabled(), expected, "{:?}", value);
        }
        std::env::remove_var("BUNNYMARK_METRICS_DISABLED");
        assert!(!ServerState::is_disabled());
    }

    #[test]
    fn config_defaults() {
        let c = ServerConfig::default();
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 7878);
        assert_eq!(c.protocol_version, "1.0.0");
        assert_eq!(c.stream_interval_ms, 1000);
    }
}
