//! Adapter runtime integration.
//!
//! Bridges the sync game loop with the async TCP server.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};

use crate::server::{run_server, ServerConfig, ServerState};
use crate::types::MetricsSnapshot;

const BIND_TIMEOUT: Duration = Duration::from_secs(2);

/// Running metrics endpoint.
pub struct MetricsAdapter {
    _rt: Runtime,
    tx: mpsc::UnboundedSender<MetricsSnapshot>,
    addr: SocketAddr,
}

impl MetricsAdapter {
    /// Start the endpoint from environment variables.
    ///
    /// Returns None if `BUNNYMARK_METRICS_DISABLED` is set or the server
    /// could not start; the benchmark runs fine without it.
    pub fn start_from_env() -> Option<Self> {
        if ServerState::is_disabled() {
            log::info!("metrics endpoint disabled via BUNNYMARK_METRICS_DISABLED");
            return None;
        }

        match Self::start(ServerConfig::from_env()) {
            Ok(adapter) => Some(adapter),
            Err(e) => {
                log::warn!("metrics endpoint not started: {:#}", e);
                None
            }
        }
    }

    /// Start the endpoint and wait until it is listening.
    pub fn start(config: ServerConfig) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let (tx, rx) = mpsc::unbounded_channel::<MetricsSnapshot>();
        let (ready_tx, ready_rx) = oneshot::channel();

        let host = config.host.clone();
        let port = config.port;
        rt.spawn(async move {
            if let Err(e) = run_server(config, rx, Some(ready_tx)).await {
                log::warn!("metrics endpoint stopped: {:#}", e);
            }
        });

        // A failed bind drops `ready_tx` before sending.
        let addr = rt
            .block_on(async { tokio::time::timeout(BIND_TIMEOUT, ready_rx).await })
            .map_err(|_| anyhow!("timed out binding {}:{}", host, port))?
            .map_err(|_| anyhow!("could not bind {}:{}", host, port))?;

        Ok(Self { _rt: rt, tx, addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Hand a snapshot to the server for broadcast. Never blocks.
    pub fn publish(&self, snapshot: MetricsSnapshot) {
        let _ = self.tx.send(snapshot);
    }
}
