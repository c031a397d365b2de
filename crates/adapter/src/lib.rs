//! Adapter module - benchmark metrics over a TCP socket with JSON protocol
//!
//! This module lets an embedding host (a dashboard, a CI job, a test harness)
//! read the benchmark's frame rate, tick rate and particle count while it runs.
//!
//! # Protocol Overview
//!
//! The adapter implements a **line-delimited JSON protocol** over TCP:
//!
//! 1. **Connection**: Client connects to TCP socket (default: 127.0.0.1:7878)
//! 2. **Welcome**: Server sends `welcome` immediately
//! 3. **Streaming**: Server pushes a `metrics` message every time the game
//!    publishes a snapshot (once per second)
//! 4. **Polling**: Client may send `get_metrics` at any time for an immediate reply
//!
//! # Message Types
//!
//! ## Client → Server
//!
//! - **get_metrics**: Ask for the latest snapshot
//!
//! ## Server → Client
//!
//! - **welcome**: Protocol version and stream interval
//! - **metrics**: fps, tps and bunny count
//! - **error**: `invalid_request` or `unknown_type`, with a message
//!
//! # Environment Variables
//!
//! - `BUNNYMARK_METRICS_HOST`: Bind address (default: "127.0.0.1")
//! - `BUNNYMARK_METRICS_PORT`: Port number (default: 7878)
//! - `BUNNYMARK_METRICS_DISABLED`: Set to "1" or "true" to disable the endpoint
//!
//! # Example Protocol Flow
//!
//! ```text
//! Server -> Client: {"type":"welcome","seq":1,"ts":1700000000000,"protocol_version":"1.0.0","stream_interval_ms":1000}
//! Server -> Client: {"type":"metrics","seq":2,"ts":1700000001000,"fps":59.8,"tps":60.0,"bunnies":1010}
//! Client -> Server: {"type":"get_metrics","seq":7}
//! Server -> Client: {"type":"metrics","seq":7,"ts":1700000001200,"fps":59.8,"tps":60.0,"bunnies":1010}
//! ```
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"get_metrics","seq":1}
//! ```

pub mod protocol;
pub mod runtime;
pub mod server;

pub use tui_arcade_types as types;

pub use runtime::MetricsAdapter;
