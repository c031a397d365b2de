//! Protocol module - JSON message types for the metrics endpoint
//!
//! All messages have: type, seq (sequence number), ts (timestamp in ms)

use serde::{Deserialize, Serialize};

use crate::types::MetricsSnapshot;

pub const PROTOCOL_VERSION: &str = "1.0.0";

// ============== Client -> Server Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GetMetricsType {
    #[serde(rename = "get_metrics")]
    GetMetrics,
}

impl Default for GetMetricsType {
    fn default() -> Self {
        Self::GetMetrics
    }
}

/// Ask for the latest snapshot right away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMetricsMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: GetMetricsType,
    pub seq: u64,
    #[serde(default)]
    pub ts: u64,
}

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WelcomeType {
    #[serde(rename = "welcome")]
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricsType {
    #[serde(rename = "metrics")]
    Metrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Line is not JSON or misses required fields.
    #[serde(rename = "invalid_request")]
    InvalidRequest,
    /// Well-formed JSON with a `type` the server does not handle.
    #[serde(rename = "unknown_type")]
    UnknownType,
}

/// Sent once, right after a client connects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeMessage {
    #[serde(rename = "type")]
    pub msg_type: WelcomeType,
    pub seq: u64,
    pub ts: u64,
    pub protocol_version: String,
    pub stream_interval_ms: u64,
}

/// One benchmark reading; pushed every interval and sent as a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsMessage {
    #[serde(rename = "type")]
    pub msg_type: MetricsType,
    pub seq: u64,
    pub ts: u64,
    pub fps: f64,
    pub tps: f64,
    pub bunnies: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

// ============== Parsing ==============

/// Parsed incoming message
#[derive(Debug, Clone)]
pub enum ParsedMessage {
    GetMetrics(GetMetricsMessage),
    Unknown(UnknownMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMessage {
    pub seq: u64,
    pub msg_type: String,
}

/// Parse one client line.
///
/// A well-formed object with an unhandled `type` is reported as
/// [`ParsedMessage::Unknown`] rather than a parse error.
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "get_metrics")]
        GetMetrics(GetMetricsMessage),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::GetMetrics(m)) => Ok(ParsedMessage::GetMetrics(m)),
        Err(e) => {
            #[derive(Debug, Deserialize)]
            struct Envelope {
                #[serde(rename = "type")]
                msg_type: Option<String>,
                seq: Option<u64>,
            }
            let envelope = serde_json::from_str::<Envelope>(json)?;
            match envelope.msg_type {
                Some(t) if t != "get_metrics" => Ok(ParsedMessage::Unknown(UnknownMessage {
                    seq: envelope.seq.unwrap_or(0),
                    msg_type: t,
                })),
                _ => Err(e),
            }
        }
    }
}

/// Pull `"seq": N` out of a line that failed to parse.
pub fn extract_seq_best_effort(s: &str) -> Option<u64> {
    let start = s.find("\"seq\"")?;
    let after_key = &s[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}

// ============== Utility Functions ==============

pub fn create_welcome(seq: u64, protocol_version: &str, stream_interval_ms: u64) -> WelcomeMessage {
    WelcomeMessage {
        msg_type: WelcomeType::Welcome,
        seq,
        ts: current_timestamp_ms(),
        protocol_version: protocol_version.to_string(),
        stream_interval_ms,
    }
}

pub fn create_metrics(seq: u64, snapshot: &MetricsSnapshot) -> MetricsMessage {
    MetricsMessage {
        msg_type: MetricsType::Metrics,
        seq,
        ts: current_timestamp_ms(),
        fps: snapshot.fps,
        tps: snapshot.tps,
        bunnies: snapshot.bunnies,
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code,
        message: message.to_string(),
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
