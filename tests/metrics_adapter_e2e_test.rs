use std::io::{BufRead, BufReader as StdBufReader, Write};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};

use tui_arcade::adapter::server::{run_server, ServerConfig};
use tui_arcade::adapter::MetricsAdapter;
use tui_arcade::types::MetricsSnapshot;

fn test_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        ..ServerConfig::default()
    }
}

async fn next_json(
    lines: &mut tokio::io::Lines<BufReader<tokio::net::tcp::OwnedReadHalf>>,
) -> serde_json::Value {
    let line = tokio::time::timeout(Duration::from_secs(2), lines.next_line())
        .await
        .expect("timed out waiting for a line")
        .unwrap()
        .expect("connection closed");
    serde_json::from_str(&line).unwrap()
}

#[tokio::test]
async fn welcome_stream_and_get_metrics() {
    let (metrics_tx, metrics_rx) = mpsc::unbounded_channel::<MetricsSnapshot>();
    let (ready_tx, ready_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        let _ = run_server(test_config(), metrics_rx, Some(ready_tx)).await;
    });

    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    let welcome = next_json(&mut lines).await;
    assert_eq!(welcome["type"], "welcome");
    assert_eq!(welcome["seq"], 1);
    assert_eq!(welcome["protocol_version"], "1.0.0");
    assert_eq!(welcome["stream_interval_ms"], 1000);

    // Before any publish the reply is all zeros.
    write_half
        .write_all(b"{\"type\":\"get_metrics\",\"seq\":10}\n")
        .await
        .unwrap();
    let reply = next_json(&mut lines).await;
    assert_eq!(reply["type"], "metrics");
    assert_eq!(reply["seq"], 10);
    assert_eq!(reply["bunnies"], 0);

    metrics_tx
        .send(MetricsSnapshot {
            fps: 60.0,
            tps: 60.0,
            bunnies: 1010,
        })
        .unwrap();
    let pushed = next_json(&mut lines).await;
    assert_eq!(pushed["type"], "metrics");
    assert_eq!(pushed["seq"], 2);
    assert_eq!(pushed["bunnies"], 1010);
    assert_eq!(pushed["fps"], 60.0);

    write_half
        .write_all(b"{\"type\":\"get_metrics\",\"seq\":11}\n")
        .await
        .unwrap();
    let reply = next_json(&mut lines).await;
    assert_eq!(reply["seq"], 11);
    assert_eq!(reply["bunnies"], 1010);

    server_handle.abort();
}

#[tokio::test]
async fn bad_lines_get_errors_and_keep_the_connection() {
    let (_metrics_tx, metrics_rx) = mpsc::unbounded_channel::<MetricsSnapshot>();
    let (ready_tx, ready_rx) = oneshot::channel();
    let server_handle = tokio::spawn(async move {
        let _ = run_server(test_config(), metrics_rx, Some(ready_tx)).await;
    });
    let addr = ready_rx.await.unwrap();

    let stream = TcpStream::connect(addr).await.unwrap();
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();
    let _welcome = next_json(&mut lines).await;

    write_half.write_all(b"this is not json\n").await.unwrap();
    let err = next_json(&mut lines).await;
    assert_eq!(err["type"], "error");
    assert_eq!(err["code"], "invalid_request");
    assert_eq!(err["seq"], 0);

    write_half
        .write_all(b"{\"type\":\"reset\",\"seq\":4}\n")
        .await
        .unwrap();
    let err = next_json(&mut lines).await;
    assert_eq!(err["code"], "unknown_type");
    assert_eq!(err["seq"], 4);

    // Blank lines are ignored; the next request still works.
    write_half
        .write_all(b"\n{\"type\":\"get_metrics\",\"seq\":5}\n")
        .await
        .unwrap();
    let reply = next_json(&mut lines).await;
    assert_eq!(reply["type"], "metrics");
    assert_eq!(reply["seq"], 5);

    server_handle.abort();
}

#[tokio::test]
async fn every_client_receives_broadcasts() {
    let (metrics_tx, metrics_rx) = mpsc::unbounded_channel::<MetricsSnapshot>();
    let (ready_tx, ready_rx) = oneshot::channel();
    let server_handle = tokio::spawn(async move {
        let _ = run_server(test_config(), metrics_rx, Some(ready_tx)).await;
    });
    let addr = ready_rx.await.unwrap();

    let mut readers = Vec::new();
    for _ in 0..2 {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (read_half, write_half) = stream.into_split();
        let mut lines = BufReader::new(read_half).lines();
        assert_eq!(next_json(&mut lines).await["type"], "welcome");
        readers.push((lines, write_half));
    }

    metrics_tx
        .send(MetricsSnapshot {
            fps: 30.0,
            tps: 60.0,
            bunnies: 7,
        })
        .unwrap();
    for (lines, _) in readers.iter_mut() {
        let v = next_json(lines).await;
        assert_eq!(v["type"], "metrics");
        assert_eq!(v["bunnies"], 7);
    }

    server_handle.abort();
}

#[test]
fn adapter_runtime_publishes_from_sync_code() {
    let adapter = MetricsAdapter::start(test_config()).expect("adapter start");
    let stream = std::net::TcpStream::connect(adapter.addr()).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let mut writer = stream.try_clone().unwrap();
    let mut reader = StdBufReader::new(stream);

    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let welcome: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(welcome["type"], "welcome");

    // Wait until the server has registered the client before publishing.
    writer
        .write_all(b"{\"type\":\"get_metrics\",\"seq\":1}\n")
        .unwrap();
    line.clear();
    reader.read_line(&mut line).unwrap();

    adapter.publish(MetricsSnapshot {
        fps: 59.0,
        tps: 60.0,
        bunnies: 42,
    });
    line.clear();
    reader.read_line(&mut line).unwrap();
    let v: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(v["type"], "metrics");
    assert_eq!(v["bunnies"], 42);
}
