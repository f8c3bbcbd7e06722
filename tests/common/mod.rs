//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Start a mock backend that answers every request with a fixed status and
/// JSON body. Returns the address it listens on.
#[allow(dead_code)]
pub async fn start_json_backend(status: u16, body: &'static str) -> SocketAddr {
    start_backend_with(status, "application/json", body).await
}

/// Start a mock backend answering with an arbitrary content type.
#[allow(dead_code)]
pub async fn start_backend_with(
    status: u16,
    content_type: &'static str,
    body: &'static str,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (head_tx, _head_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let head_tx = head_tx.clone();
                    tokio::spawn(async move {
                        serve_one(socket, status, content_type, body, head_tx).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock backend that also captures the head (request line + headers)
/// of every request it receives.
#[allow(dead_code)]
pub async fn start_capturing_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (head_tx, head_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let head_tx = head_tx.clone();
                    tokio::spawn(async move {
                        serve_one(socket, status, "application/json", body, head_tx).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, head_rx)
}

async fn serve_one(
    mut socket: TcpStream,
    status: u16,
    content_type: &'static str,
    body: &'static str,
    head_tx: mpsc::UnboundedSender<String>,
) {
    let head = read_head(&mut socket).await;
    let _ = head_tx.send(head);

    let status_text = match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        content_type,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Read until the blank line ending the request head.
async fn read_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
