// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Scripted reply for one gateway request.
#[derive(Clone, Debug)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    /// A 200 response carrying `{"decryptedValue": <value>}`.
    pub fn decrypted(value: &str) -> Self {
        Self {
            status: 200,
            body: format!("{{\"decryptedValue\":\"{value}\"}}"),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!("{{\"error\":\"{message}\"}}"),
        }
    }
}

/// Minimal HTTP server standing in for the decryption gateway. Captures
/// every request body and answers with whatever the responder scripts.
pub struct StubGateway {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl StubGateway {
    /// Bind an ephemeral port and serve until dropped. The responder is
    /// called with each parsed request body, in arrival order.
    pub async fn spawn<F>(responder: F) -> Self
    where
        F: Fn(&Value) -> GatewayResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub gateway");
        let addr = listener.local_addr().expect("stub gateway local addr");
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let responder = Arc::new(responder);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let captured = captured.clone();
                let responder = responder.clone();
                tokio::spawn(async move {
                    let _ = serve_connection(stream, captured, responder).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request bodies seen so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubGateway {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection<F>(
    mut stream: TcpStream,
    captured: Arc<Mutex<Vec<Value>>>,
    responder: Arc<F>,
) -> std::io::Result<()>
where
    F: Fn(&Value) -> GatewayResponse + Send + Sync,
{
    let body = read_request_body(&mut stream).await?;
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let response = responder(&parsed);
    captured.lock().unwrap().push(parsed);

    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    stream.write_all(payload.as_bytes()).await?;
    stream.shutdown().await
}

async fn read_request_body(stream: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read headers.
    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(Vec::new());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);
    Ok(body)
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
