//! Shared utilities for integration testing.

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Address on which nothing listens.
#[allow(dead_code)]
pub const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

/// Well-known Anvil test keys. Never hold real funds.
#[allow(dead_code)]
pub const KEY_A: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
#[allow(dead_code)]
pub const ADDRESS_A: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
#[allow(dead_code)]
pub const KEY_B: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
#[allow(dead_code)]
pub const ADDRESS_B: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

/// A request as seen by a mock server.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[allow(dead_code)]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

/// Start a programmable HTTP server on an ephemeral port.
///
/// The handler returns `(status, json_body)` for each request.
pub async fn start_mock_server<F>(handler: F) -> SocketAddr
where
    F: Fn(MockRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let _ = serve_connection(socket, handler).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn serve_connection<F>(socket: TcpStream, handler: Arc<F>) -> std::io::Result<()>
where
    F: Fn(MockRequest) -> (u16, String),
{
    let mut reader = BufReader::new(socket);

    loop {
        let mut request_line = String::new();
        if reader.read_line(&mut request_line).await? == 0 {
            return Ok(());
        }
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut headers = Vec::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).await? == 0 {
                return Ok(());
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                let (name, value) = (name.trim().to_string(), value.trim().to_string());
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.parse().unwrap_or(0);
                }
                headers.push((name, value));
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).await?;

        let (status, response_body) = handler(MockRequest {
            method,
            path,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });

        let status_text = match status {
            200 => "200 OK",
            400 => "400 Bad Request",
            401 => "401 Unauthorized",
            404 => "404 Not Found",
            500 => "500 Internal Server Error",
            _ => "200 OK",
        };
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            status_text,
            response_body.len(),
            response_body
        );
        reader.get_mut().write_all(response.as_bytes()).await?;
        reader.get_mut().flush().await?;
    }
}

/// Start a JSON-RPC node. The handler maps `(method, params)` to a result or
/// an error message.
#[allow(dead_code)]
pub async fn start_rpc_node<F>(handler: F) -> String
where
    F: Fn(&str, &Value) -> Result<Value, String> + Send + Sync + 'static,
{
    let addr = start_mock_server(move |request| {
        let call = request.json();
        let id = call.get("id").cloned().unwrap_or(Value::Null);
        let method = call.get("method").and_then(Value::as_str).unwrap_or_default();
        let params = call.get("params").cloned().unwrap_or(Value::Null);

        let reply = match handler(method, &params) {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(message) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32000, "message": message }
            }),
        };
        (200, reply.to_string())
    })
    .await;

    format!("http://{}", addr)
}

/// Default answers of a healthy opBNB-like node.
#[allow(dead_code)]
pub fn default_rpc_answer(method: &str) -> Result<Value, String> {
    match method {
        "eth_blockNumber" => Ok(json!("0x10")),
        "eth_chainId" => Ok(json!("0xcc")),
        "eth_gasPrice" => Ok(json!("0x3b9aca00")),
        "eth_getTransactionCount" => Ok(json!("0x5")),
        "eth_getBalance" => Ok(json!("0x0")),
        "eth_sendRawTransaction" => Ok(json!(format!("0x{}", "ab".repeat(32)))),
        other => Err(format!("method {} not supported", other)),
    }
}
