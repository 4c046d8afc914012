//! A one-shot HTTP/1.1 responder on a loopback socket.
//!
//! Accepts a single connection, captures the request, answers with a fixed
//! status and body, then closes the connection.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen on the wire.
#[derive(Debug)]
pub struct CapturedRequest {
  pub method: String,
  pub path: String,
  /// Header names are lowercased.
  pub headers: Vec<(String, String)>,
  pub body: String,
}

impl CapturedRequest {
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key == &name.to_ascii_lowercase())
      .map(|(_, value)| value.as_str())
  }
}

/// Start a responder. Returns its base URL and a handle resolving to the
/// captured request.
pub async fn serve_once(status: &'static str, reply: &'static str) -> (String, JoinHandle<CapturedRequest>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let base_url = format!("http://{}", listener.local_addr().unwrap());

  let handle = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "connection closed before the request head was complete");
      buf.extend_from_slice(&chunk[..n]);
      if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
        break pos + 4;
      }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
      .filter_map(|line| line.split_once(':'))
      .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_string()))
      .collect();
    let content_length = headers
      .iter()
      .find(|(key, _)| key == "content-length")
      .and_then(|(_, value)| value.parse::<usize>().ok())
      .unwrap_or(0);

    while buf.len() < header_end + content_length {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "connection closed before the request body was complete");
      buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned();

    let response = format!(
      "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
      reply.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    let _ = socket.shutdown().await;

    CapturedRequest {
      method,
      path,
      headers,
      body,
    }
  });

  (base_url, handle)
}
