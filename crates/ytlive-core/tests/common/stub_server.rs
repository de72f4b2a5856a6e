//! Minimal HTTP/1.1 server that answers every request with one canned response.
//!
//! Records each request line so tests can assert on the query string.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
    /// Sleep before answering (simulates a slow upstream).
    pub delay: Option<Duration>,
    /// Extra header lines, e.g. "Location: /videos".
    pub headers: Vec<String>,
}

impl StubResponse {
    pub fn new(status: u16, reason: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
            delay: None,
            headers: Vec::new(),
        }
    }
}

pub struct StubServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(response: StubResponse) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = response.clone();
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &response, &seen));
        }
    });
    StubServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A base URL whose port has nothing listening (connection refused).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, response: &StubResponse, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        if let Some(line) = request.lines().next() {
            seen.lock().unwrap().push(line.to_string());
        }
    }
    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }
    let extra: String = response
        .headers
        .iter()
        .map(|h| format!("{}\r\n", h))
        .collect();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len(),
        extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
    let _ = stream.flush();
}
