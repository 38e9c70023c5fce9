//! Shared test utilities for the covbadge workspace.
//!
//! This crate exists because the fetch, app, and cli crates all need the
//! same loopback badge-service stub in their tests; a `#[cfg(test)]` module
//! inside any one of them would not be visible to the others.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::JoinHandle;

/// A one-shot HTTP stub standing in for the badge service.
///
/// Binds an ephemeral loopback port, answers exactly one request with a
/// canned response, and records the request target so tests can assert the
/// exact URL that was fetched.
pub struct StubBadgeServer {
    addr: SocketAddr,
    handle: Option<JoinHandle<String>>,
}

impl StubBadgeServer {
    /// Start a stub that answers one request with the given status and body.
    ///
    /// `reason` should be the canonical reason phrase for `status` so that
    /// assertions against client-side error text line up.
    pub fn serve(status: u16, reason: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener local addr");

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let target = read_request_target(&mut stream);
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            target
        });

        Self {
            addr,
            handle: Some(handle),
        }
    }

    /// Base URL to pass as the badge host.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait for the request and return its target (path plus query string).
    pub fn into_request_target(mut self) -> String {
        self.handle
            .take()
            .expect("server already consumed")
            .join()
            .expect("stub server thread")
    }
}

fn read_request_target(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut byte = [0u8; 1];
    // Headers only; badge requests never carry a body.
    while !buf.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) => buf.push(byte[0]),
        }
    }
    let text = String::from_utf8_lossy(&buf);
    text.lines()
        .next()
        .and_then(|request_line| request_line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_answers_one_request_and_records_the_target() {
        let server = StubBadgeServer::serve(200, "OK", "hello");
        let url = format!("{}/badge/demo.svg?style=flat", server.base_url());

        let mut stream = TcpStream::connect(
            url.trim_start_matches("http://")
                .split('/')
                .next()
                .expect("authority"),
        )
        .expect("connect");
        stream
            .write_all(b"GET /badge/demo.svg?style=flat HTTP/1.1\r\nHost: stub\r\n\r\n")
            .expect("write request");

        let mut response = String::new();
        stream.read_to_string(&mut response).expect("read response");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("hello"));

        assert_eq!(server.into_request_target(), "/badge/demo.svg?style=flat");
    }
}
