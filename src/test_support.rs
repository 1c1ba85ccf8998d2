use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<String>,
    pub body: String,
}

/// Tiny HTTP server answering one connection per canned response, in order.
pub struct FakeServer {
    base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl FakeServer {
    pub fn start(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
        let addr = listener.local_addr().unwrap();
        listener.set_nonblocking(true).unwrap();
        let handle = thread::spawn(move || {
            let mut recorded = Vec::new();
            let deadline = Instant::now() + Duration::from_secs(10);
            for (status, body) in responses {
                let stream = loop {
                    match listener.accept() {
                        Ok((s, _)) => break Some(s),
                        Err(_) if Instant::now() < deadline => {
                            thread::sleep(Duration::from_millis(5))
                        }
                        Err(_) => break None,
                    }
                };
                let Some(stream) = stream else { break };
                stream.set_nonblocking(false).unwrap();
                recorded.push(serve_one(stream, status, &body));
            }
            recorded
        });
        Self {
            base_url: format!("http://{}:{}", addr.ip(), addr.port()),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("server thread")
    }
}

fn serve_one(stream: TcpStream, status: &str, body: &str) -> RecordedRequest {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    let _ = reader.read_line(&mut request_line);
    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        headers.push(line);
    }
    let mut buf = vec![0u8; content_length];
    let _ = reader.read_exact(&mut buf);

    let mut stream = reader.into_inner();
    let resp = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();

    RecordedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8_lossy(&buf).into_owned(),
    }
}
