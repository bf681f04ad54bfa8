//! Dashboard connectors

use std::time::Duration;

use monetization_core::{Dashboard, Mapping, MonetizationError, MonetizationResult};
use serde_json::{json, Value};

/// Records snapshots and issues as tracing events
#[derive(Debug, Clone, Default)]
pub struct LogDashboard;

impl Dashboard for LogDashboard {
    fn update(&self, data: &Mapping) -> MonetizationResult<()> {
        let snapshot = Value::Object(data.clone());
        tracing::info!(snapshot = %snapshot, "Dashboard updated");
        Ok(())
    }

    fn report_issue(&self, issue: &str) -> MonetizationResult<()> {
        tracing::warn!(issue = %issue, "Dashboard issue reported");
        Ok(())
    }
}

/// Pushes snapshots and issues to a dashboard service over HTTP
pub struct HttpDashboard {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpDashboard {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post(&self, path: &str, body: &Value) -> MonetizationResult<()> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| MonetizationError::Dashboard(format!("HTTP request failed: {}", e)))?;

        tracing::debug!(url = %url, status = response.status(), "Dashboard accepted payload");
        Ok(())
    }
}

impl Dashboard for HttpDashboard {
    fn update(&self, data: &Mapping) -> MonetizationResult<()> {
        self.post("update", &Value::Object(data.clone()))
    }

    fn report_issue(&self, issue: &str) -> MonetizationResult<()> {
        self.post("issues", &json!({ "issue": issue }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Accept one HTTP request on a local port, answer 200 and hand back
    /// the request line and the JSON body.
    fn serve_once() -> (String, mpsc::Receiver<(String, Value)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let header_end = loop {
                let n = stream.read(&mut chunk).unwrap();
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos;
                }
                if n == 0 {
                    panic!("connection closed before headers were complete");
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);

            let body_start = header_end + 4;
            while buf.len() < body_start + content_length {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();

            let request_line = head.lines().next().unwrap_or_default().to_string();
            let body = serde_json::from_slice(&buf[body_start..body_start + content_length])
                .unwrap_or(Value::Null);
            tx.send((request_line, body)).unwrap();
        });

        (base_url, rx)
    }

    #[test]
    fn test_http_dashboard_posts_snapshot_to_update() {
        let (base_url, rx) = serve_once();
        let dashboard = HttpDashboard::new(&format!("{}/", base_url), 5);

        let mut snapshot = Mapping::new();
        snapshot.insert("trend".to_string(), json!("UP"));
        snapshot.insert("strength".to_string(), json!(0.85));
        dashboard.update(&snapshot).unwrap();

        let (request_line, body) = rx.recv().unwrap();
        assert!(request_line.starts_with("POST /update "));
        assert_eq!(body, Value::Object(snapshot));
    }

    #[test]
    fn test_http_dashboard_posts_issue_body() {
        let (base_url, rx) = serve_once();
        let dashboard = HttpDashboard::new(&base_url, 5);

        dashboard
            .report_issue("Ethical guideline violation detected.")
            .unwrap();

        let (request_line, body) = rx.recv().unwrap();
        assert!(request_line.starts_with("POST /issues "));
        assert_eq!(
            body,
            json!({ "issue": "Ethical guideline violation detected." })
        );
    }

    #[test]
    fn test_log_dashboard_accepts_everything() {
        let dashboard = LogDashboard;
        let mut snapshot = Mapping::new();
        snapshot.insert("trend".to_string(), json!("UP"));

        assert!(dashboard.update(&snapshot).is_ok());
        assert!(dashboard.report_issue("Ethical guideline violation detected.").is_ok());
    }

    #[test]
    fn test_http_dashboard_trims_trailing_slash() {
        let dashboard = HttpDashboard::new("http://localhost:8080/", 1);
        assert_eq!(dashboard.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_http_dashboard_unreachable_is_dashboard_error() {
        // Port 9 (discard) is closed on any sane test host
        let dashboard = HttpDashboard::new("http://127.0.0.1:9", 1);

        assert!(matches!(
            dashboard.report_issue("unreachable"),
            Err(MonetizationError::Dashboard(_))
        ));
    }
}
