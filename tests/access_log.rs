mod common;

use axum::http::StatusCode;
use common::{app, send_request};
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn every_request_is_logged_at_info() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    // the body is rejected before any upstream call, so the URL is never used
    let response = app("http://127.0.0.1:9/generate".to_string())
        .oneshot(send_request("not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("started processing request"), "{output}");
    assert!(output.contains("finished processing request"), "{output}");
    assert!(output.contains("status=400"), "{output}");
}
