//! Tests for feed module.

use super::http::endpoint_url;
use super::*;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn row(diagram: &str) -> serde_json::Value {
    serde_json::json!({
        "crypto_exchange": {"name": "Bybit"},
        "input_bank": {"name": "Tinkoff"},
        "output_bank": {"name": "Tinkoff"},
        "input_crypto_exchange": {
            "asset": "USDT", "fiat": "RUB", "price": "74.1", "payment_channel": "P2P"
        },
        "output_crypto_exchange": {
            "asset": "USDT", "fiat": "RUB", "price": "75.0", "payment_channel": "P2P"
        },
        "marginality_percentage": "1.2",
        "diagram": diagram,
        "dynamics": null,
        "new": true,
        "update": {"updated": "2023-03-01T12:00:00Z"}
    })
}

fn page_json(rows: usize) -> String {
    let data: Vec<_> = (0..rows).map(|i| row(&format!("route-{i}"))).collect();
    serde_json::json!({
        "draw": "1",
        "recordsTotal": rows,
        "recordsFiltered": rows,
        "data": data
    })
    .to_string()
}

// ==================== PageRequest tests ====================

#[test]
fn test_page_request_query_pairs() {
    let request = PageRequest::new(3, 20, 10);

    assert_eq!(
        request.query_pairs(),
        vec![
            ("draw", "3".to_string()),
            ("start", "20".to_string()),
            ("length", "10".to_string()),
        ]
    );
}

#[test]
fn test_page_request_with_order() {
    let request = PageRequest::new(1, 0, 25).with_order(Some(PageOrder {
        column: OrderColumn::Marginality,
        dir: OrderDirection::Desc,
    }));

    let pairs = request.query_pairs();
    assert!(pairs.contains(&("order[0][column]", "1".to_string())));
    assert!(pairs.contains(&("order[0][dir]", "desc".to_string())));
}

#[test]
fn test_page_request_unsupported_length_falls_back() {
    assert_eq!(PageRequest::new(1, 0, 30).length, 10);
    assert_eq!(PageRequest::new(1, 0, 100).length, 100);
}

// ==================== Endpoint URL tests ====================

#[test]
fn test_endpoint_url_without_filter() {
    assert_eq!(endpoint_url("https://host/api/", None), "https://host/api/");
    assert_eq!(endpoint_url("https://host/api/", Some("  ")), "https://host/api/");
}

#[test]
fn test_endpoint_url_appends_filter() {
    assert_eq!(
        endpoint_url("https://host/api/", Some("?gte=1&crypto_exchange=Binance")),
        "https://host/api/?gte=1&crypto_exchange=Binance"
    );
    assert_eq!(
        endpoint_url("https://host/api/?format=json", Some("gte=1")),
        "https://host/api/?format=json&gte=1"
    );
}

// ==================== BundlePage tests ====================

#[test]
fn test_page_parses_envelope_and_rows() {
    let page: BundlePage = serde_json::from_str(&page_json(2)).unwrap();

    assert_eq!(page.draw.as_deref(), Some("1"));
    assert_eq!(page.records_total, 2);
    let routes: Vec<_> = page.routes().collect::<std::result::Result<_, _>>().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[1].diagram(), "route-1");
}

#[test]
fn test_page_keeps_malformed_row_separate() {
    let mut page: BundlePage = serde_json::from_str(&page_json(2)).unwrap();
    page.data.push(serde_json::json!({"diagram": "broken"}));

    let results: Vec<_> = page.routes().collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[2].is_err());
}

#[test]
fn test_page_slice() {
    let page: BundlePage = serde_json::from_str(&page_json(12)).unwrap();

    let sliced = page.clone().slice(&PageRequest::new(7, 10, 10));
    assert_eq!(sliced.data.len(), 2);
    assert_eq!(sliced.draw.as_deref(), Some("7"));

    let beyond = page.slice(&PageRequest::new(8, 50, 10));
    assert!(beyond.data.is_empty());
}

// ==================== Source tests ====================

#[tokio::test]
async fn test_file_source_serves_requested_page() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(page_json(15).as_bytes()).unwrap();

    let source = FileSource::new(file.path());
    let page = source.fetch(&PageRequest::new(2, 10, 10)).await.unwrap();

    assert_eq!(source.name(), "file");
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.records_total, 15);
    let first = page.routes().next().unwrap().unwrap();
    assert_eq!(first.diagram(), "route-10");
}

#[tokio::test]
async fn test_file_source_missing_file() {
    let source = FileSource::new("/nonexistent/bundles.json");
    let result = source.fetch(&PageRequest::new(1, 0, 10)).await;

    assert!(matches!(result, Err(FeedError::Io(_))));
}

#[test]
fn test_http_source_builds_url_from_config() {
    let config = crate::config::FeedConfig {
        url: "https://example.com/api/bundles/".to_string(),
        filter: Some("?lte=5".to_string()),
        ..Default::default()
    };

    let source = HttpSource::new(&config).unwrap();
    assert_eq!(source.url(), "https://example.com/api/bundles/?lte=5");
    assert_eq!(source.name(), "http");
}

/// Serves one HTTP response on a local port; the handle yields the request line.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}/api/bundles/"), handle)
}

fn http_source(url: String) -> HttpSource {
    let config = crate::config::FeedConfig {
        url,
        filter: Some("?gte=1".to_string()),
        ..Default::default()
    };
    HttpSource::new(&config).unwrap()
}

#[tokio::test]
async fn test_http_source_fetches_page() {
    let (url, server) = serve_once("200 OK", page_json(2)).await;
    let source = http_source(url);
    let request = PageRequest::new(4, 10, 25).with_order(Some(PageOrder {
        column: OrderColumn::Marginality,
        dir: OrderDirection::Desc,
    }));

    let page = source.fetch(&request).await.unwrap();
    let request_line = server.await.unwrap();

    assert_eq!(page.records_filtered, 2);
    let routes: Vec<_> = page.routes().collect::<std::result::Result<_, _>>().unwrap();
    assert_eq!(routes[0].diagram(), "route-0");

    assert!(request_line.starts_with("GET /api/bundles/?gte=1&draw=4&start=10&length=25&"));
    assert!(request_line.contains("order%5B0%5D%5Bcolumn%5D=1"));
    assert!(request_line.contains("order%5B0%5D%5Bdir%5D=desc"));
}

#[tokio::test]
async fn test_http_source_error_status_truncates_body() {
    let (url, server) = serve_once("500 Internal Server Error", "x".repeat(600)).await;
    let source = http_source(url);

    let result = source.fetch(&PageRequest::new(1, 0, 10)).await;
    server.await.unwrap();

    match result {
        Err(FeedError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), 512);
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}
