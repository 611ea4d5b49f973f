use std::time::Duration;

use adapters::price::{CoinGeckoClient, PriceFeed, PriceFeedError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one canned HTTP response and hand back the raw request head.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());

        let resp = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.expect("write response");
        let _ = sock.shutdown().await;
    });

    (format!("http://{addr}/api/v3"), rx)
}

fn client(url: String, api_key: Option<&str>) -> CoinGeckoClient {
    CoinGeckoClient::new(url, api_key.map(str::to_string), Duration::from_secs(5))
        .expect("build client")
}

#[tokio::test]
async fn returns_price_of_matching_asset() {
    let (url, req) = serve_once(
        "200 OK",
        r#"[{"id":"liquidus-2","symbol":"liq","current_price":2.5}]"#,
    )
    .await;

    let price = client(url, None).usd_price("liquidus-2").await.unwrap();
    assert_eq!(price, Some(2.5));

    let head = req.await.unwrap();
    assert!(
        head.starts_with("GET /api/v3/coins/markets?vs_currency=usd&ids=liquidus-2 "),
        "unexpected request line: {head}"
    );
}

#[tokio::test]
async fn empty_result_set_is_not_an_error() {
    let (url, _req) = serve_once("200 OK", "[]").await;

    let price = client(url, None).usd_price("liquidus-2").await.unwrap();
    assert_eq!(price, None);
}

#[tokio::test]
async fn sends_api_key_when_configured() {
    let (url, req) = serve_once("200 OK", "[]").await;

    client(url, Some("k123")).usd_price("liquidus-2").await.unwrap();

    let head = req.await.unwrap().to_lowercase();
    assert!(head.contains("x-cg-demo-api-key: k123"));
}

#[tokio::test]
async fn server_error_is_a_read_failure() {
    let (url, _req) = serve_once("500 Internal Server Error", "{}").await;

    let err = client(url, None).usd_price("liquidus-2").await.unwrap_err();
    assert!(matches!(err, PriceFeedError::Http(_)));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let (url, _req) = serve_once("200 OK", r#"{"error":"rate limited"}"#).await;

    let err = client(url, None).usd_price("liquidus-2").await.unwrap_err();
    assert!(matches!(err, PriceFeedError::InvalidResponse(_)));
}
