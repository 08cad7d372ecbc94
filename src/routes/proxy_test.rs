use std::time::Duration;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method};
use axum::routing::{any, get};
use futures::stream;
use tokio::net::TcpListener;

use super::*;
use crate::routes::api_routes;
use crate::state::ForwardTimeouts;

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_joins_base_path_and_query() {
    assert_eq!(
        upstream_url("http://api.internal:8000", "/api/projects?page=2"),
        "http://api.internal:8000/api/projects?page=2"
    );
    assert_eq!(upstream_url("http://api.internal/", "/auth/login"), "http://api.internal/auth/login");
}

#[test]
fn hop_by_hop_headers_are_recognised() {
    for name in ["connection", "keep-alive", "transfer-encoding", "upgrade", "te"] {
        assert!(is_hop_by_hop(&HeaderName::from_static(name)), "{name}");
    }
    assert!(!is_hop_by_hop(&header::COOKIE));
    assert!(!is_hop_by_hop(&header::CONTENT_TYPE));
}

#[test]
fn end_to_end_headers_drop_host_and_connection_listed_names() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, X-Trace-Hop"));
    headers.insert("x-trace-hop", HeaderValue::from_static("1"));
    headers.insert(header::COOKIE, HeaderValue::from_static("access_token=abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("multipart/form-data; boundary=xyz"));

    let out = end_to_end_headers(&headers, true);
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert!(out.get("x-trace-hop").is_none());
    assert_eq!(out.get(header::COOKIE).unwrap(), "access_token=abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "multipart/form-data; boundary=xyz");
}

#[test]
fn end_to_end_headers_keep_every_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("access_token=a; HttpOnly"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("refresh_token=r; HttpOnly"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));

    let out = end_to_end_headers(&headers, false);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
    assert!(out.get(header::TRANSFER_ENCODING).is_none());
}

#[test]
fn multipart_requests_are_uploads() {
    let mut headers = HeaderMap::new();
    assert!(!is_upload(&headers));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    assert!(!is_upload(&headers));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("Multipart/Form-Data; boundary=xyz"));
    assert!(is_upload(&headers));
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
}

// =============================================================================
// End-to-end through a throwaway upstream
// =============================================================================

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn upstream_router() -> Router {
    Router::new()
        .route(
            "/auth/login",
            any(|request: Request| async move {
                let method = request.method().to_string();
                let query = request.uri().query().unwrap_or_default().to_owned();
                let cookie = request
                    .headers()
                    .get(header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                let body = axum::body::to_bytes(request.into_body(), usize::MAX)
                    .await
                    .expect("body should read");
                let echo = serde_json::json!({
                    "method": method,
                    "query": query,
                    "cookie": cookie,
                    "body": String::from_utf8_lossy(&body),
                });
                let mut response = Json(echo).into_response();
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, HeaderValue::from_static("access_token=a; Path=/; HttpOnly"));
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, HeaderValue::from_static("refresh_token=r; Path=/; HttpOnly"));
                response
            }),
        )
        .route(
            "/api/projects",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "expired" }))) }).post(
                |request: Request| async move {
                    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
                        .await
                        .expect("body should read");
                    (StatusCode::CREATED, Json(serde_json::json!({ "project_id": 1, "bytes": body.len() })))
                },
            ),
        )
        .route("/auth/redirect", get(|| async { axum::response::Redirect::temporary("/elsewhere") }))
        .route(
            "/api/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        )
}

async fn proxy_in_front_of(backend_url: &str, request: Duration) -> String {
    proxy_with_timeouts(backend_url, ForwardTimeouts { request, upload: Duration::from_secs(10) }).await
}

async fn proxy_with_timeouts(backend_url: &str, timeouts: ForwardTimeouts) -> String {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client should build");
    serve(api_routes(AppState::from_parts(http, backend_url, timeouts))).await
}

/// A request body that arrives in `chunks` pieces, `gap` apart.
fn trickled_body(chunks: usize, gap: Duration) -> reqwest::Body {
    let parts = stream::unfold(0, move |sent| async move {
        if sent == chunks {
            return None;
        }
        tokio::time::sleep(gap).await;
        let chunk = format!("--xyz\r\npart {sent}\r\n");
        Some((Ok::<_, std::io::Error>(chunk), sent + 1))
    });
    reqwest::Body::wrap_stream(parts)
}

fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn forwards_method_query_body_and_cookies() {
    let upstream = serve(upstream_router()).await;
    let proxy = proxy_in_front_of(&upstream, Duration::from_secs(5)).await;

    let response = browser()
        .request(Method::POST, format!("{proxy}/auth/login?next=dashboard"))
        .header(header::COOKIE, "refresh_token=old")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"username":"alice","password":"secret1"}"#)
        .send()
        .await
        .expect("proxy should answer");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 2);
    let echo: serde_json::Value = response.json().await.expect("json echo");
    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["query"], "next=dashboard");
    assert_eq!(echo["cookie"], "refresh_token=old");
    assert_eq!(echo["body"], r#"{"username":"alice","password":"secret1"}"#);
}

#[tokio::test]
async fn upstream_rejections_pass_through_unchanged() {
    let upstream = serve(upstream_router()).await;
    let proxy = proxy_in_front_of(&upstream, Duration::from_secs(5)).await;

    let response = browser().get(format!("{proxy}/api/projects")).send().await.expect("proxy should answer");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "expired");
}

#[tokio::test]
async fn redirects_are_returned_not_followed() {
    let upstream = serve(upstream_router()).await;
    let proxy = proxy_in_front_of(&upstream, Duration::from_secs(5)).await;

    let response = browser().get(format!("{proxy}/auth/redirect")).send().await.expect("proxy should answer");
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/elsewhere");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_json() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let dead = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);
    let proxy = proxy_in_front_of(&dead, Duration::from_secs(5)).await;

    let response = browser().get(format!("{proxy}/api/projects")).send().await.expect("proxy should answer");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let upstream = serve(upstream_router()).await;
    let proxy = proxy_in_front_of(&upstream, Duration::from_millis(200)).await;

    let response = browser().get(format!("{proxy}/api/slow")).send().await.expect("proxy should answer");
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn slow_multipart_upload_outlasts_request_timeout() {
    let upstream = serve(upstream_router()).await;
    let timeouts = ForwardTimeouts { request: Duration::from_millis(500), upload: Duration::from_secs(10) };
    let proxy = proxy_with_timeouts(&upstream, timeouts).await;

    let response = browser()
        .post(format!("{proxy}/api/projects"))
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=xyz")
        .body(trickled_body(4, Duration::from_millis(300)))
        .send()
        .await
        .expect("proxy should answer");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["project_id"], 1);
}

#[tokio::test]
async fn healthz_answers_ok() {
    let proxy = proxy_in_front_of("http://127.0.0.1:9", Duration::from_secs(1)).await;
    let response = browser().get(format!("{proxy}/healthz")).send().await.expect("proxy should answer");
    assert_eq!(response.status(), StatusCode::OK);
}
