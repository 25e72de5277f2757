#![allow(dead_code)]

use axum::{
    extract::Path,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use restful::api::RestClient;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// JSONPlaceholder-shaped posts: keys `userId`, `id`, `title`, `body`.
pub fn sample_posts(count: u32) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| {
                json!({
                    "userId": (id - 1) / 10 + 1,
                    "id": id,
                    "title": format!("title {}", id),
                    "body": format!("body of post {}", id),
                })
            })
            .collect(),
    )
}

pub fn app() -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/echo", any(echo))
        .route("/text", get(|| async { "plain text, not json" }))
        .route("/boom", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
}

/// Start the mock API on a random local port and return its base URL.
pub async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Client that talks to the mock server directly, ignoring any proxy
/// settings in the environment.
pub fn client(base_url: &str) -> RestClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    RestClient::with_client(base_url, http)
}

async fn list_posts() -> String {
    sample_posts(100).to_string()
}

async fn get_post(Path(id): Path<u32>) -> (StatusCode, String) {
    if id == 1 {
        (StatusCode::OK, r#"{"id":1,"title":"foo"}"#.to_string())
    } else {
        (StatusCode::NOT_FOUND, "{}".to_string())
    }
}

async fn create_post(body: String) -> Result<(StatusCode, String), StatusCode> {
    let input: Map<String, Value> =
        serde_json::from_str(&body).map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut created = Map::new();
    created.insert("id".to_string(), json!(101));
    created.extend(input);

    Ok((StatusCode::CREATED, Value::Object(created).to_string()))
}

/// Reflect the request back so tests can inspect what was sent.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "content_type": headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}
