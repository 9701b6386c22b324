use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use gitlab_cli::{ClientConfig, Error, GitlabService, HttpTransport, Transport};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "glpat-test-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn projects(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "401 Unauthorized" })));
    }
    let body = json!([{
        "id": 12,
        "name": "Shop",
        "path": "shop",
        "path_with_namespace": "acme/shop",
        "web_url": "https://gitlab.example.com/acme/shop",
        "echo_per_page": params.get("per_page"),
        "echo_search": params.get("search")
    }]);
    (StatusCode::OK, Json(body))
}

async fn issue_update(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let labels: Vec<String> = params.get("add_labels").cloned().into_iter().collect();
    Json(json!({ "id": 901, "iid": 17, "state": "opened", "labels": labels }))
}

async fn broken() -> &'static str {
    "<html>not json</html>"
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/v4/projects", get(projects))
        .route("/api/v4/projects/12/issues/17", put(issue_update))
        .route("/api/v4/projects/12/labels", get(broken));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn get_sends_bearer_token_under_api_root() {
    let base = spawn_server().await;
    let transport = HttpTransport::new(&ClientConfig::new(&base, TOKEN)).unwrap();

    let body = transport
        .get("/projects?per_page=7&search=shop%20api")
        .await
        .unwrap();
    assert_eq!(body[0]["path"], "shop");
    assert_eq!(body[0]["echo_per_page"], "7");
    assert_eq!(body[0]["echo_search"], "shop api");
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let base = spawn_server().await;
    let transport = HttpTransport::new(&ClientConfig::new(&base, "wrong-token")).unwrap();

    match transport.get("/projects?per_page=100").await {
        Err(Error::Transport { status, path }) => {
            assert_eq!(status, 401);
            assert_eq!(path, "/projects?per_page=100");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_route_reports_status_and_path() {
    let base = spawn_server().await;
    let transport = HttpTransport::new(&ClientConfig::new(&base, TOKEN)).unwrap();

    let err = transport.get("/projects/99/milestones").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = spawn_server().await;
    let transport = HttpTransport::new(&ClientConfig::new(&base, TOKEN)).unwrap();

    let err = transport.get("/projects/12/labels").await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn put_reaches_the_server() {
    let base = spawn_server().await;
    let transport = HttpTransport::new(&ClientConfig::new(&base, TOKEN)).unwrap();

    let body = transport
        .put("/projects/12/issues/17?add_labels=review")
        .await
        .unwrap();
    assert_eq!(body["labels"], json!(["review"]));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(&ClientConfig::new(format!("http://{addr}"), TOKEN)).unwrap();
    let err = transport.get("/projects").await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn service_resolves_project_over_http() {
    let base = spawn_server().await;
    let config = ClientConfig::new(&base, TOKEN).with_page_size(50);
    let transport = HttpTransport::new(&config).unwrap();
    let service = GitlabService::with_config(transport, &config);

    let project = service.project_by_path("shop").await.unwrap();
    assert_eq!(project.id(), 12);
    assert_eq!(project.raw().path_with_namespace, "acme/shop");
}
