use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use homepage_editor_api::{create_api_routes, create_legacy_routes, AppState};
use homepage_editor_application::services::DocumentSession;
use homepage_editor_infrastructure::repositories::YamlDocumentStore;
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const SETTINGS: &str = r#"- dev:
    - Gitea:
        href: http://gitea.local
        ping: http://gitea.local/healthz
        icon: gitea.png
        description: Source hosting
- Media: []
"#;

pub struct TestApp {
    pub router: Router,
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn read_file(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }
}

fn state_for(path: &Path) -> AppState {
    let store = Arc::new(YamlDocumentStore::new(path));
    AppState::from_session(Arc::new(DocumentSession::new(store)))
}

pub fn create_test_app(initial: Option<&str>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    if let Some(contents) = initial {
        std::fs::write(&path, contents).unwrap();
    }

    let state = state_for(&path);
    let router = Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .merge(create_legacy_routes(state));

    TestApp {
        router,
        path,
        _dir: dir,
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
