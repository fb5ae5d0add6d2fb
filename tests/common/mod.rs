use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use delete_backup_relay::app::{self, AppState};
use delete_backup_relay::config::Config;
use delete_backup_relay::github::GithubClient;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeGithub {
    status: StatusCode,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// API do GitHub falsa: guarda cada dispatch recebido e responde com `status`.
pub struct FakeGithubHandle {
    pub url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl FakeGithubHandle {
    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn fake_dispatch(
    State(fake): State<FakeGithub>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    fake.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        authorization: header("authorization"),
        accept: header("accept"),
        user_agent: header("user-agent"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if !fake.delay.is_zero() {
        tokio::time::sleep(fake.delay).await;
    }

    let body = if fake.status == StatusCode::NO_CONTENT {
        String::new()
    } else {
        r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#.to_string()
    };
    (fake.status, body)
}

pub async fn start_fake_github(status: StatusCode, delay: Duration) -> FakeGithubHandle {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeGithub {
        status,
        delay,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route(
            "/repos/:owner/:repo/actions/workflows/:workflow/dispatches",
            post(fake_dispatch),
        )
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGithubHandle {
        url: format!("http://{addr}"),
        captured,
    }
}

/// Endereço onde nada escuta.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config(api_url: &str, token: Option<&str>) -> Config {
    Config {
        github_token: token.map(String::from),
        github_api_url: api_url.to_string(),
        repo_owner: "acme".into(),
        repo_name: "velero-dashboard".into(),
        workflow_id: "delete-backup.yml".into(),
        ..Config::default()
    }
}

/// Sobe o relay numa porta livre e devolve a URL do endpoint.
pub async fn start_relay(config: Config) -> String {
    let client = GithubClient::new(&config).unwrap();
    let state = AppState::new(config, Arc::new(client));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Err(err) = app::serve(listener, state).await {
            panic!("server error: {}", err);
        }
    });

    format!("http://{addr}{}", app::DELETE_BACKUP_ROUTE)
}

pub async fn post_json(url: &str, body: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/json");
    (status, response.json().await.unwrap())
}
