use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

use crate::config::Config;
use crate::error::RelayError;
use crate::models::dispatch::{RemoteResponse, WorkflowDispatch};
use crate::utils::logging;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const RELAY_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transporte de saída: uma única chamada de workflow dispatch, sem retry.
#[async_trait]
pub trait WorkflowDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        token: &str,
        payload: &WorkflowDispatch,
    ) -> Result<RemoteResponse, RelayError>;
}

pub struct GithubClient {
    http: Client,
    url: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(RELAY_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            url: config.dispatch_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WorkflowDispatcher for GithubClient {
    async fn dispatch(
        &self,
        token: &str,
        payload: &WorkflowDispatch,
    ) -> Result<RemoteResponse, RelayError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, RELAY_USER_AGENT)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = body_or_read_error(status, response.text().await);

        Ok(RemoteResponse { status, body })
    }
}

/// O corpo só serve de diagnóstico; se a leitura falhar, o erro vai para o log e ocupa o lugar dele.
fn body_or_read_error<E: std::fmt::Display>(status: u16, read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            logging::log_relay_corpo_ilegivel(status, &e.to_string());
            format!("<corpo ilegível: {e}>")
        }
    }
}
