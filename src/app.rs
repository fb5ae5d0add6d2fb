use axum::{routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::github::WorkflowDispatcher;
use crate::routes::delete_backup::delete_backup;

pub const DELETE_BACKUP_ROUTE: &str = "/api/delete_backup_function";

/// Estado compartilhado entre requisições; nada aqui é mutável.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<dyn WorkflowDispatcher>,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Arc<dyn WorkflowDispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(DELETE_BACKUP_ROUTE, post(delete_backup))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, build_app(state)).await
}
