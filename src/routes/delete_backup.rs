use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::RelayError;
use crate::models::delete::{DeleteRequest, ValidDelete};
use crate::models::dispatch::WorkflowDispatch;
use crate::models::result::DispatchResult;
use crate::utils::logging;

/// POST /api/delete_backup_function
///
/// Todo erro termina aqui, convertido em JSON pelo `IntoResponse` de [`RelayError`].
pub async fn delete_backup(State(state): State<AppState>, body: Bytes) -> Response {
    let id = Uuid::new_v4();
    logging::log_relay_requisicao(&id);

    match trigger_delete(&state, &id, &body).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            if matches!(e, RelayError::InvalidBody(_) | RelayError::Transport(_)) {
                logging::log_relay_erro(&id, &e.to_string());
            }
            e.into_response()
        }
    }
}

async fn trigger_delete(
    state: &AppState,
    id: &Uuid,
    body: &[u8],
) -> Result<DispatchResult, RelayError> {
    let delete = parse_delete(body).map_err(|e| {
        if e == RelayError::MissingFields {
            logging::log_relay_pedido_invalido(id);
        }
        e
    })?;

    let token = match state.config.token() {
        Some(token) => token.to_string(),
        None => {
            logging::log_relay_token_ausente(id);
            return Err(RelayError::TokenNotConfigured);
        }
    };

    logging::log_relay_disparo(id, &delete.backup_name, &delete.environment);
    let payload = WorkflowDispatch::new(&state.config.git_ref, delete.clone());

    // A chamada roda numa task própria: se o cliente desconectar, ela segue até o fim ou o timeout.
    let dispatcher = state.dispatcher.clone();
    let remote = tokio::spawn(async move { dispatcher.dispatch(&token, &payload).await })
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))??;

    if !remote.accepted() {
        logging::log_relay_recusado(id, remote.status, &remote.body);
        return Err(RelayError::Remote { status: remote.status });
    }

    logging::log_relay_aceito(id, &delete.backup_name, &delete.environment);
    Ok(DispatchResult::success(format!(
        "Delete workflow triggered for {} in {}",
        delete.backup_name, delete.environment
    )))
}

// Só objetos JSON: o derive do serde aceitaria também um array na ordem dos campos.
fn parse_delete(body: &[u8]) -> Result<ValidDelete, RelayError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(RelayError::InvalidBody(format!(
            "Request body must be a JSON object, got {}",
            json_kind(&value)
        )));
    }
    let request: DeleteRequest = serde_json::from_value(value)?;
    request.validate().ok_or(RelayError::MissingFields)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
