use serde::{Deserialize, Serialize};

use crate::models::delete::ValidDelete;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInputs {
    pub environment: String,
    pub backup_name: String,
}

/// Corpo enviado ao endpoint de workflow dispatch do GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDispatch {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub inputs: WorkflowInputs,
}

impl WorkflowDispatch {
    pub fn new(git_ref: &str, delete: ValidDelete) -> Self {
        Self {
            git_ref: git_ref.to_string(),
            inputs: WorkflowInputs {
                environment: delete.environment,
                backup_name: delete.backup_name,
            },
        }
    }
}

/// Resposta crua da API remota; o corpo só vai para o log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn accepted(&self) -> bool {
        self.status == 204
    }
}
