use serde::{Deserialize, Serialize};

/// Corpo recebido pelo relay. Os campos são opcionais aqui para que a ausência
/// vire um 400 nosso, e não uma rejeição do extrator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeleteRequest {
    pub environment: Option<String>,
    pub backup_name: Option<String>,
}

/// Pedido já validado: os dois campos presentes e não vazios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDelete {
    pub environment: String,
    pub backup_name: String,
}

impl DeleteRequest {
    pub fn validate(self) -> Option<ValidDelete> {
        match (self.environment, self.backup_name) {
            (Some(environment), Some(backup_name))
                if !environment.is_empty() && !backup_name.is_empty() =>
            {
                Some(ValidDelete { environment, backup_name })
            }
            _ => None,
        }
    }
}
