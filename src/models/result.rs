use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// Resultado devolvido ao chamador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Success { message: String },
    Failure { error: String },
}

impl DispatchResult {
    pub fn success(message: impl Into<String>) -> Self {
        DispatchResult::Success { message: message.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        DispatchResult::Failure { error: error.into() }
    }
}

// {"success": true, "message": ...} | {"success": false, "error": ...}
impl Serialize for DispatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DispatchResult", 2)?;
        match self {
            DispatchResult::Success { message } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("message", message)?;
            }
            DispatchResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Corpo de erro sem o campo `success` (400 e token ausente).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
