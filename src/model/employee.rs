use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Immutable personnel reference data, supplied by the HR collaborator.
/// `matricula` is the identity key; `pis` is the individual tax ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "matricula": "001234",
        "nome": "Maria Souza",
        "pis": "12034567890"
    })
)]
pub struct Employee {
    #[schema(example = "001234")]
    pub matricula: String,

    #[schema(example = "Maria Souza")]
    pub nome: String,

    #[schema(example = "12034567890")]
    pub pis: String,
}
