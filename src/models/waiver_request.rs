use serde::{Deserialize, Serialize};

/// Cuerpo JSON enviado al crear un waiver.
///
/// Los valores se copian tal cual desde el formulario, sin recortar ni validar:
/// el servidor es quien decide si son aceptables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WaiverRequest {
    pub subject_type: String,
    pub subject_identifier: String,
    pub testcase: String,
    pub product_version: String,
    pub comment: String,
    pub scenario: String,
}
