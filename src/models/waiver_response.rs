use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Identificador del waiver devuelto por el servidor (numérico o texto)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WaiverId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WaiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaiverId::Number(id) => write!(f, "{}", id),
            WaiverId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Respuesta de éxito. Solo se usa el `id`, el resto de campos se ignora.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WaiverResponse {
    pub id: WaiverId,
}

/// Respuesta de error de la API
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: Value,
}

impl ErrorResponse {
    /// Texto del mensaje de error.
    ///
    /// Los errores de validación del servidor pueden traer un objeto en lugar
    /// de una cadena (campo -> motivo); en ese caso se muestra el JSON.
    pub fn text(&self) -> String {
        match &self.message {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_display_verbatim() {
        let numeric: WaiverResponse =
            serde_json::from_str(r#"{"id": 42, "waived": true, "testcase": "t"}"#).unwrap();
        let text: WaiverResponse = serde_json::from_str(r#"{"id": "abc-1"}"#).unwrap();

        assert_eq!(numeric.id.to_string(), "42");
        assert_eq!(text.id.to_string(), "abc-1");
    }

    #[test]
    fn error_message_object_is_rendered_as_json() {
        let plain: ErrorResponse = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        let nested: ErrorResponse = serde_json::from_str(
            r#"{"message": {"testcase": "Missing required parameter in the JSON body"}}"#,
        )
        .unwrap();

        assert_eq!(plain.text(), "boom");
        assert_eq!(
            nested.text(),
            r#"{"testcase":"Missing required parameter in the JSON body"}"#
        );
    }
}
