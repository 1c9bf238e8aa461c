use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::SubmitError;
use crate::models::{ErrorResponse, WaiverRequest, WaiverResponse};

/// Cliente HTTP del endpoint de waivers
#[derive(Debug, Clone)]
pub struct WaiversClient {
    http: Client,
    waivers_url: Url,
    token: Option<String>,
}

impl WaiversClient {
    pub fn new(waivers_url: Url, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            waivers_url,
            token,
        }
    }

    /// Envía un único POST con el waiver. Sin reintentos ni timeout propio.
    pub async fn create_waiver(
        &self,
        request: &WaiverRequest,
    ) -> Result<WaiverResponse, SubmitError> {
        debug!(url = %self.waivers_url, testcase = %request.testcase, "enviando waiver");

        let mut builder = self.http.post(self.waivers_url.clone()).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "no se pudo contactar con WaiverDB");
                SubmitError::network(&e)
            })?;

        let status = response.status();

        if status.is_success() {
            return response.json::<WaiverResponse>().await.map_err(|e| {
                warn!(%status, error = %e, "respuesta de éxito ilegible");
                SubmitError::new(
                    Some(status),
                    format!("Respuesta inválida del servidor: {}", e),
                )
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(%status, %message, "WaiverDB rechazó el waiver");

        Err(SubmitError::new(Some(status), message))
    }
}

/// Mensaje del cuerpo de error: `message` si es JSON, si no el texto crudo y
/// en último caso la descripción del estado HTTP
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error.text(),
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Error desconocido")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(mock_server: &MockServer) -> WaiversClient {
        let url = Url::parse(&format!("{}/api/v1.0/waivers/", mock_server.uri())).unwrap();
        WaiversClient::new(url, None)
    }

    #[test]
    fn error_message_falls_back_to_text_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message": "bad"}"#),
            "bad"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>proxy</html>"),
            "<html>proxy</html>"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, ""), "Bad Gateway");
    }

    #[tokio::test]
    async fn posts_json_body_to_waivers_endpoint() {
        // Arrange
        let mock_server = MockServer::start().await;
        let request = WaiverRequest {
            subject_type: "koji_build".to_string(),
            subject_identifier: "glibc-2.26-27.fc27".to_string(),
            testcase: "dist.rpmdeplint".to_string(),
            product_version: "fedora-27".to_string(),
            comment: "It's dead!".to_string(),
            scenario: String::new(),
        };

        Mock::given(method("POST"))
            .and(path("/api/v1.0/waivers/"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "subject_type": "koji_build",
                "subject_identifier": "glibc-2.26-27.fc27",
                "testcase": "dist.rpmdeplint",
                "product_version": "fedora-27",
                "comment": "It's dead!",
                "scenario": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 15})))
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let response = client_for(&mock_server).create_waiver(&request).await.unwrap();

        // Assert
        assert_eq!(response.id.to_string(), "15");
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        // Arrange
        let mock_server = MockServer::start().await;
        let url = Url::parse(&format!("{}/api/v1.0/waivers/", mock_server.uri())).unwrap();
        let client = WaiversClient::new(url, Some("s3cr3t".to_string()));

        Mock::given(method("POST"))
            .and(header("authorization", "Bearer s3cr3t"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let response = client.create_waiver(&WaiverRequest::default()).await.unwrap();

        // Assert
        assert_eq!(response.id.to_string(), "5");
    }

    #[tokio::test]
    async fn non_success_status_returns_typed_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
            )
            .mount(&mock_server)
            .await;

        // Act
        let error = client_for(&mock_server)
            .create_waiver(&WaiverRequest::default())
            .await
            .unwrap_err();

        // Assert
        assert_eq!(error.status, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(error.message, "Unauthorized");
    }

    #[tokio::test]
    async fn unreadable_success_body_is_an_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&mock_server)
            .await;

        // Act
        let error = client_for(&mock_server)
            .create_waiver(&WaiverRequest::default())
            .await
            .unwrap_err();

        // Assert
        assert_eq!(error.status, Some(StatusCode::CREATED));
        assert!(error.message.starts_with("Respuesta inválida del servidor"));
    }
}
