use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;
use url::Url;

use crate::client::WaiversClient;
use crate::config::Settings;
use crate::error::SubmitError;
use crate::form::{read_request, FormFields};
use crate::models::{PermissionsLink, ResultPanel, WaiverResponse};

/// Evento de envío del formulario
#[derive(Debug, Default)]
pub struct SubmitEvent {
    prevent_default_calls: u32,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.prevent_default_calls += 1;
    }

    pub fn default_prevented(&self) -> bool {
        self.prevent_default_calls > 0
    }

    pub fn prevent_default_calls(&self) -> u32 {
        self.prevent_default_calls
    }
}

/// Controlador del formulario de nuevo waiver.
///
/// No bloquea envíos repetidos: cada envío es independiente y el panel
/// refleja la última respuesta en llegar.
pub struct FormController {
    settings: Settings,
    client: WaiversClient,
    fields: Arc<dyn FormFields>,
    panel: Arc<Mutex<ResultPanel>>,
}

impl FormController {
    /// Inicializa el controlador una única vez con los endpoints y los campos enlazados
    pub fn init(
        settings: Settings,
        fields: Arc<dyn FormFields>,
        panel: Arc<Mutex<ResultPanel>>,
    ) -> Self {
        let client = WaiversClient::new(settings.waivers_url.clone(), settings.token.clone());
        Self {
            settings,
            client,
            fields,
            panel,
        }
    }

    /// Gestiona un envío: evita la acción por defecto, lee los campos, hace el
    /// POST y actualiza el panel según el resultado
    pub async fn on_submit(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<WaiverResponse, SubmitError> {
        event.prevent_default();

        let request = read_request(self.fields.as_ref());
        let testcase = request.testcase.clone();

        let result = self.client.create_waiver(&request).await;
        match &result {
            Ok(response) => self.on_success(response),
            Err(error) => self.on_error(error, &testcase),
        }
        result
    }

    pub fn on_success(&self, response: &WaiverResponse) {
        let id = response.id.to_string();
        info!(waiver_id = %id, "waiver creado");

        self.lock_panel().show_success(self.waiver_link(&id), id);
    }

    pub fn on_error(&self, error: &SubmitError, testcase: &str) {
        info!(status = ?error.status, message = %error.message, "error al crear el waiver");

        let permissions_link = if error.is_forbidden() {
            Some(self.permissions_link(testcase))
        } else {
            None
        };

        self.lock_panel()
            .show_error(error.message.clone(), permissions_link);
    }

    /// Copia del estado actual del panel
    pub fn panel(&self) -> ResultPanel {
        self.lock_panel().clone()
    }

    fn lock_panel(&self) -> MutexGuard<'_, ResultPanel> {
        self.panel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn waiver_link(&self, id: &str) -> String {
        let mut link = self.settings.waivers_url.clone();
        if let Ok(mut segments) = link.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        link.to_string()
    }

    fn permissions_link(&self, testcase: &str) -> PermissionsLink {
        let mut href: Url = self.settings.permissions_url.clone();
        let kept: Vec<(String, String)> = href
            .query_pairs()
            .filter(|(key, _)| key != "html" && key != "testcase")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        href.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("html", "1")
            .append_pair("testcase", testcase);

        PermissionsLink {
            href: href.to_string(),
            label: format!("Ver quién tiene permiso para eximir {}", testcase),
            new_context: true,
        }
    }
}
