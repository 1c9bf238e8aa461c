use std::sync::{Arc, Mutex};

use crate::commands::FieldArgs;
use crate::config::Settings;
use crate::controller::{FormController, SubmitEvent};
use crate::models::ResultPanel;
use crate::utils::print_panel;

/// Envía un waiver sin preguntar nada. Devuelve `true` si se creó.
pub async fn submit_waiver(settings: Settings, fields: FieldArgs) -> anyhow::Result<bool> {
    let panel = Arc::new(Mutex::new(ResultPanel::default()));
    let controller = FormController::init(settings, Arc::new(fields.into_form()), panel);

    let mut event = SubmitEvent::new();
    let result = controller.on_submit(&mut event).await;
    print_panel(&controller.panel());

    Ok(result.is_ok())
}
