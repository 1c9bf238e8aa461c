use std::sync::{Arc, Mutex};

use anyhow::Context;
use colored::*;
use inquire::{InquireError, Select, Text};

use crate::commands::FieldArgs;
use crate::config::Settings;
use crate::controller::{FormController, SubmitEvent};
use crate::form::{FormField, FormFields, InputForm};
use crate::models::ResultPanel;
use crate::utils::print_panel;

/// Rellena el formulario de nuevo waiver de forma interactiva y lo envía
pub async fn new_waiver(settings: Settings, prefill: FieldArgs) -> anyhow::Result<()> {
    let form = prefill.into_form();
    let panel = Arc::new(Mutex::new(ResultPanel::default()));
    let controller = FormController::init(settings, Arc::new(form.clone()), panel);

    println!("{}", "Completa los datos del nuevo waiver.".blue());

    loop {
        if !fill_and_submit(&controller, &form, ask_field).await? {
            break;
        }

        // Se permite reenviar el formulario, con los valores anteriores como punto de partida
        let options = vec!["Sí", "No"];
        match Select::new("¿Deseas enviar otro waiver?", options).prompt() {
            Ok("Sí") => continue,
            Ok(_) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                break
            }
            Err(e) => return Err(e).context("No se pudo leer la respuesta"),
        }
    }

    Ok(())
}

/// Pide los campos y envía el waiver. Devuelve `false` si el usuario canceló,
/// en cuyo caso no se hace ninguna petición.
async fn fill_and_submit<F>(
    controller: &FormController,
    form: &InputForm,
    ask: F,
) -> anyhow::Result<bool>
where
    F: FnMut(FormField, &str) -> Result<String, InquireError>,
{
    if !prompt_fields(form, ask)? {
        println!("{}", "Operación cancelada.".yellow());
        return Ok(false);
    }

    println!("{}", "Enviando waiver...".blue());
    let mut event = SubmitEvent::new();
    // El resultado queda reflejado en el panel
    let _ = controller.on_submit(&mut event).await;
    print_panel(&controller.panel());

    Ok(true)
}

/// Pide cada campo mostrando su valor actual como valor inicial.
///
/// Esc o Ctrl-C cancelan el formulario completo; cualquier otro fallo de la
/// terminal se propaga.
fn prompt_fields<F>(form: &InputForm, mut ask: F) -> anyhow::Result<bool>
where
    F: FnMut(FormField, &str) -> Result<String, InquireError>,
{
    for field in FormField::ALL {
        let current = form.value(field);
        match ask(field, &current) {
            Ok(value) => form.set(field, value),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(false)
            }
            Err(e) => {
                return Err(e).with_context(|| format!("No se pudo leer el campo {}", field.id()))
            }
        }
    }

    Ok(true)
}

fn ask_field(field: FormField, current: &str) -> Result<String, InquireError> {
    Text::new(field.label())
        .with_initial_value(current)
        .prompt()
}
