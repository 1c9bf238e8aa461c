use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::WaiverRequest;

/// Campos del formulario de nuevo waiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    SubjectType,
    SubjectIdentifier,
    Testcase,
    ProductVersion,
    Comment,
    Scenario,
}

impl FormField {
    /// Orden en el que se muestran los campos
    pub const ALL: [FormField; 6] = [
        FormField::SubjectType,
        FormField::SubjectIdentifier,
        FormField::Testcase,
        FormField::ProductVersion,
        FormField::Comment,
        FormField::Scenario,
    ];

    /// Identificador del campo en el formulario
    pub fn id(&self) -> &'static str {
        match self {
            FormField::SubjectType => "subject_type",
            FormField::SubjectIdentifier => "subject_identifier",
            FormField::Testcase => "testcase",
            FormField::ProductVersion => "product_version",
            FormField::Comment => "comment",
            FormField::Scenario => "scenario",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SubjectType => "Tipo de sujeto:",
            FormField::SubjectIdentifier => "Identificador del sujeto:",
            FormField::Testcase => "Caso de prueba:",
            FormField::ProductVersion => "Versión del producto:",
            FormField::Comment => "Comentario:",
            FormField::Scenario => "Escenario (opcional):",
        }
    }
}

/// Referencias a los campos del formulario.
///
/// El controlador las captura una sola vez al inicializarse y lee el valor
/// actual en cada envío.
pub trait FormFields: Send + Sync {
    fn value(&self, field: FormField) -> String;
}

/// Construye la solicitud con los valores actuales del formulario
pub fn read_request(fields: &dyn FormFields) -> WaiverRequest {
    WaiverRequest {
        subject_type: fields.value(FormField::SubjectType),
        subject_identifier: fields.value(FormField::SubjectIdentifier),
        testcase: fields.value(FormField::Testcase),
        product_version: fields.value(FormField::ProductVersion),
        comment: fields.value(FormField::Comment),
        scenario: fields.value(FormField::Scenario),
    }
}

/// Formulario en memoria. Los clones comparten los mismos valores.
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    values: Arc<Mutex<HashMap<FormField, String>>>,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (FormField, String)>,
    {
        let form = Self::new();
        for (field, value) in values {
            form.set(field, value);
        }
        form
    }

    pub fn set(&self, field: FormField, value: impl Into<String>) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(field, value.into());
    }
}

impl FormFields for InputForm {
    fn value(&self, field: FormField) -> String {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }
}
