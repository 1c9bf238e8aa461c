pub mod new;
pub mod submit;

pub use new::*;
pub use submit::*;

use clap::Args;

use crate::form::{FormField, InputForm};

/// Valores de los campos pasados por línea de comandos
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Tipo de sujeto (p. ej. koji_build)
    #[arg(long)]
    pub subject_type: Option<String>,

    /// Identificador del sujeto (p. ej. un NVR)
    #[arg(long)]
    pub subject_identifier: Option<String>,

    /// Caso de prueba a eximir
    #[arg(long)]
    pub testcase: Option<String>,

    /// Versión del producto
    #[arg(long)]
    pub product_version: Option<String>,

    /// Comentario que justifica el waiver
    #[arg(long)]
    pub comment: Option<String>,

    /// Escenario del resultado
    #[arg(long)]
    pub scenario: Option<String>,
}

impl FieldArgs {
    /// Formulario con los valores dados; los campos ausentes quedan vacíos
    pub fn into_form(self) -> InputForm {
        InputForm::from_values(
            [
                (FormField::SubjectType, self.subject_type),
                (FormField::SubjectIdentifier, self.subject_identifier),
                (FormField::Testcase, self.testcase),
                (FormField::ProductVersion, self.product_version),
                (FormField::Comment, self.comment),
                (FormField::Scenario, self.scenario),
            ]
            .into_iter()
            .map(|(field, value)| (field, value.unwrap_or_default())),
        )
    }
}
