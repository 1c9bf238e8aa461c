mod client;
mod commands;
mod config;
mod controller;
mod error;
mod form;
mod models;
mod utils;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select};
use tracing_subscriber::EnvFilter;

use crate::commands::{new_waiver, submit_waiver, FieldArgs};
use crate::config::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL base de la API de WaiverDB (p. ej. https://waiverdb.example/api/v1.0)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crear un waiver con el formulario interactivo
    New {
        #[command(flatten)]
        prefill: FieldArgs,
    },
    /// Enviar un waiver sin preguntas
    Submit {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.api_url.as_deref()).context(
        "No se pudo cargar la configuración \
         (ejemplo: export WAIVERDB_API_URL=https://waiverdb.example/api/v1.0)",
    )?;

    match cli.command {
        Some(Commands::New { prefill }) => new_waiver(settings, prefill).await?,
        Some(Commands::Submit { fields }) => {
            if !submit_waiver(settings, fields).await? {
                std::process::exit(1);
            }
        }
        None => {
            // Menú interactivo si no se proporciona un comando
            let options = vec!["Crear un waiver", "Salir"];

            let selection = Select::new("¿Qué deseas hacer?", options).prompt();

            match selection {
                Ok("Crear un waiver") => new_waiver(settings, FieldArgs::default()).await?,
                Ok(_)
                | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    println!("¡Hasta pronto!")
                }
                Err(e) => return Err(e).context("No se pudo mostrar el menú"),
            }
        }
    }

    Ok(())
}
