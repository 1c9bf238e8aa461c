use colored::*;

use crate::models::{PanelStyle, ResultPanel};

/// Texto plano del panel de resultado, una línea por elemento visible
pub fn render_panel(panel: &ResultPanel) -> Vec<String> {
    if !panel.visible {
        return Vec::new();
    }

    let mut lines = Vec::new();

    if panel.success_text_visible {
        lines.push(format!("Nuevo waiver creado. ID: {}", panel.new_waiver_id));
        lines.push(format!("Ver waiver: {}", panel.result_link));
    }

    if panel.error_text_visible {
        let mut line = format!("Error: {}", panel.error_desc);
        if let Some(link) = &panel.permissions_link {
            line.push_str(&format!(" | {}: {}", link.label, link.href));
        }
        lines.push(line);
    }

    lines
}

/// Muestra el panel en la terminal con el color de su estilo
pub fn print_panel(panel: &ResultPanel) {
    for line in render_panel(panel) {
        match panel.style {
            PanelStyle::Success => println!("{}", line.green()),
            PanelStyle::Error => println!("{}", line.red()),
            PanelStyle::Neutral => println!("{}", line),
        }
    }
}
