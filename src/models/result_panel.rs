/// Estilo visual del panel de resultado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Enlace a la consulta de permisos que se añade ante un 403
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsLink {
    pub href: String,
    pub label: String,
    /// Se abre en un contexto de navegación nuevo
    pub new_context: bool,
}

impl PermissionsLink {
    pub fn to_html(&self) -> String {
        let target = if self.new_context {
            " target=\"_blank\""
        } else {
            ""
        };
        format!("<a href=\"{}\"{}>{}</a>", self.href, target, self.label)
    }
}

/// Estado visible del panel `waiver-result`.
///
/// Solo el controlador del formulario lo modifica.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPanel {
    /// `waiver-result`: oculto hasta la primera respuesta
    pub visible: bool,
    pub style: PanelStyle,
    /// `result-text-success`
    pub success_text_visible: bool,
    /// `result-text-error`
    pub error_text_visible: bool,
    /// `result-link`
    pub result_link: String,
    /// `new-waiver-id`
    pub new_waiver_id: String,
    /// `error-desc`, sin escapar
    pub error_desc: String,
    pub permissions_link: Option<PermissionsLink>,
}

impl ResultPanel {
    pub fn show_success(&mut self, result_link: String, new_waiver_id: String) {
        self.error_text_visible = false;
        self.success_text_visible = true;
        self.result_link = result_link;
        self.new_waiver_id = new_waiver_id;
        self.permissions_link = None;
        self.visible = true;
        self.style = PanelStyle::Success;
    }

    pub fn show_error(&mut self, error_desc: String, permissions_link: Option<PermissionsLink>) {
        self.success_text_visible = false;
        self.error_text_visible = true;
        self.error_desc = error_desc;
        self.permissions_link = permissions_link;
        self.visible = true;
        self.style = PanelStyle::Error;
    }

    /// Contenido HTML de `error-desc`: el mensaje y, si existe, el enlace de permisos
    pub fn error_html(&self) -> String {
        match &self.permissions_link {
            Some(link) => format!("{} | {}", self.error_desc, link.to_html()),
            None => self.error_desc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forbidden_link() -> PermissionsLink {
        PermissionsLink {
            href: "https://waiverdb/api/v1.0/permissions?html=1&testcase=t".to_string(),
            label: "Ver quién tiene permiso para eximir t".to_string(),
            new_context: true,
        }
    }

    #[test]
    fn starts_hidden_and_neutral() {
        let panel = ResultPanel::default();

        assert!(!panel.visible);
        assert_eq!(panel.style, PanelStyle::Neutral);
        assert!(!panel.success_text_visible);
        assert!(!panel.error_text_visible);
    }

    #[test]
    fn error_html_appends_link_after_message() {
        let mut panel = ResultPanel::default();
        panel.show_error("not <i>allowed</i>".to_string(), Some(forbidden_link()));

        assert_eq!(
            panel.error_html(),
            "not <i>allowed</i> | <a href=\"https://waiverdb/api/v1.0/permissions?html=1&testcase=t\" \
             target=\"_blank\">Ver quién tiene permiso para eximir t</a>"
        );
    }

    #[test]
    fn success_after_error_switches_style_and_drops_link() {
        let mut panel = ResultPanel::default();
        panel.show_error("not allowed".to_string(), Some(forbidden_link()));

        panel.show_success("https://waiverdb/api/v1.0/waivers/7".to_string(), "7".to_string());

        assert_eq!(panel.style, PanelStyle::Success);
        assert!(panel.success_text_visible);
        assert!(!panel.error_text_visible);
        assert!(panel.permissions_link.is_none());
    }

    #[test]
    fn error_after_success_hides_success_text() {
        let mut panel = ResultPanel::default();
        panel.show_success("https://waiverdb/api/v1.0/waivers/7".to_string(), "7".to_string());

        panel.show_error("boom".to_string(), None);

        assert_eq!(panel.style, PanelStyle::Error);
        assert!(!panel.success_text_visible);
        assert!(panel.error_text_visible);
        assert_eq!(panel.error_html(), "boom");
    }
}
