use crate::escape::escape_html;
use gazette_model::Component;
use tracing::warn;

/// Labelled block for component types this version cannot render. The type
/// name is escaped; the content is inserted as stored.
pub(super) fn render_unknown(component: &Component) -> String {
    let type_name = component.type_name();
    warn!(component_id = %component.id, type_name, "unsupported component type");

    format!(
        "<div class=\"component-unknown\" data-component-type=\"{type_name}\" style=\"border: 2px dashed #e57373; border-radius: 8px; padding: 12px 16px; margin: 16px 0; background-color: #ffebee;\"><p style=\"margin: 0 0 8px 0; font-size: 12px; font-weight: bold; color: #c62828;\">Componente no soportado: {type_name}</p><div class=\"component-unknown-content\">{}</div></div>",
        component.content,
        type_name = escape_html(type_name)
    )
}
