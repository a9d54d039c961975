//! Page-level configuration lookup.
use a11ykit_core::{ConfigError, WidgetConfig};

use crate::dom;

/// Id of the optional `<script type="application/json">` override.
pub const CONFIG_ELEMENT_ID: &str = "a11y-config";

/// Parse an override document. Absent or blank input yields `Ok(None)`.
///
/// # Errors
///
/// Returns the parse error when the document is not a valid configuration.
pub fn parse_override(override_json: Option<&str>) -> Result<Option<WidgetConfig>, ConfigError> {
    match override_json.filter(|s| !s.trim().is_empty()) {
        Some(json) => WidgetConfig::from_json(json).map(Some),
        None => Ok(None),
    }
}

/// Resolve the widget configuration from an override document, falling back
/// to the embedded default when it is absent or malformed.
#[must_use]
pub fn resolve(override_json: Option<&str>) -> WidgetConfig {
    parse_override(override_json)
        .unwrap_or_else(|err| {
            log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
            None
        })
        .unwrap_or_else(WidgetConfig::default_config)
}

/// Read the configuration the host page declared, if any.
#[must_use]
pub fn load_page_config() -> WidgetConfig {
    let declared = dom::document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    if let Err(err) = parse_override(declared.as_deref()) {
        dom::console_warn(&format!("a11ykit: ignoring #{CONFIG_ELEMENT_ID}: {err}"));
    }
    resolve(declared.as_deref())
}
