use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

/// Attribute marking nodes that belong to the widget's own chrome.
pub const WIDGET_MARKER_ATTR: &str = "data-a11y-ui";

/// Id of the element the widget renders into.
pub const HOST_ID: &str = "a11ykit-root";

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `<html>` element that effect classes are toggled on.
#[must_use]
pub fn root_element() -> Option<Element> {
    document().and_then(|doc| doc.document_element())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from(message));
}

/// Whether the page URL asks for the test bridge (`?test=1`).
#[must_use]
pub fn test_mode_enabled() -> bool {
    window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| search.contains("test=1"))
}

/// Find or create the widget host element at the end of `<body>`.
///
/// # Errors
/// Returns an error if the document has no body or the element cannot be created.
pub fn ensure_host() -> Result<Element, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    if let Some(existing) = doc.get_element_by_id(HOST_ID) {
        return Ok(existing);
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
    let host = doc.create_element("div")?;
    host.set_id(HOST_ID);
    host.set_attribute(WIDGET_MARKER_ATTR, "")?;
    body.append_child(&host)?;
    Ok(host)
}
