// Stylesheet and SVG filter injected into the host page

use a11ykit_core::Effect;
use wasm_bindgen::JsValue;

use crate::dom;

const STYLE_ELEMENT_ID: &str = "a11ykit-style";
const FILTER_ELEMENT_ID: &str = "a11ykit-filters";

/// Class toggled on `<html>` for each effect.
#[must_use]
pub const fn effect_class(effect: Effect) -> &'static str {
    match effect {
        Effect::HighContrast => "a11y-high-contrast",
        Effect::CvdRedGreen => "a11y-cvd-redgreen",
        Effect::CvdGeneral => "a11y-cvd-general",
        Effect::EasyUsability => "a11y-easy-usability",
    }
}

/// Widget chrome plus the page-wide effect rules.
#[must_use]
pub const fn widget_css() -> &'static str {
    r"
.a11y-toolbar, .a11y-panel {
    position: fixed; z-index: 99999;
    background: #222; color: #fff; border-radius: 8px; padding: 12px 16px;
    box-shadow: 0 2px 8px rgba(0,0,0,0.2); font-family: sans-serif;
    display: flex; flex-direction: column; gap: 8px; min-width: 220px;
}
.a11y-pos-top-right { top: 10px; right: 10px; }
.a11y-pos-top-left { top: 10px; left: 10px; }
.a11y-pos-bottom-right { bottom: 10px; right: 10px; }
.a11y-pos-bottom-left { bottom: 10px; left: 10px; }
.a11y-toolbar button, .a11y-panel button, .a11y-fab,
.a11y-toolbar input[type=range], .a11y-panel input[type=range] {
    margin: 2px 0; font-size: 1em; border: none; border-radius: 4px;
    padding: 6px 10px; background: #444; color: #fff; cursor: pointer;
}
.a11y-toolbar button:hover, .a11y-panel button:hover, .a11y-fab:hover { background: #666; }
.a11y-toolbar button[aria-pressed=true], .a11y-panel button[aria-pressed=true] { background: #0a7; }
.a11y-toolbar label, .a11y-panel label { font-size: 0.95em; margin-bottom: 2px; }
.a11y-fab { position: fixed; z-index: 99999; width: 48px; height: 48px; border-radius: 50%; font-size: 1.4em; }
.a11y-panel { margin-bottom: 56px; }
.a11y-row { display: flex; gap: 4px; }
.a11y-high-contrast * {
    background: #000 !important; color: #fff !important;
    border-color: #fff !important;
    text-shadow: none !important;
}
.a11y-high-contrast a, .a11y-high-contrast a:visited {
    color: #0ff !important; text-decoration: underline !important;
}
.a11y-high-contrast img, .a11y-high-contrast video {
    filter: grayscale(1) contrast(2) !important;
}
.a11y-cvd-redgreen * { filter: url('#a11y-cvd-protanope') !important; }
.a11y-cvd-general * { filter: grayscale(0.5) !important; }
.a11y-easy-usability a, .a11y-easy-usability button, .a11y-easy-usability input,
.a11y-easy-usability select, .a11y-easy-usability textarea {
    min-height: 44px; min-width: 44px; font-size: 1.15em !important;
    line-height: 1.6 !important; letter-spacing: 0.03em;
}
.a11y-easy-usability :focus { outline: 4px solid #00D9C0 !important; outline-offset: 3px; }
"
}

/// Hidden SVG carrying the protanope colour matrix referenced by the CSS.
#[must_use]
pub const fn protanope_filter_svg() -> &'static str {
    r#"<filter id="a11y-cvd-protanope"><feColorMatrix type="matrix" values="0.567 0.433 0 0 0 0.558 0.442 0 0 0 0 0.242 0.758 0 0 0 0 0 1 0"/></filter>"#
}

/// Add the stylesheet and filter to the page once.
///
/// # Errors
/// Returns an error if the document is unavailable or an element cannot be created.
pub fn inject() -> Result<(), JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;

    if doc.get_element_by_id(STYLE_ELEMENT_ID).is_none() {
        let style = doc.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(widget_css()));
        let head = doc
            .head()
            .ok_or_else(|| JsValue::from_str("document head unavailable"))?;
        head.append_child(&style)?;
    }

    if doc.get_element_by_id(FILTER_ELEMENT_ID).is_none() {
        let svg = doc.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")?;
        svg.set_id(FILTER_ELEMENT_ID);
        svg.set_attribute("width", "0")?;
        svg.set_attribute("height", "0")?;
        svg.set_attribute("aria-hidden", "true")?;
        svg.set_attribute(dom::WIDGET_MARKER_ATTR, "")?;
        svg.set_inner_html(protanope_filter_svg());
        let body = doc
            .body()
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
        body.append_child(&svg)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_has_a_rule() {
        for effect in Effect::ALL {
            let class = effect_class(effect);
            assert!(widget_css().contains(&format!(".{class}")), "{class}");
        }
    }

    #[test]
    fn filter_id_matches_stylesheet_reference() {
        assert!(protanope_filter_svg().contains("id=\"a11y-cvd-protanope\""));
        assert!(widget_css().contains("url('#a11y-cvd-protanope')"));
    }
}
