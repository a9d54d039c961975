#[cfg(target_arch = "wasm32")]
use a11ykit_web::dom;
use a11ykit_core::{Effect, StyleProperty, WidgetConfig};
use a11ykit_web::presentation::style_declaration;
use a11ykit_web::{config, styles};

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn effect_classes_are_distinct() {
    let mut classes: Vec<_> = Effect::ALL.iter().map(|e| styles::effect_class(*e)).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), Effect::ALL.len());
}

#[test]
fn font_scale_is_written_as_percent() {
    let (name, value) = style_declaration(StyleProperty::FontScale, 80.0);
    assert_eq!(name, "font-size");
    assert_eq!(value, "80%");
}

#[test]
fn embedded_config_is_the_fallback() {
    assert_eq!(config::resolve(None), WidgetConfig::load_from_static());
    assert!(WidgetConfig::load_from_static().persists());
}
