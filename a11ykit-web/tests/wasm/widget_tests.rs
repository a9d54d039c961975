use std::cell::Cell;
use std::rc::Rc;

use a11ykit_core::{A11yAction, CvdMode, Effect, Presentation, StyleProperty, Variant, WidgetConfig};
use a11ykit_web::components::widget::mount_manager;
use a11ykit_web::dom;
use a11ykit_web::presentation::DomPresentation;
use a11ykit_web::styles;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn root_has(class: &str) -> bool {
    dom::root_element()
        .expect("html element")
        .class_list()
        .contains(class)
}

fn toolbar_config() -> WidgetConfig {
    WidgetConfig {
        variant: Variant::Toolbar,
        ..WidgetConfig::default_config()
    }
}

#[wasm_bindgen_test]
fn effects_toggle_root_classes() {
    let mut presentation = DomPresentation::new();
    presentation.set_effect(Effect::HighContrast, true);
    assert!(root_has(styles::effect_class(Effect::HighContrast)));
    presentation.set_effect(Effect::HighContrast, false);
    assert!(!root_has(styles::effect_class(Effect::HighContrast)));
}

#[wasm_bindgen_test]
fn font_scale_lands_on_html_style() {
    let mut presentation = DomPresentation::new();
    presentation.set_style(StyleProperty::FontScale, 120.0);
    let root = dom::root_element().expect("html element");
    let style = root.get_attribute("style").unwrap_or_default();
    assert!(style.contains("font-size: 120%"), "{style}");
    presentation.set_style(StyleProperty::FontScale, 100.0);
}

#[wasm_bindgen_test]
fn injection_is_idempotent() {
    styles::inject().expect("inject");
    styles::inject().expect("inject again");
    let doc = dom::document().expect("document");
    let count = doc
        .query_selector_all("#a11ykit-style")
        .expect("query")
        .length();
    assert_eq!(count, 1);
}

#[wasm_bindgen_test]
fn toolbar_reset_clears_every_effect() {
    let mut manager = mount_manager(&toolbar_config());
    manager.dispatch(A11yAction::ToggleHighContrast);
    manager.dispatch(A11yAction::ToggleCvd(CvdMode::RedGreen));
    assert!(root_has("a11y-high-contrast"));
    assert!(root_has("a11y-cvd-redgreen"));
    manager.dispatch(A11yAction::Reset);
    assert!(!root_has("a11y-high-contrast"));
    assert!(!root_has("a11y-cvd-redgreen"));
    assert!(manager.at_baseline());
}

#[wasm_bindgen_test]
fn hover_listener_detaches_on_toggle() {
    let mut manager = mount_manager(&toolbar_config());
    manager.dispatch(A11yAction::ToggleTtsHover);
    assert_eq!(manager.presentation().listener_count(), 1);
    manager.dispatch(A11yAction::ToggleTtsHover);
    assert_eq!(manager.presentation().listener_count(), 0);
}

fn hover_body() {
    let event = web_sys::MouseEvent::new("mouseover").expect("mouse event");
    dom::body()
        .expect("body")
        .dispatch_event(&event)
        .expect("dispatch");
}

#[wasm_bindgen_test]
fn dropping_adapter_detaches_body_listeners() {
    let hits = Rc::new(Cell::new(0));
    let mut presentation = DomPresentation::new();
    let counter = Rc::clone(&hits);
    let _subscription =
        presentation.subscribe_hover(Box::new(move |_| counter.set(counter.get() + 1)));
    hover_body();
    assert_eq!(hits.get(), 1);

    drop(presentation);
    hover_body();
    assert_eq!(hits.get(), 1);
}
