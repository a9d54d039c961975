use a11ykit_core::{A11yAction, AccessibilitySettings, Variant, WidgetConfig};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::components::widget::ManagerSlot;
use crate::dom;
use crate::storage;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeState {
    mounted: bool,
    variant: Variant,
    persists: bool,
    settings: Option<AccessibilitySettings>,
    hover_attached: bool,
    speech_available: bool,
    speaking: Option<String>,
    root_classes: Vec<String>,
}

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _dispatch: Closure<dyn FnMut(JsValue) -> JsValue>,
    _clear: Closure<dyn FnMut()>,
}

impl BridgeBindings {
    fn keep(&self) {
        let _ = (&self._state, &self._dispatch, &self._clear);
    }
}

fn root_classes() -> Vec<String> {
    dom::root_element()
        .map(|root| {
            root.class_name()
                .split_whitespace()
                .filter(|c| c.starts_with("a11y-"))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn snapshot(manager: &ManagerSlot, config: &WidgetConfig) -> BridgeState {
    let slot = manager.borrow();
    slot.as_ref().map_or_else(
        || BridgeState {
            mounted: false,
            variant: config.variant,
            persists: config.persists(),
            settings: None,
            hover_attached: false,
            speech_available: false,
            speaking: None,
            root_classes: root_classes(),
        },
        |mgr| BridgeState {
            mounted: true,
            variant: config.variant,
            persists: config.persists(),
            settings: Some(mgr.settings().clone()),
            hover_attached: mgr.hover_attached(),
            speech_available: mgr.speaker().is_available(),
            speaking: mgr.speaker().current(),
            root_classes: root_classes(),
        },
    )
}

fn build_bridge(
    manager: &ManagerSlot,
    on_action: &Callback<A11yAction>,
    config: &WidgetConfig,
) -> BridgeBindings {
    let state_manager = manager.clone();
    let state_config = config.clone();
    let state = Closure::wrap(Box::new(move || {
        serde_json::to_string(&snapshot(&state_manager, &state_config))
            .map_or(JsValue::NULL, |json| JsValue::from_str(&json))
    }) as Box<dyn FnMut() -> JsValue>);

    let dispatch_cb = on_action.clone();
    let dispatch = Closure::wrap(Box::new(move |value: JsValue| {
        let Some(raw) = value.as_string() else {
            return JsValue::FALSE;
        };
        match serde_json::from_str::<A11yAction>(&raw) {
            Ok(action) => {
                dispatch_cb.emit(action);
                JsValue::TRUE
            }
            Err(err) => {
                dom::console_warn(&format!("a11ykit: rejected bridge action {raw}: {err}"));
                JsValue::FALSE
            }
        }
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    let key = config.storage_key.clone();
    let clear = Closure::wrap(Box::new(move || {
        storage::clear(&key);
    }) as Box<dyn FnMut()>);

    BridgeBindings {
        _state: state,
        _dispatch: dispatch,
        _clear: clear,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        bindings._state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("dispatch"),
        bindings._dispatch.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("clearStorage"),
        bindings._clear.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__a11yTest"), &bridge);
}

#[hook]
pub fn use_test_bridge(
    manager: &ManagerSlot,
    on_action: &Callback<A11yAction>,
    config: &WidgetConfig,
) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let manager = manager.clone();
    let on_action = on_action.clone();
    let config = config.clone();

    use_effect_with((), move |()| {
        if dom::test_mode_enabled() && bridge_handle.borrow().is_none() {
            let bindings = build_bridge(&manager, &on_action, &config);
            attach_bridge(&bindings);
            bindings.keep();
            *bridge_handle.borrow_mut() = Some(bindings);
            log::debug!("test bridge installed");
        }
        || {}
    });
}
