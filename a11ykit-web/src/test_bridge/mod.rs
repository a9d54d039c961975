//! `window.__a11yTest` hooks for browser automation, installed only when the
//! page URL carries `?test=1`.
#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

use a11ykit_core::{A11yAction, WidgetConfig};
use yew::prelude::*;

use crate::components::widget::ManagerSlot;

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(
    manager: &ManagerSlot,
    on_action: &Callback<A11yAction>,
    config: &WidgetConfig,
) {
    stub::use_test_bridge(manager, on_action, config);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(
    manager: &ManagerSlot,
    on_action: &Callback<A11yAction>,
    config: &WidgetConfig,
) {
    wasm::use_test_bridge(manager, on_action, config);
}
