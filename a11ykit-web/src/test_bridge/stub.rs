use a11ykit_core::{A11yAction, WidgetConfig};
use yew::prelude::*;

use crate::components::widget::ManagerSlot;

#[hook]
pub fn use_test_bridge(
    manager: &ManagerSlot,
    on_action: &Callback<A11yAction>,
    config: &WidgetConfig,
) {
    let _ = (manager, on_action, config);
}
