#![forbid(unsafe_code)]
//! Browser front end for a11ykit: DOM and speech adapters, the toolbar and
//! panel UIs, and the startup entry point.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod dom;
pub mod presentation;
pub mod speech;
pub mod storage;
pub mod styles;
pub mod test_bridge;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let config = config::load_page_config();
    match dom::ensure_host() {
        Ok(host) => {
            yew::Renderer::<components::Widget>::with_root_and_props(
                host,
                components::widget::Props { config },
            )
            .render();
        }
        Err(err) => dom::console_error(&format!(
            "a11ykit: could not create widget host: {}",
            dom::js_error_message(&err)
        )),
    }
}
