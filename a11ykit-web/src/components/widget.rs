use std::cell::RefCell;
use std::rc::Rc;

use a11ykit_core::{A11yAction, A11yManager, Variant, WidgetConfig};
use yew::prelude::*;

use super::{Panel, Toolbar};
use crate::dom;
use crate::presentation::DomPresentation;
use crate::speech::WebSpeech;
use crate::storage::LocalSettingsStorage;
use crate::styles;
use crate::test_bridge::use_test_bridge;

pub type WebManager = A11yManager<DomPresentation, WebSpeech, LocalSettingsStorage>;
pub type ManagerSlot = Rc<RefCell<Option<WebManager>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: WidgetConfig,
}

/// Build the browser manager for `config` and apply its state to the page.
#[must_use]
pub fn mount_manager(config: &WidgetConfig) -> WebManager {
    if let Err(err) = styles::inject() {
        dom::console_error(&format!(
            "a11ykit: stylesheet injection failed: {}",
            dom::js_error_message(&err)
        ));
    }
    let storage = if config.persists() {
        LocalSettingsStorage::new()
    } else {
        LocalSettingsStorage::disabled()
    };
    let mut manager = A11yManager::with_storage(
        DomPresentation::new(),
        WebSpeech::detect(),
        storage,
        &config.storage_key,
    );
    if config.variant == Variant::Toolbar {
        manager = manager.with_baseline(config.variant.baseline());
    }
    manager.apply_all();
    log::info!("a11ykit mounted as {:?}", config.variant);
    manager
}

/// Routes UI actions into the manager and re-renders from its settings.
#[function_component(Widget)]
pub fn widget(p: &Props) -> Html {
    let manager: ManagerSlot = use_mut_ref(|| None::<WebManager>);
    let settings = use_state(|| p.config.variant.baseline());
    let open = use_state(|| false);
    let speech_available = use_state(|| true);

    {
        let manager = manager.clone();
        let settings = settings.clone();
        let speech_available = speech_available.clone();
        let config = p.config.clone();
        use_effect_with((), move |()| {
            if cfg!(target_arch = "wasm32") {
                let mounted = mount_manager(&config);
                settings.set(mounted.settings().clone());
                speech_available.set(mounted.speaker().is_available());
                *manager.borrow_mut() = Some(mounted);
            }
            move || {
                manager.borrow_mut().take();
            }
        });
    }

    let on_action = {
        let manager = manager.clone();
        let settings = settings.clone();
        Callback::from(move |action: A11yAction| {
            let mut slot = manager.borrow_mut();
            let Some(mgr) = slot.as_mut() else {
                return;
            };
            mgr.dispatch(action);
            if action.mutates_settings() {
                settings.set(mgr.settings().clone());
            }
        })
    };

    use_test_bridge(&manager, &on_action, &p.config);

    match p.config.variant {
        Variant::Toolbar => html! {
            <Toolbar
                settings={(*settings).clone()}
                label={AttrValue::from(p.config.label.clone())}
                position={p.config.position}
                speech_available={*speech_available}
                on_action={on_action}
            />
        },
        Variant::Panel => {
            let on_toggle_open = {
                let open = open.clone();
                Callback::from(move |next: bool| open.set(next))
            };
            html! {
                <Panel
                    settings={(*settings).clone()}
                    open={*open}
                    position={p.config.position}
                    label={AttrValue::from(p.config.label.clone())}
                    speech_available={*speech_available}
                    on_toggle_open={on_toggle_open}
                    on_action={on_action}
                />
            }
        }
    }
}
