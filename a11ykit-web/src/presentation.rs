//! DOM-backed presentation adapter.
use std::collections::HashMap;

use a11ykit_core::{
    Effect, HoverHandler, HoverSubscription, HoverTarget, NodeKind, Presentation, StyleProperty,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, MouseEvent, Node};

use crate::dom::{self, WIDGET_MARKER_ATTR};
use crate::styles::effect_class;

type HoverClosure = Closure<dyn FnMut(MouseEvent)>;

/// Applies effects to `<html>` and listens for hovers on `<body>`.
///
/// Every listener closure stays owned here until its subscription is handed
/// back; dropping the adapter detaches whatever is still attached.
#[derive(Default)]
pub struct DomPresentation {
    listeners: HashMap<u64, HoverClosure>,
    next_id: u64,
}

/// CSS value written for a style property.
#[must_use]
pub fn style_declaration(property: StyleProperty, value: f64) -> (&'static str, String) {
    match property {
        StyleProperty::FontScale => ("font-size", format!("{value}%")),
        StyleProperty::PageScale => ("zoom", format!("{value}")),
    }
}

fn describe_target(event: &MouseEvent) -> HoverTarget {
    let Some(target) = event.target() else {
        return HoverTarget {
            kind: NodeKind::Other,
            in_widget: false,
            text: String::new(),
        };
    };

    if let Some(element) = target.dyn_ref::<Element>() {
        let selector = format!("[{WIDGET_MARKER_ATTR}]");
        let in_widget = element.closest(&selector).ok().flatten().is_some();
        let text = element.dyn_ref::<HtmlElement>().map_or_else(
            || element.text_content().unwrap_or_default(),
            HtmlElement::inner_text,
        );
        return HoverTarget {
            kind: NodeKind::Element,
            in_widget,
            text,
        };
    }

    let kind = match target.dyn_ref::<Node>() {
        Some(node) if node.node_type() == Node::TEXT_NODE => NodeKind::Text,
        _ => NodeKind::Other,
    };
    HoverTarget {
        kind,
        in_widget: false,
        text: String::new(),
    }
}

impl DomPresentation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn detach(closure: &HoverClosure) {
        if let Some(body) = dom::body() {
            let _ = body.remove_event_listener_with_callback(
                "mouseover",
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Presentation for DomPresentation {
    fn set_effect(&mut self, effect: Effect, on: bool) {
        let Some(root) = dom::root_element() else {
            return;
        };
        if let Err(err) = root
            .class_list()
            .toggle_with_force(effect_class(effect), on)
        {
            dom::console_warn(&format!(
                "a11ykit: could not toggle {effect:?}: {}",
                dom::js_error_message(&err)
            ));
        }
    }

    fn set_style(&mut self, property: StyleProperty, value: f64) {
        let Some(root) = dom::root_element().and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let (name, css) = style_declaration(property, value);
        if let Err(err) = root.style().set_property(name, &css) {
            dom::console_warn(&format!(
                "a11ykit: could not set {name}: {}",
                dom::js_error_message(&err)
            ));
        }
    }

    fn page_text(&self) -> String {
        dom::body().map(|body| body.inner_text()).unwrap_or_default()
    }

    fn subscribe_hover(&mut self, handler: HoverHandler) -> HoverSubscription {
        self.next_id += 1;
        let id = self.next_id;
        let closure: HoverClosure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(describe_target(&event));
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Some(body) = dom::body() {
            if let Err(err) =
                body.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())
            {
                dom::console_warn(&format!(
                    "a11ykit: hover listener rejected: {}",
                    dom::js_error_message(&err)
                ));
            }
        }
        self.listeners.insert(id, closure);
        log::debug!("attached hover listener #{id}");
        HoverSubscription::new(id)
    }

    fn unsubscribe_hover(&mut self, subscription: HoverSubscription) {
        match self.listeners.remove(&subscription.id()) {
            Some(closure) => {
                Self::detach(&closure);
                log::debug!("detached hover listener #{}", subscription.id());
            }
            None => log::warn!("detach requested for unknown hover listener {subscription:?}"),
        }
    }
}

impl Drop for DomPresentation {
    fn drop(&mut self) {
        for closure in self.listeners.values() {
            Self::detach(closure);
        }
    }
}
