//! Bind [`MenuButton`]s to a browser page.
//!
//! ```html
//! <button data-inclusive-menu-opens="actions">Actions</button>
//! <div id="actions">
//!   <button>Copy</button>
//!   <button disabled>Paste</button>
//! </div>
//! ```
//!
//! [`bind_all`] finds every trigger like the one above and keeps the returned
//! [`Binding`]s alive for as long as the menus should work.

use clonelet::clone;
use derive_more::{From, Into};
use gloo_console::{error, log};
use gloo_events::{EventListener, EventListenerOptions};
use inclusive_menu_button::{
    Config, ConfigurationError, Host, Key, MenuButton, MenuElement, MENU_ATTRIBUTE,
};
use silkenweb::document;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{HtmlElement, KeyboardEvent};

/// The elements a menu treats as items.
const ITEM_SELECTOR: &str = "button";

fn dom_document() -> web_sys::Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect_throw("no document")
}

#[derive(Clone, Debug, PartialEq, Eq, From, Into)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn dom_element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl MenuElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.set_attribute(name, value).unwrap_throw();
    }

    fn remove_attribute(&self, name: &str) {
        self.0.remove_attribute(name).unwrap_throw();
    }

    fn focus(&self) {
        if let Some(elem) = self.0.dyn_ref::<HtmlElement>() {
            elem.focus().unwrap_throw();
        }
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = &other.0;
        self.0.contains(Some(other))
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &web_sys::Node = &other.0;
        self.0.is_same_node(Some(other))
    }

    fn menu_items(&self) -> Vec<Self> {
        let Ok(nodes) = self.0.query_selector_all(ITEM_SELECTOR) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }
}

/// The browser document.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebHost;

impl Host for WebHost {
    type Element = WebElement;
    type Listener = document::EventCallback;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        dom_document().get_element_by_id(id).map(WebElement)
    }

    fn on_pointer_down(
        &self,
        mut handler: Box<dyn FnMut(&WebElement)>,
    ) -> document::EventCallback {
        document::on_pointerdown(move |event| {
            if let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            {
                handler(&WebElement(target));
            }
        })
    }
}

fn pressed_key(event: &web_sys::Event) -> Option<Key> {
    event
        .dyn_ref::<KeyboardEvent>()
        .and_then(|event| Key::from_event(&event.key(), event.key_code()))
}

// `gloo-events` listeners are passive by default, which would ignore
// `prevent_default`.
fn on_keydown(
    target: &web_sys::Element,
    handler: impl FnMut(&web_sys::Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(
        target,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
}

/// A [`MenuButton`] wired to its page.
///
/// Dropping the binding removes its event listeners. It doesn't undo the
/// attributes set on the trigger, menu, or items.
pub struct Binding {
    menu_button: MenuButton<WebHost>,
    _listeners: Vec<EventListener>,
}

impl Binding {
    pub fn menu_button(&self) -> &MenuButton<WebHost> {
        &self.menu_button
    }
}

/// Bind `trigger`, configured from its data attributes.
pub fn bind(trigger: web_sys::Element) -> Result<Binding, ConfigurationError> {
    let trigger = WebElement(trigger);
    let config = Config::from_element(&trigger)?;
    let menu_button = MenuButton::from_trigger(WebHost, trigger.clone(), config)?;
    let mut listeners = vec![
        EventListener::new(trigger.dom_element(), "click", {
            clone!(menu_button);
            move |_| menu_button.trigger_click()
        }),
        on_keydown(trigger.dom_element(), {
            clone!(menu_button);
            move |event| {
                if let Some(key) = pressed_key(event) {
                    if menu_button.trigger_keydown(key).prevents_default() {
                        event.prevent_default();
                    }
                }
            }
        }),
    ];

    for item in menu_button.items() {
        listeners.push(on_keydown(item.dom_element(), {
            clone!(menu_button, item);
            move |event| {
                if let Some(key) = pressed_key(event) {
                    if menu_button.item_keydown(&item, key).prevents_default() {
                        event.prevent_default();
                    }
                }
            }
        }));
        listeners.push(EventListener::new(item.dom_element(), "click", {
            clone!(menu_button, item);
            move |_| menu_button.item_click(&item)
        }));
    }

    Ok(Binding {
        menu_button,
        _listeners: listeners,
    })
}

/// Bind every `[data-inclusive-menu-opens]` trigger in the document.
///
/// Triggers that can't be bound are logged and skipped.
pub fn bind_all() -> Vec<Binding> {
    let selector = format!("[{MENU_ATTRIBUTE}]");
    let Ok(triggers) = dom_document().query_selector_all(&selector) else {
        return Vec::new();
    };

    let bindings: Vec<Binding> = (0..triggers.length())
        .filter_map(|index| triggers.get(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|trigger| match bind(trigger) {
            Ok(binding) => Some(binding),
            Err(e) => {
                error!(e.to_string());
                None
            }
        })
        .collect();

    log!(format!("Bound {} menu buttons", bindings.len()));
    bindings
}
