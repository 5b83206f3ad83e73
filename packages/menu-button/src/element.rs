use std::str::FromStr;

use strum::{Display, EnumString};

const DISABLED: &str = "disabled";
const HIDDEN: &str = "hidden";

/// A handle to a live element.
///
/// Handles are cheap to clone and share the underlying element, so every
/// method takes `&self`.
pub trait MenuElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    fn focus(&self);

    /// Is `other` this element or one of its descendants?
    fn contains(&self, other: &Self) -> bool;

    fn is_same(&self, other: &Self) -> bool;

    /// The actionable descendants of a menu, in document order.
    fn menu_items(&self) -> Vec<Self>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn is_disabled(&self) -> bool {
        self.has_attribute(DISABLED)
    }

    fn set_disabled(&self, disabled: bool) {
        set_flag(self, DISABLED, disabled)
    }

    fn is_hidden(&self) -> bool {
        self.has_attribute(HIDDEN)
    }

    fn set_hidden(&self, hidden: bool) {
        set_flag(self, HIDDEN, hidden)
    }
}

fn set_flag(elem: &impl MenuElement, name: &str, on: bool) {
    if on {
        elem.set_attribute(name, "");
    } else {
        elem.remove_attribute(name);
    }
}

/// The page a menu button lives in.
pub trait Host: 'static {
    type Element: MenuElement;

    /// Deregisters its pointer handler when dropped.
    type Listener: 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Call `handler` with the target of every pointer down anywhere in the
    /// document, until the returned listener is dropped.
    fn on_pointer_down(&self, handler: Box<dyn FnMut(&Self::Element)>) -> Self::Listener;
}

/// Keys a menu button responds to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, EnumString)]
pub enum Key {
    #[strum(to_string = "ArrowDown", serialize = "Down")]
    ArrowDown,
    #[strum(to_string = "ArrowUp", serialize = "Up")]
    ArrowUp,
    #[strum(to_string = "Escape", serialize = "Esc")]
    Escape,
    Tab,
}

impl Key {
    /// Parse a `KeyboardEvent.key` value. Keys we don't handle are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// Parse a legacy `KeyboardEvent.keyCode`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            40 => Some(Self::ArrowDown),
            38 => Some(Self::ArrowUp),
            27 => Some(Self::Escape),
            9 => Some(Self::Tab),
            _ => None,
        }
    }

    /// Parse a keyboard event, falling back to its legacy key code when the
    /// key name isn't one we recognise.
    pub fn from_event(name: &str, key_code: u32) -> Option<Self> {
        Self::from_name(name).or_else(|| Self::from_key_code(key_code))
    }
}

/// What the host should do with the browser's default action for a key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Propagation {
    PreventDefault,
    Default,
}

impl Propagation {
    pub fn prevents_default(self) -> bool {
        self == Self::PreventDefault
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(Key::from_name("Down"), Some(Key::ArrowDown));
        assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("Tab"), Some(Key::Tab));
        assert_eq!(Key::from_name("Enter"), None);
        assert_eq!(Key::ArrowUp.to_string(), "ArrowUp");
    }

    #[test]
    fn key_codes() {
        assert_eq!(Key::from_key_code(40), Some(Key::ArrowDown));
        assert_eq!(Key::from_key_code(38), Some(Key::ArrowUp));
        assert_eq!(Key::from_key_code(27), Some(Key::Escape));
        assert_eq!(Key::from_key_code(9), Some(Key::Tab));
        assert_eq!(Key::from_key_code(13), None);
    }

    #[test]
    fn events_fall_back_to_key_codes() {
        assert_eq!(Key::from_event("ArrowUp", 40), Some(Key::ArrowUp));
        assert_eq!(Key::from_event("Unidentified", 40), Some(Key::ArrowDown));
        assert_eq!(Key::from_event("", 27), Some(Key::Escape));
        assert_eq!(Key::from_event("Enter", 13), None);
    }
}
