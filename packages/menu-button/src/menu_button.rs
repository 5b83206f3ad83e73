use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    config::{Checkable, Config},
    element::{Host, Key, MenuElement, Propagation},
    error::{ConfigurationError, InvalidArgumentError},
    event::{Event, EventKind, Handler, Listeners},
    navigation::{first_enabled, next_enabled, Direction},
    MENU_ATTRIBUTE,
};

const HAS_POPUP: &str = "aria-haspopup";
const EXPANDED: &str = "aria-expanded";
const CHECKED: &str = "aria-checked";
const ROLE: &str = "role";
const TABINDEX: &str = "tabindex";

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn is_checked(item: &impl MenuElement) -> bool {
    item.attribute(CHECKED).as_deref() == Some("true")
}

/// The menu to bind to a trigger.
pub enum MenuRef<E> {
    Id(String),
    Element(E),
}

impl<E> From<&str> for MenuRef<E> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl<E> From<String> for MenuRef<E> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

/// A trigger element bound to the menu it opens.
///
/// `MenuButton` is a shared handle: clones refer to the same widget. The
/// trigger's `aria-expanded` attribute is the only record of whether the menu
/// is open.
pub struct MenuButton<H: Host>(Rc<RefCell<State<H>>>);

impl<H: Host> Clone for MenuButton<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

struct State<H: Host> {
    host: H,
    trigger: H::Element,
    menu: H::Element,
    items: Vec<H::Element>,
    checkable: Checkable,
    listeners: Listeners<H::Element>,
    // Present exactly while the menu is open.
    outside_pointer: Option<H::Listener>,
}

impl<H: Host> MenuButton<H> {
    /// Bind `trigger` to the menu named by its `data-inclusive-menu-opens`
    /// attribute.
    pub fn from_trigger(
        host: H,
        trigger: H::Element,
        config: Config,
    ) -> Result<Self, ConfigurationError> {
        let menu_id = trigger
            .attribute(MENU_ATTRIBUTE)
            .ok_or(ConfigurationError::MissingMenuReference)?;

        Self::new(host, trigger, menu_id, config)
    }

    pub fn new(
        host: H,
        trigger: H::Element,
        menu: impl Into<MenuRef<H::Element>>,
        config: Config,
    ) -> Result<Self, ConfigurationError> {
        let menu = match menu.into() {
            MenuRef::Id(id) => host
                .element_by_id(&id)
                .ok_or(ConfigurationError::MenuMissing(id))?,
            MenuRef::Element(menu) => menu,
        };

        let items = menu.menu_items();

        if items.is_empty() {
            let name = menu.attribute("id").unwrap_or_default();
            return Err(ConfigurationError::NoMenuItems(name));
        }

        trigger.set_attribute(HAS_POPUP, "true");
        trigger.set_attribute(EXPANDED, "false");
        menu.set_attribute(ROLE, "menu");
        menu.set_hidden(true);

        let checkable = config.checkable;
        let role = checkable.role();
        let mut seen_checked = false;

        for item in &items {
            item.set_attribute(ROLE, role.as_ref());
            item.set_attribute(TABINDEX, "-1");

            if checkable.is_checkable() {
                let checked =
                    is_checked(item) && !(checkable == Checkable::Single && seen_checked);
                seen_checked |= checked;
                item.set_attribute(CHECKED, bool_attr(checked));
            }
        }

        if items.iter().all(MenuElement::is_disabled) {
            trigger.set_disabled(true);
        }

        Ok(Self(Rc::new(RefCell::new(State {
            host,
            trigger,
            menu,
            items,
            checkable,
            listeners: Listeners::default(),
            outside_pointer: None,
        }))))
    }

    pub fn trigger(&self) -> H::Element {
        self.0.borrow().trigger.clone()
    }

    pub fn menu(&self) -> H::Element {
        self.0.borrow().menu.clone()
    }

    pub fn items(&self) -> Vec<H::Element> {
        self.0.borrow().items.clone()
    }

    pub fn checkable(&self) -> Checkable {
        self.0.borrow().checkable
    }

    pub fn checked_items(&self) -> Vec<H::Element> {
        self.items().into_iter().filter(is_checked).collect()
    }

    pub fn is_expanded(&self) -> bool {
        self.0.borrow().trigger.attribute(EXPANDED).as_deref() == Some("true")
    }

    /// Show the menu and focus the checked item in single select mode, or
    /// the first enabled item otherwise.
    ///
    /// Does nothing while the trigger is disabled.
    pub fn open(&self) -> &Self {
        let focus = {
            let mut state = self.0.borrow_mut();

            if state.trigger.is_disabled() {
                return self;
            }

            state.trigger.set_attribute(EXPANDED, "true");
            state.menu.set_hidden(false);

            if state.outside_pointer.is_none() {
                let listener = state.host.on_pointer_down(self.outside_pointer_handler());
                state.outside_pointer = Some(listener);
            }

            state.initial_focus()
        };

        if let Some(item) = focus {
            item.focus();
        }

        self.emit(&Event::Open);
        self
    }

    pub fn close(&self) -> &Self {
        let outside_pointer = {
            let mut state = self.0.borrow_mut();
            state.trigger.set_attribute(EXPANDED, "false");
            state.menu.set_hidden(true);
            state.outside_pointer.take()
        };
        drop(outside_pointer);

        self.emit(&Event::Close);
        self
    }

    pub fn toggle(&self) -> &Self {
        if self.is_expanded() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Choose `item`, updating its checked state according to the
    /// [`Checkable`] mode, and emit [`Event::Choose`].
    pub fn choose(&self, item: &H::Element) -> Result<&Self, InvalidArgumentError> {
        {
            let state = self.0.borrow();
            let index = state.index_of(item).ok_or(InvalidArgumentError)?;
            let chosen = &state.items[index];

            match state.checkable {
                Checkable::None => (),
                Checkable::Single => {
                    for item in &state.items {
                        item.set_attribute(CHECKED, "false");
                    }

                    chosen.set_attribute(CHECKED, "true");
                }
                Checkable::Multiple => {
                    chosen.set_attribute(CHECKED, bool_attr(!is_checked(chosen)))
                }
            }
        }

        self.emit(&Event::Choose(item));
        Ok(self)
    }

    pub fn on(&self, kind: EventKind, handler: &Handler<H::Element>) {
        self.0.borrow_mut().listeners.add(kind, handler.clone());
    }

    /// Remove the first registration of `handler` for `kind`. Removing a
    /// handler that isn't registered does nothing.
    pub fn off(&self, kind: EventKind, handler: &Handler<H::Element>) {
        self.0.borrow_mut().listeners.remove(kind, handler);
    }

    pub fn trigger_click(&self) {
        self.toggle();
    }

    pub fn trigger_keydown(&self, key: Key) -> Propagation {
        match key {
            Key::ArrowDown => {
                if self.is_expanded() {
                    self.focus_first_enabled();
                } else {
                    self.open();
                }
            }
            Key::ArrowUp => {
                if self.is_expanded() {
                    self.close();
                }
            }
            Key::Escape | Key::Tab => (),
        }

        Propagation::Default
    }

    /// Choose a clicked item, then close the menu and return focus to the
    /// trigger. Clicks on disabled items and on elements that aren't items
    /// are ignored.
    pub fn item_click(&self, item: &H::Element) {
        if item.is_disabled() || self.choose(item).is_err() {
            return;
        }

        self.close();
        self.trigger().focus();
    }

    pub fn item_keydown(&self, item: &H::Element, key: Key) -> Propagation {
        let Some(index) = self.0.borrow().index_of(item) else {
            return Propagation::Default;
        };

        match key {
            Key::ArrowDown => {
                self.focus_next(index, Direction::Down);
                Propagation::PreventDefault
            }
            Key::ArrowUp => {
                self.focus_next(index, Direction::Up);
                Propagation::PreventDefault
            }
            Key::Escape => {
                self.close();
                self.trigger().focus();
                Propagation::PreventDefault
            }
            // Closing leaves focus where it is, so tabbing carries on through
            // the page from the trigger.
            Key::Tab => {
                self.close();
                Propagation::Default
            }
        }
    }

    fn focus_next(&self, from: usize, direction: Direction) {
        let next = self.0.borrow().next_enabled(from, direction);

        if let Some(item) = next {
            item.focus();
        }
    }

    fn focus_first_enabled(&self) {
        let first = self.0.borrow().first_enabled();

        if let Some(item) = first {
            item.focus();
        }
    }

    fn outside_pointer_handler(&self) -> Box<dyn FnMut(&H::Element)> {
        let weak: Weak<RefCell<State<H>>> = Rc::downgrade(&self.0);

        Box::new(move |target: &H::Element| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let menu_button = MenuButton(state);

            if menu_button.is_expanded() && !menu_button.0.borrow().is_inside(target) {
                menu_button.close();
            }
        })
    }

    fn emit(&self, event: &Event<H::Element>) {
        let handlers = self.0.borrow().listeners.snapshot(event.kind());

        for handler in handlers {
            handler.call(event);
        }
    }
}

impl<H: Host> State<H> {
    fn index_of(&self, item: &H::Element) -> Option<usize> {
        self.items.iter().position(|candidate| candidate.is_same(item))
    }

    fn is_inside(&self, target: &H::Element) -> bool {
        self.trigger.contains(target) || self.menu.contains(target)
    }

    fn is_enabled(&self, index: usize) -> bool {
        !self.items[index].is_disabled()
    }

    fn first_enabled(&self) -> Option<H::Element> {
        first_enabled(self.items.len(), Direction::Down, |index| {
            self.is_enabled(index)
        })
        .map(|index| self.items[index].clone())
    }

    fn next_enabled(&self, from: usize, direction: Direction) -> Option<H::Element> {
        next_enabled(self.items.len(), from, direction, |index| {
            self.is_enabled(index)
        })
        .map(|index| self.items[index].clone())
    }

    fn initial_focus(&self) -> Option<H::Element> {
        let checked = (self.checkable == Checkable::Single)
            .then(|| {
                self.items
                    .iter()
                    .find(|item| is_checked(*item) && !item.is_disabled())
                    .cloned()
            })
            .flatten();

        checked.or_else(|| self.first_enabled())
    }
}
