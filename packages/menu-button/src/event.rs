use std::{fmt, rc::Rc};

use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
    Choose,
}

#[derive(Debug)]
pub enum Event<'a, E> {
    Open,
    Close,
    /// An item was chosen, by a click or by [`crate::MenuButton::choose`].
    Choose(&'a E),
}

impl<E> Event<'_, E> {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Open => EventKind::Open,
            Self::Close => EventKind::Close,
            Self::Choose(_) => EventKind::Choose,
        }
    }
}

/// An event callback.
///
/// Handlers compare by identity: a clone of a handler is equal to it, but two
/// handlers made from the same closure code are not.
pub struct Handler<E>(Rc<dyn Fn(&Event<E>)>);

impl<E> Handler<E> {
    pub fn new(f: impl Fn(&Event<E>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event<E>) {
        (self.0)(event)
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> PartialEq for Handler<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> Eq for Handler<E> {}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Handlers for each [`EventKind`], in registration order.
pub struct Listeners<E> {
    open: Vec<Handler<E>>,
    close: Vec<Handler<E>>,
    choose: Vec<Handler<E>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            open: Vec::new(),
            close: Vec::new(),
            choose: Vec::new(),
        }
    }
}

impl<E> Listeners<E> {
    pub fn add(&mut self, kind: EventKind, handler: Handler<E>) {
        self.handlers_mut(kind).push(handler);
    }

    /// Remove the first registration of `handler`, if there is one.
    pub fn remove(&mut self, kind: EventKind, handler: &Handler<E>) -> bool {
        let handlers = self.handlers_mut(kind);

        if let Some(index) = handlers.iter().position(|h| h == handler) {
            handlers.remove(index);
            true
        } else {
            false
        }
    }

    pub fn len(&self, kind: EventKind) -> usize {
        self.handlers(kind).len()
    }

    /// A copy of the handlers for `kind`, so they can be called while the
    /// registry itself is borrowed or modified.
    pub fn snapshot(&self, kind: EventKind) -> Vec<Handler<E>> {
        self.handlers(kind).to_vec()
    }

    fn handlers(&self, kind: EventKind) -> &[Handler<E>] {
        match kind {
            EventKind::Open => &self.open,
            EventKind::Close => &self.close,
            EventKind::Choose => &self.choose,
        }
    }

    fn handlers_mut(&mut self, kind: EventKind) -> &mut Vec<Handler<E>> {
        match kind {
            EventKind::Open => &mut self.open,
            EventKind::Close => &mut self.close,
            EventKind::Choose => &mut self.choose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, str::FromStr};

    use strum::IntoEnumIterator;

    use super::{Event, EventKind, Handler, Listeners};

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Handler<()> {
        let log = log.clone();
        Handler::new(move |_| log.borrow_mut().push(name))
    }

    fn fire(listeners: &Listeners<()>, event: Event<()>) {
        for handler in listeners.snapshot(event.kind()) {
            handler.call(&event);
        }
    }

    #[test]
    fn kind_names() {
        let names: Vec<String> = EventKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(names, ["open", "close", "choose"]);
        assert_eq!(EventKind::from_str("choose"), Ok(EventKind::Choose));
    }

    #[test]
    fn registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        listeners.add(EventKind::Open, recording(&log, "first"));
        listeners.add(EventKind::Open, recording(&log, "second"));
        listeners.add(EventKind::Close, recording(&log, "close"));

        fire(&listeners, Event::Open);

        assert_eq!(*log.borrow(), ["first", "second"]);
    }

    #[test]
    fn duplicates_are_kept_and_removed_one_at_a_time() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler = recording(&log, "dup");
        let mut listeners = Listeners::default();
        listeners.add(EventKind::Close, handler.clone());
        listeners.add(EventKind::Close, handler.clone());

        fire(&listeners, Event::Close);
        assert_eq!(log.borrow().len(), 2);

        assert!(listeners.remove(EventKind::Close, &handler));
        assert_eq!(listeners.len(EventKind::Close), 1);
        assert!(listeners.remove(EventKind::Close, &handler));
        assert!(!listeners.remove(EventKind::Close, &handler));
    }

    #[test]
    fn remove_unregistered() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registered = recording(&log, "registered");
        let mut listeners = Listeners::default();
        listeners.add(EventKind::Open, registered);

        assert!(!listeners.remove(EventKind::Choose, &recording(&log, "other")));
        assert!(!listeners.remove(EventKind::Open, &recording(&log, "other")));
        assert_eq!(listeners.len(EventKind::Open), 1);
    }
}
