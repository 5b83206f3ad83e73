//! An in-memory document.
//!
//! Just enough DOM to drive a [`MenuButton`](crate::MenuButton) without a
//! browser: tagged elements with attributes and children, document focus,
//! and pointer down dispatch.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use crate::element::{Host, MenuElement};

/// The tag [`MenuElement::menu_items`] collects.
const ITEM_TAG: &str = "button";

type PointerHandler = Rc<RefCell<Box<dyn FnMut(&DryElement)>>>;

#[derive(Default)]
struct Document {
    elements: Vec<DryElement>,
    focused: Option<DryElement>,
    pointer_handlers: Vec<(u64, PointerHandler)>,
    next_handler_id: u64,
}

#[derive(Clone, Default)]
pub struct DryDocument(Rc<RefCell<Document>>);

impl DryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, tag: &str) -> DryElement {
        let elem = DryElement(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            parent: Weak::new(),
            document: Rc::downgrade(&self.0),
        })));
        self.0.borrow_mut().elements.push(elem.clone());
        elem
    }

    pub fn focused(&self) -> Option<DryElement> {
        self.0.borrow().focused.clone()
    }

    pub fn pointer_listener_count(&self) -> usize {
        self.0.borrow().pointer_handlers.len()
    }

    /// Dispatch a pointer down on `target` to every document listener.
    pub fn pointer_down(&self, target: &DryElement) {
        let handlers: Vec<PointerHandler> = self
            .0
            .borrow()
            .pointer_handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(target);
        }
    }
}

impl Host for DryDocument {
    type Element = DryElement;
    type Listener = DryListener;

    fn element_by_id(&self, id: &str) -> Option<DryElement> {
        self.0
            .borrow()
            .elements
            .iter()
            .find(|elem| elem.attribute("id").as_deref() == Some(id))
            .cloned()
    }

    fn on_pointer_down(&self, handler: Box<dyn FnMut(&DryElement)>) -> DryListener {
        let mut doc = self.0.borrow_mut();
        let id = doc.next_handler_id;
        doc.next_handler_id += 1;
        doc.pointer_handlers.push((id, Rc::new(RefCell::new(handler))));

        DryListener {
            document: Rc::downgrade(&self.0),
            id,
        }
    }
}

pub struct DryListener {
    document: Weak<RefCell<Document>>,
    id: u64,
}

impl Drop for DryListener {
    fn drop(&mut self) {
        if let Some(doc) = self.document.upgrade() {
            doc.borrow_mut()
                .pointer_handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<DryElement>,
    parent: Weak<RefCell<Node>>,
    document: Weak<RefCell<Document>>,
}

#[derive(Clone)]
pub struct DryElement(Rc<RefCell<Node>>);

impl DryElement {
    pub fn set(&self, name: &str, value: &str) -> &Self {
        self.set_attribute(name, value);
        self
    }

    pub fn child(&self, child: &DryElement) -> &Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        self
    }

    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    pub fn is_focused(&self) -> bool {
        let Some(doc) = self.document() else {
            return false;
        };
        let focused = doc.borrow().focused.clone();
        focused.is_some_and(|focused| focused.is_same(self))
    }

    fn document(&self) -> Option<Rc<RefCell<Document>>> {
        self.0.borrow().document.upgrade()
    }

    fn parent(&self) -> Option<DryElement> {
        self.0.borrow().parent.upgrade().map(DryElement)
    }

    fn collect_items(&self, items: &mut Vec<DryElement>) {
        for child in &self.0.borrow().children {
            if child.0.borrow().tag == ITEM_TAG {
                items.push(child.clone());
            }

            child.collect_items(items);
        }
    }
}

impl MenuElement for DryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn focus(&self) {
        if let Some(doc) = self.document() {
            doc.borrow_mut().focused = Some(self.clone());
        }
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());

        while let Some(elem) = current {
            if elem.is_same(self) {
                return true;
            }

            current = elem.parent();
        }

        false
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn menu_items(&self) -> Vec<Self> {
        let mut items = Vec::new();
        self.collect_items(&mut items);
        items
    }
}

impl fmt::Debug for DryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("DryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .finish()
    }
}

impl PartialEq for DryElement {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for DryElement {}
