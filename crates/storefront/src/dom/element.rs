//! Reference-counted element handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::DomError;
use super::event::{DomEvent, EventKind};
use super::selector::Selector;

/// A DOM event listener.
pub type Listener = Rc<dyn Fn(&DomEvent)>;

/// Handle returned by [`Element::add_event_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    value: String,
    disabled: bool,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
    listeners: Vec<(ListenerId, EventKind, Listener)>,
    next_listener: u64,
}

/// A shared handle to one element of the tree.
///
/// Clones refer to the same element; equality is identity.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

/// A non-owning element handle, for listeners that refer to their own element.
#[derive(Clone)]
pub struct WeakElement(Weak<RefCell<Node>>);

impl WeakElement {
    /// The element, if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakElement").field(&self.upgrade()).finish()
    }
}

impl Element {
    /// Create a detached element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            children: Vec::new(),
            parent: Weak::new(),
            listeners: Vec::new(),
            next_listener: 0,
        })))
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Add space-separated classes.
    #[must_use]
    pub fn with_class(self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_child(self, child: Self) -> Self {
        self.append_child(&child);
        self
    }

    #[must_use]
    pub fn with_children(self, children: impl IntoIterator<Item = Self>) -> Self {
        for child in children {
            self.append_child(&child);
        }
        self
    }

    /// A weak handle to this element.
    #[must_use]
    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    /// Add `class` when `on`, remove it otherwise.
    pub fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// The `class` attribute value.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    /// Replace every class.
    pub fn set_class_name(&self, classes: &str) {
        self.0.borrow_mut().classes = classes.split_whitespace().map(str::to_string).collect();
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Set an attribute. `class` is routed to the class list.
    pub fn set_attribute(&self, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(value);
            return;
        }

        let mut node = self.0.borrow_mut();
        if let Some(slot) = node.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            node.attributes.push((name.to_string(), value.to_string()));
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            let class_name = self.class_name();
            return (!class_name.is_empty()).then_some(class_name);
        }
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.retain(|(n, _)| n != name);
    }

    /// All non-class attributes, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    /// Set `data-{key}`.
    pub fn set_data(&self, key: &str, value: &str) {
        self.set_attribute(&format!("data-{key}"), value);
    }

    /// Read `data-{key}`.
    #[must_use]
    pub fn data(&self, key: &str) -> Option<String> {
        self.attribute(&format!("data-{key}"))
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the element's content with a text node.
    pub fn set_text(&self, text: &str) {
        self.clear_children();
        self.0.borrow_mut().text = text.to_string();
    }

    /// The element's own text.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Own text followed by the text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text();
        for child in self.children() {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Set the current value of an input.
    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    // =========================================================================
    // Tree
    // =========================================================================

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// Snapshot of the child list.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    /// Move `child` to the end of this element's children.
    pub fn append_child(&self, child: &Self) {
        if child == self {
            return;
        }
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Replace all children, moving each new child out of its old parent.
    pub fn replace_children(&self, children: impl IntoIterator<Item = Self>) {
        self.clear_children();
        for child in children {
            self.append_child(&child);
        }
    }

    /// Detach every child.
    pub fn clear_children(&self) {
        let old = std::mem::take(&mut self.0.borrow_mut().children);
        for child in old {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Detach this element from its parent.
    pub fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Depth-first pre-order list of descendants (excluding `self`).
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(element) = stack.pop() {
            stack.extend(element.children().into_iter().rev());
            out.push(element);
        }
        out
    }

    /// The first descendant matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] if `selector` cannot be parsed.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.descendants().into_iter().find(|e| selector.matches(e)))
    }

    /// Every descendant matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] if `selector` cannot be parsed.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Self>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants()
            .into_iter()
            .filter(|e| selector.matches(e))
            .collect())
    }

    /// The first descendant whose `name` attribute equals `name`.
    #[must_use]
    pub fn named_item(&self, name: &str) -> Option<Self> {
        self.descendants()
            .into_iter()
            .find(|e| e.attribute("name").as_deref() == Some(name))
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn add_event_listener(
        &self,
        kind: EventKind,
        listener: impl Fn(&DomEvent) + 'static,
    ) -> ListenerId {
        let mut node = self.0.borrow_mut();
        let id = ListenerId(node.next_listener);
        node.next_listener += 1;
        node.listeners.push((id, kind, Rc::new(listener)));
        id
    }

    /// Returns `false` if the listener was already removed.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut node = self.0.borrow_mut();
        let before = node.listeners.len();
        node.listeners.retain(|(l, _, _)| *l != id);
        node.listeners.len() != before
    }

    fn listeners(&self, kind: EventKind) -> Vec<Listener> {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, l)| Rc::clone(l))
            .collect()
    }

    /// Dispatch `event` at its target and bubble it through the ancestors.
    ///
    /// The path is fixed before the first listener runs. Returns `false` if a
    /// listener called [`DomEvent::prevent_default`].
    pub fn dispatch_event(event: &DomEvent) -> bool {
        let mut path = vec![event.target().clone()];
        while let Some(parent) = path.last().and_then(Self::parent) {
            path.push(parent);
        }

        for element in &path {
            event.set_current_target(element);
            for listener in element.listeners(event.kind()) {
                listener(event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        !event.is_default_prevented()
    }

    /// Simulate a user click. Disabled elements ignore clicks.
    ///
    /// A `type="submit"` button then submits its enclosing form unless a
    /// click listener prevented the default.
    pub fn click(&self) {
        if self.is_disabled() {
            return;
        }
        let proceed = Self::dispatch_event(&DomEvent::new(EventKind::Click, self.clone()));

        if proceed
            && self.attribute("type").as_deref() == Some("submit")
            && let Some(form) = self.closest("form")
        {
            form.submit();
        }
    }

    /// The nearest ancestor (or `self`) with the given tag.
    fn closest(&self, tag: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.tag() == tag {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }

    /// Simulate typing: set the value, then dispatch `input`.
    pub fn input(&self, value: &str) {
        self.set_value(value);
        Self::dispatch_event(&DomEvent::new(EventKind::Input, self.clone()));
    }

    /// Simulate form submission. Returns `false` if the default was prevented.
    pub fn submit(&self) -> bool {
        Self::dispatch_event(&DomEvent::new(EventKind::Submit, self.clone()))
    }

    /// Serialize the element and its subtree.
    #[must_use]
    pub fn to_html(&self) -> String {
        super::html::render(self)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish_non_exhaustive()
    }
}
