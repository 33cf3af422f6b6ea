//! DOM events dispatched to element listeners.

use std::cell::{Cell, RefCell};

use super::element::Element;

/// The kinds of DOM event the storefront listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Submit,
    KeyDown,
}

/// A dispatched event.
///
/// The target is fixed at creation; `current_target` follows the event as it
/// bubbles up the ancestor chain.
#[derive(Debug)]
pub struct DomEvent {
    kind: EventKind,
    target: Element,
    current_target: RefCell<Option<Element>>,
    key: Option<String>,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl DomEvent {
    /// Create an event of `kind` aimed at `target`.
    #[must_use]
    pub fn new(kind: EventKind, target: Element) -> Self {
        Self {
            kind,
            target,
            current_target: RefCell::new(None),
            key: None,
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    /// Create a `keydown` event for `key` (e.g. `"Escape"`).
    #[must_use]
    pub fn key_down(target: Element, key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(EventKind::KeyDown, target)
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// The element the event was dispatched on.
    #[must_use]
    pub const fn target(&self) -> &Element {
        &self.target
    }

    /// The element whose listeners are currently running.
    #[must_use]
    pub fn current_target(&self) -> Option<Element> {
        self.current_target.borrow().clone()
    }

    pub(crate) fn set_current_target(&self, element: &Element) {
        *self.current_target.borrow_mut() = Some(element.clone());
    }

    /// The key name of a `keydown` event.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Stop the event from reaching ancestors of the current target.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    /// Mark the event's default action (e.g. form navigation) as cancelled.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
