//! The modal window.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::Component;
use crate::dom::{DomError, Document, Element, EventKind, ListenerId, ensure_element};
use crate::events::{AppEvent, EventBroker};

/// Partial modal state.
#[derive(Debug, Clone, Default)]
pub struct ModalData {
    pub content: Option<Element>,
}

#[derive(Debug)]
struct ModalInner {
    container: Element,
    content: Element,
    document: Document,
    events: EventBroker,
    escape: Cell<Option<ListenerId>>,
}

/// The page's single modal window.
///
/// Closes on the close button, on a click on the backdrop, and on Escape
/// while open. Cheap to clone; clones control the same window.
#[derive(Debug, Clone)]
pub struct Modal {
    inner: Rc<ModalInner>,
}

impl Modal {
    /// Wrap `#modal-container`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if `.modal__close` or `.modal__content`
    /// is missing.
    pub fn new(
        container: Element,
        document: &Document,
        events: &EventBroker,
    ) -> Result<Self, DomError> {
        let close_button = ensure_element(".modal__close", &container)?;
        let content = ensure_element(".modal__content", &container)?;

        let inner = Rc::new(ModalInner {
            container,
            content,
            document: document.clone(),
            events: events.clone(),
            escape: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        close_button.add_event_listener(EventKind::Click, move |event| {
            event.stop_propagation();
            close(&weak);
        });

        let weak = Rc::downgrade(&inner);
        inner
            .container
            .add_event_listener(EventKind::Click, move |_| close(&weak));

        inner
            .content
            .add_event_listener(EventKind::Click, |event| event.stop_propagation());

        Ok(Self { inner })
    }

    /// Replace the content.
    pub fn set_content(&self, content: &Element) {
        self.inner.content.replace_children([content.clone()]);
    }

    /// Show the window, emit `modal:open` and start listening for Escape.
    pub fn open(&self) {
        let inner = &self.inner;
        inner.container.add_class("modal_active");
        inner.events.emit(AppEvent::ModalOpen);

        if inner.escape.get().is_none() {
            let weak = Rc::downgrade(inner);
            let id = inner.document.add_event_listener(EventKind::KeyDown, move |event| {
                if event.key() == Some("Escape") {
                    close(&weak);
                }
            });
            inner.escape.set(Some(id));
        }
    }

    /// Hide the window, drop its content, emit `modal:close` and stop
    /// listening for Escape.
    pub fn close(&self) {
        self.inner.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.container.has_class("modal_active")
    }

    /// The element holding the current content.
    #[must_use]
    pub fn content(&self) -> &Element {
        &self.inner.content
    }
}

impl ModalInner {
    fn close(&self) {
        self.container.remove_class("modal_active");
        self.content.clear_children();
        if let Some(id) = self.escape.take() {
            self.document.remove_event_listener(id);
        }
        self.events.emit(AppEvent::ModalClose);
    }
}

fn close(modal: &Weak<ModalInner>) {
    if let Some(inner) = modal.upgrade() {
        inner.close();
    }
}

impl Component for Modal {
    type Data = ModalData;

    fn container(&self) -> &Element {
        &self.inner.container
    }

    fn apply(&self, data: ModalData) {
        if let Some(content) = &data.content {
            self.set_content(content);
        }
    }

    /// Apply `data`, then open the window.
    fn render(&self, data: ModalData) -> Element {
        self.apply(data);
        self.open();
        self.inner.container.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::templates::mount_page;

    fn setup() -> (Document, Modal, Rc<RefCell<Vec<&'static str>>>) {
        let document = Document::new();
        mount_page(&document);
        let events = EventBroker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        events.on("modal:*", move |event| sink.borrow_mut().push(event.name()));

        let container = ensure_element("#modal-container", document.root()).unwrap();
        let modal = Modal::new(container, &document, &events).unwrap();
        (document, modal, seen)
    }

    #[test]
    fn test_render_opens_with_content() {
        let (_document, modal, seen) = setup();
        let content = Element::new("p").with_text("hello");
        modal.render(ModalData {
            content: Some(content.clone()),
        });

        assert!(modal.is_open());
        assert_eq!(modal.content().children(), vec![content]);
        assert_eq!(*seen.borrow(), vec!["modal:open"]);
    }

    #[test]
    fn test_close_clears_content() {
        let (_document, modal, seen) = setup();
        modal.render(ModalData {
            content: Some(Element::new("p")),
        });
        modal.close();

        assert!(!modal.is_open());
        assert!(modal.content().children().is_empty());
        assert_eq!(*seen.borrow(), vec!["modal:open", "modal:close"]);
    }

    #[test]
    fn test_escape_closes_only_while_open() {
        let (document, modal, seen) = setup();
        document.key_down("Escape");
        assert!(seen.borrow().is_empty());

        modal.open();
        document.key_down("Enter");
        assert!(modal.is_open());
        document.key_down("Escape");
        assert!(!modal.is_open());

        document.key_down("Escape");
        assert_eq!(*seen.borrow(), vec!["modal:open", "modal:close"]);
    }

    #[test]
    fn test_clicks() {
        let (document, modal, seen) = setup();
        let inside = Element::new("button");
        modal.render(ModalData {
            content: Some(Element::new("div").with_child(inside.clone())),
        });

        inside.click();
        assert!(modal.is_open());

        document
            .query_selector(".modal__close")
            .unwrap()
            .unwrap()
            .click();
        assert!(!modal.is_open());
        assert_eq!(*seen.borrow(), vec!["modal:open", "modal:close"]);

        modal.open();
        modal.container().click();
        assert!(!modal.is_open());
    }
}
