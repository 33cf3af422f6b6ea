//! The document: root element, `<body>` and document-level listeners.

use super::DomError;
use super::element::{Element, ListenerId};
use super::event::{DomEvent, EventKind};

/// An HTML document.
///
/// Cheap to clone; clones share the same tree.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    body: Element,
}

impl Document {
    /// Create a document with an empty `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let body = Element::new("body");
        let root = Element::new("html")
            .with_attr("lang", "ru")
            .with_child(body.clone());
        Self { root, body }
    }

    /// The `<html>` element.
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    #[must_use]
    pub const fn body(&self) -> &Element {
        &self.body
    }

    /// Listen on the document itself. Events dispatched anywhere in the tree
    /// bubble up to these listeners.
    pub fn add_event_listener(
        &self,
        kind: EventKind,
        listener: impl Fn(&DomEvent) + 'static,
    ) -> ListenerId {
        self.root.add_event_listener(kind, listener)
    }

    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.root.remove_event_listener(id)
    }

    /// Simulate a key press with focus on `<body>`.
    pub fn key_down(&self, key: &str) {
        Element::dispatch_event(&DomEvent::key_down(self.body.clone(), key));
    }

    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] if `selector` cannot be parsed.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
        self.root.query_selector(selector)
    }

    /// Serialize the whole document.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>{}", self.root.to_html())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_key_down_reaches_document_listener() {
        let document = Document::new();
        let keys = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&keys);
        let id = document.add_event_listener(EventKind::KeyDown, move |event| {
            sink.borrow_mut().push(event.key().unwrap_or_default().to_string());
        });

        document.key_down("Escape");
        assert!(document.remove_event_listener(id));
        document.key_down("Enter");
        assert_eq!(*keys.borrow(), vec!["Escape".to_string()]);
    }

    #[test]
    fn test_to_html() {
        let document = Document::new();
        document
            .body()
            .append_child(&Element::new("main").with_class("gallery"));
        assert_eq!(
            document.to_html(),
            "<!DOCTYPE html><html lang=\"ru\"><body><main class=\"gallery\"></main></body></html>"
        );
        assert!(document.query_selector(".gallery").unwrap().is_some());
    }
}
