//! Headless DOM the views render into.
//!
//! # Architecture
//!
//! - [`Element`] is a shared handle (`Rc<RefCell<_>>`) to one node. Parents
//!   own their children; children hold a weak link back.
//! - Events are dispatched at a target and bubble up through the ancestors
//!   (and finally the [`Document`] root) until a listener stops them.
//! - Selectors cover the subset the storefront uses, see [`Selector`].
//!
//! Listeners that need their own element must capture a [`WeakElement`],
//! otherwise the element keeps itself alive.

mod document;
mod element;
mod event;
pub mod html;
mod selector;

pub use document::Document;
pub use element::{Element, Listener, ListenerId, WeakElement};
pub use event::{DomEvent, EventKind};
pub use selector::Selector;

use thiserror::Error;

/// Errors raised while locating template elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A required element is missing.
    #[error("element not found: {selector}")]
    NotFound { selector: String },

    /// The selector is outside the supported subset.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Find the element matching `selector` under `root`.
///
/// # Errors
///
/// Returns [`DomError::NotFound`] if nothing matches and
/// [`DomError::InvalidSelector`] if the selector cannot be parsed.
pub fn ensure_element(selector: &str, root: &Element) -> Result<Element, DomError> {
    root.query_selector(selector)?.ok_or_else(|| DomError::NotFound {
        selector: selector.to_string(),
    })
}

/// Find every element matching `selector` under `root`.
///
/// # Errors
///
/// Returns [`DomError::NotFound`] if nothing matches and
/// [`DomError::InvalidSelector`] if the selector cannot be parsed.
pub fn ensure_all_elements(selector: &str, root: &Element) -> Result<Vec<Element>, DomError> {
    let elements = root.query_selector_all(selector)?;
    if elements.is_empty() {
        return Err(DomError::NotFound {
            selector: selector.to_string(),
        });
    }
    Ok(elements)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_element() {
        let root = Element::new("div").with_child(Element::new("p").with_class("card__text"));
        assert_eq!(ensure_element(".card__text", &root).unwrap().tag(), "p");
        assert_eq!(
            ensure_element(".card__title", &root),
            Err(DomError::NotFound {
                selector: ".card__title".to_string()
            })
        );
        assert_eq!(
            ensure_all_elements("button", &root),
            Err(DomError::NotFound {
                selector: "button".to_string()
            })
        );
    }
}
