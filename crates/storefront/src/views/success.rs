//! Order confirmation.

use larek_core::Price;

use super::{Component, synapses};
use crate::dom::{DomError, Element, EventKind, ensure_element};

/// Partial success state.
#[derive(Debug, Clone, Default)]
pub struct SuccessData {
    pub total: Option<Price>,
}

/// The `#success` view.
#[derive(Debug)]
pub struct Success {
    container: Element,
    total: Element,
    close: Element,
}

impl Success {
    /// Wrap the `#success` template.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if the description or close button is
    /// missing.
    pub fn new(container: Element) -> Result<Self, DomError> {
        Ok(Self {
            total: ensure_element(".film__description", &container)?,
            close: ensure_element(".order-success__close", &container)?,
            container,
        })
    }

    /// Invoke `action` when the close button is clicked.
    pub fn on_close(&self, action: impl Fn() + 'static) {
        self.close
            .add_event_listener(EventKind::Click, move |_| action());
    }

    /// Show the charged amount.
    pub fn set_total(&self, total: Price) {
        self.total.set_text(&format!("Списано {}", synapses(total)));
    }
}

impl Component for Success {
    type Data = SuccessData;

    fn container(&self) -> &Element {
        &self.container
    }

    fn apply(&self, data: SuccessData) {
        if let Some(total) = data.total {
            self.set_total(total);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::templates::Template;

    #[test]
    fn test_total_and_close() {
        let view = Success::new(Template::Success.instantiate()).unwrap();
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        view.on_close(move || flag.set(true));

        let root = view.render(SuccessData {
            total: Some(Price::from_units(750)),
        });
        assert_eq!(
            root.query_selector(".film__description").unwrap().unwrap().text(),
            "Списано 750 синапсов"
        );

        view.close.click();
        assert!(closed.get());
    }
}
