//! Page chrome: basket counter, catalog gallery, scroll lock.

use super::Component;
use crate::dom::{DomError, Element, EventKind, ensure_element};
use crate::events::{AppEvent, EventBroker};

/// Partial page state.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub counter: Option<usize>,
    pub catalog: Option<Vec<Element>>,
    pub locked: Option<bool>,
}

/// The page around the modal.
#[derive(Debug)]
pub struct Page {
    container: Element,
    counter: Element,
    catalog: Element,
    wrapper: Element,
}

impl Page {
    /// Wrap the page body. The header basket button emits `basket:open`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if any part of the page shell is
    /// missing.
    pub fn new(container: Element, events: &EventBroker) -> Result<Self, DomError> {
        let basket = ensure_element(".header__basket", &container)?;
        let page = Self {
            counter: ensure_element(".header__basket-counter", &container)?,
            catalog: ensure_element(".gallery", &container)?,
            wrapper: ensure_element(".page__wrapper", &container)?,
            container,
        };

        let open_basket = events.trigger(AppEvent::BasketOpen);
        basket.add_event_listener(EventKind::Click, move |_| open_basket());
        Ok(page)
    }

    /// Number of products in the basket.
    pub fn set_counter(&self, count: usize) {
        self.counter.set_text(&count.to_string());
    }

    /// Replace the gallery cards.
    pub fn set_catalog(&self, items: Vec<Element>) {
        self.catalog.replace_children(items);
    }

    /// Lock scrolling while the modal is open.
    pub fn set_locked(&self, locked: bool) {
        self.wrapper.toggle_class("page__wrapper_locked", locked);
    }
}

impl Component for Page {
    type Data = PageData;

    fn container(&self) -> &Element {
        &self.container
    }

    fn apply(&self, data: PageData) {
        if let Some(counter) = data.counter {
            self.set_counter(counter);
        }
        if let Some(catalog) = data.catalog {
            self.set_catalog(catalog);
        }
        if let Some(locked) = data.locked {
            self.set_locked(locked);
        }
    }
}
