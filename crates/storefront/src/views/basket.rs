//! Basket modal content.

use larek_core::{Price, ProductId};

use super::{Component, synapses};
use crate::dom::{DomError, Element, EventKind, ensure_element};
use crate::events::{AppEvent, EventBroker};

/// Partial basket state.
#[derive(Debug, Clone, Default)]
pub struct BasketData {
    /// Rendered rows.
    pub items: Option<Vec<Element>>,
    pub total: Option<Price>,
    /// Ids of the products that will be ordered.
    pub selected: Option<Vec<ProductId>>,
}

/// The basket: rows, total and the checkout button.
#[derive(Debug)]
pub struct Basket {
    container: Element,
    list: Element,
    total: Element,
    button: Element,
}

impl Basket {
    /// Wrap the `#basket` template. The checkout button emits `order:open`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if the list, price or button is missing.
    pub fn new(container: Element, events: &EventBroker) -> Result<Self, DomError> {
        let basket = Self {
            list: ensure_element(".basket__list", &container)?,
            total: ensure_element(".basket__price", &container)?,
            button: ensure_element(".basket__button", &container)?,
            container,
        };

        let open_order = events.trigger(AppEvent::OrderOpen);
        basket
            .button
            .add_event_listener(EventKind::Click, move |_| open_order());

        basket.set_items(Vec::new());
        Ok(basket)
    }

    /// Replace the rows, or show the empty placeholder.
    pub fn set_items(&self, items: Vec<Element>) {
        if items.is_empty() {
            self.list
                .replace_children([Element::new("p").with_text("Корзина пуста")]);
        } else {
            self.list.replace_children(items);
        }
    }

    pub fn set_total(&self, total: Price) {
        self.total.set_text(&synapses(total));
    }

    /// Checkout is disabled while nothing is selected.
    pub fn set_selected(&self, selected: &[ProductId]) {
        self.button.set_disabled(selected.is_empty());
    }
}

impl Component for Basket {
    type Data = BasketData;

    fn container(&self) -> &Element {
        &self.container
    }

    fn apply(&self, data: BasketData) {
        if let Some(items) = data.items {
            self.set_items(items);
        }
        if let Some(total) = data.total {
            self.set_total(total);
        }
        if let Some(selected) = &data.selected {
            self.set_selected(selected);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::events::names;
    use crate::templates::Template;

    #[test]
    fn test_empty_placeholder() {
        let basket = Basket::new(Template::Basket.instantiate(), &EventBroker::new()).unwrap();
        let list = basket.container().query_selector(".basket__list").unwrap().unwrap();
        assert_eq!(list.text_content(), "Корзина пуста");

        basket.set_items(vec![Element::new("li").with_text("a"), Element::new("li").with_text("b")]);
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.text_content(), "ab");
    }

    #[test]
    fn test_checkout_button() {
        let events = EventBroker::new();
        let opened = Rc::new(Cell::new(0));
        let counter = Rc::clone(&opened);
        events.on(names::ORDER_OPEN, move |_| counter.set(counter.get() + 1));

        let basket = Basket::new(Template::Basket.instantiate(), &events).unwrap();
        let root = basket.render(BasketData {
            total: Some(Price::from_units(2200)),
            selected: Some(Vec::new()),
            ..BasketData::default()
        });
        let button = root.query_selector(".basket__button").unwrap().unwrap();
        assert!(button.is_disabled());
        button.click();
        assert_eq!(opened.get(), 0);

        basket.set_selected(&[ProductId::new("a")]);
        button.click();
        assert_eq!(opened.get(), 1);

        let price = root.query_selector(".basket__price").unwrap().unwrap();
        assert_eq!(price.text(), "2200 синапсов");
    }
}
