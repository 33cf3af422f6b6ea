//! View components.
//!
//! Each view wraps a container [`Element`] and the child elements it writes
//! to, found once at construction. Views never read the model: they are
//! handed plain data through `set_*` methods or a partial [`Component::Data`]
//! struct, and report user interaction through callbacks or broker events.

mod basket;
mod card;
mod contacts;
mod form;
mod modal;
mod order;
mod page;
mod success;

pub use basket::{Basket, BasketData};
pub use card::{Card, CardData, category_class};
pub use contacts::{ContactsData, ContactsForm};
pub use form::{Form, FormView};
pub use modal::{Modal, ModalData};
pub use order::{OrderForm, OrderFormData};
pub use page::{Page, PageData};
pub use success::{Success, SuccessData};

use larek_core::Price;

use crate::dom::Element;

/// A view rendered from partial data.
pub trait Component {
    /// Partial view state; `None` fields are left untouched.
    type Data: Default;

    /// The root element of the view.
    fn container(&self) -> &Element;

    /// Write the provided fields to the DOM.
    fn apply(&self, data: Self::Data);

    /// Apply `data` and return the container.
    fn render(&self, data: Self::Data) -> Element {
        self.apply(data);
        self.container().clone()
    }
}

/// A price in the storefront's display currency.
#[must_use]
pub fn synapses(price: Price) -> String {
    format!("{price} синапсов")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synapses() {
        assert_eq!(synapses(Price::from_units(750)), "750 синапсов");
        assert_eq!(synapses(Price::ZERO), "0 синапсов");
    }
}
