//! First checkout step: payment method and address.

use larek_core::OrderField;

use super::{Component, Form, FormView};
use crate::dom::{DomError, Element, EventKind, WeakElement, ensure_all_elements};
use crate::events::{AppEvent, EventBroker};

/// Partial state of the order step.
#[derive(Debug, Clone, Default)]
pub struct OrderFormData {
    /// Label of the chosen payment button; empty for none.
    pub payment: Option<String>,
    pub address: Option<String>,
    pub valid: Option<bool>,
    pub errors: Option<String>,
}

impl OrderFormData {
    /// A blank, not yet submittable step.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            payment: Some(String::new()),
            address: Some(String::new()),
            valid: Some(false),
            errors: Some(String::new()),
        }
    }
}

/// The `#order` form.
#[derive(Debug)]
pub struct OrderForm {
    form: Form,
    payment_buttons: Vec<Element>,
    address: Element,
}

impl OrderForm {
    /// Wrap the `#order` template.
    ///
    /// A payment button click highlights that button and emits
    /// `order.payment:change` with its label. Address edits reach the broker
    /// through the shared `input` handling only.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if the payment buttons, the address
    /// input or the shared form elements are missing.
    pub fn new(container: Element, events: &EventBroker) -> Result<Self, DomError> {
        let form = Form::new(container, events)?;
        let payment_buttons = ensure_all_elements(".button_alt", form.container())?;
        let address = form.field(OrderField::Address.name())?;

        let weak_buttons: Vec<WeakElement> =
            payment_buttons.iter().map(Element::downgrade).collect();
        for button in &payment_buttons {
            let buttons = weak_buttons.clone();
            let broker = events.clone();
            button.add_event_listener(EventKind::Click, move |event| {
                let label = event.target().text();
                highlight(buttons.iter().filter_map(WeakElement::upgrade), &label);
                broker.emit(AppEvent::FieldChanged {
                    field: OrderField::Payment,
                    value: label,
                });
            });
        }

        Ok(Self {
            form,
            payment_buttons,
            address,
        })
    }

    /// Highlight the payment button labelled `payment`.
    pub fn set_payment(&self, payment: &str) {
        highlight(self.payment_buttons.iter().cloned(), payment);
    }

    pub fn set_address(&self, address: &str) {
        self.address.set_value(address);
    }
}

fn highlight(buttons: impl Iterator<Item = Element>, label: &str) {
    for button in buttons {
        let active = button.text() == label;
        button.toggle_class("button_alt-active", active);
    }
}

impl FormView for OrderForm {
    fn form(&self) -> &Form {
        &self.form
    }
}

impl Component for OrderForm {
    type Data = OrderFormData;

    fn container(&self) -> &Element {
        self.form.container()
    }

    fn apply(&self, data: OrderFormData) {
        if let Some(payment) = &data.payment {
            self.set_payment(payment);
        }
        if let Some(address) = &data.address {
            self.set_address(address);
        }
        if let Some(valid) = data.valid {
            self.set_valid(valid);
        }
        if let Some(errors) = &data.errors {
            self.set_errors(errors);
        }
    }
}
