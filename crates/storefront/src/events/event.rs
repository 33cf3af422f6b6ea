//! Named storefront events and their payloads.

use larek_core::{FormErrors, Order, OrderField, OrderResult, Product};

/// Event names as they appear on the broker.
pub mod names {
    // Model changes
    pub const CATALOG_CHANGED: &str = "catalog:changed";
    pub const BASKET_CHANGED: &str = "basket:changed";
    pub const ORDER_READY: &str = "order:ready";
    pub const FORM_ERRORS_CHANGED: &str = "formErrors:changed";

    // UI actions
    pub const CARD_SELECT: &str = "card:select";
    pub const BASKET_OPEN: &str = "basket:open";
    pub const BASKET_ADD: &str = "basket:add";
    pub const BASKET_REMOVE: &str = "basket:remove";
    pub const ORDER_OPEN: &str = "order:open";
    pub const ORDER_SUBMIT: &str = "order:submit";
    pub const CONTACTS_SUBMIT: &str = "contacts:submit";
    pub const ORDER_SUCCESS: &str = "order:success";
    pub const MODAL_OPEN: &str = "modal:open";
    pub const MODAL_CLOSE: &str = "modal:close";

    // Form field edits
    pub const ORDER_PAYMENT_CHANGE: &str = "order.payment:change";
    pub const ORDER_ADDRESS_CHANGE: &str = "order.address:change";
    pub const CONTACTS_EMAIL_CHANGE: &str = "contacts.email:change";
    pub const CONTACTS_PHONE_CHANGE: &str = "contacts.phone:change";
}

/// Every event exchanged between the model, the views and the presenter.
///
/// Payload-carrying variants hold snapshots, so handlers never need to reach
/// back into the model to learn what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CatalogChanged { catalog: Vec<Product> },
    BasketChanged { basket: Vec<Product> },
    OrderReady { order: Order },
    FormErrorsChanged { errors: FormErrors },

    CardSelect { product: Product },
    BasketOpen,
    BasketAdd { product: Product },
    BasketRemove { product: Product },
    OrderOpen,
    OrderSubmit,
    ContactsSubmit,
    OrderSuccess { result: OrderResult },
    ModalOpen,
    ModalClose,

    /// A form input changed. The event name depends on `field`.
    FieldChanged { field: OrderField, value: String },
}

impl AppEvent {
    /// The broker name of this event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CatalogChanged { .. } => names::CATALOG_CHANGED,
            Self::BasketChanged { .. } => names::BASKET_CHANGED,
            Self::OrderReady { .. } => names::ORDER_READY,
            Self::FormErrorsChanged { .. } => names::FORM_ERRORS_CHANGED,
            Self::CardSelect { .. } => names::CARD_SELECT,
            Self::BasketOpen => names::BASKET_OPEN,
            Self::BasketAdd { .. } => names::BASKET_ADD,
            Self::BasketRemove { .. } => names::BASKET_REMOVE,
            Self::OrderOpen => names::ORDER_OPEN,
            Self::OrderSubmit => names::ORDER_SUBMIT,
            Self::ContactsSubmit => names::CONTACTS_SUBMIT,
            Self::OrderSuccess { .. } => names::ORDER_SUCCESS,
            Self::ModalOpen => names::MODAL_OPEN,
            Self::ModalClose => names::MODAL_CLOSE,
            Self::FieldChanged { field, .. } => Self::field_change_name(*field),
        }
    }

    /// The change-event name for a form field.
    #[must_use]
    pub const fn field_change_name(field: OrderField) -> &'static str {
        match field {
            OrderField::Payment => names::ORDER_PAYMENT_CHANGE,
            OrderField::Address => names::ORDER_ADDRESS_CHANGE,
            OrderField::Email => names::CONTACTS_EMAIL_CHANGE,
            OrderField::Phone => names::CONTACTS_PHONE_CHANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_change_names() {
        let event = AppEvent::FieldChanged {
            field: OrderField::Payment,
            value: "Онлайн".to_string(),
        };
        assert_eq!(event.name(), "order.payment:change");
        assert_eq!(
            AppEvent::field_change_name(OrderField::Phone),
            "contacts.phone:change"
        );
    }

    #[test]
    fn test_payloadless_names() {
        assert_eq!(AppEvent::BasketOpen.name(), "basket:open");
        assert_eq!(AppEvent::ModalClose.name(), "modal:close");
        assert_eq!(
            AppEvent::FormErrorsChanged {
                errors: FormErrors::new()
            }
            .name(),
            "formErrors:changed"
        );
    }
}
