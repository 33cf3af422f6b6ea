//! Observable application state.
//!
//! [`AppState`] owns the catalog, the basket, the order draft and the current
//! validation errors. Every command mutates one of them and then announces
//! the change on the broker with a snapshot payload.
//!
//! Fields use interior mutability and no borrow is held while an event is
//! emitted, so handlers are free to read (or command) the model re-entrantly.

use std::cell::RefCell;

use larek_core::{FormErrors, Order, OrderField, Price, Product, ProductId};

use crate::events::{AppEvent, EventBroker};

/// Message shown when no payment method is chosen.
pub const PAYMENT_REQUIRED: &str = "Необходимо указать способ оплаты";
/// Message shown when the address is empty.
pub const ADDRESS_REQUIRED: &str = "Необходимо указать адрес";
/// Message shown when the email is empty.
pub const EMAIL_REQUIRED: &str = "Необходимо указать email";
/// Message shown when the phone is empty.
pub const PHONE_REQUIRED: &str = "Необходимо указать телефон";

/// Validation message for a blank required field.
#[must_use]
pub const fn required_message(field: OrderField) -> &'static str {
    match field {
        OrderField::Payment => PAYMENT_REQUIRED,
        OrderField::Address => ADDRESS_REQUIRED,
        OrderField::Email => EMAIL_REQUIRED,
        OrderField::Phone => PHONE_REQUIRED,
    }
}

/// The storefront's single state model.
#[derive(Debug)]
pub struct AppState {
    catalog: RefCell<Vec<Product>>,
    basket: RefCell<Vec<Product>>,
    order: RefCell<Order>,
    form_errors: RefCell<FormErrors>,
    events: EventBroker,
}

impl AppState {
    /// Create an empty model that reports changes on `events`.
    #[must_use]
    pub fn new(events: EventBroker) -> Self {
        Self {
            catalog: RefCell::default(),
            basket: RefCell::default(),
            order: RefCell::default(),
            form_errors: RefCell::default(),
            events,
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replace the catalog and emit `catalog:changed`.
    pub fn set_catalog(&self, items: Vec<Product>) {
        tracing::debug!(items = items.len(), "catalog replaced");
        *self.catalog.borrow_mut() = items.clone();
        self.events.emit(AppEvent::CatalogChanged { catalog: items });
    }

    /// Snapshot of the catalog.
    #[must_use]
    pub fn catalog(&self) -> Vec<Product> {
        self.catalog.borrow().clone()
    }

    // =========================================================================
    // Basket
    // =========================================================================

    /// Append `item` to the basket and emit `basket:changed`.
    ///
    /// Priceless products and products already in the basket are ignored
    /// (nothing is emitted). Returns whether the basket changed.
    pub fn add_to_basket(&self, item: &Product) -> bool {
        if !item.is_purchasable() {
            tracing::warn!(id = %item.id, "ignoring priceless product");
            return false;
        }

        let basket = {
            let mut basket = self.basket.borrow_mut();
            if basket.iter().any(|p| p.id == item.id) {
                return false;
            }
            basket.push(item.clone());
            basket.clone()
        };

        tracing::debug!(id = %item.id, size = basket.len(), "added to basket");
        self.events.emit(AppEvent::BasketChanged { basket });
        true
    }

    /// Remove the product with `id` and emit `basket:changed`.
    ///
    /// Emits even when the product was not in the basket.
    pub fn remove_from_basket(&self, id: &ProductId) {
        let basket = {
            let mut basket = self.basket.borrow_mut();
            basket.retain(|p| &p.id != id);
            basket.clone()
        };

        tracing::debug!(id = %id, size = basket.len(), "removed from basket");
        self.events.emit(AppEvent::BasketChanged { basket });
    }

    /// Empty the basket and emit `basket:changed`.
    pub fn clear_basket(&self) {
        self.basket.borrow_mut().clear();
        self.events.emit(AppEvent::BasketChanged { basket: Vec::new() });
    }

    /// Snapshot of the basket, in insertion order.
    #[must_use]
    pub fn basket(&self) -> Vec<Product> {
        self.basket.borrow().clone()
    }

    /// Ids of the basket products, in insertion order.
    #[must_use]
    pub fn basket_ids(&self) -> Vec<ProductId> {
        self.basket.borrow().iter().map(|p| p.id.clone()).collect()
    }

    /// Returns `true` if the product with `id` is in the basket.
    #[must_use]
    pub fn in_basket(&self, id: &ProductId) -> bool {
        self.basket.borrow().iter().any(|p| &p.id == id)
    }

    /// Sum of the basket prices; priceless entries count as zero.
    #[must_use]
    pub fn total(&self) -> Price {
        basket_total(&self.basket.borrow())
    }

    // =========================================================================
    // Order draft
    // =========================================================================

    /// Snapshot of the order draft.
    #[must_use]
    pub fn order(&self) -> Order {
        self.order.borrow().clone()
    }

    /// Snapshot of the current validation errors.
    #[must_use]
    pub fn form_errors(&self) -> FormErrors {
        self.form_errors.borrow().clone()
    }

    /// Update a payment/address field and revalidate the first step.
    ///
    /// Emits `formErrors:changed`, then `order:ready` if the step is valid.
    pub fn set_order_field(&self, field: OrderField, value: &str) {
        self.order.borrow_mut().set_field(field, value);

        if self.validate_order() {
            self.events.emit(AppEvent::OrderReady {
                order: self.order(),
            });
        }
    }

    /// Update an email/phone field and revalidate the contacts step.
    ///
    /// Emits `formErrors:changed`, then `order:ready` if the step is valid.
    pub fn set_contacts_field(&self, field: OrderField, value: &str) {
        self.order.borrow_mut().set_field(field, value);

        if self.validate_contacts() {
            self.events.emit(AppEvent::OrderReady {
                order: self.order(),
            });
        }
    }

    /// Require a payment method and an address.
    ///
    /// Recomputes the error map from scratch and emits `formErrors:changed`.
    pub fn validate_order(&self) -> bool {
        self.validate(&OrderField::ORDER_STEP)
    }

    /// Require an email and a phone.
    ///
    /// Recomputes the error map from scratch and emits `formErrors:changed`.
    pub fn validate_contacts(&self) -> bool {
        self.validate(&OrderField::CONTACTS_STEP)
    }

    fn validate(&self, required: &[OrderField]) -> bool {
        let errors = {
            let order = self.order.borrow();
            let mut errors = FormErrors::new();
            for field in required.iter().copied().filter(|f| order.is_blank(*f)) {
                errors.insert(field, required_message(field));
            }
            errors
        };

        let valid = errors.is_empty();
        *self.form_errors.borrow_mut() = errors.clone();
        self.events.emit(AppEvent::FormErrorsChanged { errors });
        valid
    }

    /// Fill the draft's total and items from the basket and return it.
    pub fn prepare_order(&self) -> Order {
        let (total, items) = {
            let basket = self.basket.borrow();
            (
                basket_total(&basket),
                basket.iter().map(|p| p.id.clone()).collect(),
            )
        };

        let mut order = self.order.borrow_mut();
        order.total = total;
        order.items = items;
        order.clone()
    }

    /// Drop the draft and the validation errors (silently).
    pub fn reset_order(&self) {
        *self.order.borrow_mut() = Order::default();
        *self.form_errors.borrow_mut() = FormErrors::new();
    }
}

fn basket_total(basket: &[Product]) -> Price {
    basket.iter().filter_map(|p| p.price).sum()
}
