//! Wiring between the broker, the model, the views and the remote API.
//!
//! [`Storefront`] owns one instance of every long-lived view and subscribes
//! one reaction per event. Reactions translate UI events into model commands
//! and re-render views from the payloads of model events; the model and the
//! views never talk to each other directly.
//!
//! Order submission is spawned with [`tokio::task::spawn_local`], so the
//! storefront must be driven from inside a [`tokio::task::LocalSet`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use larek_core::{OrderField, Product, ProductId};
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::api::{LarekApi, NetworkError};
use crate::dom::{DomError, Document, Element, ensure_element};
use crate::events::{AppEvent, EventBroker, names};
use crate::model::AppState;
use crate::templates::Template;
use crate::views::{
    Basket, BasketData, Card, CardData, Component, ContactsData, ContactsForm, FormView, Modal,
    ModalData, OrderForm, OrderFormData, Page, Success, SuccessData,
};

/// Preview button label for a product not yet in the basket.
pub const ADD_TO_BASKET: &str = "В корзину";
/// Preview button label for a product already in the basket.
pub const REMOVE_FROM_BASKET: &str = "Убрать из корзины";

type Reaction<A> = fn(&Rc<Inner<A>>, &AppEvent);

/// The mounted storefront.
pub struct Storefront<A: LarekApi + 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    api: Rc<A>,
    events: EventBroker,
    state: AppState,
    document: Document,
    page: Page,
    modal: Modal,
    basket: Basket,
    order: OrderForm,
    contacts: ContactsForm,
    success: Success,
    pending: RefCell<Vec<JoinHandle<()>>>,
}

impl<A: LarekApi + 'static> Storefront<A> {
    /// Build the views onto `document` and subscribe every reaction.
    ///
    /// The document must already contain the page shell
    /// (see [`crate::templates::mount_page`]).
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the page shell or a template lacks an element
    /// a view needs.
    pub fn mount(document: &Document, api: A) -> Result<Self, DomError> {
        let events = EventBroker::new();
        let body = document.body().clone();

        let inner = Rc::new(Inner {
            api: Rc::new(api),
            state: AppState::new(events.clone()),
            document: document.clone(),
            page: Page::new(body.clone(), &events)?,
            modal: Modal::new(ensure_element("#modal-container", &body)?, document, &events)?,
            basket: Basket::new(Template::Basket.instantiate(), &events)?,
            order: OrderForm::new(Template::Order.instantiate(), &events)?,
            contacts: ContactsForm::new(Template::Contacts.instantiate(), &events)?,
            success: Success::new(Template::Success.instantiate())?,
            pending: RefCell::default(),
            events,
        });

        let weak = Rc::downgrade(&inner);
        inner.success.on_close(move || {
            if let Some(inner) = weak.upgrade() {
                inner.modal.close();
            }
        });

        let reactions: [(&str, Reaction<A>); 17] = [
            (names::CATALOG_CHANGED, Inner::on_catalog_changed),
            (names::CARD_SELECT, Inner::on_card_select),
            (names::BASKET_ADD, Inner::on_basket_add),
            (names::BASKET_REMOVE, Inner::on_basket_remove),
            (names::BASKET_CHANGED, Inner::on_basket_changed),
            (names::BASKET_OPEN, Inner::on_basket_open),
            (names::ORDER_OPEN, Inner::on_order_open),
            (names::ORDER_PAYMENT_CHANGE, Inner::on_field_changed),
            (names::ORDER_ADDRESS_CHANGE, Inner::on_field_changed),
            (names::CONTACTS_EMAIL_CHANGE, Inner::on_field_changed),
            (names::CONTACTS_PHONE_CHANGE, Inner::on_field_changed),
            (names::ORDER_SUBMIT, Inner::on_order_submit),
            (names::CONTACTS_SUBMIT, Inner::on_contacts_submit),
            (names::ORDER_SUCCESS, Inner::on_order_success),
            (names::FORM_ERRORS_CHANGED, Inner::on_form_errors_changed),
            (names::MODAL_OPEN, Inner::on_modal_open),
            (names::MODAL_CLOSE, Inner::on_modal_close),
        ];
        for (name, reaction) in reactions {
            let weak = Rc::downgrade(&inner);
            inner.events.on(name, move |event| {
                if let Some(inner) = weak.upgrade() {
                    reaction(&inner, event);
                }
            });
        }

        tracing::debug!(
            subscribers = inner.events.subscriber_count(),
            "storefront mounted"
        );
        Ok(Self { inner })
    }

    #[must_use]
    pub fn events(&self) -> &EventBroker {
        &self.inner.events
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.inner.state
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.inner.modal
    }

    /// Fetch the catalog and install it in the model.
    ///
    /// # Errors
    ///
    /// Returns the [`NetworkError`] (after logging it) if the catalog could
    /// not be fetched; the page is left untouched.
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) -> Result<usize, NetworkError> {
        let items = self.inner.api.get_product_list().await.map_err(|e| {
            tracing::error!(error = %e, "failed to load catalog");
            e
        })?;

        let count = items.len();
        tracing::info!(items = count, "catalog loaded");
        self.inner.state.set_catalog(items);
        Ok(count)
    }

    /// Fetch one product and open its preview.
    ///
    /// # Errors
    ///
    /// Returns the [`NetworkError`] (after logging it) if the product could
    /// not be fetched.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn show_product(&self, id: &ProductId) -> Result<(), NetworkError> {
        let product = self.inner.api.get_product_item(id).await.map_err(|e| {
            tracing::error!(error = %e, "failed to load product");
            e
        })?;

        self.inner.events.emit(AppEvent::CardSelect { product });
        Ok(())
    }

    /// Wait for every spawned order submission to finish.
    pub async fn settle(&self) {
        loop {
            let pending = std::mem::take(&mut *self.inner.pending.borrow_mut());
            if pending.is_empty() {
                break;
            }
            for handle in pending {
                if let Err(e) = handle.await {
                    tracing::error!(error = %e, "order submission task failed");
                }
            }
        }
    }
}

impl<A: LarekApi + 'static> fmt::Debug for Storefront<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("state", &self.inner.state)
            .field("pending", &self.inner.pending.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Log a view construction failure and drop the element.
fn rendered(result: Result<Element, DomError>) -> Option<Element> {
    result
        .map_err(|e| tracing::error!(error = %e, "failed to render view"))
        .ok()
}

impl<A: LarekApi + 'static> Inner<A> {
    // =========================================================================
    // Cards
    // =========================================================================

    fn catalog_card(&self, product: &Product) -> Result<Element, DomError> {
        let card = Card::new(Template::CardCatalog.instantiate())?;
        card.on_click(self.events.trigger(AppEvent::CardSelect {
            product: product.clone(),
        }));
        Ok(card.render(CardData::catalog(product)))
    }

    fn preview_card(self: &Rc<Self>, product: &Product) -> Result<Element, DomError> {
        let card = Card::new(Template::CardPreview.instantiate())?;

        let weak = Rc::downgrade(self);
        let item = product.clone();
        card.on_click(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.state.in_basket(&item.id) {
                inner.events.emit(AppEvent::BasketRemove {
                    product: item.clone(),
                });
                inner.events.emit(AppEvent::CardSelect {
                    product: item.clone(),
                });
            } else {
                inner.events.emit(AppEvent::BasketAdd {
                    product: item.clone(),
                });
            }
        });

        let label = if self.state.in_basket(&product.id) {
            REMOVE_FROM_BASKET
        } else {
            ADD_TO_BASKET
        };
        Ok(card.render(CardData::preview(product, label)))
    }

    fn basket_row(&self, product: &Product, index: usize) -> Result<Element, DomError> {
        let card = Card::new(Template::CardBasket.instantiate())?;
        card.on_click(self.events.trigger(AppEvent::BasketRemove {
            product: product.clone(),
        }));
        Ok(card.render(CardData::basket_row(product, index)))
    }

    fn show(&self, content: Element) {
        self.modal.render(ModalData {
            content: Some(content),
        });
    }

    // =========================================================================
    // Reactions
    // =========================================================================

    fn on_catalog_changed(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::CatalogChanged { catalog } = event else {
            return;
        };
        let cards = catalog
            .iter()
            .filter_map(|product| rendered(self.catalog_card(product)))
            .collect();
        self.page.set_catalog(cards);
    }

    fn on_card_select(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::CardSelect { product } = event else {
            return;
        };
        if let Some(card) = rendered(self.preview_card(product)) {
            self.show(card);
        }
    }

    fn on_basket_add(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::BasketAdd { product } = event else {
            return;
        };
        self.state.add_to_basket(product);
        self.events.emit(AppEvent::CardSelect {
            product: product.clone(),
        });
    }

    fn on_basket_remove(self: &Rc<Self>, event: &AppEvent) {
        if let AppEvent::BasketRemove { product } = event {
            self.state.remove_from_basket(&product.id);
        }
    }

    fn on_basket_changed(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::BasketChanged { basket } = event else {
            return;
        };
        self.page.set_counter(basket.len());

        let rows = basket
            .iter()
            .enumerate()
            .filter_map(|(i, product)| rendered(self.basket_row(product, i + 1)))
            .collect();
        self.basket.set_items(rows);
        self.basket
            .set_total(basket.iter().filter_map(|p| p.price).sum());
        self.basket
            .set_selected(&basket.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    fn on_basket_open(self: &Rc<Self>, _event: &AppEvent) {
        self.basket.set_selected(&self.state.basket_ids());
        self.show(self.basket.render(BasketData::default()));
    }

    fn on_order_open(self: &Rc<Self>, _event: &AppEvent) {
        self.show(self.order.render(OrderFormData::empty()));
    }

    fn on_field_changed(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::FieldChanged { field, value } = event else {
            return;
        };
        match field {
            OrderField::Payment | OrderField::Address => self.state.set_order_field(*field, value),
            OrderField::Email | OrderField::Phone => self.state.set_contacts_field(*field, value),
        }
    }

    fn on_order_submit(self: &Rc<Self>, _event: &AppEvent) {
        if self.state.validate_order() {
            self.show(self.contacts.render(ContactsData::empty()));
        }
    }

    fn on_contacts_submit(self: &Rc<Self>, _event: &AppEvent) {
        if !self.state.validate_contacts() {
            return;
        }

        let order = self.state.prepare_order();
        tracing::debug!(items = order.items.len(), total = %order.total, "submitting order");

        let api = Rc::clone(&self.api);
        let weak = Rc::downgrade(self);
        let handle = tokio::task::spawn_local(async move {
            match api.order_products(&order).await {
                Ok(result) => {
                    tracing::info!(id = %result.id, total = %result.total, "order placed");
                    if let Some(inner) = weak.upgrade() {
                        inner.events.emit(AppEvent::OrderSuccess { result });
                        inner.state.clear_basket();
                    }
                }
                Err(e) => tracing::error!(error = %e, "order submission failed"),
            }
        });
        let mut pending = self.pending.borrow_mut();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    fn on_order_success(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::OrderSuccess { result } = event else {
            return;
        };
        self.show(self.success.render(SuccessData {
            total: Some(result.total),
        }));
    }

    fn on_form_errors_changed(self: &Rc<Self>, event: &AppEvent) {
        let AppEvent::FormErrorsChanged { errors } = event else {
            return;
        };
        self.order
            .set_valid(errors.none_of(&OrderField::ORDER_STEP));
        self.order
            .set_errors(&errors.joined(&OrderField::ORDER_STEP));
        self.contacts
            .set_valid(errors.none_of(&OrderField::CONTACTS_STEP));
        self.contacts
            .set_errors(&errors.joined(&OrderField::CONTACTS_STEP));
    }

    fn on_modal_open(self: &Rc<Self>, _event: &AppEvent) {
        self.page.set_locked(true);
    }

    fn on_modal_close(self: &Rc<Self>, _event: &AppEvent) {
        self.page.set_locked(false);
        self.state.reset_order();
    }
}
