//! Product card, used for the catalog, the preview and basket rows.

use larek_core::{Category, Price, Product, ProductId};

use super::{Component, synapses};
use crate::dom::{DomError, Element, EventKind, ensure_element};

/// CSS modifier for a category badge; unknown labels get the "other" style.
#[must_use]
pub const fn category_class(category: &Category) -> &'static str {
    match category {
        Category::SoftSkill => "card__category_soft",
        Category::HardSkill => "card__category_hard",
        Category::Other | Category::Unknown(_) => "card__category_other",
        Category::Additional => "card__category_additional",
        Category::Button => "card__category_button",
    }
}

/// Partial card state.
#[derive(Debug, Clone, Default)]
pub struct CardData {
    pub id: Option<ProductId>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    /// Outer `None` leaves the price as is; `Some(None)` marks the product
    /// priceless.
    #[allow(clippy::option_option)]
    pub price: Option<Option<Price>>,
    pub button: Option<String>,
    pub index: Option<usize>,
}

impl CardData {
    /// Everything a catalog card shows.
    #[must_use]
    pub fn catalog(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            title: Some(product.title.clone()),
            image: Some(product.image.clone()),
            category: Some(product.category.clone()),
            price: Some(product.price),
            ..Self::default()
        }
    }

    /// The catalog fields plus the description and the button label.
    #[must_use]
    pub fn preview(product: &Product, button: &str) -> Self {
        Self {
            description: Some(product.description.clone()),
            button: Some(button.to_string()),
            ..Self::catalog(product)
        }
    }

    /// A numbered basket row.
    #[must_use]
    pub fn basket_row(product: &Product, index: usize) -> Self {
        Self {
            id: Some(product.id.clone()),
            title: Some(product.title.clone()),
            price: Some(product.price),
            index: Some(index),
            ..Self::default()
        }
    }
}

/// A product card.
///
/// Title and price are required; image, category, description, button and
/// index are written only if the template has them.
#[derive(Debug)]
pub struct Card {
    container: Element,
    title: Element,
    price: Element,
    image: Option<Element>,
    category: Option<Element>,
    description: Option<Element>,
    button: Option<Element>,
    index: Option<Element>,
}

impl Card {
    /// Wrap a card template.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if `.card__title` or `.card__price` is
    /// missing.
    pub fn new(container: Element) -> Result<Self, DomError> {
        Ok(Self {
            title: ensure_element(".card__title", &container)?,
            price: ensure_element(".card__price", &container)?,
            image: container.query_selector(".card__image")?,
            category: container.query_selector(".card__category")?,
            description: container.query_selector(".card__text")?,
            button: container.query_selector(".card__button")?,
            index: container.query_selector(".basket__item-index")?,
            container,
        })
    }

    /// Invoke `action` on click of the card button, or of the whole card
    /// when it has no button.
    pub fn on_click(&self, action: impl Fn() + 'static) {
        let target = self.button.as_ref().unwrap_or(&self.container);
        target.add_event_listener(EventKind::Click, move |_| action());
    }

    pub fn set_id(&self, id: &ProductId) {
        self.container.set_data("id", id.as_str());
    }

    #[must_use]
    pub fn id(&self) -> String {
        self.container.data("id").unwrap_or_default()
    }

    pub fn set_title(&self, title: &str) {
        self.title.set_text(title);
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.title.text()
    }

    /// Set the image source; the alt text is the current title.
    pub fn set_image(&self, src: &str) {
        if let Some(image) = &self.image {
            image.set_attribute("src", src);
            image.set_attribute("alt", &self.title());
        }
    }

    pub fn set_category(&self, category: &Category) {
        if let Some(badge) = &self.category {
            badge.set_text(category.label());
            badge.set_class_name("card__category");
            badge.add_class(category_class(category));
        }
    }

    /// Show the price, or `Бесценно` with the button disabled.
    pub fn set_price(&self, price: Option<Price>) {
        match price {
            Some(price) => self.price.set_text(&synapses(price)),
            None => self.price.set_text("Бесценно"),
        }
        if let Some(button) = &self.button {
            button.set_disabled(price.is_none());
        }
    }

    pub fn set_description(&self, description: &str) {
        if let Some(element) = &self.description {
            element.set_text(description);
        }
    }

    pub fn set_button(&self, label: &str) {
        if let Some(button) = &self.button {
            button.set_text(label);
        }
    }

    pub fn set_index(&self, index: usize) {
        if let Some(element) = &self.index {
            element.set_text(&index.to_string());
        }
    }
}

impl Component for Card {
    type Data = CardData;

    fn container(&self) -> &Element {
        &self.container
    }

    fn apply(&self, data: CardData) {
        if let Some(id) = &data.id {
            self.set_id(id);
        }
        // Title first: the image alt text is taken from it
        if let Some(title) = &data.title {
            self.set_title(title);
        }
        if let Some(image) = &data.image {
            self.set_image(image);
        }
        if let Some(category) = &data.category {
            self.set_category(category);
        }
        if let Some(description) = &data.description {
            self.set_description(description);
        }
        if let Some(price) = data.price {
            self.set_price(price);
        }
        if let Some(button) = &data.button {
            self.set_button(button);
        }
        if let Some(index) = data.index {
            self.set_index(index);
        }
    }
}
