//! Storefront markup.
//!
//! [`Template`] stands in for the `<template>` elements of the page: each
//! call to [`Template::instantiate`] yields a fresh, detached fragment.
//! [`mount_page`] builds the static page shell into a [`Document`].

use crate::dom::{Document, Element};

fn el(tag: &str, class: &str) -> Element {
    Element::new(tag).with_class(class)
}

/// The fragment templates of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    CardCatalog,
    CardPreview,
    CardBasket,
    Basket,
    Order,
    Contacts,
    Success,
}

impl Template {
    /// The template's element id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CardCatalog => "card-catalog",
            Self::CardPreview => "card-preview",
            Self::CardBasket => "card-basket",
            Self::Basket => "basket",
            Self::Order => "order",
            Self::Contacts => "contacts",
            Self::Success => "success",
        }
    }

    /// Build a fresh copy of the template content.
    #[must_use]
    pub fn instantiate(self) -> Element {
        match self {
            Self::CardCatalog => card_catalog(),
            Self::CardPreview => card_preview(),
            Self::CardBasket => card_basket(),
            Self::Basket => basket(),
            Self::Order => order(),
            Self::Contacts => contacts(),
            Self::Success => success(),
        }
    }
}

fn card_catalog() -> Element {
    el("button", "gallery__item card")
        .with_child(el("span", "card__category card__category_soft"))
        .with_child(el("h2", "card__title"))
        .with_child(el("img", "card__image").with_attr("src", "").with_attr("alt", ""))
        .with_child(el("span", "card__price"))
}

fn card_preview() -> Element {
    el("div", "card card_full")
        .with_child(el("img", "card__image").with_attr("src", "").with_attr("alt", ""))
        .with_child(
            el("div", "card__column")
                .with_child(el("span", "card__category card__category_other"))
                .with_child(el("h2", "card__title"))
                .with_child(el("p", "card__text"))
                .with_child(
                    el("div", "card__row")
                        .with_child(el("button", "button card__button").with_text("В корзину"))
                        .with_child(el("span", "card__price")),
                ),
        )
}

fn card_basket() -> Element {
    el("li", "basket__item card card_compact")
        .with_child(el("span", "basket__item-index"))
        .with_child(el("span", "card__title"))
        .with_child(el("span", "card__price"))
        .with_child(
            el("button", "basket__item-delete card__button").with_attr("aria-label", "удалить"),
        )
}

fn basket() -> Element {
    el("div", "basket")
        .with_child(el("h2", "modal__title").with_text("Корзина"))
        .with_child(el("ul", "basket__list"))
        .with_child(
            el("div", "modal__actions")
                .with_child(el("button", "button basket__button").with_text("Оформить"))
                .with_child(el("span", "basket__price").with_text("0 синапсов")),
        )
}

fn form_actions(submit_label: &str, submit_class: &str) -> Element {
    let submit = el("button", submit_class)
        .with_attr("type", "submit")
        .with_text(submit_label);
    submit.set_disabled(true);
    el("div", "modal__actions")
        .with_child(submit)
        .with_child(el("span", "form__errors"))
}

fn text_field(label: &str, name: &str, placeholder: &str) -> Element {
    el("label", "order__field")
        .with_child(el("span", "form__label modal__title").with_text(label))
        .with_child(
            el("input", "form__input")
                .with_attr("name", name)
                .with_attr("type", "text")
                .with_attr("placeholder", placeholder),
        )
}

fn order() -> Element {
    let payment_button = |name: &str, label: &str| {
        el("button", "button button_alt")
            .with_attr("name", name)
            .with_attr("type", "button")
            .with_text(label)
    };

    el("form", "form")
        .with_attr("name", "order")
        .with_child(
            el("div", "order")
                .with_child(
                    el("div", "order__field")
                        .with_child(el("h2", "modal__title").with_text("Способ оплаты"))
                        .with_child(
                            el("div", "order__buttons")
                                .with_child(payment_button("card", "Онлайн"))
                                .with_child(payment_button("cash", "При получении")),
                        ),
                )
                .with_child(text_field("Адрес доставки", "address", "Введите адрес")),
        )
        .with_child(form_actions("Далее", "button order__button"))
}

fn contacts() -> Element {
    el("form", "form")
        .with_attr("name", "contacts")
        .with_child(
            el("div", "order")
                .with_child(text_field("Email", "email", "Введите Email"))
                .with_child(text_field("Телефон", "phone", "+7 (")),
        )
        .with_child(form_actions("Оплатить", "button"))
}

fn success() -> Element {
    el("div", "order-success")
        .with_child(el("h2", "film__title").with_text("Заказ оформлен"))
        .with_child(el("p", "film__description").with_text("Списано 0 синапсов"))
        .with_child(el("button", "button order-success__close").with_text("За новыми покупками!"))
}

/// Build the page shell (header, gallery, modal container) into `document`.
pub fn mount_page(document: &Document) {
    let header = el("header", "header").with_child(
        el("div", "header__container")
            .with_child(
                el("a", "header__logo").with_attr("href", "#").with_child(
                    el("img", "header__logo-image")
                        .with_attr("src", "./images/logo.svg")
                        .with_attr("alt", "СИНАПС. Веб-ларёк"),
                ),
            )
            .with_child(
                el("button", "header__basket")
                    .with_child(el("span", "header__basket-counter").with_text("0")),
            ),
    );

    let page = el("div", "page").with_child(
        el("div", "page__wrapper")
            .with_child(header)
            .with_child(el("main", "gallery")),
    );

    let modal = el("div", "modal")
        .with_attr("id", "modal-container")
        .with_child(
            el("div", "modal__container")
                .with_child(el("button", "modal__close").with_attr("aria-label", "закрыть"))
                .with_child(el("div", "modal__content")),
        );

    document.body().replace_children([page, modal]);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::ensure_element;

    #[test]
    fn test_templates_are_fresh_copies() {
        let first = Template::CardCatalog.instantiate();
        let second = Template::CardCatalog.instantiate();
        assert_ne!(first, second);
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_template_required_elements() {
        let required: [(Template, &[&str]); 7] = [
            (Template::CardCatalog, &[".card__title", ".card__price", ".card__image", ".card__category"]),
            (Template::CardPreview, &[".card__title", ".card__price", ".card__text", ".card__button"]),
            (Template::CardBasket, &[".card__title", ".card__price", ".basket__item-index", ".card__button"]),
            (Template::Basket, &[".basket__list", ".basket__price", ".basket__button"]),
            (Template::Order, &[".button_alt", "[name=address]", "button[type=submit]", ".form__errors"]),
            (Template::Contacts, &["[name=email]", "[name=phone]", "button[type=submit]", ".form__errors"]),
            (Template::Success, &[".film__description", ".order-success__close"]),
        ];

        for (template, selectors) in required {
            let root = template.instantiate();
            for selector in selectors {
                assert!(
                    ensure_element(selector, &root).is_ok(),
                    "{} is missing {selector}",
                    template.id()
                );
            }
        }
    }

    #[test]
    fn test_mount_page() {
        let document = Document::new();
        mount_page(&document);

        for selector in [
            ".page__wrapper",
            ".header__basket",
            ".header__basket-counter",
            ".gallery",
            "#modal-container .modal__close",
            "#modal-container .modal__content",
        ] {
            assert!(
                document.query_selector(selector).unwrap().is_some(),
                "missing {selector}"
            );
        }
    }
}
