//! Shared form plumbing for the order and contacts steps.

use larek_core::OrderField;

use crate::dom::{DomError, Element, EventKind, ensure_element};
use crate::events::{AppEvent, EventBroker};

/// The submit event of a form, by its `name` attribute.
fn submit_event(form_name: &str) -> Option<AppEvent> {
    match form_name {
        "order" => Some(AppEvent::OrderSubmit),
        "contacts" => Some(AppEvent::ContactsSubmit),
        _ => None,
    }
}

/// A `<form>` with a submit button and an error line.
///
/// `input` events from named fields are reported as field-change events;
/// submission is reported as `{form}:submit`.
#[derive(Debug)]
pub struct Form {
    container: Element,
    submit: Element,
    errors: Element,
}

impl Form {
    /// Wrap a form template and wire its events to `events`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if the submit button or `.form__errors`
    /// is missing.
    pub fn new(container: Element, events: &EventBroker) -> Result<Self, DomError> {
        let form = Self {
            submit: ensure_element("button[type=submit]", &container)?,
            errors: ensure_element(".form__errors", &container)?,
            container,
        };

        let broker = events.clone();
        form.container
            .add_event_listener(EventKind::Input, move |event| {
                let target = event.target();
                let Some(field) = target
                    .attribute("name")
                    .and_then(|name| OrderField::from_name(&name))
                else {
                    return;
                };
                broker.emit(AppEvent::FieldChanged {
                    field,
                    value: target.value(),
                });
            });

        let name = form.container.attribute("name").unwrap_or_default();
        let broker = events.clone();
        match submit_event(&name) {
            Some(submit) => {
                form.container
                    .add_event_listener(EventKind::Submit, move |event| {
                        event.prevent_default();
                        broker.emit(submit.clone());
                    });
            }
            None => tracing::warn!(form = %name, "form has no submit event"),
        }

        Ok(form)
    }

    #[must_use]
    pub const fn container(&self) -> &Element {
        &self.container
    }

    /// The input named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if the form has no such field.
    pub fn field(&self, name: &str) -> Result<Element, DomError> {
        self.container
            .named_item(name)
            .ok_or_else(|| DomError::NotFound {
                selector: format!("[name={name}]"),
            })
    }

    pub fn set_valid(&self, valid: bool) {
        self.submit.set_disabled(!valid);
    }

    pub fn set_errors(&self, errors: &str) {
        self.errors.set_text(errors);
    }
}

/// A view built on [`Form`].
pub trait FormView {
    fn form(&self) -> &Form;

    /// Enable or disable submission.
    fn set_valid(&self, valid: bool) {
        self.form().set_valid(valid);
    }

    /// Show the joined validation messages.
    fn set_errors(&self, errors: &str) {
        self.form().set_errors(errors);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::templates::Template;

    fn record(events: &EventBroker) -> Rc<RefCell<Vec<AppEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        events.on("*", move |event| sink.borrow_mut().push(event.clone()));
        seen
    }

    #[test]
    fn test_input_emits_field_change() {
        let events = EventBroker::new();
        let seen = record(&events);
        let form = Form::new(Template::Contacts.instantiate(), &events).unwrap();

        form.field("email").unwrap().input("a@b.c");
        assert_eq!(
            *seen.borrow(),
            vec![AppEvent::FieldChanged {
                field: OrderField::Email,
                value: "a@b.c".to_string()
            }]
        );
        assert_eq!(seen.borrow()[0].name(), "contacts.email:change");
    }

    #[test]
    fn test_submit_emits_and_prevents_default() {
        let events = EventBroker::new();
        let seen = record(&events);
        let form = Form::new(Template::Order.instantiate(), &events).unwrap();

        assert!(!form.container().submit());
        assert_eq!(*seen.borrow(), vec![AppEvent::OrderSubmit]);
    }

    #[test]
    fn test_valid_and_errors() {
        let form = Form::new(Template::Contacts.instantiate(), &EventBroker::new()).unwrap();
        let submit = form
            .container()
            .query_selector("button[type=submit]")
            .unwrap()
            .unwrap();
        assert!(submit.is_disabled());

        form.set_valid(true);
        assert!(!submit.is_disabled());

        form.set_errors("Необходимо указать email; Необходимо указать телефон");
        let errors = form.container().query_selector(".form__errors").unwrap().unwrap();
        assert_eq!(errors.text(), "Необходимо указать email; Необходимо указать телефон");
    }

    #[test]
    fn test_missing_field() {
        let form = Form::new(Template::Contacts.instantiate(), &EventBroker::new()).unwrap();
        assert_eq!(
            form.field("address").unwrap_err(),
            DomError::NotFound {
                selector: "[name=address]".to_string()
            }
        );
    }
}
