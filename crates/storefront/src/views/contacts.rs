//! Second checkout step: email and phone.

use larek_core::OrderField;

use super::{Component, Form, FormView};
use crate::dom::{DomError, Element};
use crate::events::EventBroker;

/// Partial state of the contacts step.
#[derive(Debug, Clone, Default)]
pub struct ContactsData {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub valid: Option<bool>,
    pub errors: Option<String>,
}

impl ContactsData {
    /// A blank, not yet submittable step.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            email: Some(String::new()),
            phone: Some(String::new()),
            valid: Some(false),
            errors: Some(String::new()),
        }
    }
}

/// The `#contacts` form.
#[derive(Debug)]
pub struct ContactsForm {
    form: Form,
    email: Element,
    phone: Element,
}

impl ContactsForm {
    /// Wrap the `#contacts` template.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotFound`] if an input or the shared form elements
    /// are missing.
    pub fn new(container: Element, events: &EventBroker) -> Result<Self, DomError> {
        let form = Form::new(container, events)?;
        Ok(Self {
            email: form.field(OrderField::Email.name())?,
            phone: form.field(OrderField::Phone.name())?,
            form,
        })
    }

    pub fn set_email(&self, email: &str) {
        self.email.set_value(email);
    }

    pub fn set_phone(&self, phone: &str) {
        self.phone.set_value(phone);
    }
}

impl FormView for ContactsForm {
    fn form(&self) -> &Form {
        &self.form
    }
}

impl Component for ContactsForm {
    type Data = ContactsData;

    fn container(&self) -> &Element {
        self.form.container()
    }

    fn apply(&self, data: ContactsData) {
        if let Some(email) = &data.email {
            self.set_email(email);
        }
        if let Some(phone) = &data.phone {
            self.set_phone(phone);
        }
        if let Some(valid) = data.valid {
            self.set_valid(valid);
        }
        if let Some(errors) = &data.errors {
            self.set_errors(errors);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::templates::Template;

    #[test]
    fn test_render() {
        let view = ContactsForm::new(Template::Contacts.instantiate(), &EventBroker::new()).unwrap();
        view.email.input("a@b.c");
        view.set_phone("+7 900");
        view.render(ContactsData {
            valid: Some(true),
            ..ContactsData::default()
        });
        assert_eq!(view.email.value(), "a@b.c");
        assert_eq!(view.phone.value(), "+7 900");

        let root = view.render(ContactsData::empty());
        assert_eq!(view.email.value(), "");
        assert_eq!(view.phone.value(), "");
        let submit = root.query_selector("button[type=submit]").unwrap().unwrap();
        assert!(submit.is_disabled());
    }
}
