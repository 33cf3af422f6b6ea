//! Validation errors for the order draft.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::order::OrderField;

/// Validation messages keyed by order field.
///
/// The map is rebuilt from scratch on every validation pass, so a field that
/// became valid simply has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<OrderField, String>);

impl FormErrors {
    /// Create an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The message for a field, if it is invalid.
    #[must_use]
    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns `true` if the field has a message.
    #[must_use]
    pub fn contains(&self, field: OrderField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns `true` if no field is invalid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the invalid fields in field order.
    pub fn fields(&self) -> impl Iterator<Item = OrderField> + '_ {
        self.0.keys().copied()
    }

    /// Returns `true` if none of `fields` has a message.
    #[must_use]
    pub fn none_of(&self, fields: &[OrderField]) -> bool {
        !fields.iter().any(|f| self.contains(*f))
    }

    /// Join the messages of `fields` (in the given order) with `"; "`.
    #[must_use]
    pub fn joined(&self, fields: &[OrderField]) -> String {
        fields
            .iter()
            .filter_map(|f| self.get(*f))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_uses_requested_fields_only() {
        let mut errors = FormErrors::new();
        errors.insert(OrderField::Address, "Необходимо указать адрес");
        errors.insert(OrderField::Payment, "Необходимо указать способ оплаты");
        errors.insert(OrderField::Email, "Необходимо указать email");

        assert_eq!(
            errors.joined(&OrderField::ORDER_STEP),
            "Необходимо указать способ оплаты; Необходимо указать адрес"
        );
        assert_eq!(errors.joined(&OrderField::CONTACTS_STEP), "Необходимо указать email");
        assert!(!errors.none_of(&OrderField::CONTACTS_STEP));
    }

    #[test]
    fn test_empty_errors() {
        let errors = FormErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.joined(&OrderField::ORDER_STEP), "");
        assert!(errors.none_of(&OrderField::ORDER_STEP));
    }

    #[test]
    fn test_errors_serialize_as_field_map() {
        let mut errors = FormErrors::new();
        errors.insert(OrderField::Phone, "Необходимо указать телефон");
        let json = serde_json::to_value(&errors).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({ "phone": "Необходимо указать телефон" })
        );
    }
}
