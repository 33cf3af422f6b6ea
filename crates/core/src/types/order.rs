//! Order draft and order result types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::label::UnknownLabel;
use super::price::Price;

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay online with a card.
    #[serde(rename = "Онлайн")]
    Online,
    /// Pay the courier on delivery.
    #[serde(rename = "При получении")]
    OnDelivery,
}

impl PaymentMethod {
    /// Both payment methods, in the order the form shows them.
    pub const ALL: [Self; 2] = [Self::Online, Self::OnDelivery];

    /// The button label, which is also the wire value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Онлайн",
            Self::OnDelivery => "При получении",
        }
    }

    /// Look a payment method up by its button label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownLabel::new("payment method", s))
    }
}

/// A user-editable field of the order draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    /// Fields collected by the first (payment/address) step.
    pub const ORDER_STEP: [Self; 2] = [Self::Payment, Self::Address];
    /// Fields collected by the second (contacts) step.
    pub const CONTACTS_STEP: [Self; 2] = [Self::Email, Self::Phone];

    /// The field name, matching the form input `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Look a field up by its input name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Payment, Self::Address, Self::Email, Self::Phone]
            .into_iter()
            .find(|f| f.name() == name)
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderField {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownLabel::new("order field", s))
    }
}

/// The in-progress order.
///
/// `total` and `items` are only meaningful right before submission, when
/// they are computed from the basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub payment: Option<PaymentMethod>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: Price,
    pub items: Vec<ProductId>,
}

impl Order {
    /// Set one user-editable field from its raw form value.
    ///
    /// A payment value that is not a known label clears the payment.
    pub fn set_field(&mut self, field: OrderField, value: &str) {
        match field {
            OrderField::Payment => self.payment = PaymentMethod::from_label(value),
            OrderField::Address => value.clone_into(&mut self.address),
            OrderField::Email => value.clone_into(&mut self.email),
            OrderField::Phone => value.clone_into(&mut self.phone),
        }
    }

    /// The raw form value of a field (empty when unset).
    #[must_use]
    pub fn field(&self, field: OrderField) -> &str {
        match field {
            OrderField::Payment => self.payment.map_or("", PaymentMethod::label),
            OrderField::Address => &self.address,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
        }
    }

    /// Returns `true` if the field has no value.
    #[must_use]
    pub fn is_blank(&self, field: OrderField) -> bool {
        self.field(field).is_empty()
    }
}

/// Result of a successful order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub id: OrderId,
    pub total: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(
            "Онлайн".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Online
        );
        assert_eq!(
            "При получении".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::OnDelivery
        );
        assert!("Наличными".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_order_field_names() {
        for field in OrderField::ORDER_STEP.into_iter().chain(OrderField::CONTACTS_STEP) {
            assert_eq!(field.name().parse::<OrderField>().unwrap(), field);
        }
        assert!("total".parse::<OrderField>().is_err());
    }

    #[test]
    fn test_set_field_updates_only_that_field() {
        let mut order = Order::default();
        order.set_field(OrderField::Address, "Москва");
        order.set_field(OrderField::Payment, "Онлайн");

        assert_eq!(order.address, "Москва");
        assert_eq!(order.payment, Some(PaymentMethod::Online));
        assert!(order.is_blank(OrderField::Email));
        assert!(order.is_blank(OrderField::Phone));
    }

    #[test]
    fn test_unknown_payment_label_clears_payment() {
        let mut order = Order::default();
        order.set_field(OrderField::Payment, "При получении");
        order.set_field(OrderField::Payment, "");
        assert_eq!(order.payment, None);
        assert!(order.is_blank(OrderField::Payment));
    }

    #[test]
    fn test_order_wire_format() {
        let order = Order {
            payment: Some(PaymentMethod::Online),
            email: "e@example.com".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            address: "x".to_string(),
            total: Price::from_units(100),
            items: vec![ProductId::new("a")],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "payment": "Онлайн",
                "email": "e@example.com",
                "phone": "+7 900 000-00-00",
                "address": "x",
                "total": 100,
                "items": ["a"],
            })
        );
    }

    #[test]
    fn test_order_result_decodes() {
        let result: OrderResult =
            serde_json::from_str(r#"{"id": "28c57cb4-3002-4445-8aa1-2a06a5055ae5", "total": 2200}"#)
                .unwrap();
        assert_eq!(result.total, Price::from_units(2200));
    }
}
