//! Catalog product types.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Product category.
///
/// The catalog uses Russian display labels; the label is both the wire value
/// and the text shown on a card. Labels outside the known set decode to
/// [`Category::Unknown`] with the raw text kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    SoftSkill,
    HardSkill,
    Other,
    Additional,
    Button,
    /// A label the storefront has no styling for.
    Unknown(String),
}

impl Category {
    /// Every known category, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::SoftSkill,
        Self::HardSkill,
        Self::Other,
        Self::Additional,
        Self::Button,
    ];

    /// The display (and wire) label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::SoftSkill => "софт-скил",
            Self::HardSkill => "хард-скил",
            Self::Other => "другое",
            Self::Additional => "дополнительное",
            Self::Button => "кнопка",
            Self::Unknown(label) => label,
        }
    }

    /// Look a category up by its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_else(|| Self::Unknown(label.to_owned()))
    }

    /// Returns `true` for one of the known labels.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match Self::from_label(&label) {
            Self::Unknown(_) => Self::Unknown(label),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// A catalog product.
///
/// Products are immutable once fetched. A `price` of `None` marks the
/// product as priceless: it can be viewed but never bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque product identifier.
    pub id: ProductId,
    /// Long description shown in the preview.
    pub description: String,
    /// Image URL (absolute once the API client has rewritten it).
    pub image: String,
    /// Product title.
    pub title: String,
    /// Product category.
    pub category: Category,
    /// Price, or `None` for the priceless sentinel.
    pub price: Option<Price>,
}

impl Product {
    /// Returns `true` if the product can be put in the basket.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_keeps_label() {
        let category: Category = "суперсила".parse().unwrap();
        assert_eq!(category, Category::Unknown("суперсила".to_string()));
        assert_eq!(category.label(), "суперсила");
        assert!(!category.is_known());
        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            "\"суперсила\""
        );
    }

    #[test]
    fn test_catalog_with_unknown_category_decodes() {
        let json = r#"[
            {"id": "a", "description": "", "image": "/a.svg", "title": "A", "category": "софт-скил", "price": 1},
            {"id": "b", "description": "", "image": "/b.svg", "title": "B", "category": "новинка", "price": 2}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category, Category::SoftSkill);
        assert_eq!(products[1].category, Category::Unknown("новинка".to_string()));
    }

    #[test]
    fn test_product_decodes_from_api_shape() {
        let json = r#"{
            "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
            "description": "Если планируете решать задачи в тренажёре, берите два.",
            "image": "/5_Dots.svg",
            "title": "+1 час в сутках",
            "category": "софт-скил",
            "price": 750
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, Category::SoftSkill);
        assert_eq!(product.price, Some(Price::from_units(750)));
        assert!(product.is_purchasable());
    }

    #[test]
    fn test_priceless_product() {
        let json = r#"{
            "id": "b06cde61",
            "description": "",
            "image": "/Mithro.svg",
            "title": "Мамка-таймер",
            "category": "другое",
            "price": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_purchasable());
    }
}
