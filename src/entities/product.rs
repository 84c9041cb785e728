//! Product entity and its list-view row

use crate::core::entity::{Entity, Listable};
use crate::core::error::{AdminError, AdminResult};
use crate::core::field::{FieldFormat, FieldValue};
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// References a [`super::Category`]; may dangle after a category delete
    /// under older data, in which case list views show "Uncategorized"
    pub category_id: u64,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub sold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Entity for Product {
    type Id = u64;

    fn resource_name() -> &'static str {
        "products"
    }

    fn entity_name() -> &'static str {
        "Product"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category_id: u64,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub sold: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl ProductDraft {
    /// Check the payload before it reaches the store
    pub fn validate(&self) -> AdminResult<()> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AdminError::validation("price", "must be non-negative"));
        }
        if let Some(url) = &self.image_url
            && !FieldFormat::Url.validate(url)
        {
            return Err(AdminError::validation("imageUrl", "must be a valid URL"));
        }
        Ok(())
    }

    /// Materialize the draft into a product with the given id
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
            sold: self.sold,
            image_url: self.image_url,
            is_featured: self.is_featured,
        }
    }
}

/// A product enriched with its resolved category name, as list views see it
///
/// This is the shape the query engine runs over: search covers the product
/// name and the resolved category name, and any visible column is sortable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    /// Resolved at read time; "Uncategorized" when the reference dangles
    pub category_name: String,
}

impl Entity for ProductRow {
    type Id = u64;

    fn resource_name() -> &'static str {
        Product::resource_name()
    }

    fn entity_name() -> &'static str {
        Product::entity_name()
    }

    fn id(&self) -> u64 {
        self.product.id
    }
}

impl Listable for ProductRow {
    fn indexed_fields() -> &'static [&'static str] {
        &["name", "categoryName"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Integer(self.product.id as i64)),
            "name" => Some(FieldValue::String(self.product.name.clone())),
            "categoryName" => Some(FieldValue::String(self.category_name.clone())),
            "price" => Some(FieldValue::Float(self.product.price)),
            "stock" => Some(FieldValue::Integer(self.product.stock as i64)),
            "sold" => Some(FieldValue::Integer(self.product.sold as i64)),
            "isFeatured" => Some(FieldValue::Boolean(self.product.is_featured)),
            _ => None,
        }
    }
}
