//! Category entity

use crate::core::entity::Entity;
use crate::core::error::{AdminError, AdminResult};
use crate::core::field::FieldFormat;
use serde::{Deserialize, Serialize};

/// A product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Entity for Category {
    type Id = u64;

    fn resource_name() -> &'static str {
        "categories"
    }

    fn entity_name() -> &'static str {
        "Category"
    }

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or updating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> AdminResult<()> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "must not be empty"));
        }
        if !FieldFormat::Url.validate(&self.image_url) {
            return Err(AdminError::validation("imageUrl", "must be a valid URL"));
        }
        Ok(())
    }

    pub fn into_category(self, id: u64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// A category with its derived product count, as the categories view sees it
///
/// `product_count` is computed at read time from the products that reference
/// the category; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_image_url_rejected() {
        let draft = CategoryDraft {
            name: "Snacks & Treats".to_string(),
            description: "Portable snacks.".to_string(),
            image_url: "not a url".to_string(),
        };
        assert!(matches!(
            draft.validate(),
            Err(AdminError::Validation {
                field: "imageUrl",
                ..
            })
        ));
    }

    #[test]
    fn test_row_serializes_flat() {
        let row = CategoryRow {
            category: Category {
                id: 4,
                name: "Snacks & Treats".to_string(),
                description: "Portable snacks.".to_string(),
                image_url: "https://picsum.photos/id/104/400/300".to_string(),
            },
            product_count: 2,
        };
        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json["name"], "Snacks & Treats");
        assert_eq!(json["productCount"], 2);
    }
}
