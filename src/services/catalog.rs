//! Catalog service: products and categories
//!
//! Owns the referential rule between the two collections: a category that is
//! still referenced by products cannot be deleted (Conflict). The rule lives
//! here and nowhere else.

use crate::core::entity::IdSequence;
use crate::core::error::{AdminError, AdminResult};
use crate::core::query::{ListQuery, PageResponse, run_query};
use crate::entities::{Category, CategoryDraft, CategoryRow, Product, ProductDraft, ProductRow};
use crate::storage::EntityStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Category name shown when a product's reference no longer resolves
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Service over the product and category stores
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn EntityStore<Product>>,
    categories: Arc<dyn EntityStore<Category>>,
    product_ids: Arc<IdSequence>,
    category_ids: Arc<IdSequence>,
}

impl CatalogService {
    pub fn new(
        products: Arc<dyn EntityStore<Product>>,
        categories: Arc<dyn EntityStore<Category>>,
        product_ids: Arc<IdSequence>,
        category_ids: Arc<IdSequence>,
    ) -> Self {
        CatalogService {
            products,
            categories,
            product_ids,
            category_ids,
        }
    }

    // === Products ===

    /// List products for a table view: enrich with the resolved category
    /// name, then search → sort → paginate
    pub async fn list_products(&self, query: &ListQuery) -> AdminResult<PageResponse<ProductRow>> {
        let categories = self.categories.list().await?;
        let by_id: HashMap<u64, String> =
            categories.into_iter().map(|c| (c.id, c.name)).collect();

        let rows: Vec<ProductRow> = self
            .products
            .list()
            .await?
            .into_iter()
            .map(|product| {
                let category_name = by_id
                    .get(&product.category_id)
                    .cloned()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                ProductRow {
                    product,
                    category_name,
                }
            })
            .collect();

        Ok(run_query(rows, query))
    }

    /// Fetch a single product
    pub async fn get_product(&self, id: u64) -> AdminResult<Product> {
        self.products
            .get(&id)
            .await?
            .ok_or_else(|| AdminError::not_found("Product", id))
    }

    /// Create a product with a freshly assigned id
    pub async fn create_product(&self, draft: ProductDraft) -> AdminResult<Product> {
        draft.validate()?;
        let product = draft.into_product(self.product_ids.next_id());
        debug!(id = product.id, name = %product.name, "creating product");
        self.products.insert(product).await
    }

    /// Replace a product's fields; the id never changes
    pub async fn update_product(&self, id: u64, draft: ProductDraft) -> AdminResult<Product> {
        draft.validate()?;
        self.products.update(&id, draft.into_product(id)).await
    }

    pub async fn delete_product(&self, id: u64) -> AdminResult<()> {
        self.products.delete(&id).await
    }

    /// Flip a product's featured flag; calling twice restores the original
    pub async fn toggle_featured(&self, id: u64) -> AdminResult<Product> {
        let mut product = self.get_product(id).await?;
        product.is_featured = !product.is_featured;
        self.products.update(&id, product).await
    }

    // === Categories ===

    /// List all categories sorted by name, with derived product counts
    pub async fn list_categories(&self) -> AdminResult<Vec<CategoryRow>> {
        let products = self.products.list().await?;
        let mut counts: HashMap<u64, usize> = HashMap::new();
        for product in &products {
            *counts.entry(product.category_id).or_default() += 1;
        }

        let mut rows: Vec<CategoryRow> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|category| {
                let product_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryRow {
                    category,
                    product_count,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.category.name.cmp(&b.category.name));
        Ok(rows)
    }

    pub async fn create_category(&self, draft: CategoryDraft) -> AdminResult<Category> {
        draft.validate()?;
        let category = draft.into_category(self.category_ids.next_id());
        self.categories.insert(category).await
    }

    pub async fn update_category(&self, id: u64, draft: CategoryDraft) -> AdminResult<Category> {
        draft.validate()?;
        self.categories.update(&id, draft.into_category(id)).await
    }

    /// Delete a category, rejecting while any product still references it
    pub async fn delete_category(&self, id: u64) -> AdminResult<()> {
        let in_use = self
            .products
            .list()
            .await?
            .iter()
            .filter(|p| p.category_id == id)
            .count();
        if in_use > 0 {
            return Err(AdminError::Conflict(format!(
                "cannot delete category: {in_use} product(s) still reference it"
            )));
        }
        self.categories.delete(&id).await
    }
}
