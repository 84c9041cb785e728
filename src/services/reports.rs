//! Dashboard and report numbers derived from the live stores
//!
//! Nothing here is stored; every figure is recomputed from the entity
//! collections on each call, so mutations show up on the next refresh.

use crate::core::error::AdminResult;
use crate::entities::{Category, Order, OrderStatus, Product};
use crate::services::catalog::UNCATEGORIZED;
use crate::storage::EntityStore;
use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Headline numbers for the dashboard stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of non-cancelled order totals
    pub total_sales: f64,
    pub total_orders: usize,
    pub total_products: usize,
    pub total_categories: usize,
}

/// One slice of a distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
}

/// One month of sales revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// "2023-10" style bucket
    pub month: String,
    pub sales: f64,
}

/// Read-only service computing report data
#[derive(Clone)]
pub struct ReportService {
    products: Arc<dyn EntityStore<Product>>,
    categories: Arc<dyn EntityStore<Category>>,
    orders: Arc<dyn EntityStore<Order>>,
}

impl ReportService {
    pub fn new(
        products: Arc<dyn EntityStore<Product>>,
        categories: Arc<dyn EntityStore<Category>>,
        orders: Arc<dyn EntityStore<Order>>,
    ) -> Self {
        ReportService {
            products,
            categories,
            orders,
        }
    }

    /// Stat-card numbers for the dashboard homepage
    pub async fn dashboard_stats(&self) -> AdminResult<DashboardStats> {
        let orders = self.orders.list().await?;
        let total_sales = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total_amount)
            .sum();

        Ok(DashboardStats {
            total_sales,
            total_orders: orders.len(),
            total_products: self.products.count().await?,
            total_categories: self.categories.count().await?,
        })
    }

    /// Count of products per resolved category name
    ///
    /// Dangling references are bucketed under "Uncategorized". Slices come
    /// back in category-store order so the chart is stable across refreshes.
    pub async fn category_distribution(&self) -> AdminResult<Vec<ChartSlice>> {
        let names: HashMap<u64, String> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for product in self.products.list().await? {
            let name = names
                .get(&product.category_id)
                .cloned()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            *counts.entry(name).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(name, value)| ChartSlice { name, value })
            .collect())
    }

    /// Revenue per calendar month, oldest first, cancelled orders excluded
    pub async fn monthly_sales(&self) -> AdminResult<Vec<MonthlySales>> {
        let mut buckets: IndexMap<String, f64> = IndexMap::new();
        let mut orders = self.orders.list().await?;
        orders.sort_by_key(|o| o.date);

        for order in orders {
            if order.status == OrderStatus::Cancelled {
                continue;
            }
            let month = format!("{:04}-{:02}", order.date.year(), order.date.month());
            *buckets.entry(month).or_default() += order.total_amount;
        }

        Ok(buckets
            .into_iter()
            .map(|(month, sales)| MonthlySales { month, sales })
            .collect())
    }

    /// The `limit` best-selling products by units sold, highest first
    ///
    /// Ties keep the product store order, so the ranking is stable across
    /// refreshes like the other charts.
    pub async fn top_sellers(&self, limit: usize) -> AdminResult<Vec<ChartSlice>> {
        let mut products = self.products.list().await?;
        products.sort_by(|a, b| b.sold.cmp(&a.sold));

        Ok(products
            .into_iter()
            .take(limit)
            .map(|p| ChartSlice {
                name: p.name,
                value: p.sold as usize,
            })
            .collect())
    }
}
