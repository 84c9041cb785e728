//! Order entity
//!
//! Orders are immutable after creation except for their status. Ids are the
//! human-facing `ORD-{n}` strings customers see on receipts.

use crate::core::entity::{Entity, Listable};
use crate::core::error::{AdminError, AdminResult};
use crate::core::field::{FieldFormat, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u64,
    /// Denormalized at order time; survives later product renames
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at order time
    pub price: f64,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Entity for Order {
    type Id = String;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn entity_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Listable for Order {
    fn indexed_fields() -> &'static [&'static str] {
        &["id", "customerName", "customerEmail"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::String(self.id.clone())),
            "customerName" => Some(FieldValue::String(self.customer_name.clone())),
            "customerEmail" => Some(FieldValue::String(self.customer_email.clone())),
            "date" => Some(FieldValue::DateTime(self.date)),
            "totalAmount" => Some(FieldValue::Float(self.total_amount)),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            _ => None,
        }
    }
}

/// Payload for creating an order
///
/// The total is always derived from the line items, never taken from the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
}

impl OrderDraft {
    pub fn validate(&self) -> AdminResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(AdminError::validation("customerName", "must not be empty"));
        }
        if !FieldFormat::Email.validate(&self.customer_email) {
            return Err(AdminError::validation(
                "customerEmail",
                "must be a valid email address",
            ));
        }
        if self.items.is_empty() {
            return Err(AdminError::validation(
                "items",
                "an order needs at least one line item",
            ));
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(AdminError::validation("items", "quantity must be positive"));
        }
        Ok(())
    }

    pub fn into_order(self, id: String, date: DateTime<Utc>) -> Order {
        let total_amount = self
            .items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();
        Order {
            id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            date,
            total_amount,
            status: OrderStatus::Pending,
            items: self.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Liam Johnson".to_string(),
            customer_email: "liam.j@example.com".to_string(),
            items: vec![
                OrderItem {
                    product_id: 2,
                    product_name: "Mechanical Keyboard".to_string(),
                    quantity: 1,
                    price: 120.0,
                },
                OrderItem {
                    product_id: 1,
                    product_name: "Wireless Mouse".to_string(),
                    quantity: 1,
                    price: 25.99,
                },
            ],
        }
    }

    #[test]
    fn test_total_derived_from_items() {
        let order = draft().into_order("ORD-10016".to_string(), Utc::now());
        assert!((order.total_amount - 145.99).abs() < 1e-9);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut d = draft();
        d.customer_email = "liam-at-example".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut d = draft();
        d.items.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let json = serde_json::to_string(&OrderStatus::Shipped).expect("serialize");
        assert_eq!(json, "\"Shipped\"");
    }
}
