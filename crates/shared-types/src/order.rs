// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Order request and record types
//!
//! Wire names follow the public JSON contract (`customerId`, `productId`,
//! `createdAt`, `updatedAt`).

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// A single line entry of an order
///
/// Fields other than `productId` and `amount` are kept in `extra` so that an
/// accepted item serializes back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product identifier, absent or empty values fail validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "p1")]
    pub product_id: Option<String>,
    /// Purchase amount as written by the client, must be at least 0.1
    #[schema(value_type = f64, example = 0.5)]
    pub amount: Number,
    /// Any other fields of the item
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item with the given product id and amount
    pub fn new(product_id: impl Into<String>, amount: impl Into<Number>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            amount: amount.into(),
            extra: Map::new(),
        }
    }

    /// Check whether the item carries a non-empty product id
    pub fn has_product_id(&self) -> bool {
        self.product_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Amount as a float, `None` if it has no `f64` representation
    pub fn amount(&self) -> Option<f64> {
        self.amount.as_f64()
    }
}

/// Order creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer placing the order, absent or empty values fail validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "c1")]
    pub customer_id: Option<String>,
    /// Ordered items, may be empty
    pub items: Vec<Item>,
}

impl OrderRequest {
    /// Create a request for the given customer and items
    pub fn new(customer_id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            items,
        }
    }

    /// Check whether the request carries a non-empty customer id
    pub fn has_customer_id(&self) -> bool {
        self.customer_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Ephemeral order record synthesized for an accepted request
///
/// Records are never persisted. The identifier is a random value in `[0, 1)`
/// and carries no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Random identifier in `[0, 1)`
    #[schema(example = 0.427_391)]
    pub id: f64,
    /// Construction timestamp
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    /// Always equal to `created_at`
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
    /// Items of the accepted request, unchanged
    pub items: Vec<Item>,
}

impl OrderRecord {
    /// Build a record for the given items using the thread-local RNG
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_rng(items, &mut rand::thread_rng())
    }

    /// Build a record drawing the identifier from `rng`
    pub fn with_rng<R: Rng + ?Sized>(items: Vec<Item>, rng: &mut R) -> Self {
        let now = Utc::now();
        Self {
            id: rng.r#gen::<f64>(),
            created_at: now,
            updated_at: now,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::json;

    use super::*;

    fn item(product_id: &str, amount: f64) -> Item {
        Item::new(product_id, Number::from_f64(amount).expect("finite amount"))
    }

    #[test]
    fn record_echoes_items_and_shares_timestamp() {
        let items = vec![item("p1", 0.5), Item::new("p2", 3)];
        let record = OrderRecord::new(items.clone());

        assert_eq!(record.items, items);
        assert_eq!(record.created_at, record.updated_at);
        assert!((0.0..1.0).contains(&record.id));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let first = OrderRecord::with_rng(vec![], &mut StdRng::seed_from_u64(7));
        let second = OrderRecord::with_rng(vec![], &mut StdRng::seed_from_u64(7));

        assert_eq!(first.id.to_bits(), second.id.to_bits());
        assert!(first.items.is_empty());
    }

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request: OrderRequest = serde_json::from_value(json!({
            "customerId": "c1",
            "items": [{ "productId": "p1", "amount": 0.5 }]
        }))
        .expect("valid request");

        assert_eq!(request, OrderRequest::new("c1", vec![item("p1", 0.5)]));
    }

    #[test]
    fn absent_and_null_ids_deserialize_as_missing() {
        let request: OrderRequest = serde_json::from_value(json!({
            "items": [{ "amount": 1.0 }, { "productId": null, "amount": 1.0 }]
        }))
        .expect("valid request");

        assert!(!request.has_customer_id());
        assert!(request.items.iter().all(|item| !item.has_product_id()));
    }

    #[test]
    fn empty_ids_are_missing() {
        assert!(!OrderRequest::new("", vec![]).has_customer_id());
        assert!(!Item::new("", 1).has_product_id());
        assert!(Item::new("p1", 1).has_product_id());
    }

    #[test]
    fn missing_items_field_is_rejected() {
        let result = serde_json::from_value::<OrderRequest>(json!({ "customerId": "c1" }));
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result = serde_json::from_value::<Item>(json!({ "productId": "p1", "amount": "1" }));
        assert!(result.is_err());
    }

    #[test]
    fn items_keep_integer_amounts_and_unknown_fields() {
        let items = json!([
            { "amount": 2, "note": "x", "productId": "p1" },
            { "productId": "p2", "amount": 0.5, "tags": ["a"], "meta": { "n": 1 } }
        ]);
        let parsed: Vec<Item> = serde_json::from_value(items.clone()).expect("valid items");

        assert_eq!(parsed[0].amount(), Some(2.0));
        assert_eq!(parsed[0].extra.get("note"), Some(&json!("x")));

        let record = OrderRecord::new(parsed);
        let echoed = serde_json::to_value(&record).expect("serializable record");
        assert_eq!(echoed["items"], items);
        assert_eq!(
            serde_json::to_string(&echoed["items"][0]["amount"]).expect("number"),
            "2"
        );
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let record = OrderRecord::new(vec![item("p1", 0.5)]);
        let value = serde_json::to_value(&record).expect("serializable record");

        assert_eq!(value["createdAt"], value["updatedAt"]);
        assert_eq!(value["items"], json!([{ "productId": "p1", "amount": 0.5 }]));
        assert!(value["id"].is_f64());
    }
}
