// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Order validation
//!
//! Checks run in a fixed order: customer id, product ids, amounts. A product id
//! failure always wins over an amount failure. How a missing customer id
//! interacts with the item checks depends on the [`ValidationMode`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::order::OrderRequest;

/// Smallest amount accepted for a single item
pub const MIN_ITEM_AMOUNT: f64 = 0.1;

/// Selects how a missing customer id is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// A missing customer id stops validation and is rejected with 400
    #[default]
    Strict,
    /// A missing customer id is recorded but later item failures replace it,
    /// and the response keeps a 200 status line
    Legacy,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Legacy => write!(f, "legacy"),
        }
    }
}

/// Reasons an order request is rejected
///
/// The display text of each variant is the message returned to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderValidationError {
    /// `customerId` is absent or empty
    #[error("No Customer ID")]
    MissingCustomer,
    /// At least one item has an absent or empty `productId`
    #[error("Bad Request: No Product ID")]
    MissingProductId,
    /// At least one item has an amount below [`MIN_ITEM_AMOUNT`]
    #[error("Bad Request: amount can not be less than 0.1")]
    AmountTooSmall,
}

impl OrderValidationError {
    /// Stable label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCustomer => "missing_customer",
            Self::MissingProductId => "missing_product_id",
            Self::AmountTooSmall => "amount_too_small",
        }
    }
}

impl OrderRequest {
    /// Validate the request
    ///
    /// An empty item list passes both item checks.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), OrderValidationError> {
        let mut outcome = Ok(());

        if !self.has_customer_id() {
            if mode == ValidationMode::Strict {
                return Err(OrderValidationError::MissingCustomer);
            }
            outcome = Err(OrderValidationError::MissingCustomer);
        }

        if self.items.iter().any(|item| !item.has_product_id()) {
            return Err(OrderValidationError::MissingProductId);
        }

        if self
            .items
            .iter()
            .any(|item| item.amount().is_none_or(|amount| amount < MIN_ITEM_AMOUNT))
        {
            return Err(OrderValidationError::AmountTooSmall);
        }

        outcome
    }
}
