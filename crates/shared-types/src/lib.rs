// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the order API service
//!
//! This crate provides the order domain model and its validation rules,
//! kept free of HTTP concerns so the server and its tests can share them.

pub mod order;
pub mod validation;

pub use order::{Item, OrderRecord, OrderRequest};
pub use validation::{MIN_ITEM_AMOUNT, OrderValidationError, ValidationMode};
