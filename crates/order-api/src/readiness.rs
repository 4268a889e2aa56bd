// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Readiness tracking
//!
//! A write-once lifecycle flag: the server starts in [`Readiness::Starting`]
//! and moves to [`Readiness::Ready`] once its listener is bound. There is no
//! way back, so a probe that has seen `Ready` never sees `Starting` again
//! within the same process.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde::Serialize;
use tracing::info;

use crate::metrics;

/// Lifecycle state reported by the health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    /// Listener not yet bound
    Starting,
    /// Listener bound, accepting requests
    Ready,
}

/// Shared handle to the process readiness flag
///
/// Clones observe and drive the same flag.
#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    ready: Arc<AtomicBool>,
}

impl ReadinessTracker {
    /// Create a tracker in the [`Readiness::Starting`] state
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to [`Readiness::Ready`]
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_ready(&self) -> bool {
        let transitioned = !self.ready.swap(true, Ordering::AcqRel);
        if transitioned {
            metrics::set_ready(true);
            info!("service marked ready");
        }
        transitioned
    }

    /// Current lifecycle state
    pub fn state(&self) -> Readiness {
        if self.is_ready() {
            Readiness::Ready
        } else {
            Readiness::Starting
        }
    }

    /// Whether the service has finished starting
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
