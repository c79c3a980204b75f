// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced dispatcher wrapper for consistent observability

use evcache_core::{DispatchError, Fireable};

/// Wrapper that adds tracing to any dispatcher
#[derive(Clone, Debug)]
pub struct TracedFireable<F> {
    inner: F,
}

impl<F> TracedFireable<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<D, F: Fireable<D>> Fireable<D> for TracedFireable<F> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        let span = tracing::debug_span!("dispatch.fire", event);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.fire(event, data);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::trace!(elapsed_us = elapsed.as_micros() as u64, "fired"),
            Err(e) => tracing::error!(
                elapsed_us = elapsed.as_micros() as u64,
                error = %e,
                "fire failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
