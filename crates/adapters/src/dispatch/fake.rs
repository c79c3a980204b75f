// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake dispatcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use evcache_core::{DispatchError, Fireable};
use std::sync::{Arc, Mutex};

/// Recorded fire call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireCall<D> {
    pub event: String,
    pub data: D,
}

struct FakeState<D> {
    calls: Vec<FireCall<D>>,
    attempts: usize,
    fail_on: Option<usize>,
}

/// Fake dispatcher for testing
///
/// Records every successful fire. Clones share the same record, so a test can
/// hand one clone to a cache and inspect another.
pub struct FakeFireable<D> {
    state: Arc<Mutex<FakeState<D>>>,
}

impl<D> FakeFireable<D> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                attempts: 0,
                fail_on: None,
            })),
        }
    }

    /// Reject the `attempt`-th fire (0-based, over the fake's lifetime)
    pub fn fail_on(self, attempt: usize) -> Self {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).fail_on = Some(attempt);
        self
    }

    /// Number of fires attempted, including rejected ones
    pub fn attempts(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).attempts
    }

    /// Names of all recorded events, in delivery order
    pub fn event_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .map(|c| c.event.clone())
            .collect()
    }
}

impl<D: Clone> FakeFireable<D> {
    /// Get all recorded calls
    pub fn calls(&self) -> Vec<FireCall<D>> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }
}

impl<D> Default for FakeFireable<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for FakeFireable<D> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<D> Fireable<D> for FakeFireable<D> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let attempt = state.attempts;
        state.attempts += 1;

        if state.fail_on == Some(attempt) {
            return Err(DispatchError::Rejected {
                event: event.to_string(),
                reason: format!("fake rejected attempt {}", attempt),
            });
        }

        state.calls.push(FireCall {
            event: event.to_string(),
            data,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
