// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op dispatcher for when event delivery is disabled.

use evcache_core::{DispatchError, Fireable};

/// Dispatcher that accepts every event and does nothing with it.
///
/// Used when nothing subscribes to committed events, or in minimal deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpFireable;

impl NoOpFireable {
    pub fn new() -> Self {
        Self
    }
}

impl<D> Fireable<D> for NoOpFireable {
    fn fire(&self, _event: &str, _data: D) -> Result<(), DispatchError> {
        Ok(())
    }
}
