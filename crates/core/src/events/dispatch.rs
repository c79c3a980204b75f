// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher capability that committed events are forwarded to

use std::sync::Arc;
use thiserror::Error;

/// Errors a dispatcher reports when it cannot take an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("dispatcher closed")]
    Closed,
    #[error("event {event} rejected: {reason}")]
    Rejected { event: String, reason: String },
    #[error("dispatch failed: {0}")]
    Other(String),
}

/// Anything that can fire a named event with a payload.
///
/// The cache knows nothing about subscribers, filtering or fan-out; those stay
/// behind this trait. Implementations may block, and a returned error aborts
/// the flush that called them.
pub trait Fireable<D> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError>;
}

impl<D, T: Fireable<D> + ?Sized> Fireable<D> for &T {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        (**self).fire(event, data)
    }
}

impl<D, T: Fireable<D> + ?Sized> Fireable<D> for Arc<T> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        (**self).fire(event, data)
    }
}

impl<D, T: Fireable<D> + ?Sized> Fireable<D> for Box<T> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        (**self).fire(event, data)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
