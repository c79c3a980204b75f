// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event cache that stages events until a commit point

use super::dispatch::{DispatchError, Fireable};
use super::record::EventRecord;
use crate::config::CacheConfig;
use std::borrow::Cow;
use thiserror::Error;

/// A dispatcher failure partway through a flush
///
/// Records before `index` were delivered and are gone from the cache. The
/// record at `index` was handed to the dispatcher and dropped. Records after it
/// stay staged for the next flush.
#[derive(Debug, Error)]
#[error("flush stopped at event {index} ({event}): {source}")]
pub struct FlushError {
    /// Name of the event the dispatcher failed on
    pub event: String,
    /// Position of that event within the flushed round
    pub index: usize,
    /// Error the dispatcher returned
    pub source: DispatchError,
}

/// Buffers events for a dispatcher until [`EventCache::flush`] is called.
///
/// Nothing reaches the dispatcher while events are staged, so a unit of work
/// that is rolled back can [`discard`](EventCache::discard) its events instead.
/// Storage is reused between rounds and released after a spike, see
/// [`CacheConfig::should_shrink`].
#[derive(Debug)]
pub struct EventCache<F, D> {
    dispatcher: F,
    events: Vec<EventRecord<D>>,
    config: CacheConfig,
}

impl<F, D> EventCache<F, D> {
    /// Create an empty cache backed by `dispatcher`. Allocates nothing.
    pub fn new(dispatcher: F) -> Self {
        Self::with_config(dispatcher, CacheConfig::default())
    }

    /// Create a cache with explicit tunables. A shrink factor of 0 is raised
    /// to 1, which releases all spare storage after every round.
    pub fn with_config(dispatcher: F, mut config: CacheConfig) -> Self {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "raising shrink_factor to 1");
            config.shrink_factor = 1;
        }
        Self {
            dispatcher,
            events: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Stage an event to be fired on the next flush
    pub fn fire_event(&mut self, name: impl Into<Cow<'static, str>>, data: D) {
        self.events.push(EventRecord::new(name, data));
    }

    /// Drop all staged events without delivering them. Returns how many were
    /// dropped.
    pub fn discard(&mut self) -> usize {
        let discarded = self.events.len();
        self.events.clear();
        let shrunk = self.release_excess(discarded);
        tracing::debug!(discarded, shrunk, "discarded staged events");
        discarded
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Records the backing storage can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    /// Staged records in the order they were fired
    pub fn pending(&self) -> &[EventRecord<D>] {
        &self.events
    }

    pub fn dispatcher(&self) -> &F {
        &self.dispatcher
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Apply the retention policy after a round of `round_len` records.
    /// Expects the buffer to be empty.
    fn release_excess(&mut self, round_len: usize) -> bool {
        if !self.config.should_shrink(self.events.capacity(), round_len) {
            return false;
        }
        self.events.shrink_to(self.config.retained_capacity(round_len));
        true
    }
}

impl<F: Fireable<D>, D> EventCache<F, D> {
    /// Fire every staged event on the dispatcher, in order, then clear the
    /// cache. Blocks until the dispatcher has taken every event.
    ///
    /// Returns the number of events delivered. On failure the remaining
    /// events stay staged, see [`FlushError`].
    pub fn flush(&mut self) -> Result<usize, FlushError> {
        let round_len = self.events.len();
        let mut failure = None;

        let mut records = self.events.drain(..);
        for (index, record) in records.by_ref().enumerate() {
            if let Err(source) = self.dispatcher.fire(&record.name, record.data) {
                failure = Some(FlushError {
                    event: record.name.into_owned(),
                    index,
                    source,
                });
                break;
            }
        }
        let undelivered: Vec<_> = records.collect();

        if let Some(err) = failure {
            tracing::warn!(
                event = %err.event,
                index = err.index,
                remaining = undelivered.len(),
                error = %err.source,
                "flush stopped"
            );
            self.events.extend(undelivered);
            return Err(err);
        }

        let shrunk = self.release_excess(round_len);
        tracing::debug!(
            delivered = round_len,
            capacity = self.events.capacity(),
            shrunk,
            "flushed staged events"
        );
        Ok(round_len)
    }
}

impl<F, D> Drop for EventCache<F, D> {
    fn drop(&mut self) {
        if !self.events.is_empty() {
            tracing::debug!(abandoned = self.events.len(), "dropping unflushed events");
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
