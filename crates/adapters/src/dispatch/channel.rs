// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel dispatcher handing committed events to an async consumer

use evcache_core::{DispatchError, Fireable};
use tokio::sync::mpsc;

/// An event that made it through a flush
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredEvent<D> {
    pub name: String,
    pub data: D,
}

/// Receiver for committed events
pub type FiredReceiver<D> = mpsc::UnboundedReceiver<FiredEvent<D>>;

/// Dispatcher that sends every fired event down an unbounded channel.
///
/// Sending never blocks, so a flush is not held up by the consumer. Once the
/// receiver is dropped every fire fails with [`DispatchError::Closed`].
#[derive(Debug)]
pub struct ChannelFireable<D> {
    tx: mpsc::UnboundedSender<FiredEvent<D>>,
}

impl<D> ChannelFireable<D> {
    /// Create a dispatcher and the receiver its events arrive on
    pub fn new() -> (Self, FiredReceiver<D>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Whether the receiving side has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<D> Clone for ChannelFireable<D> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<D> Fireable<D> for ChannelFireable<D> {
    fn fire(&self, event: &str, data: D) -> Result<(), DispatchError> {
        self.tx
            .send(FiredEvent {
                name: event.to_string(),
                data,
            })
            .map_err(|_| DispatchError::Closed)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
