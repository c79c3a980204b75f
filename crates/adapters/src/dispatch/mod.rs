// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatchers that committed events can be fired on

mod channel;
mod noop;

pub use channel::{ChannelFireable, FiredEvent, FiredReceiver};
pub use noop::NoOpFireable;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFireable, FireCall};
