// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Staged event delivery
//!
//! This module provides:
//! - `EventCache` - Buffer events until a commit point, then fire them in order
//! - `Fireable` - The dispatcher capability a cache forwards to
//! - `EventRecord` - A staged event name and payload

mod cache;
mod dispatch;
mod record;

pub use cache::{EventCache, FlushError};
pub use dispatch::{DispatchError, Fireable};
pub use record::EventRecord;
