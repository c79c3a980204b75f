// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Staged event records

use std::borrow::Cow;

/// A staged event waiting for the next flush
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord<D> {
    /// The event name, borrowed when it is a static string
    pub name: Cow<'static, str>,
    /// Opaque payload, handed to the dispatcher untouched
    pub data: D,
}

impl<D> EventRecord<D> {
    pub fn new(name: impl Into<Cow<'static, str>>, data: D) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
