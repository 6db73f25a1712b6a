// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command registration over the event bus
//!
//! `map`/`unmap` are intent-naming over [`EventBus::on`]/[`EventBus::off`]:
//! "this function implements business logic for event X" rather than "this
//! function observes event X". There is no separate command registry —
//! commands and plain listeners share one namespace and one invocation
//! order.

use crate::bus::{EventBus, Listener};
use crate::chain::{Chain, PayloadChain};

/// Registers commands against event names and opens chains
#[derive(Clone)]
pub struct Commands {
    bus: EventBus,
}

impl Commands {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Register `command` as a listener for `name`
    pub fn map(&self, name: impl Into<String>, command: Listener) {
        self.bus.on(name, command);
    }

    /// Remove `command` by identity; no-op if absent
    pub fn unmap(&self, name: &str, command: &Listener) {
        self.bus.off(name, command);
    }

    /// Start a chain gated on `predicate`
    ///
    /// Further guards can be added with [`Chain::guard`]; they AND-combine.
    pub fn guard<G>(&self, predicate: G) -> Chain
    where
        G: Fn() -> bool + 'static,
    {
        Chain::new().guard(predicate)
    }

    /// Start an unguarded chain carrying `value`
    ///
    /// `payload(v).execute(f)` always invokes `f(&v)`.
    pub fn payload<T>(&self, value: T) -> PayloadChain<T> {
        Chain::new().payload(value)
    }

    /// Run `callback` immediately with no arguments
    ///
    /// The degenerate chain: no guards, no payload. Returns the chain so
    /// payload/execute steps can still be appended.
    pub fn execute<F>(&self, callback: F) -> Chain
    where
        F: FnOnce(),
    {
        Chain::new().execute(callback)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
