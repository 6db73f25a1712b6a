// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Guard/payload/execute chains for conditional execution
//!
//! A chain is a value threaded through each fluent call, not a dispatch
//! mechanism: it never emits events and never touches the bus. Command
//! bodies use it to express "run this sub-step only if these conditions
//! hold, with this value" without interleaved `if` blocks.

type Guard = Box<dyn Fn() -> bool>;

/// A chain collecting guards, before any payload is attached
///
/// Guards AND-combine and are evaluated at each [`execute`](Chain::execute)
/// call against their live captured state, not at registration time.
/// Attaching a payload moves the chain to [`PayloadChain`], which exposes no
/// way to add guards: the guard list is fixed for the rest of the chain.
#[derive(Default)]
pub struct Chain {
    guards: Vec<Guard>,
}

impl Chain {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Add a guard predicate
    pub fn guard<G>(mut self, predicate: G) -> Self
    where
        G: Fn() -> bool + 'static,
    {
        self.guards.push(Box::new(predicate));
        self
    }

    /// Attach a payload, fixing the guard list
    pub fn payload<T>(self, value: T) -> PayloadChain<T> {
        PayloadChain {
            guards: self.guards,
            payload: value,
        }
    }

    /// Invoke `callback` with no arguments if every guard passes
    ///
    /// An empty guard list always passes. Returns the chain so further
    /// steps reuse the same guards.
    pub fn execute<F>(self, callback: F) -> Self
    where
        F: FnOnce(),
    {
        if passes(&self.guards) {
            callback();
        }
        self
    }
}

/// A chain carrying a payload alongside its fixed guard list
pub struct PayloadChain<T> {
    guards: Vec<Guard>,
    payload: T,
}

impl<T> PayloadChain<T> {
    /// Replace the payload, keeping the guards
    pub fn payload<U>(self, value: U) -> PayloadChain<U> {
        PayloadChain {
            guards: self.guards,
            payload: value,
        }
    }

    /// Invoke `callback` with the payload if every guard passes
    pub fn execute<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if passes(&self.guards) {
            callback(&self.payload);
        }
        self
    }
}

fn passes(guards: &[Guard]) -> bool {
    guards.iter().all(|g| g())
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
