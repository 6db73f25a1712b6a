// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous event bus with ordered, identity-addressed listeners

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type produced by listener bodies
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A listener invoked with the emitted arguments
///
/// The `Arc` is the listener's identity: keep a clone to hand to
/// [`EventBus::off`] later. Registering the same `Arc` twice invokes it
/// once per registration.
pub type Listener = Arc<dyn Fn(&[Value]) -> Result<(), BoxError> + Send + Sync>;

/// Wrap a closure as a [`Listener`] handle
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&[Value]) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A listener failed during [`EventBus::emit`]
///
/// Emission stops at the first failing listener; later listeners in the
/// same pass are not invoked.
#[derive(Debug, Error)]
#[error("listener for event \"{event}\" failed: {source}")]
pub struct EmitError {
    pub event: String,
    #[source]
    pub source: BoxError,
}

/// The event bus invokes listeners in registration order, synchronously,
/// on the emitting thread
pub struct EventBus {
    listeners: Arc<RwLock<HashMap<String, Vec<Listener>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a listener for `name`
    ///
    /// Appends to the list for `name`; insertion order is invocation order.
    /// No deduplication.
    pub fn on(&self, name: impl Into<String>, listener: Listener) {
        let name = name.into();
        trace!(event = %name, "listener registered");
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        map.entry(name).or_default().push(listener);
    }

    /// Remove the first identity-matched occurrence of `target` from `name`
    ///
    /// Unknown event name or absent listener is a silent no-op, so cleanup
    /// code is unconditionally safe to call.
    pub fn off(&self, name: &str, target: &Listener) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        if let Some(list) = map.get_mut(name) {
            if let Some(pos) = list.iter().position(|l| Arc::ptr_eq(l, target)) {
                list.remove(pos);
                trace!(event = name, "listener removed");
            }
            if list.is_empty() {
                map.remove(name);
            }
        }
    }

    /// Invoke every listener registered for `name`, in order, with `args`
    ///
    /// The listener list is snapshotted at call start: a listener removed by
    /// an earlier listener in the same pass is still invoked, and a listener
    /// registered mid-pass waits for the next emit. The registry lock is not
    /// held during invocation, so listeners may re-enter the bus, including
    /// recursive `emit`.
    ///
    /// The first listener returning `Err` aborts the pass; the error surfaces
    /// to the caller with the event name attached. No listeners registered is
    /// not an error.
    pub fn emit(&self, name: &str, args: &[Value]) -> Result<(), EmitError> {
        let snapshot: Vec<Listener> = {
            let map = self.listeners.read().unwrap_or_else(|e| e.into_inner());
            match map.get(name) {
                Some(list) => list.clone(),
                None => return Ok(()),
            }
        };
        debug!(event = name, listeners = snapshot.len(), "emit");
        for l in snapshot {
            l(args).map_err(|source| EmitError {
                event: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Number of listeners currently registered for `name`
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
