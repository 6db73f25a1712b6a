// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The toolkit context: one bus behind event, command, and observe handles

use crate::bus::EventBus;
use crate::command::Commands;
use crate::observe::Observe;

/// Bundles the three facilities over one shared bus
///
/// Construct one per application and pass it (or clones of it) to whatever
/// needs dispatch; there is no process-wide instance. Tests build their own
/// isolated context, so nothing leaks between them. Events emitted by
/// observables made through `observe` reach listeners and commands
/// registered through `event` and `command`.
#[derive(Clone)]
pub struct Brix {
    pub event: EventBus,
    pub command: Commands,
    pub observe: Observe,
}

impl Brix {
    pub fn new() -> Self {
        let event = EventBus::new();
        Self {
            command: Commands::new(event.clone()),
            observe: Observe::new(event.clone()),
            event,
        }
    }
}

impl Default for Brix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
