// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observable objects: field writes emit change events through the bus
//!
//! An [`Observable`] is a change-tracking map over the fields of a JSON
//! object. Writing a field with a different value emits
//! `<TypeName><CapitalizedField>Update` with `(new, old)` before the backing
//! value is updated, so observers of `ObjectProp1Update` know exactly which
//! field of which kind of object changed. A `Foo` with `prop1` emits
//! `FooProp1Update`, distinct from `ObjectProp1Update`.

use crate::bus::{EmitError, EventBus};
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::trace;

/// Type name used for anonymous objects
const OBJECT_TYPE_NAME: &str = "Object";

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("only JSON objects can be made observable")]
    NotAnObject,
    #[error("field \"{field}\" is not observed on this object")]
    UnknownField { field: String },
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Creates observable objects wired to the event bus
#[derive(Clone)]
pub struct Observe {
    bus: EventBus,
}

impl Observe {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Wrap a JSON object under the generic `Object` type name
    pub fn make_observable(&self, value: Value) -> Result<Observable, ObserveError> {
        self.make_observable_as(OBJECT_TYPE_NAME, value)
    }

    /// Wrap a JSON object under an explicit type name
    pub fn make_observable_as(
        &self,
        type_name: impl Into<String>,
        value: Value,
    ) -> Result<Observable, ObserveError> {
        let Value::Object(fields) = value else {
            return Err(ObserveError::NotAnObject);
        };
        Ok(Observable {
            bus: self.bus.clone(),
            type_name: type_name.into(),
            fields: Arc::new(RwLock::new(fields)),
        })
    }
}

/// A change-tracked object
///
/// Only fields present at wrap time are observed; writing any other field is
/// an [`ObserveError::UnknownField`]. Change detection uses `Value` equality,
/// which is deep for nested objects and arrays.
///
/// Clones share one backing store. Wrapping the same `Value` twice, by
/// contrast, copies the data into two independent stores that update and
/// emit separately.
#[derive(Clone)]
pub struct Observable {
    bus: EventBus,
    type_name: String,
    fields: Arc<RwLock<Map<String, Value>>>,
}

impl Observable {
    /// Current backing value of `field`
    pub fn get(&self, field: &str) -> Option<Value> {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(field)
            .cloned()
    }

    /// Write `field`, emitting a change event if the value differs
    ///
    /// The event carries `(new, old)` and is emitted before the backing value
    /// is updated; a listener error propagates and leaves the backing value
    /// unchanged. Writing the current value is a silent no-op.
    pub fn set(&self, field: &str, value: Value) -> Result<(), ObserveError> {
        let old = self.get(field).ok_or_else(|| ObserveError::UnknownField {
            field: field.to_string(),
        })?;
        if value == old {
            return Ok(());
        }

        let event = update_event_name(&self.type_name, field);
        trace!(event = %event, field, "field changed");
        self.bus.emit(&event, &[value.clone(), old])?;

        let mut fields = self.fields.write().unwrap_or_else(|e| e.into_inner());
        fields.insert(field.to_string(), value);
        Ok(())
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Names of the observed fields
    pub fn field_names(&self) -> Vec<String> {
        self.fields
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

/// `prop1` on type `Object` becomes `ObjectProp1Update`
fn update_event_name(type_name: &str, field: &str) -> String {
    let mut name = String::with_capacity(type_name.len() + field.len() + 6);
    name.push_str(type_name);
    let mut chars = field.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name.push_str("Update");
    name
}

#[cfg(test)]
#[path = "observe_tests.rs"]
mod tests;
