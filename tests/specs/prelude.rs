//! Shared helpers for the spec suite.

use brix_core::{listener, Listener};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Log of argument lists received by a recording listener.
pub type ArgLog = Arc<Mutex<Vec<Vec<Value>>>>;

pub fn arg_log() -> ArgLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A listener that appends every received argument list to `log`.
pub fn recording(log: &ArgLog) -> Listener {
    let log = Arc::clone(log);
    listener(move |args| {
        log.lock().unwrap().push(args.to_vec());
        Ok(())
    })
}

/// A listener that fails the test if it is ever invoked.
pub fn forbidden(reason: &'static str) -> Listener {
    listener(move |_| Err(reason.into()))
}
