//! brix-core: In-process event, command, and observation toolkit
//!
//! This crate provides:
//! - A synchronous event bus with ordered, identity-addressed listeners
//! - Command registration over the bus and a guard/payload/execute chain DSL
//! - Observable objects whose field writes emit change events on the bus
//!
//! Everything runs to completion on the calling thread: no task queue, no
//! suspension points, no asynchronous delivery. Listeners may re-enter the
//! bus, including recursive `emit`.

pub mod bus;
pub mod chain;
pub mod command;
pub mod context;
pub mod observe;

// Re-exports
pub use bus::{listener, BoxError, EmitError, EventBus, Listener};
pub use chain::{Chain, PayloadChain};
pub use command::Commands;
pub use context::Brix;
pub use observe::{Observable, Observe, ObserveError};
