//! Core systems for Horizon MsgBox.
//!
//! This crate provides the foundational components the dialog layer is
//! built on:
//!
//! - **Object Model**: Identity, parent-child ownership and z-order for
//!   every widget, tracked in a process-wide registry
//! - **Signal/Slot System**: Type-safe change notification between objects
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_msgbox_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Registry
//!
//! Widgets register themselves on construction and are unregistered when
//! dropped. The registry must be initialized once per process before any
//! widget is created:
//!
//! ```
//! use horizon_msgbox_core::init_global_registry;
//!
//! init_global_registry();
//! ```

pub mod logging;
mod object;
mod signal;

pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectError, ObjectId,
    ObjectResult, SharedObjectRegistry,
};
pub use signal::{ConnectionId, Signal};
