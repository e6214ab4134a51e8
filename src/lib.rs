//! Alert resolution and event-state engine for a vehicle control loop.
//!
//! Upstream logic asserts event ids each cycle; the engine tracks how long
//! each has been asserted, resolves the alerts the catalog assigns to them
//! and reports which control-state transitions they justify.  Pure logic,
//! no I/O beyond optional file loading at startup.

#![deny(unused_must_use)]

pub mod adapters;
pub mod alert;
pub mod app;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod events;
pub mod ids;
pub mod select;
pub mod snapshot;
pub mod wire;

pub use alert::{Alert, AlertSpec, Priority};
pub use app::service::{AlertService, CycleRequest};
pub use catalog::Catalog;
pub use category::{EventCategory, Transition};
pub use error::{Error, Result};
pub use events::ActiveEventSet;
pub use ids::{EventId, EventName};
