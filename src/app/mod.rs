//! Application core: per-cycle orchestration.  The cycle path does no I/O;
//! only `AlertService::from_config` reads a language file at startup.
//!
//! [`service::AlertService`] drives the event set once per control cycle.
//! All interaction with the outside world happens through the **port
//! traits** in [`ports`], keeping this layer testable without a UI,
//! transport or language files.

pub mod events;
pub mod ports;
pub mod service;
