//! Unified error types for the alert engine.
//!
//! A single `Error` enum that every subsystem converts into.  An alert whose
//! creation delay is not yet met is not an error; it is withheld for the
//! cycle.

use core::fmt;

use crate::catalog::FactoryId;
use crate::category::EventCategory;
use crate::ids::EventId;

// ---------------------------------------------------------------------------
// Top-level engine error
// ---------------------------------------------------------------------------

/// Every fallible operation in the engine funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The catalog is missing or malformed for the requested operation.
    Catalog(CatalogError),
    /// A dynamic alert factory could not build its alert.
    Factory(FactoryError),
    /// A wire event list or frame could not be encoded or decoded.
    Wire(WireError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "catalog: {e}"),
            Self::Factory(e) => write!(f, "factory: {e}"),
            Self::Wire(e) => write!(f, "wire: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Configuration defects in the event catalog.
///
/// `MissingEntry` is raised at resolution time when a caller explicitly
/// requires an alert; the remaining variants only occur while loading an
/// authoritative catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No alert exists for this event under the required category.
    MissingEntry { event: EventId, category: EventCategory },
    /// Event name not known to this build.
    UnknownEvent(String),
    /// Category name not known to this build.
    UnknownCategory(String),
    /// Factory name not known to this build.
    UnknownFactory(String),
    /// A factory reference carries the wrong number of bound arguments.
    FactoryArity {
        factory: FactoryId,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntry { event, category } => {
                write!(f, "no {category} alert for event {event}")
            }
            Self::UnknownEvent(name) => write!(f, "unknown event '{name}'"),
            Self::UnknownCategory(name) => write!(f, "unknown category '{name}'"),
            Self::UnknownFactory(name) => write!(f, "unknown factory '{name}'"),
            Self::FactoryArity {
                factory,
                expected,
                found,
            } => write!(
                f,
                "factory {factory} takes {expected} argument(s), {found} given"
            ),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Factory errors
// ---------------------------------------------------------------------------

/// A dynamic alert could not be built from the supplied arguments.
///
/// These are treated as defects in the upstream condition generator and are
/// never masked with a substitute alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryError {
    /// The vehicle snapshot lacks a field the factory reads.
    MissingField {
        factory: FactoryId,
        field: &'static str,
    },
    /// The catalog bound fewer text arguments than the factory needs.
    MissingArgument { factory: FactoryId, index: usize },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { factory, field } => {
                write!(f, "{factory} needs snapshot field '{field}'")
            }
            Self::MissingArgument { factory, index } => {
                write!(f, "{factory} is missing bound argument #{index}")
            }
        }
    }
}

impl From<FactoryError> for Error {
    fn from(e: FactoryError) -> Self {
        Self::Factory(e)
    }
}

// ---------------------------------------------------------------------------
// Wire errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Serialisation of the event list failed.
    Encode,
    /// The payload is not a valid event list.
    Decode,
    /// The payload exceeds the configured frame limit.
    FrameTooLarge(usize),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "event list encode failed"),
            Self::Decode => write!(f, "event list decode failed"),
            Self::FrameTooLarge(len) => write!(f, "frame of {len} bytes exceeds limit"),
        }
    }
}

impl From<WireError> for Error {
    fn from(e: WireError) -> Self {
        Self::Wire(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Engine-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
