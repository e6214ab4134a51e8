//! Event categories and the control-state transitions they imply.
//!
//! One event may carry alerts under several categories at once, so
//! category membership is tracked as a bitmask ([`CategoryFlags`]), the
//! same way safety faults are accumulated in a fault mask.
//!
//! ```text
//!  Enable            ──▶ Engage
//!  UserDisable       ──▶ Disengage(User)
//!  SoftDisable       ──▶ Disengage(Soft)       bounded countdown
//!  ImmediateDisable  ──▶ Disengage(Immediate)  zero delay
//!  NoEntry           ──▶ BlockEngage           current state kept
//!  PreEnable / Warning / Permanent ──▶ (presentation only)
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Classification of how an event's alert affects control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum EventCategory {
    Enable = 0,
    PreEnable = 1,
    NoEntry = 2,
    Warning = 3,
    UserDisable = 4,
    SoftDisable = 5,
    ImmediateDisable = 6,
    Permanent = 7,
}

impl EventCategory {
    /// Total number of categories, used to size per-event slot tables.
    pub const COUNT: usize = 8;

    pub const ALL: [EventCategory; Self::COUNT] = [
        Self::Enable,
        Self::PreEnable,
        Self::NoEntry,
        Self::Warning,
        Self::UserDisable,
        Self::SoftDisable,
        Self::ImmediateDisable,
        Self::Permanent,
    ];

    /// Slot index in a per-event table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit for this category in a [`CategoryFlags`] mask.
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Wire / catalog symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::PreEnable => "preEnable",
            Self::NoEntry => "noEntry",
            Self::Warning => "warning",
            Self::UserDisable => "userDisable",
            Self::SoftDisable => "softDisable",
            Self::ImmediateDisable => "immediateDisable",
            Self::Permanent => "permanent",
        }
    }

    /// Parse a category symbol.  Unknown names yield `None`; callers in
    /// non-authoritative contexts treat that as "no category".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// The control-state transition this category asks the caller to apply,
    /// if any.
    pub const fn transition(self) -> Option<Transition> {
        match self {
            Self::Enable => Some(Transition::Engage),
            Self::UserDisable => Some(Transition::Disengage(DisengageKind::User)),
            Self::SoftDisable => Some(Transition::Disengage(DisengageKind::Soft)),
            Self::ImmediateDisable => Some(Transition::Disengage(DisengageKind::Immediate)),
            Self::NoEntry => Some(Transition::BlockEngage),
            Self::PreEnable | Self::Warning | Self::Permanent => None,
        }
    }

    /// True for categories that never change control state.
    pub const fn is_presentation_only(self) -> bool {
        self.transition().is_none()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transition contract
// ---------------------------------------------------------------------------

/// How urgently control must be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisengageKind {
    /// Driver-initiated (cancel button, pedal).
    User,
    /// Countdown permitted; its length is owned by the caller.
    Soft,
    /// Zero-delay release.
    Immediate,
}

/// A control-state transition justified by an active event.
///
/// The engine only reports these; applying them is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Engage,
    Disengage(DisengageKind),
    /// Suppress a pending engage request without changing current state.
    BlockEngage,
}

impl Transition {
    /// Most severe first.
    pub const BY_SEVERITY: [Transition; 5] = [
        Transition::Disengage(DisengageKind::Immediate),
        Transition::Disengage(DisengageKind::Soft),
        Transition::Disengage(DisengageKind::User),
        Transition::BlockEngage,
        Transition::Engage,
    ];

    /// The category that implies this transition.
    pub const fn category(self) -> EventCategory {
        match self {
            Self::Engage => EventCategory::Enable,
            Self::Disengage(DisengageKind::User) => EventCategory::UserDisable,
            Self::Disengage(DisengageKind::Soft) => EventCategory::SoftDisable,
            Self::Disengage(DisengageKind::Immediate) => EventCategory::ImmediateDisable,
            Self::BlockEngage => EventCategory::NoEntry,
        }
    }
}

// ---------------------------------------------------------------------------
// Category flags
// ---------------------------------------------------------------------------

/// Set of categories present in one event's catalog entry.
///
/// Raw bits are preserved as received so a peer running a newer catalog can
/// be relayed without loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryFlags(u8);

impl CategoryFlags {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, category: EventCategory) {
        self.0 |= category.mask();
    }

    pub const fn contains(self, category: EventCategory) -> bool {
        self.0 & category.mask() != 0
    }

    /// Categories set in this mask, in category order.
    pub fn categories(self) -> heapless::Vec<EventCategory, { EventCategory::COUNT }> {
        EventCategory::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }
}

impl FromIterator<EventCategory> for CategoryFlags {
    fn from_iter<I: IntoIterator<Item = EventCategory>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for c in iter {
            flags.insert(c);
        }
        flags
    }
}

impl fmt::Display for CategoryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in self.categories() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(c.as_str())?;
            first = false;
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}
