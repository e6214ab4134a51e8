//! Inputs to dynamic alert factories.
//!
//! Factories are pure functions of exactly the values in [`FactoryArgs`]:
//! static car parameters, the live vehicle snapshot, the units flag and
//! the remaining soft-disable countdown.  No hidden global state.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Static car parameters
// ---------------------------------------------------------------------------

/// Per-vehicle constants known after fingerprinting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarParams {
    /// Brand family, e.g. `"honda"`, `"hyundai"`.
    pub car_name: String,
    /// Minimum speed at which engagement is allowed (m/s).
    pub min_enable_speed: f32,
    /// Minimum speed at which steering is available (m/s).
    pub min_steer_speed: f32,
}

// ---------------------------------------------------------------------------
// Live vehicle snapshot (read-only to factories; written by the caller)
// ---------------------------------------------------------------------------

/// Interface board variant reported by the peripheral state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PandaType {
    Unknown,
    WhitePanda,
    GreyPanda,
    BlackPanda,
    Pedal,
    Uno,
    Dos,
    RedPanda,
}

impl PandaType {
    /// Boards with a built-in GPS receiver.
    pub fn has_integrated_gps(self) -> bool {
        matches!(self, Self::Uno | Self::Dos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanFaultKind {
    /// Expected message never seen.
    Missing,
    /// Message stopped arriving.
    Timeout,
}

/// A specific CAN message fault, when the bus monitor can name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanFault {
    pub kind: CanFaultKind,
    pub address: u32,
}

/// Point-in-time view of the vehicle state fields factories read.
///
/// Fields are optional because their publishers run on independent clocks;
/// a factory that needs an absent field fails rather than guessing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSnapshot {
    /// Calibration progress (0–100 %).
    pub calibration_percent: Option<u8>,
    /// Connected interface board.
    pub panda_type: Option<PandaType>,
    /// Debug joystick axes (gas/brake first, steer second), each −1..1.
    pub joystick_axes: Option<Vec<f32>>,
    /// Named CAN fault, if any.
    pub can_fault: Option<CanFault>,
}

// ---------------------------------------------------------------------------
// Factory arguments
// ---------------------------------------------------------------------------

/// The fixed argument tuple handed to every alert factory.
#[derive(Debug, Clone, Copy)]
pub struct FactoryArgs<'a> {
    pub car: &'a CarParams,
    pub state: &'a VehicleSnapshot,
    /// Display speeds in km/h.
    pub metric: bool,
    /// Cycles left in the caller's soft-disable countdown.
    pub soft_disable_cycles: u32,
}

impl<'a> FactoryArgs<'a> {
    pub fn new(car: &'a CarParams, state: &'a VehicleSnapshot, metric: bool) -> Self {
        Self {
            car,
            state,
            metric,
            soft_disable_cycles: u32::MAX,
        }
    }

    #[must_use]
    pub fn with_soft_disable_cycles(mut self, cycles: u32) -> Self {
        self.soft_disable_cycles = cycles;
        self
    }
}
