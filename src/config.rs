//! Engine configuration parameters
//!
//! All tunable parameters for the alert engine.  Values can be loaded from
//! JSON at process start; the engine never mutates them afterwards.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // --- Timing ---
    /// Control loop period (milliseconds)
    pub cycle_period_ms: u32,
    /// A soft-disable countdown shorter than this escalates to an
    /// immediate-disable alert (milliseconds)
    pub soft_disable_immediate_ms: u32,

    // --- Presentation ---
    /// Display speeds in km/h rather than mph
    pub metric: bool,
    /// Optional JSON text table overriding the built-in English strings
    pub language_file: Option<PathBuf>,

    // --- Wire ---
    /// Largest accepted wire frame payload (bytes)
    pub max_frame_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cycle_period_ms: 10, // 100 Hz
            soft_disable_immediate_ms: 500,
            metric: true,
            language_file: None,
            max_frame_bytes: 4096,
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot run with.  Invalid ranges are
    /// refused, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.cycle_period_ms == 0 {
            return Err(Error::Config("cycle_period_ms must be non-zero"));
        }
        if self.soft_disable_immediate_ms < self.cycle_period_ms {
            return Err(Error::Config(
                "soft_disable_immediate_ms must span at least one cycle",
            ));
        }
        if self.max_frame_bytes <= crate::wire::HEADER_SIZE {
            return Err(Error::Config("max_frame_bytes must exceed the frame header"));
        }
        Ok(())
    }

    /// The control cycle period as a [`CyclePeriod`].
    pub fn period(&self) -> CyclePeriod {
        CyclePeriod::from_millis(self.cycle_period_ms)
    }

    /// Escalation threshold for soft-disable alerts, in cycles.
    pub fn soft_disable_immediate_cycles(&self) -> u32 {
        self.period()
            .cycles(Duration::from_millis(u64::from(self.soft_disable_immediate_ms)))
    }
}

// ---------------------------------------------------------------------------
// Cycle period
// ---------------------------------------------------------------------------

/// Fixed control-cycle period used to turn wall-clock durations into cycle
/// counts.
///
/// Conversion floors on whole microseconds, so the same duration always maps
/// to the same number of cycles regardless of floating-point cycle-time
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclePeriod {
    micros: u64,
}

impl CyclePeriod {
    pub const fn from_millis(ms: u32) -> Self {
        Self {
            micros: ms as u64 * 1000,
        }
    }

    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_micros(self.micros)
    }

    /// Whole cycles contained in `d` (floor).  A zero period yields zero.
    pub fn cycles(self, d: Duration) -> u32 {
        if self.micros == 0 {
            return 0;
        }
        let n = d.as_micros() / u128::from(self.micros);
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Fewest whole cycles covering at least `d` (ceiling).  A zero period
    /// yields zero.
    pub fn cycles_ceil(self, d: Duration) -> u32 {
        if self.micros == 0 {
            return 0;
        }
        let n = d.as_micros().div_ceil(u128::from(self.micros));
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Wall-clock time covered by `n` cycles.
    pub fn elapsed(self, n: u32) -> Duration {
        Duration::from_micros(self.micros.saturating_mul(u64::from(n)))
    }
}

impl Default for CyclePeriod {
    fn default() -> Self {
        EngineConfig::default().period()
    }
}
