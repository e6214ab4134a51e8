//! Shorthand alert constructors.
//!
//! Every family of alerts (no-entry, soft-disable, ...) differs only in its
//! default presentation, so each is a method returning a plain
//! [`AlertSpec`] rather than a type of its own.  The builder carries the
//! cycle period and the localised header lines those families share.

use std::time::Duration;

use crate::app::ports::TextSource;
use crate::config::CyclePeriod;

use super::{AlertSize, AlertSpec, AlertStatus, AudibleAlert, Priority, VisualAlert};

/// Header lines shared by the shorthand families, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHeaders {
    pub no_entry: String,
    pub soft_disable: String,
    pub user_soft_disable: String,
    pub immediate_disable: String,
    pub startup_hint: String,
}

impl AlertHeaders {
    pub fn from_texts(texts: &dyn TextSource) -> Self {
        Self {
            no_entry: texts.text_or("header.noEntry", "Controls Unavailable"),
            soft_disable: texts.text_or("header.softDisable", "TAKE CONTROL"),
            user_soft_disable: texts
                .text_or("header.userSoftDisable", "Controls will disengage"),
            immediate_disable: texts
                .text_or("header.immediateDisable", "TAKE CONTROL IMMEDIATELY"),
            startup_hint: texts.text_or(
                "header.startupHint",
                "Always keep hands on wheel and eyes on road",
            ),
        }
    }
}

impl Default for AlertHeaders {
    fn default() -> Self {
        Self::from_texts(&crate::adapters::text::BuiltinText)
    }
}

/// Builds [`AlertSpec`]s with timings expressed in wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct AlertBuilder {
    period: CyclePeriod,
    headers: AlertHeaders,
}

impl AlertBuilder {
    pub fn new(period: CyclePeriod, headers: AlertHeaders) -> Self {
        Self { period, headers }
    }

    pub fn period(&self) -> CyclePeriod {
        self.period
    }

    pub fn headers(&self) -> &AlertHeaders {
        &self.headers
    }

    /// Whole cycles in `d`.
    pub fn cycles(&self, d: Duration) -> u32 {
        self.period.cycles(d)
    }

    /// Fully specified alert.
    #[allow(clippy::too_many_arguments)]
    pub fn alert(
        &self,
        text1: impl Into<String>,
        text2: impl Into<String>,
        status: AlertStatus,
        size: AlertSize,
        priority: Priority,
        visual: VisualAlert,
        audible: AudibleAlert,
        duration: Duration,
    ) -> AlertSpec {
        AlertSpec {
            text1: text1.into(),
            text2: text2.into(),
            status,
            size,
            priority,
            visual,
            audible,
            duration: self.cycles(duration),
            repeat: 0,
            creation_delay: 0,
        }
    }

    /// Re-trigger every `every` (wall-clock).
    pub fn repeating(&self, spec: AlertSpec, every: Duration) -> AlertSpec {
        let cycles = self.cycles(every);
        spec.with_repeat(cycles)
    }

    /// Withhold until the event has been asserted for at least `delay`.
    /// Rounds up so a partial cycle never lets the alert out early.
    pub fn delayed(&self, spec: AlertSpec, delay: Duration) -> AlertSpec {
        let cycles = self.period.cycles_ceil(delay);
        spec.with_creation_delay(cycles)
    }

    // ── Shorthand families ────────────────────────────────────

    /// Engage refused.
    pub fn no_entry(&self, text2: impl Into<String>, visual: VisualAlert) -> AlertSpec {
        self.alert(
            self.headers.no_entry.clone(),
            text2,
            AlertStatus::Normal,
            AlertSize::Mid,
            Priority::Low,
            visual,
            AudibleAlert::Refuse,
            ms(3000),
        )
    }

    pub fn soft_disable(&self, text2: impl Into<String>) -> AlertSpec {
        self.alert(
            self.headers.soft_disable.clone(),
            text2,
            AlertStatus::UserPrompt,
            AlertSize::Full,
            Priority::Mid,
            VisualAlert::SteerRequired,
            AudibleAlert::WarningSoft,
            ms(2000),
        )
    }

    /// Less harsh soft-disable for driver-caused conditions.
    pub fn user_soft_disable(&self, text2: impl Into<String>) -> AlertSpec {
        let mut spec = self.soft_disable(text2);
        spec.text1.clone_from(&self.headers.user_soft_disable);
        spec
    }

    pub fn immediate_disable(&self, text2: impl Into<String>) -> AlertSpec {
        self.alert(
            self.headers.immediate_disable.clone(),
            text2,
            AlertStatus::Critical,
            AlertSize::Full,
            Priority::Highest,
            VisualAlert::SteerRequired,
            AudibleAlert::WarningImmediate,
            ms(4000),
        )
    }

    /// Textless engage/disengage chime.
    pub fn engagement(&self, audible: AudibleAlert) -> AlertSpec {
        self.alert(
            "",
            "",
            AlertStatus::Normal,
            AlertSize::None,
            Priority::Mid,
            VisualAlert::None,
            audible,
            ms(200),
        )
    }

    /// Standing notice; mid-size when it has a second line.
    pub fn normal_permanent(
        &self,
        text1: impl Into<String>,
        text2: impl Into<String>,
    ) -> AlertSpec {
        self.permanent_with(text1, text2, Priority::Lower, ms(200))
    }

    pub fn permanent_with(
        &self,
        text1: impl Into<String>,
        text2: impl Into<String>,
        priority: Priority,
        duration: Duration,
    ) -> AlertSpec {
        let text2 = text2.into();
        let size = if text2.is_empty() {
            AlertSize::Small
        } else {
            AlertSize::Mid
        };
        self.alert(
            text1,
            text2,
            AlertStatus::Normal,
            size,
            priority,
            VisualAlert::None,
            AudibleAlert::None,
            duration,
        )
    }

    /// Startup banner.  `text2 = None` uses the shared hint line.
    pub fn startup(
        &self,
        text1: impl Into<String>,
        text2: Option<String>,
        status: AlertStatus,
    ) -> AlertSpec {
        let text2 = text2.unwrap_or_else(|| self.headers.startup_hint.clone());
        self.alert(
            text1,
            text2,
            status,
            AlertSize::Mid,
            Priority::Lower,
            VisualAlert::None,
            AudibleAlert::None,
            ms(10_000),
        )
    }
}

pub(crate) const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> AlertBuilder {
        AlertBuilder::new(CyclePeriod::from_millis(10), AlertHeaders::default())
    }

    #[test]
    fn no_entry_defaults() {
        let a = builder().no_entry("Door Open", VisualAlert::None);
        assert_eq!(a.text1, "Controls Unavailable");
        assert_eq!(a.text2, "Door Open");
        assert_eq!(a.size, AlertSize::Mid);
        assert_eq!(a.priority, Priority::Low);
        assert_eq!(a.audible, AudibleAlert::Refuse);
        assert_eq!(a.duration, 300);
    }

    #[test]
    fn user_soft_disable_swaps_header_only() {
        let b = builder();
        let soft = b.soft_disable("Seatbelt Unlatched");
        let user = b.user_soft_disable("Seatbelt Unlatched");
        assert_eq!(user.text1, "Controls will disengage");
        assert_eq!(user.priority, soft.priority);
        assert_eq!(user.audible, soft.audible);
        assert_eq!(user.duration, 200);
    }

    #[test]
    fn immediate_disable_is_highest() {
        let a = builder().immediate_disable("CAN Error");
        assert_eq!(a.priority, Priority::Highest);
        assert_eq!(a.status, AlertStatus::Critical);
        assert_eq!(a.duration, 400);
    }

    #[test]
    fn permanent_size_tracks_second_line() {
        let b = builder();
        assert_eq!(b.normal_permanent("Fan Malfunction", "").size, AlertSize::Small);
        assert_eq!(
            b.normal_permanent("Fan Malfunction", "Contact Support").size,
            AlertSize::Mid
        );
    }

    #[test]
    fn startup_uses_hint_by_default() {
        let a = builder().startup("Be ready to take over", None, AlertStatus::Normal);
        assert_eq!(a.text2, "Always keep hands on wheel and eyes on road");
        assert_eq!(a.duration, 1000);
    }

    #[test]
    fn delayed_and_repeating_convert_to_cycles() {
        let b = builder();
        let a = b.normal_permanent("No GPS", "");
        let a = b.delayed(a, Duration::from_secs(300));
        let a = b.repeating(a, ms(1333));
        assert_eq!(a.creation_delay, 30_000);
        assert_eq!(a.repeat, 133);
    }

    #[test]
    fn partial_cycle_delay_rounds_up() {
        let b = builder();
        let a = b.delayed(b.normal_permanent("Fan Malfunction", ""), ms(15));
        assert_eq!(a.creation_delay, 2);
        assert!(!a.ready(0));
        assert!(a.ready(1));
        // durations still floor
        assert_eq!(b.repeating(a, ms(15)).repeat, 1);
    }
}
