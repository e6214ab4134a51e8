//! End-to-end alert timing and selection scenarios.

use std::sync::Arc;

use drive_alerts::adapters::text::BuiltinText;
use drive_alerts::alert::AudibleAlert;
use drive_alerts::config::EngineConfig;
use drive_alerts::snapshot::{CarParams, FactoryArgs, VehicleSnapshot};
use drive_alerts::{ActiveEventSet, Catalog, EventCategory, EventName, Priority};

fn event_set() -> ActiveEventSet {
    let catalog = Catalog::for_config(&EngineConfig::default(), &BuiltinText);
    ActiveEventSet::new(Arc::new(catalog))
}

fn calibrating() -> VehicleSnapshot {
    VehicleSnapshot {
        calibration_percent: Some(12),
        ..VehicleSnapshot::default()
    }
}

// ── Creation delay ────────────────────────────────────────────

#[test]
fn door_open_soft_disable_fires_in_first_cycle() {
    let mut set = event_set();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = FactoryArgs::new(&car, &state, true).with_soft_disable_cycles(200);

    set.clear();
    set.add(EventName::DoorOpen, false);
    let alerts = set.resolve(&[EventCategory::SoftDisable], &args).unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type(), "doorOpen/softDisable");
    assert_eq!(alerts[0].spec.text1, "Controls will disengage");
    assert_eq!(alerts[0].spec.audible, AudibleAlert::WarningSoft);
}

#[test]
fn calibration_notice_waits_exactly_300_seconds() {
    let mut set = event_set();
    let car = CarParams::default();
    let state = calibrating();
    let args = FactoryArgs::new(&car, &state, false);

    for cycle in 1..=30_000u32 {
        set.clear();
        set.add(EventName::CalibrationIncomplete, false);
        let alerts = set.resolve(&[EventCategory::Permanent], &args).unwrap();
        if cycle < 30_000 {
            assert!(alerts.is_empty(), "fired early at cycle {cycle}");
        } else {
            assert_eq!(alerts.len(), 1, "missing at cycle {cycle}");
            assert_eq!(alerts[0].spec.text1, "Calibration in Progress: 12%");
            assert_eq!(alerts[0].spec.text2, "Drive Above 15 mph");
        }
    }
}

#[test]
fn gap_in_assertion_restarts_delay() {
    let mut set = event_set();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = FactoryArgs::new(&car, &state, true);

    // gasPressed/preEnable: 1 s
    for _ in 0..99 {
        set.clear();
        set.add(EventName::GasPressed, false);
    }
    set.clear();
    // one cycle without the event
    set.clear();
    set.add(EventName::GasPressed, false);
    assert_eq!(set.streak(EventName::GasPressed.id()), 0);
    assert!(set.resolve(&[EventCategory::PreEnable], &args).unwrap().is_empty());
}

#[test]
fn delay_met_after_unbroken_run() {
    let mut set = event_set();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = FactoryArgs::new(&car, &state, true);

    for _ in 0..100 {
        set.clear();
        set.add(EventName::GasPressed, false);
    }
    assert_eq!(set.streak(EventName::GasPressed.id()), 99);
    assert_eq!(set.resolve(&[EventCategory::PreEnable], &args).unwrap().len(), 1);
}

// ── Selection ─────────────────────────────────────────────────

#[test]
fn higher_warning_wins_regardless_of_order() {
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = FactoryArgs::new(&car, &state, true);

    for order in [
        [EventName::PromptDriverDistracted, EventName::DriverDistracted],
        [EventName::DriverDistracted, EventName::PromptDriverDistracted],
    ] {
        let mut set = event_set();
        for e in order {
            set.add(e, false);
        }
        let alerts = set.resolve(&[EventCategory::Warning], &args).unwrap();
        let top = drive_alerts::select::select_highest(&alerts).unwrap();
        assert_eq!(top.priority(), Priority::High);
        assert_eq!(top.event, EventName::DriverDistracted.id());
    }
}

#[test]
fn equal_priority_keeps_assertion_order() {
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = FactoryArgs::new(&car, &state, true);
    let mut set = event_set();
    // both LOW warnings
    set.add(EventName::LaneChange, false);
    set.add(EventName::LaneChangeBlocked, false);
    let alerts = set.resolve(&[EventCategory::Warning], &args).unwrap();
    let top = drive_alerts::select::select_highest(&alerts).unwrap();
    assert_eq!(top.event, EventName::LaneChange.id());
}

// ── Sticky events ─────────────────────────────────────────────

#[test]
fn sticky_event_persists_without_re_adding() {
    let mut set = event_set();
    set.add(EventName::JoystickDebug, true);
    for _ in 0..5 {
        set.clear();
        assert!(set.contains(EventName::JoystickDebug.id()));
        assert!(set.contains_category(EventCategory::Permanent));
    }
}

#[test]
fn cleared_without_sticky_is_empty() {
    let mut set = event_set();
    set.add(EventName::DoorOpen, false);
    set.add(EventName::Fcw, false);
    set.clear();
    assert!(set.is_empty());
}

// ── Soft-disable escalation ──────────────────────────────────

#[test]
fn soft_disable_escalates_near_end_of_countdown() {
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let mut set = event_set();
    set.add(EventName::Overheat, false);

    let early = FactoryArgs::new(&car, &state, true).with_soft_disable_cycles(150);
    let late = early.with_soft_disable_cycles(20);

    let a = set.resolve(&[EventCategory::SoftDisable], &early).unwrap();
    let b = set.resolve(&[EventCategory::SoftDisable], &late).unwrap();
    assert_eq!(a[0].priority(), Priority::Mid);
    assert_eq!(b[0].priority(), Priority::Highest);
    assert_eq!(b[0].spec.text1, "TAKE CONTROL IMMEDIATELY");
    // still stamped with the category it was resolved under
    assert_eq!(b[0].category, EventCategory::SoftDisable);
}

#[test]
fn resolve_twice_same_output() {
    let car = CarParams {
        min_enable_speed: 8.0,
        ..CarParams::default()
    };
    let state = calibrating();
    let args = FactoryArgs::new(&car, &state, true);
    let mut set = event_set();
    set.add(EventName::BelowEngageSpeed, false);
    set.add(EventName::CalibrationIncomplete, false);
    let cats = EventCategory::ALL;
    assert_eq!(
        set.resolve(&cats, &args).unwrap(),
        set.resolve(&cats, &args).unwrap()
    );
}
