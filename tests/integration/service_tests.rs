//! Integration tests for the AlertService cycle API.

use std::sync::Arc;

use drive_alerts::app::events::EngineEvent;
use drive_alerts::catalog::CatalogDocument;
use drive_alerts::category::DisengageKind;
use drive_alerts::config::EngineConfig;
use drive_alerts::error::FactoryError;
use drive_alerts::snapshot::{CarParams, VehicleSnapshot};
use drive_alerts::{
    AlertService, Catalog, CycleRequest, Error, EventCategory, EventName, Transition,
};

use super::mock_sink::RecordingSink;

fn make_service() -> (AlertService, RecordingSink) {
    let service = AlertService::from_config(EngineConfig::default()).unwrap();
    (service, RecordingSink::new())
}

#[test]
fn cycle_report_carries_selection_and_transitions() {
    let (mut svc, mut sink) = make_service();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);

    svc.begin_cycle();
    svc.assert_event(EventName::ButtonEnable, false);
    svc.assert_event(EventName::SeatbeltNotLatched, false);
    let report = svc
        .evaluate(
            &CycleRequest::new([EventCategory::Enable, EventCategory::NoEntry]),
            &args,
            &mut sink,
        )
        .unwrap();

    assert_eq!(report.cycle, 1);
    assert_eq!(report.alerts.len(), 2);
    // engagement chime is MID, no-entry is LOW
    assert_eq!(
        report.selected.as_ref().map(|a| a.event),
        Some(EventName::ButtonEnable.id())
    );
    assert_eq!(
        report.transitions,
        vec![
            Transition::Disengage(DisengageKind::Soft),
            Transition::BlockEngage,
            Transition::Engage,
        ]
    );
    assert_eq!(report.wire.len(), 2);
    assert_eq!(sink.cycles(), 1);
    assert_eq!(sink.raised().len(), 2);
}

#[test]
fn factory_failure_is_emitted_and_returned() {
    let (mut svc, mut sink) = make_service();
    let car = CarParams::default();
    let state = VehicleSnapshot::default(); // no calibration field
    let args = svc.factory_args(&car, &state);

    svc.begin_cycle();
    svc.assert_event(EventName::CalibrationIncomplete, false);
    let err = svc
        .evaluate(&CycleRequest::all(), &args, &mut sink)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Factory(FactoryError::MissingField { .. })
    ));
    assert_eq!(sink.failures(), vec![&err]);
    assert_eq!(sink.cycles(), 0);
}

#[test]
fn alert_raised_again_after_event_drops_out() {
    let (mut svc, mut sink) = make_service();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);
    let req = CycleRequest::from_names(["permanent"]);

    for present in [true, true, false, true] {
        svc.begin_cycle();
        if present {
            svc.assert_event(EventName::Fcw, false);
        }
        svc.evaluate(&req, &args, &mut sink).unwrap();
    }
    assert_eq!(sink.raised().len(), 2);
}

#[test]
fn document_catalog_drives_service() {
    let doc = CatalogDocument::from_json(
        r#"{ "events": {
            "fcw": { "permanent": { "alert": {
                "text1": "BRAKE!", "status": "critical", "size": "full",
                "priority": "highest", "visual": "fcw", "duration_ms": 2000,
                "creation_delay_ms": 50 } } }
        } }"#,
    )
    .unwrap();
    let config = EngineConfig::default();
    let builder = Catalog::for_config(&config, &drive_alerts::adapters::text::BuiltinText)
        .builder()
        .clone();
    let catalog = Catalog::from_document(&doc, builder).unwrap();
    let mut svc = AlertService::new(config, Arc::new(catalog)).unwrap();
    let mut sink = RecordingSink::new();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);

    let mut first = None;
    for cycle in 1..=10u64 {
        svc.begin_cycle();
        svc.assert_event(EventName::Fcw, false);
        let report = svc.evaluate(&CycleRequest::all(), &args, &mut sink).unwrap();
        if first.is_none() && !report.alerts.is_empty() {
            first = Some(cycle);
        }
    }
    // 50 ms at 10 ms per cycle
    assert_eq!(first, Some(5));
}

#[test]
fn emitted_events_are_in_cycle_order() {
    let (mut svc, mut sink) = make_service();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);
    for _ in 0..3 {
        svc.begin_cycle();
        svc.assert_event(EventName::Ldw, false);
        svc.evaluate(&CycleRequest::all(), &args, &mut sink).unwrap();
    }
    let cycles: Vec<u64> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            EngineEvent::Cycle(r) => Some(r.cycle),
            _ => None,
        })
        .collect();
    assert_eq!(cycles, vec![1, 2, 3]);
}

#[test]
fn alert_raised_again_after_failed_cycle() {
    let (mut svc, mut sink) = make_service();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);
    let req = CycleRequest::all();

    svc.begin_cycle();
    svc.assert_event(EventName::Fcw, false);
    svc.evaluate(&req, &args, &mut sink).unwrap();

    // calibration factory needs a snapshot field that is absent
    svc.begin_cycle();
    svc.assert_event(EventName::CalibrationIncomplete, false);
    assert!(svc.evaluate(&req, &args, &mut sink).is_err());

    svc.begin_cycle();
    svc.assert_event(EventName::Fcw, false);
    svc.evaluate(&req, &args, &mut sink).unwrap();

    assert_eq!(sink.raised().len(), 2);
    assert_eq!(sink.failures().len(), 1);
}

#[test]
fn partial_cycle_delay_never_fires_early() {
    let doc = CatalogDocument::from_json(
        r#"{ "events": {
            "fcw": { "permanent": { "alert": {
                "text1": "BRAKE!", "status": "critical", "size": "full",
                "priority": "highest", "duration_ms": 2000,
                "creation_delay_ms": 15 } } }
        } }"#,
    )
    .unwrap();
    let config = EngineConfig::default();
    let builder = Catalog::for_config(&config, &drive_alerts::adapters::text::BuiltinText)
        .builder()
        .clone();
    let catalog = Catalog::from_document(&doc, builder).unwrap();
    let mut svc = AlertService::new(config, Arc::new(catalog)).unwrap();
    let mut sink = RecordingSink::new();
    let car = CarParams::default();
    let state = VehicleSnapshot::default();
    let args = svc.factory_args(&car, &state);

    let mut fired = Vec::new();
    for _ in 0..3 {
        svc.begin_cycle();
        svc.assert_event(EventName::Fcw, false);
        let report = svc.evaluate(&CycleRequest::all(), &args, &mut sink).unwrap();
        fired.push(!report.alerts.is_empty());
    }
    // 15 ms needs two 10 ms cycles
    assert_eq!(fired, vec![false, true, true]);
}
