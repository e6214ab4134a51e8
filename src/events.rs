//! Per-cycle active event state.
//!
//! Upstream logic asserts event ids each control cycle; the set tracks how
//! many consecutive cycles every catalog event has been asserted and
//! resolves the alerts the active events imply.
//!
//! ## Cycle lifecycle
//!
//! 1. `clear()` at cycle start.  Every catalog id's streak advances if it
//!    was active in the cycle just ended, else resets to zero.  `active`
//!    becomes a copy of the sticky (persistent) events.
//! 2. `add()` for each condition detected this cycle, or `ingest_wire()`
//!    when relaying another process's list.
//! 3. `resolve()` / `to_wire()` / `transitions()` as many times as needed.
//!    None of them mutate state.
//!
//! ```text
//!   cycle N-1 active ──clear()──▶ streak update ──▶ active = persistent
//!                                                    │
//!                                       add() ◀──────┘
//!                                         │
//!                                    resolve(categories, args) ──▶ [Alert]
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, error, info, trace};

use crate::alert::Alert;
use crate::catalog::Catalog;
use crate::category::{CategoryFlags, EventCategory, Transition};
use crate::error::Result;
use crate::ids::EventId;
use crate::snapshot::FactoryArgs;
use crate::wire::{self, WireEvent};

pub struct ActiveEventSet {
    catalog: Arc<Catalog>,
    /// Asserted this cycle, in assertion order.  Duplicates allowed.
    active: Vec<EventId>,
    /// Sticky events, re-asserted by every `clear()`.
    persistent: Vec<EventId>,
    /// Consecutive cycles asserted, over the catalog's id universe.
    streak: BTreeMap<EventId, u32>,
    /// Flags received for ids this catalog does not know, kept for relay.
    foreign: BTreeMap<EventId, CategoryFlags>,
}

impl ActiveEventSet {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let streak = catalog.ids().map(|id| (id, 0)).collect();
        Self {
            catalog,
            active: Vec::new(),
            persistent: Vec::new(),
            streak,
            foreign: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Assert `event` for this cycle.  A sticky event is also re-asserted
    /// by every later `clear()`; registering it sticky again does not add
    /// a second persistent copy.
    pub fn add(&mut self, event: impl Into<EventId>, sticky: bool) {
        let event = event.into();
        if sticky && !self.persistent.contains(&event) {
            info!("EVENT STICKY: {event}");
            self.persistent.push(event);
        }
        self.active.push(event);
    }

    /// Close the current cycle.  Must run exactly once per cycle, before
    /// that cycle's `add` calls.
    pub fn clear(&mut self) {
        for (id, count) in &mut self.streak {
            if self.active.contains(id) {
                *count = count.saturating_add(1);
            } else {
                if *count > 0 {
                    debug!("EVENT CLEARED: {id} after {count} cycles");
                }
                *count = 0;
            }
        }
        self.active.clone_from(&self.persistent);
        self.foreign.clear();
    }

    /// Consecutive cycles `event` was asserted up to the last `clear()`.
    /// Zero for ids outside the catalog.
    pub fn streak(&self, event: EventId) -> u32 {
        self.streak.get(&event).copied().unwrap_or(0)
    }

    /// Active ids in assertion order.
    pub fn names(&self) -> &[EventId] {
        &self.active
    }

    pub fn persistent(&self) -> &[EventId] {
        &self.persistent
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, event: EventId) -> bool {
        self.active.contains(&event)
    }

    /// True if any active event has an alert under `category`.
    pub fn contains_category(&self, category: EventCategory) -> bool {
        self.active
            .iter()
            .any(|id| self.catalog.flags(*id).contains(category))
    }

    /// Resolve alerts for every active event under each of `categories`.
    ///
    /// Output is ordered by assertion order, then by the order of
    /// `categories`.  Alerts whose creation delay is not yet met are left
    /// out.  A failing factory aborts the whole call.
    pub fn resolve(
        &self,
        categories: &[EventCategory],
        args: &FactoryArgs<'_>,
    ) -> Result<Vec<Alert>> {
        let mut alerts = Vec::new();
        for &id in &self.active {
            let Some(entry) = self.catalog.entry(id) else {
                continue;
            };
            for &category in categories {
                let Some(source) = entry.get(category) else {
                    continue;
                };
                if let Some(alert) = self.gate(id, category, source, args)? {
                    alerts.push(alert);
                }
            }
        }
        Ok(alerts)
    }

    /// Resolve one slot the caller cannot do without.
    ///
    /// Unlike [`resolve`](Self::resolve), a missing catalog entry is an
    /// error.  `Ok(None)` means the event is not active or its delay is not
    /// yet met.
    pub fn resolve_required(
        &self,
        event: EventId,
        category: EventCategory,
        args: &FactoryArgs<'_>,
    ) -> Result<Option<Alert>> {
        let source = self.catalog.require(event, category)?;
        if !self.contains(event) {
            return Ok(None);
        }
        self.gate(event, category, source, args)
    }

    fn gate(
        &self,
        id: EventId,
        category: EventCategory,
        source: &crate::catalog::AlertSource,
        args: &FactoryArgs<'_>,
    ) -> Result<Option<Alert>> {
        let spec = self.catalog.build(source, args).map_err(|e| {
            error!("ALERT FACTORY FAILED: {id}/{category}: {e}");
            e
        })?;
        let streak = self.streak(id);
        if !spec.ready(streak) {
            trace!(
                "{id}/{category} withheld: {} of {} cycles",
                streak.saturating_add(1),
                spec.creation_delay
            );
            return Ok(None);
        }
        Ok(Some(Alert::new(spec, id, category)))
    }

    /// Distinct transitions the active events justify, most severe first.
    /// Relayed ids outside the catalog count with the flags they arrived with.
    pub fn transitions(&self) -> Vec<Transition> {
        Transition::BY_SEVERITY
            .into_iter()
            .filter(|t| {
                self.active
                    .iter()
                    .any(|id| self.flags_for(*id).contains(t.category()))
            })
            .collect()
    }

    // ── Wire ──────────────────────────────────────────────────────

    /// Active ids with their catalog category flags.  Ids this catalog
    /// does not know carry whatever flags they arrived with.
    pub fn to_wire(&self) -> Vec<WireEvent> {
        self.active
            .iter()
            .map(|&id| WireEvent {
                id,
                flags: self.flags_for(id),
            })
            .collect()
    }

    /// Replace this cycle's active list with a relayed one.
    pub fn ingest_wire(&mut self, events: &[WireEvent]) {
        self.active.clear();
        self.foreign.clear();
        for ev in events {
            if !self.catalog.contains(ev.id) {
                self.foreign.insert(ev.id, ev.flags);
            }
            self.active.push(ev.id);
        }
    }

    /// Decode a frame payload (as yielded by
    /// [`FrameDecoder`](crate::wire::FrameDecoder)) and ingest it.
    /// On a decode error the active list is left untouched.
    pub fn ingest_frame(&mut self, payload: &[u8]) -> Result<()> {
        let events = wire::decode_event_list(payload)?;
        self.ingest_wire(&events);
        Ok(())
    }

    fn flags_for(&self, id: EventId) -> CategoryFlags {
        if self.catalog.contains(id) {
            self.catalog.flags(id)
        } else {
            self.foreign.get(&id).copied().unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::text::BuiltinText;
    use crate::alert::Priority;
    use crate::category::DisengageKind;
    use crate::config::EngineConfig;
    use crate::error::{CatalogError, Error, FactoryError};
    use crate::catalog::FactoryId;
    use crate::ids::EventName;
    use crate::snapshot::{CarParams, VehicleSnapshot};

    fn set() -> ActiveEventSet {
        ActiveEventSet::new(Arc::new(Catalog::for_config(
            &EngineConfig::default(),
            &BuiltinText,
        )))
    }

    fn calibrated() -> VehicleSnapshot {
        VehicleSnapshot {
            calibration_percent: Some(50),
            ..VehicleSnapshot::default()
        }
    }

    #[test]
    fn streak_counts_previous_cycles() {
        let mut s = set();
        let door = EventName::DoorOpen.id();
        s.clear();
        s.add(door, false);
        assert_eq!(s.streak(door), 0);
        s.clear();
        s.add(door, false);
        assert_eq!(s.streak(door), 1);
        s.clear();
        assert_eq!(s.streak(door), 2);
        s.clear();
        assert_eq!(s.streak(door), 0);
    }

    #[test]
    fn duplicate_add_counts_once() {
        let mut s = set();
        let door = EventName::DoorOpen.id();
        s.add(door, false);
        s.add(door, false);
        assert_eq!(s.len(), 2);
        s.clear();
        assert_eq!(s.streak(door), 1);
    }

    #[test]
    fn sticky_survives_clear() {
        let mut s = set();
        s.add(EventName::JoystickDebug, true);
        s.add(EventName::DoorOpen, false);
        for _ in 0..5 {
            s.clear();
            assert_eq!(s.names(), &[EventName::JoystickDebug.id()]);
        }
        assert_eq!(s.streak(EventName::JoystickDebug.id()), 5);
    }

    #[test]
    fn sticky_registered_once() {
        let mut s = set();
        s.add(EventName::JoystickDebug, true);
        s.add(EventName::JoystickDebug, true);
        assert_eq!(s.persistent().len(), 1);
    }

    #[test]
    fn resolve_orders_by_event_then_category() {
        let mut s = set();
        s.add(EventName::Overheat, false);
        s.add(EventName::DoorOpen, false);
        let car = CarParams::default();
        let state = VehicleSnapshot::default();
        let args = FactoryArgs::new(&car, &state, true);
        let alerts = s
            .resolve(&[EventCategory::NoEntry, EventCategory::SoftDisable], &args)
            .unwrap();
        let tags: Vec<String> = alerts.iter().map(Alert::alert_type).collect();
        assert_eq!(
            tags,
            [
                "overheat/noEntry",
                "overheat/softDisable",
                "doorOpen/noEntry",
                "doorOpen/softDisable"
            ]
        );
    }

    #[test]
    fn missing_category_is_skipped() {
        let mut s = set();
        s.add(EventName::DoorOpen, false);
        s.add(EventId(9000), false);
        let car = CarParams::default();
        let state = VehicleSnapshot::default();
        let args = FactoryArgs::new(&car, &state, true);
        assert!(s.resolve(&[EventCategory::Enable], &args).unwrap().is_empty());
    }

    #[test]
    fn creation_delay_withholds() {
        let mut s = set();
        let car = CarParams::default();
        let state = VehicleSnapshot::default();
        let args = FactoryArgs::new(&car, &state, true);
        // sensorDataInvalid/permanent: 1 s = 100 cycles
        for cycle in 1..=100u32 {
            s.clear();
            s.add(EventName::SensorDataInvalid, false);
            let alerts = s.resolve(&[EventCategory::Permanent], &args).unwrap();
            assert_eq!(alerts.is_empty(), cycle < 100, "cycle {cycle}");
        }
    }

    #[test]
    fn factory_failure_propagates() {
        let mut s = set();
        s.add(EventName::CalibrationIncomplete, false);
        let car = CarParams::default();
        let state = VehicleSnapshot::default();
        let args = FactoryArgs::new(&car, &state, true);
        let err = s.resolve(&[EventCategory::Permanent], &args).unwrap_err();
        assert_eq!(
            err,
            Error::Factory(FactoryError::MissingField {
                factory: FactoryId::CalibrationIncomplete,
                field: "liveCalibration",
            })
        );
        // other categories of the same event still resolve
        let state = calibrated();
        let args = FactoryArgs::new(&car, &state, true);
        assert_eq!(s.resolve(&[EventCategory::NoEntry], &args).unwrap().len(), 1);
    }

    #[test]
    fn resolve_required_reports_missing_entry() {
        let mut s = set();
        s.add(EventName::DoorOpen, false);
        let car = CarParams::default();
        let state = VehicleSnapshot::default();
        let args = FactoryArgs::new(&car, &state, true);
        let err = s
            .resolve_required(EventName::DoorOpen.id(), EventCategory::ImmediateDisable, &args)
            .unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::MissingEntry { .. })));
        let ok = s
            .resolve_required(EventName::DoorOpen.id(), EventCategory::SoftDisable, &args)
            .unwrap();
        assert_eq!(ok.map(|a| a.priority()), Some(Priority::Mid));
        let idle = s
            .resolve_required(EventName::SeatbeltNotLatched.id(), EventCategory::NoEntry, &args)
            .unwrap();
        assert!(idle.is_none());
    }

    #[test]
    fn transitions_most_severe_first() {
        let mut s = set();
        s.add(EventName::ButtonEnable, false);
        s.add(EventName::DoorOpen, false);
        s.add(EventName::CanError, false);
        assert_eq!(
            s.transitions(),
            vec![
                Transition::Disengage(DisengageKind::Immediate),
                Transition::Disengage(DisengageKind::Soft),
                Transition::BlockEngage,
                Transition::Engage,
            ]
        );
        assert!(s.contains_category(EventCategory::Enable));
        assert!(!s.contains_category(EventCategory::UserDisable));
    }

    #[test]
    fn wire_roundtrip_same_catalog() {
        let mut s = set();
        s.add(EventName::DoorOpen, false);
        s.add(EventName::Fcw, false);
        s.add(EventName::DoorOpen, false);
        let wire = s.to_wire();
        assert!(wire[0].flags.contains(EventCategory::SoftDisable));

        let mut other = set();
        other.ingest_wire(&wire);
        assert_eq!(other.names(), s.names());
        assert_eq!(other.to_wire(), wire);
    }

    #[test]
    fn ingest_replaces_and_keeps_foreign_flags() {
        let mut s = set();
        s.add(EventName::Fcw, false);
        let foreign = WireEvent {
            id: EventId(7777),
            flags: CategoryFlags::from_bits(EventCategory::Warning.mask()),
        };
        s.ingest_wire(&[foreign]);
        assert_eq!(s.names(), &[EventId(7777)]);
        assert_eq!(s.to_wire(), vec![foreign]);
    }

    #[test]
    fn ingest_frame_bad_payload_keeps_state() {
        let mut s = set();
        s.add(EventName::Fcw, false);
        assert!(s.ingest_frame(&[0x03, 0xFF]).is_err());
        assert_eq!(s.names(), &[EventName::Fcw.id()]);

        let bytes = wire::encode_event_list(&[WireEvent {
            id: EventName::DoorOpen.id(),
            flags: CategoryFlags::empty(),
        }])
        .unwrap();
        s.ingest_frame(&bytes).unwrap();
        assert_eq!(s.names(), &[EventName::DoorOpen.id()]);
    }
}
