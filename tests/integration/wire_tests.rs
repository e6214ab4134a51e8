//! Relaying the active event set between two engines over the frame codec.

use drive_alerts::category::{CategoryFlags, DisengageKind};
use drive_alerts::config::EngineConfig;
use drive_alerts::wire::{FrameDecoder, HEADER_SIZE, WireEvent, encode_event_frame};
use drive_alerts::{AlertService, EventCategory, EventId, EventName, Transition};

fn service() -> AlertService {
    AlertService::from_config(EngineConfig::default()).unwrap()
}

#[test]
fn producer_to_consumer_over_chunked_stream() {
    let mut producer = service();
    producer.begin_cycle();
    producer.assert_event(EventName::DoorOpen, false);
    producer.assert_event(EventName::SteerUnavailable, false);
    let frame = producer.wire_frame().unwrap();

    let mut consumer = service();
    let mut decoder = FrameDecoder::new(consumer.config().max_frame_bytes);
    consumer.begin_cycle();
    for chunk in frame.chunks(3) {
        for payload in decoder.feed(chunk) {
            consumer.ingest_frame(&payload).unwrap();
        }
    }
    assert_eq!(consumer.events().names(), producer.events().names());
    assert!(
        consumer
            .events()
            .contains_category(EventCategory::ImmediateDisable)
    );
}

#[test]
fn unknown_ids_relayed_with_their_flags() {
    let incoming = [
        WireEvent {
            id: EventId(60_000),
            flags: CategoryFlags::from_bits(EventCategory::SoftDisable.mask()),
        },
        WireEvent {
            id: EventName::Ldw.id(),
            flags: CategoryFlags::empty(),
        },
    ];
    let frame = encode_event_frame(&incoming, 4096).unwrap();

    let mut relay = service();
    let mut decoder = FrameDecoder::new(4096);
    relay.begin_cycle();
    for payload in decoder.feed(&frame) {
        relay.ingest_frame(&payload).unwrap();
    }

    let out = relay.events().to_wire();
    assert_eq!(out[0], incoming[0]);
    // known ids get this catalog's flags
    assert!(out[1].flags.contains(EventCategory::Permanent));
}

#[test]
fn relayed_unknown_flags_imply_transitions() {
    let incoming = [WireEvent {
        id: EventId(60_001),
        flags: CategoryFlags::from_bits(EventCategory::SoftDisable.mask()),
    }];
    let frame = encode_event_frame(&incoming, 4096).unwrap();

    let mut relay = service();
    relay.begin_cycle();
    relay.ingest_frame(&frame[HEADER_SIZE..]).unwrap();

    assert_eq!(
        relay.events().transitions(),
        vec![Transition::Disengage(DisengageKind::Soft)]
    );
    // no catalog entry, so no alerts under the category
    assert!(!relay.events().contains_category(EventCategory::SoftDisable));
}
