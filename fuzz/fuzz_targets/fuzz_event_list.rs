//! Fuzz target: event list decoding and ingestion.
//!
//! cargo fuzz run fuzz_event_list

#![no_main]

use std::sync::{Arc, OnceLock};

use drive_alerts::adapters::text::BuiltinText;
use drive_alerts::config::EngineConfig;
use drive_alerts::wire::{decode_event_list, encode_event_list};
use drive_alerts::{ActiveEventSet, Catalog};
use libfuzzer_sys::fuzz_target;

fn catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    CATALOG
        .get_or_init(|| Arc::new(Catalog::for_config(&EngineConfig::default(), &BuiltinText)))
        .clone()
}

fuzz_target!(|data: &[u8]| {
    let Ok(events) = decode_event_list(data) else {
        return;
    };
    let reencoded = encode_event_list(&events).expect("decoded list re-encodes");
    assert_eq!(decode_event_list(&reencoded).ok(), Some(events.clone()));

    let mut set = ActiveEventSet::new(catalog());
    set.ingest_wire(&events);
    assert_eq!(set.len(), events.len());
    // unknown ids relay their received flags
    for (sent, out) in events.iter().zip(set.to_wire()) {
        assert_eq!(sent.id, out.id);
        if !set.catalog().contains(sent.id) {
            assert_eq!(sent.flags, out.flags);
        }
    }
});
