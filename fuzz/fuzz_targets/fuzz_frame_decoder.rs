//! Fuzz target: `FrameDecoder::feed`
//!
//! Feeds arbitrary bytes, split at a fuzzer-chosen point, into the
//! streaming decoder and checks every yielded payload is non-empty and
//! within the configured bound.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use drive_alerts::wire::FrameDecoder;
use libfuzzer_sys::fuzz_target;

const MAX: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let at = usize::from(split).min(rest.len());
    let (a, b) = rest.split_at(at);

    let mut decoder = FrameDecoder::new(MAX);
    for payload in decoder.feed(a).into_iter().chain(decoder.feed(b)) {
        assert!(!payload.is_empty(), "empty payload");
        assert!(payload.len() <= MAX, "payload exceeds max");
    }

    decoder.reset();
    let _ = decoder.feed(rest);
});
