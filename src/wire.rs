//! Wire form of the active event set.
//!
//! The event list is `postcard`-encoded as a sequence of [`WireEvent`]s and
//! carried in length-prefixed frames:
//!
//! ```text
//! ┌────────────┬───────────────────────────────┐
//! │ Length (4B)│ postcard Vec<WireEvent> (N B) │
//! │ LE u32     │                               │
//! └────────────┴───────────────────────────────┘
//! ```
//!
//! Identifiers are opaque `u16`s on the wire, so a list from a peer with a
//! newer catalog decodes without loss.

use serde::{Deserialize, Serialize};

use crate::category::CategoryFlags;
use crate::error::WireError;
use crate::ids::EventId;

/// Frame header size (4-byte little-endian length).
pub const HEADER_SIZE: usize = 4;

/// One active event and the categories its catalog entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireEvent {
    pub id: EventId,
    pub flags: CategoryFlags,
}

pub fn encode_event_list(events: &[WireEvent]) -> Result<Vec<u8>, WireError> {
    postcard::to_allocvec(events).map_err(|_| WireError::Encode)
}

pub fn decode_event_list(bytes: &[u8]) -> Result<Vec<WireEvent>, WireError> {
    postcard::from_bytes(bytes).map_err(|_| WireError::Decode)
}

/// Prefix `payload` with its length.
pub fn encode_frame(payload: &[u8], max_payload: usize) -> Result<Vec<u8>, WireError> {
    if payload.len() > max_payload {
        return Err(WireError::FrameTooLarge(payload.len()));
    }
    let len = u32::try_from(payload.len()).map_err(|_| WireError::FrameTooLarge(payload.len()))?;
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(payload);
    Ok(out)
}

/// Encode an event list straight into a frame.
pub fn encode_event_frame(events: &[WireEvent], max_payload: usize) -> Result<Vec<u8>, WireError> {
    encode_frame(&encode_event_list(events)?, max_payload)
}

// ---------------------------------------------------------------------------
// Streaming decoder
// ---------------------------------------------------------------------------

enum DecoderState {
    /// Waiting for header bytes.
    ReadingHeader { collected: usize },
    /// Header received, reading payload.
    ReadingPayload { expected: usize, collected: usize },
}

/// Streaming frame decoder.
///
/// Accepts arbitrary chunking: one `feed` may carry part of a header, part
/// of a payload, or several frames.  Zero-length or oversize headers are
/// discarded and the decoder resynchronises on the next four bytes.
pub struct FrameDecoder {
    state: DecoderState,
    header_buf: [u8; HEADER_SIZE],
    payload_buf: Vec<u8>,
    max_payload: usize,
}

impl FrameDecoder {
    pub fn new(max_payload: usize) -> Self {
        Self {
            state: DecoderState::ReadingHeader { collected: 0 },
            header_buf: [0; HEADER_SIZE],
            payload_buf: vec![0; max_payload],
            max_payload,
        }
    }

    /// Feed bytes; returns every payload completed by this chunk, in order.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            match &mut self.state {
                DecoderState::ReadingHeader { collected } => {
                    let to_copy = (HEADER_SIZE - *collected).min(data.len() - offset);
                    self.header_buf[*collected..*collected + to_copy]
                        .copy_from_slice(&data[offset..offset + to_copy]);
                    *collected += to_copy;
                    offset += to_copy;

                    if *collected == HEADER_SIZE {
                        let expected = u32::from_le_bytes(self.header_buf) as usize;
                        if expected == 0 || expected > self.max_payload {
                            log::warn!("WIRE | dropping frame header len={expected}");
                            self.state = DecoderState::ReadingHeader { collected: 0 };
                            continue;
                        }
                        self.state = DecoderState::ReadingPayload {
                            expected,
                            collected: 0,
                        };
                    }
                }

                DecoderState::ReadingPayload { expected, collected } => {
                    let to_copy = (*expected - *collected).min(data.len() - offset);
                    self.payload_buf[*collected..*collected + to_copy]
                        .copy_from_slice(&data[offset..offset + to_copy]);
                    *collected += to_copy;
                    offset += to_copy;

                    if *collected == *expected {
                        frames.push(self.payload_buf[..*expected].to_vec());
                        self.state = DecoderState::ReadingHeader { collected: 0 };
                    }
                }
            }
        }

        frames
    }

    /// Drop any partial frame (e.g. after the peer reconnects).
    pub fn reset(&mut self) {
        self.state = DecoderState::ReadingHeader { collected: 0 };
    }
}
