//! Sensor stream decoding
//!
//! Raw bytes from the transport are reassembled into discrete JSON
//! objects, classified by their `type` discriminator, and valid headings
//! are folded into the shared orientation state.

pub mod decoder;
pub mod messages;

pub use decoder::FrameDecoder;
pub use messages::{classify, HeadingUpdate, SensorMessage};

use crate::error::Result;
use crate::state::SharedOrientation;
use crate::transport::Transport;

/// Bytes requested from the transport per render frame
const READ_CHUNK: usize = 1024;

/// One per-frame network step: read, reassemble, classify, apply
///
/// Performs a single bounded `receive`, then drains every complete object
/// already buffered. Returns how many heading updates were folded into
/// `state`. Errors surface to the caller, which logs and keeps rendering
/// with stale state; a decode error has already dropped the offending
/// bytes, so the next frame picks up cleanly.
pub fn poll_stream(
    transport: &mut dyn Transport,
    decoder: &mut FrameDecoder,
    state: &SharedOrientation,
) -> Result<usize> {
    let mut chunk = [0u8; READ_CHUNK];
    let n = transport.receive(&mut chunk)?;
    if n > 0 {
        decoder.feed(&chunk[..n]);
    }

    let mut applied = 0;
    while let Some(value) = decoder.try_decode_one()? {
        match classify(&value)? {
            SensorMessage::Heading(update) => {
                state.apply(&update);
                applied += 1;
                log::trace!(
                    "Heading update: x={:.1} y={:.1} z={:.1} ({:.4}s poll)",
                    update.x,
                    update.y,
                    update.z,
                    update.elapsed
                );
            }
            SensorMessage::Unknown(tag) => {
                log::debug!("Ignoring message with unrecognized type {:?}", tag);
            }
        }
    }

    Ok(applied)
}
