//! Incremental frame decoder for the unframed JSON stream
//!
//! The daemon writes JSON objects back to back with no length prefix or
//! delimiter, so one socket read may hold a partial object, several whole
//! objects, or a tail that straddles into the next read. The decoder
//! accumulates raw bytes and peels complete objects off the front; the
//! buffer always holds exactly the stream prefix that has not yet yielded
//! a parseable object.

use crate::error::{Error, Result};
use serde_json::Value;

/// Cap on unparsed buffered bytes; a stream that exceeds this without
/// producing a complete object is not speaking this protocol
const MAX_BUFFER_LEN: usize = 1024 * 1024;

/// Reassembles complete JSON values from arbitrary stream chunks
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
}

impl FrameDecoder {
    /// Create an empty decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes from one socket read
    pub fn feed(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes awaiting a complete object
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Try to parse one complete JSON value off the buffer front
    ///
    /// `Ok(None)` means the buffer holds no complete object yet; the bytes
    /// stay put for the next feed. A successful parse removes exactly the
    /// consumed prefix. A hard syntax error discards the whole buffer
    /// (there is no delimiter to resync on) and reports the dropped count.
    pub fn try_decode_one(&mut self) -> Result<Option<Value>> {
        let mut stream = serde_json::Deserializer::from_slice(&self.buffer).into_iter::<Value>();

        match stream.next() {
            None => {
                // Only trailing whitespace; nothing to keep.
                self.buffer.clear();
                Ok(None)
            }
            Some(Ok(value)) => {
                let consumed = stream.byte_offset();
                self.buffer.drain(..consumed);
                Ok(Some(value))
            }
            Some(Err(e)) if e.is_eof() => {
                if self.buffer.len() > MAX_BUFFER_LEN {
                    let dropped = self.buffer.len();
                    self.buffer.clear();
                    return Err(Error::Decode(format!(
                        "unterminated message exceeded {} bytes, dropped {}",
                        MAX_BUFFER_LEN, dropped
                    )));
                }
                Ok(None)
            }
            Some(Err(e)) => {
                let dropped = self.buffer.len();
                self.buffer.clear();
                Err(Error::Decode(format!(
                    "malformed stream data, dropped {} buffered bytes: {}",
                    dropped, e
                )))
            }
        }
    }
}
