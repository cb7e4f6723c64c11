//! Mock transport for testing

use super::Transport;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Scripted transport for unit and integration tests
///
/// Each queued chunk is handed back by one `receive` call, mirroring how
/// the real socket returns arbitrary slices of the stream with no regard
/// for message boundaries. Errors can be interleaved with data to script
/// mid-stream faults.
#[derive(Default)]
pub struct MockTransport {
    chunks: VecDeque<Chunk>,
}

enum Chunk {
    Data(Vec<u8>),
    Error(std::io::ErrorKind),
}

impl MockTransport {
    /// Create an empty mock; `receive` reports no data until chunks are
    /// queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by one `receive` call
    pub fn push_chunk(&mut self, data: &[u8]) {
        self.chunks.push_back(Chunk::Data(data.to_vec()));
    }

    /// Queue a transport error to be returned by one `receive` call
    pub fn push_error(&mut self, kind: std::io::ErrorKind) {
        self.chunks.push_back(Chunk::Error(kind));
    }

    /// True once every queued chunk has been consumed
    pub fn is_drained(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl Transport for MockTransport {
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.chunks.pop_front() {
            None => Ok(0),
            Some(Chunk::Data(data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                // A chunk larger than the caller's buffer stays queued,
                // minus the bytes already delivered.
                if n < data.len() {
                    self.chunks.push_front(Chunk::Data(data[n..].to_vec()));
                }
                Ok(n)
            }
            Some(Chunk::Error(kind)) => Err(Error::Transport(std::io::Error::new(
                kind,
                "injected transport error",
            ))),
        }
    }
}
