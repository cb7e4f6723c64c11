//! Shared orientation state between the stream poller and the renderer

use crate::stream::HeadingUpdate;
use parking_lot::Mutex;
use std::sync::Arc;

/// Latest accepted orientation and poll latency
///
/// Holds only the most recent value; no history is retained. Starts at the
/// zero orientation until the first heading arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the X axis in degrees
    pub x: f64,
    /// Rotation about the Y axis in degrees
    pub y: f64,
    /// Rotation about the Z axis in degrees
    pub z: f64,
    /// Latency of the last sensor poll in seconds
    pub elapsed_seconds: f64,
}

impl Orientation {
    /// Overwrite every field from a validated heading
    ///
    /// All-or-nothing: partially decoded messages never reach this point,
    /// so the record always reflects one complete heading.
    pub fn apply(&mut self, update: &HeadingUpdate) {
        self.x = update.x;
        self.y = update.y;
        self.z = update.z;
        self.elapsed_seconds = update.elapsed;
    }
}

/// Handle to the single shared orientation record
///
/// Written by the stream poll step, read by the render step. The lock is
/// held only for the whole-record assignment or copy, so a reader can
/// never observe a partially updated orientation.
#[derive(Debug, Clone, Default)]
pub struct SharedOrientation {
    inner: Arc<Mutex<Orientation>>,
}

impl SharedOrientation {
    /// Create a shared record at the zero orientation
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a validated heading into the shared record
    pub fn apply(&self, update: &HeadingUpdate) {
        self.inner.lock().apply(update);
    }

    /// Copy of the latest accepted orientation
    pub fn snapshot(&self) -> Orientation {
        *self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let state = SharedOrientation::new();
        assert_eq!(state.snapshot(), Orientation::default());
    }

    #[test]
    fn test_apply_overwrites_all_fields() {
        let state = SharedOrientation::new();
        state.apply(&HeadingUpdate {
            x: 10.0,
            y: 20.0,
            z: 30.0,
            elapsed: 0.5,
        });
        state.apply(&HeadingUpdate {
            x: -5.0,
            y: 0.0,
            z: 180.0,
            elapsed: 0.25,
        });

        let snap = state.snapshot();
        assert_eq!(snap.x, -5.0);
        assert_eq!(snap.y, 0.0);
        assert_eq!(snap.z, 180.0);
        assert_eq!(snap.elapsed_seconds, 0.25);
    }

    #[test]
    fn test_clones_share_the_record() {
        let state = SharedOrientation::new();
        let writer = state.clone();
        writer.apply(&HeadingUpdate {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            elapsed: 0.1,
        });
        assert_eq!(state.snapshot().y, 2.0);
    }
}
