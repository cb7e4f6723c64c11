//! Application run loop
//!
//! One logical thread of control: every iteration pumps input events,
//! polls the sensor stream once, redraws the cube from the latest
//! accepted orientation, and presents. Network faults never break the
//! loop; the display just freezes at its last valid state until data
//! flows again.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::render::{scene, Canvas, Projection, TerminalSession};
use crate::state::SharedOrientation;
use crate::stream::{poll_stream, FrameDecoder};
use crate::transport::Transport;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The visualizer application
pub struct App {
    config: AppConfig,
    state: SharedOrientation,
    running: Arc<AtomicBool>,
}

impl App {
    /// Create the application around a shared orientation record
    pub fn new(config: AppConfig, running: Arc<AtomicBool>) -> Self {
        Self {
            config,
            state: SharedOrientation::new(),
            running,
        }
    }

    /// Handle to the shared orientation record
    pub fn state(&self) -> &SharedOrientation {
        &self.state
    }

    /// Run until a quit key or the shutdown signal
    ///
    /// The transport must already be connected; there is no reconnect
    /// once the stream drops, only stale-state display.
    pub fn run(&self, transport: &mut dyn Transport) -> Result<()> {
        let width = self.config.display.width;
        let height = self.config.display.height;
        let frame_interval = self.config.display.frame_interval();

        log::info!(
            "Visualizer running ({}x{} cells, press q to quit)",
            width,
            height
        );

        let mut decoder = FrameDecoder::new();
        let mut canvas = Canvas::new(width, height);
        let projection = Projection::new(width, height);
        let mut session = TerminalSession::new()?;

        while self.running.load(Ordering::Relaxed) {
            // The event wait is also the frame pacing gate.
            if session.poll_quit(frame_interval)? {
                log::info!("Quit requested");
                break;
            }

            match poll_stream(transport, &mut decoder, &self.state) {
                Ok(0) => {}
                Ok(n) => log::trace!("{} heading update(s) applied", n),
                Err(Error::Transport(e)) => {
                    log::warn!("Transport fault, keeping last orientation: {}", e);
                }
                Err(Error::Decode(e)) => {
                    log::warn!("Dropped undecodable stream data: {}", e);
                }
                Err(e) => log::error!("Stream poll failed: {}", e),
            }

            let orientation = self.state.snapshot();

            canvas.clear();
            for (from, to) in scene::wireframe(&orientation, &projection) {
                canvas.draw_line(from, to);
            }
            canvas.draw_text(
                1,
                1,
                &format!(
                    "It took {} seconds to poll the sensor",
                    orientation.elapsed_seconds
                ),
            );

            session.present(&canvas)?;
        }

        Ok(())
    }
}
