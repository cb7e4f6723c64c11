//! disha-view - terminal orientation visualizer for sensor heading streams
//!
//! Connects to a sensor daemon over TCP, reassembles its unframed JSON
//! heading stream, and renders a rotating wireframe cube in the terminal
//! with a readout of the daemon's sensor poll latency.
//!
//! ## Components
//!
//! - [`transport`]: dial-with-retry and the bounded-read socket seam
//! - [`stream`]: frame reassembly, message classification, state apply
//! - [`state`]: the single shared orientation record
//! - [`render`]: cube math, cell canvas, terminal session
//! - [`app`]: the interleaved poll/draw loop

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod stream;
pub mod transport;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use state::{Orientation, SharedOrientation};
