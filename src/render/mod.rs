//! Wireframe rendering on a terminal canvas
//!
//! The windowing collaborator for the visualizer: an off-screen cell
//! canvas, the cube scene and its rotation/projection math, and a
//! raw-mode terminal session that pumps input events and presents frames.

pub mod canvas;
pub mod math;
pub mod scene;
pub mod terminal;

pub use canvas::Canvas;
pub use math::{orientation_matrix, Mat3, Projection, Vec3};
pub use terminal::TerminalSession;
