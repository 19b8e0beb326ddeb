//! Sculpt Module
//!
//! Interactive stroke handling on top of the terrain mesh.

pub mod session;

pub use session::{SculptSession, StrokeState, StrokeSummary};
