//! Camera Module
//!
//! Screen-to-world ray construction. Window-system agnostic: hosts pass in
//! camera position, target and normalized pointer coordinates.

pub mod raycast;

pub use raycast::{Ray, RaycastConfig, screen_ray};
