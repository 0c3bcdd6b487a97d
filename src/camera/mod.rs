//! Camera state for 3D scene viewing.
//!
//! Provides the orbital camera state machine: drag-to-rotate with clamped
//! pitch, scroll-to-zoom with a clamped radius, and spherical eye-position
//! derivation around a fixed target.

/// Orbital camera state machine and eye derivation.
pub mod orbit;

pub use orbit::OrbitCamera;
