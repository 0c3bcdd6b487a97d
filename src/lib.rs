// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert with unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Orbit-camera core for interactive 3D viewers.
//!
//! Orbitview owns the math and state that turn pointer gestures into a
//! projection-view matrix: a column-major [`math::Mat4`] with right-handed
//! look-at and OpenGL-style perspective construction, and an
//! [`camera::OrbitCamera`] yaw/pitch/radius state machine with clamped
//! pitch and zoom ranges.
//!
//! Everything platform-specific stays on the host side. The host translates
//! its device events into [`input::InputEvent`] values, feeds them to the
//! camera, and calls [`frame::FrameComposer::render`] once per display
//! refresh with a [`frame::RenderSink`] — the collaborator that knows the
//! current viewport and uploads the composed matrix before drawing.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - drag/zoom state machine and eye derivation
//! - [`frame::FrameComposer`] - per-frame projection-view composition
//! - [`options::CameraOptions`] - tunable constants with TOML presets
//!
//! Single-threaded by design: input handlers and the per-frame read run on
//! one logical thread, so the camera needs no locking. A multi-threaded
//! host must wrap [`camera::OrbitCamera`] in its own mutex.

pub mod camera;
pub mod error;
pub mod frame;
pub mod input;
pub mod math;
pub mod options;

pub use camera::OrbitCamera;
pub use error::OrbitError;
pub use frame::{FrameComposer, RenderSink, ViewProjUniform, Viewport};
pub use input::InputEvent;
pub use math::{Mat4, Vec3};
pub use options::CameraOptions;
