//! Input handling: the platform-agnostic event vocabulary the camera
//! consumes.
//!
//! The host owns the real event loop. It translates whatever its windowing
//! layer produces (mouse, touch, trackpad) into these events and feeds
//! them to [`OrbitCamera::handle_event`](crate::OrbitCamera::handle_event).

/// Platform-agnostic input events.
pub mod event;

pub use event::InputEvent;
