/// Platform-agnostic input events.
///
/// Each event is a plain data tuple; no windowing-toolkit types cross this
/// boundary. Ordering is tolerant by design: a [`DragMove`] with no active
/// drag and a [`DragEnd`] with no matching start are both no-ops, never
/// errors, so duplicated or out-of-order host events are safe.
///
/// [`DragMove`]: InputEvent::DragMove
/// [`DragEnd`]: InputEvent::DragEnd
///
/// # Example
///
/// ```
/// use orbitview::{InputEvent, OrbitCamera};
///
/// let mut camera = OrbitCamera::default();
/// camera.handle_event(InputEvent::DragStart { x: 0.0, y: 0.0 });
/// camera.handle_event(InputEvent::DragMove { x: 12.0, y: -4.0 });
/// camera.handle_event(InputEvent::DragEnd);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed: a drag begins at this device coordinate.
    DragStart {
        /// Horizontal position in device pixels.
        x: f32,
        /// Vertical position in device pixels.
        y: f32,
    },
    /// Pointer moved to an absolute device coordinate.
    DragMove {
        /// Horizontal position in device pixels.
        x: f32,
        /// Vertical position in device pixels.
        y: f32,
    },
    /// Pointer released, anywhere — not necessarily over the surface.
    DragEnd,
    /// Scroll wheel (positive = away from the target, zooming out).
    Scroll {
        /// Scroll amount in host scroll units.
        delta: f32,
    },
}
