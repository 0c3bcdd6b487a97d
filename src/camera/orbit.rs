use crate::input::InputEvent;
use crate::math::Vec3;
use crate::options::CameraOptions;

/// Initial orbit pose: a three-quarter view of the target.
const INITIAL_YAW: f32 = 45.0;
const INITIAL_PITCH: f32 = 25.0;
const INITIAL_RADIUS: f32 = 6.0;

/// Orbital camera: yaw/pitch/radius around a fixed target.
///
/// The only long-lived mutable state in the crate. Input handlers mutate it
/// synchronously; the frame composer reads it once per frame. Two
/// invariants hold after every update:
///
/// - `pitch` stays within ±`pitch_limit` (default 85°), keeping the up
///   vector away from the view direction so look-at never degenerates;
/// - `radius` stays within `[min_radius, max_radius]` (default [2, 20]),
///   keeping the eye away from the target and from precision-losing
///   distances.
///
/// Yaw is unbounded on purpose: it accumulates across full rotations and
/// only ever feeds trigonometric functions, so wraparound buys nothing.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    radius: f32,
    drag_active: bool,
    last_pointer: (f32, f32),

    rotate_speed: f32,
    zoom_speed: f32,
    pitch_limit: f32,
    min_radius: f32,
    max_radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl OrbitCamera {
    /// The fixed look-at target.
    pub const CENTER: Vec3 = Vec3::ZERO;
    /// The fixed world-up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// Create a camera at the initial pose with the given tuning.
    ///
    /// The starting radius is clamped into the configured range so a
    /// preset with a narrow radius window still yields a valid pose.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH.clamp(-options.pitch_limit, options.pitch_limit),
            radius: INITIAL_RADIUS.clamp(options.min_radius, options.max_radius),
            drag_active: false,
            last_pointer: (0.0, 0.0),
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            pitch_limit: options.pitch_limit,
            min_radius: options.min_radius,
            max_radius: options.max_radius,
        }
    }

    /// Route a platform-agnostic input event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::DragStart { x, y } => self.drag_start(x, y),
            InputEvent::DragMove { x, y } => self.drag_move(x, y),
            InputEvent::DragEnd => self.drag_end(),
            InputEvent::Scroll { delta } => self.zoom(delta),
        }
    }

    /// Begin a drag at the given device coordinate.
    ///
    /// Records the pointer position for delta tracking; yaw and pitch are
    /// untouched until the first move.
    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.drag_active = true;
        self.last_pointer = (x, y);
    }

    /// Rotate by the pointer movement since the last drag sample.
    ///
    /// A move with no active drag is ignored — hosts deliver stray or
    /// duplicated pointer events and that is never an error.
    pub fn drag_move(&mut self, x: f32, y: f32) {
        if !self.drag_active {
            return;
        }
        let (dx, dy) = (x - self.last_pointer.0, y - self.last_pointer.1);
        self.yaw += dx * self.rotate_speed;
        self.pitch = (self.pitch + dy * self.rotate_speed)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.last_pointer = (x, y);
    }

    /// End the current drag.
    ///
    /// Unconditional: pointer-up may arrive anywhere, including with no
    /// drag in progress, and must always leave the camera consistent.
    pub fn drag_end(&mut self) {
        self.drag_active = false;
    }

    /// Move along the view axis by a scroll delta.
    ///
    /// Positive delta (wheel down) increases the radius, zooming out.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta * self.zoom_speed)
            .clamp(self.min_radius, self.max_radius);
    }

    /// Eye position derived from the current spherical state.
    ///
    /// Yaw is measured from +Z toward +X, pitch from the XZ-plane toward
    /// +Y. Pure: reading the pose never mutates it.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            self.radius * pitch.cos() * yaw.sin(),
            self.radius * pitch.sin(),
            self.radius * pitch.cos() * yaw.cos(),
        )
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_active
    }
}
