//! Per-frame projection-view composition.
//!
//! The [`FrameComposer`] is the bridge between camera state and the render
//! sink: once per display refresh it reads the camera, builds projection
//! and view matrices for the sink's current viewport, multiplies them, and
//! hands the result over for uniform upload. It holds no per-frame state
//! of its own.

use crate::camera::OrbitCamera;
use crate::input::InputEvent;
use crate::math::Mat4;
use crate::options::CameraOptions;

/// Viewport extent in device pixels.
///
/// Owned by the render sink and recomputed whenever the display surface
/// changes; the composer only reads the aspect ratio. Both dimensions are
/// positive by construction — see [`Viewport::from_logical`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f32,
    /// Height in device pixels.
    pub height: f32,
}

impl Viewport {
    /// Construct from device-pixel dimensions.
    ///
    /// Callers guarantee both dimensions are positive; a zero height makes
    /// the aspect ratio undefined.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derive device-pixel extent from a logical surface size and device
    /// pixel ratio, flooring like the canvas resize policy does.
    ///
    /// Each dimension is clamped to at least one pixel, so the resulting
    /// aspect ratio is always positive even while a window is minimized
    /// or mid-resize.
    #[must_use]
    pub fn from_logical(width: f32, height: f32, scale_factor: f32) -> Self {
        let w = (width * scale_factor).floor();
        let h = (height * scale_factor).floor();
        if w < 1.0 || h < 1.0 {
            log::warn!("degenerate surface {w}x{h}, clamping to 1px minimum");
        }
        Self::new(w.max(1.0), h.max(1.0))
    }

    /// Width-over-height aspect ratio.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}

/// GPU-ready wrapper around the composed projection-view matrix.
///
/// `#[repr(C)]` and `Pod` so a sink can upload it with a single
/// `bytemuck::bytes_of` cast, no per-frame marshalling.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewProjUniform {
    /// Combined projection-view matrix, column-major.
    pub view_proj: [f32; 16],
}

impl From<Mat4> for ViewProjUniform {
    fn from(m: Mat4) -> Self {
        Self {
            view_proj: m.to_cols_array(),
        }
    }
}

/// External collaborator that turns composed matrices into draw calls.
///
/// The sink owns the display surface: it knows the current viewport and,
/// on [`submit`](Self::submit), uploads the matrix as a uniform and issues
/// whatever draws it wants. Shader setup, buffers, and clearing are
/// entirely its business.
pub trait RenderSink {
    /// Current drawable extent in device pixels (both dimensions
    /// positive).
    fn viewport(&self) -> Viewport;

    /// Accept this frame's projection-view matrix.
    fn submit(&mut self, uniform: ViewProjUniform);
}

/// Combines orbit-camera state and viewport aspect into one
/// projection-view matrix per frame.
///
/// Owns the [`OrbitCamera`] (single-writer semantics: input events and
/// frame reads both go through the composer on one logical thread) and the
/// fixed projection parameters. The host drives [`render`](Self::render)
/// from its display-refresh callback, indefinitely — there is no stop
/// condition here.
#[derive(Debug, Clone)]
pub struct FrameComposer {
    camera: OrbitCamera,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl FrameComposer {
    /// Create a composer with a camera at the initial pose.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            camera: OrbitCamera::new(options),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// The owned camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable access for hosts that drive the camera directly.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Forward an input event to the owned camera.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.camera.handle_event(event);
    }

    /// Build this frame's projection-view matrix for the given aspect
    /// ratio.
    ///
    /// Pure with respect to camera state: reads a single consistent
    /// snapshot, mutates nothing. The multiply order is `projection *
    /// view` and must stay that way.
    #[must_use]
    pub fn compose(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective(self.fovy, aspect, self.znear, self.zfar);
        let view =
            Mat4::look_at(self.camera.eye(), OrbitCamera::CENTER, OrbitCamera::UP);
        proj * view
    }

    /// Run one frame: read the sink's viewport, compose, submit.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        let mvp = self.compose(sink.viewport().aspect());
        sink.submit(ViewProjUniform::from(mvp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        viewport: Viewport,
        frames: Vec<ViewProjUniform>,
    }

    impl RenderSink for RecordingSink {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn submit(&mut self, uniform: ViewProjUniform) {
            self.frames.push(uniform);
        }
    }

    #[test]
    fn compose_multiplies_projection_by_view() {
        let composer = FrameComposer::default();
        let aspect = 1.5;

        let proj = Mat4::perspective(60.0, aspect, 0.1, 100.0);
        let view = Mat4::look_at(
            composer.camera().eye(),
            OrbitCamera::CENTER,
            OrbitCamera::UP,
        );
        let expected = (proj * view).to_cols_array();

        let got = composer.compose(aspect).to_cols_array();
        assert_eq!(got, expected);
    }

    #[test]
    fn eye_maps_to_zero_clip_w() {
        // For this projection clip w equals -z_view, and the view matrix
        // maps the eye to the camera-space origin. Nonzero w here would
        // mean view did not run before projection.
        let composer = FrameComposer::default();
        let mvp = composer.compose(1.0).to_cols_array();
        let eye = composer.camera().eye();
        let clip_w =
            mvp[3] * eye.x + mvp[7] * eye.y + mvp[11] * eye.z + mvp[15];
        assert!(clip_w.abs() < 1e-4, "clip w at eye = {clip_w}");
    }

    #[test]
    fn render_reads_viewport_and_submits_one_frame() {
        let composer = FrameComposer::default();
        let mut sink = RecordingSink {
            viewport: Viewport::new(1920.0, 1080.0),
            frames: Vec::new(),
        };

        composer.render(&mut sink);
        composer.render(&mut sink);

        assert_eq!(sink.frames.len(), 2);
        let expected =
            ViewProjUniform::from(composer.compose(1920.0 / 1080.0));
        assert_eq!(sink.frames[0], expected);
        assert_eq!(sink.frames[1], expected);
    }

    #[test]
    fn input_between_frames_changes_the_output() {
        let mut composer = FrameComposer::default();
        let mut sink = RecordingSink {
            viewport: Viewport::new(800.0, 600.0),
            frames: Vec::new(),
        };

        composer.render(&mut sink);
        composer.handle_event(InputEvent::DragStart { x: 0.0, y: 0.0 });
        composer.handle_event(InputEvent::DragMove { x: 40.0, y: 0.0 });
        composer.render(&mut sink);

        assert_ne!(sink.frames[0], sink.frames[1]);
    }

    #[test]
    fn uniform_is_sixty_four_upload_bytes() {
        let uniform = ViewProjUniform::from(Mat4::IDENTITY);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
    }

    #[test]
    fn viewport_from_logical_applies_dpr_and_floors() {
        let vp = Viewport::from_logical(800.5, 600.5, 2.0);
        assert_eq!(vp.width, 1601.0);
        assert_eq!(vp.height, 1201.0);
    }

    #[test]
    fn viewport_from_logical_never_degenerates() {
        let vp = Viewport::from_logical(0.0, 0.0, 1.0);
        assert_eq!(vp, Viewport::new(1.0, 1.0));
        assert_eq!(vp.aspect(), 1.0);
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(Viewport::new(1600.0, 800.0).aspect(), 2.0);
    }
}
