use std::ops::Mul;

use crate::math::Vec3;

/// Column-major 4×4 matrix.
///
/// Element `i` lives at `column * 4 + row` — the layout GL-family APIs
/// expect when a matrix is uploaded as a uniform without transposition.
/// Matrices are always constructed whole; there is no partial mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Construct from a column-major element array.
    #[must_use]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// The column-major element array, ready for uniform upload.
    #[must_use]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.m
    }

    /// Right-handed perspective projection with OpenGL depth mapping
    /// (view-space −near → −1, −far → +1 in normalized device z).
    ///
    /// `fovy_deg` is the vertical field of view in degrees. Callers
    /// guarantee `near > 0`, `far > near`, and `aspect > 0`; the frame
    /// composer upholds these with fixed clip planes and a viewport that
    /// is positive by construction.
    #[must_use]
    pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy_deg.to_radians() / 2.0).tan();
        let nf = 1.0 / (near - far);
        Self {
            m: [
                f / aspect,
                0.0,
                0.0,
                0.0,
                0.0,
                f,
                0.0,
                0.0,
                0.0,
                0.0,
                (far + near) * nf,
                -1.0,
                0.0,
                0.0,
                2.0 * far * near * nf,
                0.0,
            ],
        }
    }

    /// Right-handed view matrix looking from `eye` toward `center`.
    ///
    /// Basis: forward = normalize(eye − center), right = normalize(up ×
    /// forward), true-up = forward × right. The rotation block is the
    /// transpose of that basis (world → camera), and the last column
    /// carries `−axis·eye` so `eye` maps to the camera-space origin.
    ///
    /// `up` must not be parallel to the view direction — the orbit camera
    /// upholds this by clamping pitch away from ±90°.
    #[must_use]
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        Self {
            m: [
                x.x,
                y.x,
                z.x,
                0.0,
                x.y,
                y.y,
                z.y,
                0.0,
                x.z,
                y.z,
                z.z,
                0.0,
                -x.dot(eye),
                -y.dot(eye),
                -z.dot(eye),
                1.0,
            ],
        }
    }

    /// Transform a point (w = 1), dropping the resulting w.
    ///
    /// Exact for affine matrices such as view transforms; projective
    /// matrices need the w divide this deliberately skips.
    #[must_use]
    pub fn transform_point3(self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        )
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Matrix product `self * rhs`.
    ///
    /// Order matters: `projection * view` applies `view` first when the
    /// result is post-multiplied against a column vector. Swapping the
    /// operands produces a numerically wrong transform, not an error.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k * 4 + r] * rhs.m[c * 4 + k];
                }
                out[c * 4 + r] = sum;
            }
        }
        Self { m: out }
    }
}
