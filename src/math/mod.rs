//! Small deterministic linear-algebra types for camera math.
//!
//! Everything here is plain scalar code with stable semantics: no SIMD, no
//! unsafe, column-major matrix storage throughout. The conventions
//! (right-handed bases, OpenGL −1..+1 depth range) are load-bearing —
//! renderers consume these matrices byte-for-byte.

/// Column-major 4×4 matrix with perspective and look-at constructors.
pub mod mat4;
/// 3-component vector with the usual dot/cross/normalize operations.
pub mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
