//! # shade_math - Shader-Style Vector Library
//!
//! Fixed-size vectors with GLSL/HLSL semantics: `bool`, `int`, `uint`,
//! `long`, `float` and `double` elements in 2, 3 and 4 components.
//!
//! - Arithmetic is component-wise, with scalars broadcast on either side.
//! - Comparisons return boolean vectors (`cmplt`, `cmpeq`, ...) reduced with
//!   `any`/`all`.
//! - Swizzles read any component combination (`v.zyx()`, `v.rgba()`) and
//!   write any combination without repeats (`v.set_xz(..)`).
//! - Vectors round-trip through text with a configurable separator.
//!
//! ```
//! use shade_math::prelude::*;
//!
//! let v = float3(1.0, 2.0, 3.0) * 2.0;
//! assert_eq!(v.zyx(), float3(6.0, 4.0, 2.0));
//! assert!(v.cmpgt(Float3::ONE).all());
//! assert_eq!("6, 4, 2".parse::<Float3>(), Ok(v.zyx()));
//! ```

pub mod error;
pub mod vector;
pub mod ops;
pub mod compare;
pub mod numeric;
pub mod float;
pub mod integer;
pub mod convert;
pub mod swizzle;
pub mod format;
#[cfg(feature = "rand")]
pub mod random;

pub use error::{MathError, ParseVectorError, Result};
pub use format::{Joined, DEFAULT_SEPARATOR};
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = core::f32::consts::TAU;
    pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;
    pub const FRAC_PI_4: f32 = core::f32::consts::FRAC_PI_4;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max. `max` wins when the bounds are inverted.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Smooth step interpolation
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// 1.0 when `x >= edge`, otherwise 0.0
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x >= edge { 1.0 } else { 0.0 }
}

pub mod prelude {
    pub use crate::error::{MathError, ParseVectorError};
    pub use crate::format::DEFAULT_SEPARATOR;
    pub use crate::vector::*;
    pub use crate::{radians, degrees, lerp, clamp, saturate, smoothstep, step};
}
