//! # shade_collision - 2D Box Collision
//!
//! Axis-aligned boxes over `shade_math` vectors and minimum-translation-vector
//! resolution for overlapping float boxes.
//!
//! # Example
//!
//! ```
//! use shade_collision::prelude::*;
//! use shade_math::float2;
//!
//! let player = AxisAlignedBox2::from_rect(0.0, 0.0, 10.0, 10.0);
//! let wall = AxisAlignedBox2::from_rect(5.0, 0.0, 10.0, 10.0);
//!
//! let mtv = player.collide(&wall).expect("boxes overlap");
//! assert_eq!(mtv.overlap, 5.0);
//! assert_eq!(mtv.translation(), float2(-5.0, 0.0));
//! ```
//!
//! Boxes that only touch along an edge do not intersect, so `collide`
//! returns `None` for them.

pub mod aabb;
pub mod aabb_int;
pub mod axis;
pub mod mtv;

pub use aabb::AxisAlignedBox2;
pub use aabb_int::AxisAlignedBox2i;
pub use axis::Axis;
pub use mtv::MinimumTranslationVector;

pub mod prelude {
    pub use crate::aabb::AxisAlignedBox2;
    pub use crate::aabb_int::AxisAlignedBox2i;
    pub use crate::axis::Axis;
    pub use crate::mtv::MinimumTranslationVector;
}
