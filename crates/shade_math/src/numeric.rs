//! Reductions and element-wise helpers shared by all numeric vectors

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_numeric {
    (@vec $V:ident, $t:ty) => {
        impl $V<$t> {
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a: $t, b: $t| a.min(b))
            }

            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a: $t, b: $t| a.max(b))
            }

            /// `min(max(self, lo), hi)` per component. Never panics, even when `lo > hi`.
            #[inline]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                self.max(lo).min(hi)
            }

            #[inline]
            pub fn clamp_scalar(self, lo: $t, hi: $t) -> Self {
                self.clamp(Self::splat(lo), Self::splat(hi))
            }

            #[inline]
            pub fn min_element(self) -> $t {
                self.into_iter().fold(<$t>::MAX, |m: $t, v: $t| m.min(v))
            }

            #[inline]
            pub fn max_element(self) -> $t {
                self.into_iter().fold(<$t>::MIN, |m: $t, v: $t| m.max(v))
            }

            /// Sum of all components
            #[inline]
            pub fn sum(self) -> $t {
                self.into_iter().sum()
            }

            /// Product of all components
            #[inline]
            pub fn product(self) -> $t {
                self.into_iter().product()
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> $t {
                (self * rhs).sum()
            }

            #[inline]
            pub fn length_squared(self) -> $t {
                self.dot(self)
            }
        }
    };
    ($($t:ty),+) => {
        $(
            impl_numeric!(@vec Vec2, $t);
            impl_numeric!(@vec Vec3, $t);
            impl_numeric!(@vec Vec4, $t);
        )+
    };
}

impl_numeric!(i32, u32, i64, f32, f64);

macro_rules! impl_cross {
    ($($t:ty),+) => {
        $(
            impl Vec3<$t> {
                #[inline]
                pub fn cross(self, rhs: Self) -> Self {
                    Self::new(
                        self.y * rhs.z - self.z * rhs.y,
                        self.z * rhs.x - self.x * rhs.z,
                        self.x * rhs.y - self.y * rhs.x,
                    )
                }
            }
        )+
    };
}

impl_cross!(i32, i64, f32, f64);
