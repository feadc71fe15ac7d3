//! Conversions between element types
//!
//! Widening conversions that can never lose information are `From` impls
//! (`Int3 -> Double3`). Everything else is an explicit `as_*` cast with
//! Rust `as` semantics: float to int truncates toward zero and saturates,
//! int to int wraps.

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_lossless_from {
    ($from:ty => $($to:ty),+) => {
        $(
            impl From<Vec2<$from>> for Vec2<$to> {
                #[inline]
                fn from(v: Vec2<$from>) -> Self {
                    v.map(<$to>::from)
                }
            }

            impl From<Vec3<$from>> for Vec3<$to> {
                #[inline]
                fn from(v: Vec3<$from>) -> Self {
                    v.map(<$to>::from)
                }
            }

            impl From<Vec4<$from>> for Vec4<$to> {
                #[inline]
                fn from(v: Vec4<$from>) -> Self {
                    v.map(<$to>::from)
                }
            }
        )+
    };
}

impl_lossless_from!(bool => i32, u32, i64, f32, f64);
impl_lossless_from!(i32 => i64, f64);
impl_lossless_from!(u32 => i64, f64);
impl_lossless_from!(f32 => f64);

macro_rules! impl_casts {
    (@vec $V:ident, $t:ty) => {
        impl $V<$t> {
            #[inline]
            pub fn as_int(self) -> $V<i32> {
                self.map(|v: $t| v as i32)
            }

            #[inline]
            pub fn as_uint(self) -> $V<u32> {
                self.map(|v: $t| v as u32)
            }

            #[inline]
            pub fn as_long(self) -> $V<i64> {
                self.map(|v: $t| v as i64)
            }

            #[inline]
            pub fn as_float(self) -> $V<f32> {
                self.map(|v: $t| v as f32)
            }

            #[inline]
            pub fn as_double(self) -> $V<f64> {
                self.map(|v: $t| v as f64)
            }

            /// `true` for every non-zero component
            #[inline]
            pub fn as_bool(self) -> $V<bool> {
                self.map(|v: $t| v != 0 as $t)
            }
        }
    };
    ($($t:ty),+) => {
        $(
            impl_casts!(@vec Vec2, $t);
            impl_casts!(@vec Vec3, $t);
            impl_casts!(@vec Vec4, $t);
        )+
    };
}

impl_casts!(i32, u32, i64, f32, f64);

macro_rules! impl_bool_casts {
    ($($V:ident),+) => {
        $(
            impl $V<bool> {
                #[inline]
                pub fn as_int(self) -> $V<i32> {
                    self.into()
                }

                #[inline]
                pub fn as_uint(self) -> $V<u32> {
                    self.into()
                }

                #[inline]
                pub fn as_long(self) -> $V<i64> {
                    self.into()
                }

                #[inline]
                pub fn as_float(self) -> $V<f32> {
                    self.into()
                }

                #[inline]
                pub fn as_double(self) -> $V<f64> {
                    self.into()
                }
            }
        )+
    };
}

impl_bool_casts!(Vec2, Vec3, Vec4);
