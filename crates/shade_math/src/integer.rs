//! Integer vector functions

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_signed_int {
    (@vec $V:ident, $t:ty, $u:ty) => {
        impl $V<$t> {
            /// Two's complement absolute value: `MIN` stays `MIN`, as in shader `abs`.
            ///
            /// Use [`unsigned_abs`](Self::unsigned_abs) for the exact magnitude.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(<$t>::wrapping_abs)
            }

            /// Exact magnitude of every component, `MIN` included
            #[inline]
            pub fn unsigned_abs(self) -> $V<$u> {
                self.map(<$t>::unsigned_abs)
            }

            /// -1, 0 or 1 per component
            #[inline]
            pub fn sign(self) -> Self {
                self.map(<$t>::signum)
            }
        }
    };
    ($($t:ty => $u:ty),+) => {
        $(
            impl_signed_int!(@vec Vec2, $t, $u);
            impl_signed_int!(@vec Vec3, $t, $u);
            impl_signed_int!(@vec Vec4, $t, $u);
        )+
    };
}

impl_signed_int!(i32 => u32, i64 => u64);

macro_rules! impl_unsigned_int {
    (@vec $V:ident, $t:ty) => {
        impl $V<$t> {
            /// Identity, unsigned components are their own magnitude
            #[inline]
            pub fn abs(self) -> Self {
                self
            }

            #[inline]
            pub fn unsigned_abs(self) -> Self {
                self
            }

            /// 0 or 1 per component
            #[inline]
            pub fn sign(self) -> Self {
                self.map(|v: $t| <$t>::from(v != 0))
            }
        }
    };
    ($($t:ty),+) => {
        $(
            impl_unsigned_int!(@vec Vec2, $t);
            impl_unsigned_int!(@vec Vec3, $t);
            impl_unsigned_int!(@vec Vec4, $t);
        )+
    };
}

impl_unsigned_int!(u32);

// Norms. The taxicab and Chebyshev norms work on unsigned magnitudes so that
// `MIN` components cannot overflow; `norm1` sums into `$sum` and saturates
// only for `i64` vectors whose magnitudes exceed `u64::MAX` together. The
// root-taking norms widen to f64.
macro_rules! impl_int_norms {
    (@vec $V:ident, $t:ty, $u:ty, $sum:ty) => {
        impl $V<$t> {
            /// Sum of absolute values (taxicab norm)
            #[inline]
            pub fn norm1(self) -> $sum {
                self.unsigned_abs()
                    .into_iter()
                    .fold(0, |acc: $sum, v: $u| acc.saturating_add(<$sum>::from(v)))
            }

            /// Largest absolute component (Chebyshev norm)
            #[inline]
            pub fn norm_max(self) -> $u {
                self.unsigned_abs().into_iter().fold(0, <$u>::max)
            }

            #[inline]
            pub fn length(self) -> f64 {
                self.as_double().length()
            }

            #[inline]
            pub fn norm2(self) -> f64 {
                self.length()
            }

            #[inline]
            pub fn norm_p(self, p: f64) -> f64 {
                self.as_double().norm_p(p)
            }

            #[inline]
            pub fn distance(self, other: Self) -> f64 {
                other.as_double().distance(self.as_double())
            }
        }
    };
    ($($t:ty => $u:ty, $sum:ty);+ $(;)?) => {
        $(
            impl_int_norms!(@vec Vec2, $t, $u, $sum);
            impl_int_norms!(@vec Vec3, $t, $u, $sum);
            impl_int_norms!(@vec Vec4, $t, $u, $sum);
        )+
    };
}

impl_int_norms!(i32 => u32, u64; u32 => u32, u64; i64 => u64, u64);
