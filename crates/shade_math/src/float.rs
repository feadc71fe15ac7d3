//! Floating-point vector functions
//!
//! The transcendental and rounding functions apply the scalar function of
//! the same name to every component. Interpolation, the norm family and the
//! geometric helpers (`reflect`, `refract`, `perpendicular`) follow HLSL.

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! component_fns {
    ($t:ty; $($name:ident),+) => {
        $(
            #[inline]
            pub fn $name(self) -> Self {
                self.map(<$t>::$name)
            }
        )+
    };
}

macro_rules! impl_float {
    (@vec $V:ident, $t:ty) => {
        impl $V<$t> {
            component_fns!($t;
                sin, cos, tan, asin, acos, atan, sinh, cosh, tanh,
                exp, exp2, ln, log2, log10, sqrt,
                floor, ceil, round, trunc, abs,
                to_radians, to_degrees
            );

            #[inline]
            pub fn atan2(self, x: Self) -> Self {
                self.zip_map(x, <$t>::atan2)
            }

            /// Every component raised to `n`
            #[inline]
            pub fn powf(self, n: $t) -> Self {
                self.map(|v: $t| v.powf(n))
            }

            /// Component-wise power with a vector exponent
            #[inline]
            pub fn pow(self, exponent: Self) -> Self {
                self.zip_map(exponent, <$t>::powf)
            }

            #[inline]
            pub fn rsqrt(self) -> Self {
                self.map(|v: $t| 1.0 / v.sqrt())
            }

            #[inline]
            pub fn rcp(self) -> Self {
                self.map(|v: $t| 1.0 / v)
            }

            /// `self - floor(self)`, in `[0, 1]`.
            ///
            /// Negative values closer to zero than the type's epsilon round up to exactly `1.0`.
            #[inline]
            pub fn fract(self) -> Self {
                self - self.floor()
            }

            /// Truncated remainder, same sign as `self`
            #[inline]
            pub fn fmod(self, rhs: Self) -> Self {
                self % rhs
            }

            /// -1, 0 or 1 per component
            #[inline]
            pub fn sign(self) -> Self {
                self.map(|v: $t| if v > 0.0 { 1.0 } else if v < 0.0 { -1.0 } else { 0.0 })
            }

            #[inline]
            pub fn saturate(self) -> Self {
                self.clamp(Self::ZERO, Self::ONE)
            }

            #[inline]
            pub fn is_nan(self) -> $V<bool> {
                self.map(<$t>::is_nan)
            }

            #[inline]
            pub fn is_finite(self) -> $V<bool> {
                self.map(<$t>::is_finite)
            }

            #[inline]
            pub fn lerp(self, other: Self, t: $t) -> Self {
                self + (other - self) * t
            }

            /// Lerp with a separate weight per component
            #[inline]
            pub fn lerp_vec(self, other: Self, t: Self) -> Self {
                self + (other - self) * t
            }

            /// Hermite interpolation of `self` between `edge0` and `edge1`
            #[inline]
            pub fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
                let two: $t = 2.0;
                let three: $t = 3.0;
                let t = ((self - edge0) / (edge1 - edge0)).saturate();
                t * t * (three - two * t)
            }

            /// 1 where `self >= edge`, 0 elsewhere
            #[inline]
            pub fn step(self, edge: Self) -> Self {
                self.zip_map(edge, |x: $t, e: $t| if x >= e { 1.0 } else { 0.0 })
            }

            #[inline]
            pub fn length(self) -> $t {
                self.length_squared().sqrt()
            }

            /// Sum of absolute values (taxicab norm)
            #[inline]
            pub fn norm1(self) -> $t {
                self.abs().sum()
            }

            /// Euclidean norm, same as [`length`](Self::length)
            #[inline]
            pub fn norm2(self) -> $t {
                self.length()
            }

            /// Largest absolute component (Chebyshev norm)
            #[inline]
            pub fn norm_max(self) -> $t {
                self.abs().max_element()
            }

            /// `(Σ|xᵢ|ᵖ)^(1/p)`
            #[inline]
            pub fn norm_p(self, p: $t) -> $t {
                self.abs().powf(p).sum().powf(1.0 / p)
            }

            #[inline]
            pub fn distance(self, other: Self) -> $t {
                (other - self).length()
            }

            #[inline]
            pub fn distance_squared(self, other: Self) -> $t {
                (other - self).length_squared()
            }

            /// Unit-length copy; the zero vector stays zero
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len > 0.0 { self / len } else { Self::ZERO }
            }

            #[inline]
            pub fn try_normalize(self) -> Option<Self> {
                let len = self.length();
                if len > 0.0 && len.is_finite() {
                    Some(self / len)
                } else {
                    None
                }
            }

            #[inline]
            pub fn is_normalized(self) -> bool {
                (self.length_squared() - 1.0).abs() <= 1e-4
            }

            /// Mirror `self` around the plane with unit `normal`
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                self - normal * (2.0 * self.dot(normal))
            }

            /// Refraction direction for incident `self`, unit `normal` and index ratio `eta`.
            ///
            /// Returns zero on total internal reflection.
            pub fn refract(self, normal: Self, eta: $t) -> Self {
                let n_dot_i = normal.dot(self);
                let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
                if k < 0.0 {
                    Self::ZERO
                } else {
                    self * eta - normal * (eta * n_dot_i + k.sqrt())
                }
            }
        }
    };
    ($($t:ty),+) => {
        $(
            impl_float!(@vec Vec2, $t);
            impl_float!(@vec Vec3, $t);
            impl_float!(@vec Vec4, $t);

            impl Vec2<$t> {
                /// Rotated 90° clockwise: `(y, -x)`
                #[inline]
                pub fn perpendicular(self) -> Self {
                    Self::new(self.y, -self.x)
                }

                /// Angle of the vector from the +x axis, in radians
                #[inline]
                pub fn angle(self) -> $t {
                    self.y.atan2(self.x)
                }
            }
        )+
    };
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::vector::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_functions() {
        let v = float2(0.0, core::f32::consts::FRAC_PI_2);
        let s = v.sin();
        assert_relative_eq!(s.x, 0.0);
        assert_relative_eq!(s.y, 1.0);

        assert_eq!(double3(1.5, -1.5, 2.0).floor(), double3(1.0, -2.0, 2.0));
        assert_eq!(double3(1.25, -1.25, 2.0).fract(), double3(0.25, 0.75, 0.0));
        assert_eq!(float2(-1e-8, 0.25).fract(), float2(1.0, 0.25));
        assert_eq!(float4(4.0, 9.0, 16.0, 1.0).sqrt(), float4(2.0, 3.0, 4.0, 1.0));
        assert_eq!(float2(-3.0, 0.0).sign(), float2(-1.0, 0.0));
    }

    #[test]
    fn test_lerp_smoothstep_step() {
        let a = float3(0.0, 10.0, -2.0);
        let b = float3(10.0, 20.0, 2.0);
        assert_eq!(a.lerp(b, 0.5), float3(5.0, 15.0, 0.0));

        let edge0 = Float2::ZERO;
        let edge1 = Float2::ONE;
        assert_eq!(float2(-1.0, 2.0).smoothstep(edge0, edge1), float2(0.0, 1.0));
        assert_eq!(float2(0.5, 0.5).smoothstep(edge0, edge1), float2(0.5, 0.5));

        assert_eq!(float3(0.2, 0.5, 0.9).step(Float3::splat(0.5)), float3(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_norms() {
        let v = double2(3.0, -4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.norm1(), 7.0);
        assert_eq!(v.norm2(), 5.0);
        assert_eq!(v.norm_max(), 4.0);
        assert_relative_eq!(v.norm_p(2.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(v.norm_p(1.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize() {
        let n = float3(3.0, 0.0, 4.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert!(n.is_normalized());
        assert_eq!(Float3::ZERO.normalize(), Float3::ZERO);
        assert_eq!(Float3::ZERO.try_normalize(), None);
    }

    #[test]
    fn test_reflect_refract() {
        let incident = float2(1.0, -1.0);
        assert_eq!(incident.reflect(Float2::Y), float2(1.0, 1.0));

        // eta = 1 passes straight through
        let dir = float3(0.6, -0.8, 0.0);
        let through = dir.refract(Float3::Y, 1.0);
        assert_relative_eq!(through.x, dir.x, epsilon = 1e-6);
        assert_relative_eq!(through.y, dir.y, epsilon = 1e-6);

        // grazing ray leaving a dense medium is totally reflected
        let grazing = float3(0.99, -0.141, 0.0).normalize();
        assert_eq!(grazing.refract(Float3::Y, 1.5), Float3::ZERO);
    }

    #[test]
    fn test_perpendicular_is_clockwise() {
        assert_eq!(float2(1.0, 0.0).perpendicular(), float2(0.0, -1.0));
        assert_eq!(float2(0.0, 1.0).perpendicular(), float2(1.0, 0.0));
        assert_eq!(Float2::X.perpendicular().dot(Float2::X), 0.0);
    }
}
