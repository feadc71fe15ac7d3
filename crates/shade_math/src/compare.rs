//! Component-wise comparison and boolean vector logic
//!
//! Comparisons never collapse to a scalar: `a.cmplt(b)` is a bool vector with
//! one answer per component. Use [`Vec3::any`] / [`Vec3::all`] to reduce it.

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_compare {
    ($V:ident { $($f:ident),+ }) => {
        impl<T: PartialEq> $V<T> {
            #[inline]
            pub fn cmpeq(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a == b)
            }

            #[inline]
            pub fn cmpne(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a != b)
            }
        }

        impl<T: PartialOrd> $V<T> {
            #[inline]
            pub fn cmplt(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a < b)
            }

            #[inline]
            pub fn cmple(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a <= b)
            }

            #[inline]
            pub fn cmpgt(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a > b)
            }

            #[inline]
            pub fn cmpge(self, rhs: Self) -> $V<bool> {
                self.zip_map(rhs, |a, b| a >= b)
            }
        }

        impl $V<bool> {
            /// True if any component is set
            #[inline]
            pub fn any(self) -> bool {
                false $(|| self.$f)+
            }

            /// True if every component is set
            #[inline]
            pub fn all(self) -> bool {
                true $(&& self.$f)+
            }

            #[inline]
            pub fn none(self) -> bool {
                !self.any()
            }

            /// Per component: `if_true` where set, `if_false` elsewhere
            #[inline]
            pub fn select<U>(self, if_true: $V<U>, if_false: $V<U>) -> $V<U> {
                $V { $($f: if self.$f { if_true.$f } else { if_false.$f }),+ }
            }

            /// Bit `i` set when component `i` is set
            #[inline]
            pub fn bitmask(self) -> u32 {
                self.to_array()
                    .into_iter()
                    .enumerate()
                    .fold(0, |mask, (i, set)| mask | (u32::from(set) << i))
            }
        }
    };
}

impl_compare!(Vec2 { x, y });
impl_compare!(Vec3 { x, y, z });
impl_compare!(Vec4 { x, y, z, w });

#[cfg(test)]
mod tests {
    use crate::vector::*;

    #[test]
    fn test_comparisons_return_bool_vectors() {
        let a = int3(1, 5, 3);
        let b = int3(2, 5, 1);
        assert_eq!(a.cmplt(b), bool3(true, false, false));
        assert_eq!(a.cmple(b), bool3(true, true, false));
        assert_eq!(a.cmpgt(b), bool3(false, false, true));
        assert_eq!(a.cmpge(b), bool3(false, true, true));
        assert_eq!(a.cmpeq(b), bool3(false, true, false));
        assert_eq!(a.cmpne(b), bool3(true, false, true));
    }

    #[test]
    fn test_float_nan_compares_false() {
        let a = float2(f32::NAN, 1.0);
        assert_eq!(a.cmpeq(a), bool2(false, true));
        assert_eq!(a.cmplt(Float2::splat(2.0)), bool2(false, true));
    }

    #[test]
    fn test_any_all_none() {
        assert!(bool4(false, false, true, false).any());
        assert!(!bool4(false, false, true, false).all());
        assert!(Bool3::TRUE.all());
        assert!(Bool2::FALSE.none());
    }

    #[test]
    fn test_select() {
        let mask = bool3(true, false, true);
        let picked = mask.select(float3(1.0, 2.0, 3.0), float3(-1.0, -2.0, -3.0));
        assert_eq!(picked, float3(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_bitmask() {
        assert_eq!(bool4(true, false, true, true).bitmask(), 0b1101);
        assert_eq!(Bool2::FALSE.bitmask(), 0);
    }
}
