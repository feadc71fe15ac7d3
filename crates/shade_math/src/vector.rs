//! Fixed-size vector types with shader-language semantics
//!
//! One generic struct per arity (`Vec2<T>`, `Vec3<T>`, `Vec4<T>`) with
//! public fields and a C layout. The concrete element types get HLSL-style
//! aliases (`Float3`, `Int2`, `Bool4`, ...) and lower-case constructors
//! (`float3(1.0, 2.0, 3.0)`).

use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::error::{MathError, Result};

/// 2-component vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// 3-component vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// 4-component vector - positions in homogeneous space and colors
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Bool2 = Vec2<bool>;
pub type Bool3 = Vec3<bool>;
pub type Bool4 = Vec4<bool>;

pub type Int2 = Vec2<i32>;
pub type Int3 = Vec3<i32>;
pub type Int4 = Vec4<i32>;

pub type UInt2 = Vec2<u32>;
pub type UInt3 = Vec3<u32>;
pub type UInt4 = Vec4<u32>;

pub type Long2 = Vec2<i64>;
pub type Long3 = Vec3<i64>;
pub type Long4 = Vec4<i64>;

pub type Float2 = Vec2<f32>;
pub type Float3 = Vec3<f32>;
pub type Float4 = Vec4<f32>;

pub type Double2 = Vec2<f64>;
pub type Double3 = Vec3<f64>;
pub type Double4 = Vec4<f64>;

/// Layout, construction and indexing shared by every element type.
macro_rules! impl_vector_core {
    ($V:ident, $n:literal, [$($f:ident: $i:literal),+]) => {
        impl<T> $V<T> {
            /// Number of components
            pub const LEN: usize = $n;

            #[inline]
            pub const fn new($($f: T),+) -> Self {
                Self { $($f),+ }
            }

            #[inline]
            pub fn from_array(values: [T; $n]) -> Self {
                let [$($f),+] = values;
                Self { $($f),+ }
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$f),+]
            }

            /// Apply `f` to every component
            #[inline]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $V<U> {
                $V { $($f: f(self.$f)),+ }
            }

            /// Combine matching components of `self` and `other`
            #[inline]
            pub fn zip_map<U, R>(self, other: $V<U>, mut f: impl FnMut(T, U) -> R) -> $V<R> {
                $V { $($f: f(self.$f, other.$f)),+ }
            }
        }

        impl<T: Copy> $V<T> {
            #[inline]
            pub const fn splat(v: T) -> Self {
                Self { $($f: v),+ }
            }

            /// Component by index, without panicking
            pub fn get(&self, index: usize) -> Result<T> {
                match index {
                    $($i => Ok(self.$f),)+
                    _ => Err(MathError::IndexOutOfRange { index, len: $n }),
                }
            }

            /// Overwrite a component by index, without panicking
            pub fn set(&mut self, index: usize, value: T) -> Result<()> {
                match index {
                    $($i => {
                        self.$f = value;
                        Ok(())
                    })+
                    _ => Err(MathError::IndexOutOfRange { index, len: $n }),
                }
            }
        }

        impl<T: Copy + Default> $V<T> {
            /// Build from a slice of any length.
            ///
            /// Missing components are zero (`T::default()`), extra values are ignored.
            pub fn from_slice(values: &[T]) -> Self {
                Self { $($f: values.get($i).copied().unwrap_or_default()),+ }
            }
        }

        impl<T> Index<usize> for $V<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($i => &self.$f,)+
                    _ => panic!(
                        concat!("index out of bounds: ", stringify!($V), " has ", $n, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        impl<T> IndexMut<usize> for $V<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($i => &mut self.$f,)+
                    _ => panic!(
                        concat!("index out of bounds: ", stringify!($V), " has ", $n, " components but the index is {}"),
                        index
                    ),
                }
            }
        }

        impl<T> From<[T; $n]> for $V<T> {
            #[inline]
            fn from(values: [T; $n]) -> Self {
                Self::from_array(values)
            }
        }

        impl<T> From<$V<T>> for [T; $n] {
            #[inline]
            fn from(v: $V<T>) -> Self {
                v.to_array()
            }
        }

        impl<T> IntoIterator for $V<T> {
            type Item = T;
            type IntoIter = core::array::IntoIter<T, $n>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.to_array().into_iter()
            }
        }
    };
}

impl_vector_core!(Vec2, 2, [x: 0, y: 1]);
impl_vector_core!(Vec3, 3, [x: 0, y: 1, z: 2]);
impl_vector_core!(Vec4, 4, [x: 0, y: 1, z: 2, w: 3]);

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T, T)> for Vec4<T> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

// Resizing. Narrowing drops trailing components, widening fills them with zero.

impl<T> Vec2<T> {
    #[inline]
    pub fn from_vec3(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn from_vec4(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T> Vec3<T> {
    #[inline]
    pub fn from_vec4(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}

impl<T: Default> Vec3<T> {
    #[inline]
    pub fn from_vec2(v: Vec2<T>) -> Self {
        Self::new(v.x, v.y, T::default())
    }
}

impl<T> Vec4<T> {
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Default> Vec4<T> {
    #[inline]
    pub fn from_vec2(v: Vec2<T>) -> Self {
        Self::new(v.x, v.y, T::default(), T::default())
    }

    #[inline]
    pub fn from_vec3(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::default())
    }
}

/// Numeric constants. `$zero`/`$one` are the scalar literals of the element type.
macro_rules! impl_numeric_consts {
    ($t:ty, $zero:literal, $one:literal) => {
        impl Vec2<$t> {
            pub const ZERO: Self = Self::new($zero, $zero);
            pub const ONE: Self = Self::new($one, $one);
            pub const X: Self = Self::new($one, $zero);
            pub const Y: Self = Self::new($zero, $one);
            pub const MIN: Self = Self::splat(<$t>::MIN);
            pub const MAX: Self = Self::splat(<$t>::MAX);
        }

        impl Vec3<$t> {
            pub const ZERO: Self = Self::new($zero, $zero, $zero);
            pub const ONE: Self = Self::new($one, $one, $one);
            pub const X: Self = Self::new($one, $zero, $zero);
            pub const Y: Self = Self::new($zero, $one, $zero);
            pub const Z: Self = Self::new($zero, $zero, $one);
            pub const MIN: Self = Self::splat(<$t>::MIN);
            pub const MAX: Self = Self::splat(<$t>::MAX);
        }

        impl Vec4<$t> {
            pub const ZERO: Self = Self::new($zero, $zero, $zero, $zero);
            pub const ONE: Self = Self::new($one, $one, $one, $one);
            pub const X: Self = Self::new($one, $zero, $zero, $zero);
            pub const Y: Self = Self::new($zero, $one, $zero, $zero);
            pub const Z: Self = Self::new($zero, $zero, $one, $zero);
            pub const W: Self = Self::new($zero, $zero, $zero, $one);
            pub const MIN: Self = Self::splat(<$t>::MIN);
            pub const MAX: Self = Self::splat(<$t>::MAX);
        }
    };
}

impl_numeric_consts!(i32, 0, 1);
impl_numeric_consts!(u32, 0, 1);
impl_numeric_consts!(i64, 0, 1);
impl_numeric_consts!(f32, 0.0, 1.0);
impl_numeric_consts!(f64, 0.0, 1.0);

macro_rules! impl_signed_consts {
    ($t:ty, $one:literal) => {
        impl Vec2<$t> {
            pub const NEG_ONE: Self = Self::splat(-$one);
        }

        impl Vec3<$t> {
            pub const NEG_ONE: Self = Self::splat(-$one);
        }

        impl Vec4<$t> {
            pub const NEG_ONE: Self = Self::splat(-$one);
        }
    };
}

impl_signed_consts!(i32, 1);
impl_signed_consts!(i64, 1);
impl_signed_consts!(f32, 1.0);
impl_signed_consts!(f64, 1.0);

impl Vec2<bool> {
    pub const FALSE: Self = Self::splat(false);
    pub const TRUE: Self = Self::splat(true);
}

impl Vec3<bool> {
    pub const FALSE: Self = Self::splat(false);
    pub const TRUE: Self = Self::splat(true);
}

impl Vec4<bool> {
    pub const FALSE: Self = Self::splat(false);
    pub const TRUE: Self = Self::splat(true);
}

// Structural hashing. Exact element types are `Eq`; floats hash their bit
// pattern with both zeros folded together so that `0.0 == -0.0` hash alike.

macro_rules! impl_hash_exact {
    ($($t:ty),+) => {
        $(
            impl Eq for Vec2<$t> {}
            impl Eq for Vec3<$t> {}
            impl Eq for Vec4<$t> {}

            impl Hash for Vec2<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.to_array().hash(state);
                }
            }

            impl Hash for Vec3<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.to_array().hash(state);
                }
            }

            impl Hash for Vec4<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.to_array().hash(state);
                }
            }
        )+
    };
}

impl_hash_exact!(bool, i32, u32, i64);

macro_rules! impl_hash_float {
    ($($t:ty),+) => {
        $(
            impl Hash for Vec2<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.map(|v: $t| if v == 0.0 { 0 } else { v.to_bits() }).to_array().hash(state);
                }
            }

            impl Hash for Vec3<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.map(|v: $t| if v == 0.0 { 0 } else { v.to_bits() }).to_array().hash(state);
                }
            }

            impl Hash for Vec4<$t> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.map(|v: $t| if v == 0.0 { 0 } else { v.to_bits() }).to_array().hash(state);
                }
            }
        )+
    };
}

impl_hash_float!(f32, f64);

/// Shader-style lower-case constructors, `float3(1.0, 2.0, 3.0)`.
macro_rules! shader_constructors {
    ($($name:ident => $V:ident<$t:ty> [$($f:ident),+];)+) => {
        $(
            #[inline]
            pub const fn $name($($f: $t),+) -> $V<$t> {
                $V { $($f),+ }
            }
        )+
    };
}

shader_constructors! {
    bool2 => Vec2<bool> [x, y];
    bool3 => Vec3<bool> [x, y, z];
    bool4 => Vec4<bool> [x, y, z, w];
    int2 => Vec2<i32> [x, y];
    int3 => Vec3<i32> [x, y, z];
    int4 => Vec4<i32> [x, y, z, w];
    uint2 => Vec2<u32> [x, y];
    uint3 => Vec3<u32> [x, y, z];
    uint4 => Vec4<u32> [x, y, z, w];
    long2 => Vec2<i64> [x, y];
    long3 => Vec3<i64> [x, y, z];
    long4 => Vec4<i64> [x, y, z, w];
    float2 => Vec2<f32> [x, y];
    float3 => Vec3<f32> [x, y, z];
    float4 => Vec4<f32> [x, y, z, w];
    double2 => Vec2<f64> [x, y];
    double3 => Vec3<f64> [x, y, z];
    double4 => Vec4<f64> [x, y, z, w];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_constructors_agree() {
        assert_eq!(float3(1.0, 2.0, 3.0), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(int2(4, 5), Int2::from_array([4, 5]));
        assert_eq!(Long4::from((1, 2, 3, 4)), long4(1, 2, 3, 4));
        assert_eq!(UInt3::splat(7), uint3(7, 7, 7));
        assert_eq!(Bool2::TRUE, bool2(true, true));
    }

    #[test]
    fn test_from_slice_zero_fills_and_truncates() {
        assert_eq!(Float4::from_slice(&[1.0, 2.0]), float4(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Int2::from_slice(&[1, 2, 3, 4]), int2(1, 2));
        assert_eq!(Double3::from_slice(&[]), Double3::ZERO);
    }

    #[test]
    fn test_resize() {
        let v = float2(1.0, 2.0);
        assert_eq!(Float4::from_vec2(v), float4(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Float3::from_vec2(v), float3(1.0, 2.0, 0.0));
        assert_eq!(v.extend(3.0).extend(4.0), float4(1.0, 2.0, 3.0, 4.0));

        let w = int4(1, 2, 3, 4);
        assert_eq!(Int2::from_vec4(w), int2(1, 2));
        assert_eq!(Int3::from_vec4(w), w.truncate());
        assert_eq!(w.truncate().truncate(), int2(1, 2));
    }

    #[test]
    fn test_index() {
        let mut v = int3(10, 20, 30);
        assert_eq!(v[0], 10);
        assert_eq!(v[2], 30);
        v[1] = 5;
        assert_eq!(v.y, 5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let v = float2(1.0, 2.0);
        let _component = v[2];
    }

    #[test]
    fn test_checked_access() {
        let mut v = float4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.get(3), Ok(4.0));
        assert_eq!(v.get(4), Err(MathError::IndexOutOfRange { index: 4, len: 4 }));
        assert!(v.set(0, 9.0).is_ok());
        assert_eq!(v.x, 9.0);
        assert!(v.set(7, 1.0).is_err());
    }

    #[test]
    fn test_hash_is_structural() {
        let mut set = HashSet::new();
        set.insert(int2(1, 2));
        set.insert(int2(1, 2));
        set.insert(int2(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_float_hash_folds_signed_zero() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |v: Float2| {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(float2(0.0, 1.0)), hash(float2(-0.0, 1.0)));
    }

    #[test]
    fn test_into_iterator() {
        let total: i32 = int4(1, 2, 3, 4).into_iter().sum();
        assert_eq!(total, 10);
        let arr: [f64; 3] = double3(1.0, 2.0, 3.0).into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
