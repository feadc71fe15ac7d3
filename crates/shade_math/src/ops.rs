//! Component-wise operators
//!
//! Every binary operator comes in three shapes - vector∘vector,
//! vector∘scalar and scalar∘vector - plus the compound assignment forms.
//! Result component `i` is always `a[i] op b[i]`.

use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_binary_op {
    ($V:ident { $($f:ident),+ }, $t:ty, $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt) => {
        impl $Op for $V<$t> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($f: self.$f $tok rhs.$f),+ }
            }
        }

        impl $Op<$t> for $V<$t> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: $t) -> Self {
                Self { $($f: self.$f $tok rhs),+ }
            }
        }

        impl $Op<$V<$t>> for $t {
            type Output = $V<$t>;
            #[inline]
            fn $op(self, rhs: $V<$t>) -> $V<$t> {
                $V { $($f: self $tok rhs.$f),+ }
            }
        }

        impl $OpAssign for $V<$t> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $(self.$f = self.$f $tok rhs.$f;)+
            }
        }

        impl $OpAssign<$t> for $V<$t> {
            #[inline]
            fn $op_assign(&mut self, rhs: $t) {
                $(self.$f = self.$f $tok rhs;)+
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($V:ident { $($f:ident),+ }, $t:ty, $Op:ident::$op:ident, $tok:tt) => {
        impl $Op for $V<$t> {
            type Output = Self;
            #[inline]
            fn $op(self) -> Self {
                Self { $($f: $tok self.$f),+ }
            }
        }
    };
}

macro_rules! impl_shift_op {
    ($V:ident { $($f:ident),+ }, $t:ty, $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $tok:tt) => {
        impl $Op<u32> for $V<$t> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: u32) -> Self {
                Self { $($f: self.$f $tok rhs),+ }
            }
        }

        impl $OpAssign<u32> for $V<$t> {
            #[inline]
            fn $op_assign(&mut self, rhs: u32) {
                $(self.$f = self.$f $tok rhs;)+
            }
        }
    };
}

/// Arithmetic for every numeric element type
macro_rules! impl_arithmetic {
    (@vec $V:ident $fields:tt, $t:ty) => {
        impl_binary_op!($V $fields, $t, Add::add, AddAssign::add_assign, +);
        impl_binary_op!($V $fields, $t, Sub::sub, SubAssign::sub_assign, -);
        impl_binary_op!($V $fields, $t, Mul::mul, MulAssign::mul_assign, *);
        impl_binary_op!($V $fields, $t, Div::div, DivAssign::div_assign, /);
        impl_binary_op!($V $fields, $t, Rem::rem, RemAssign::rem_assign, %);

        impl Sum for $V<$t> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl Product for $V<$t> {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, Mul::mul)
            }
        }
    };
    ($($t:ty),+) => {
        $(
            impl_arithmetic!(@vec Vec2 { x, y }, $t);
            impl_arithmetic!(@vec Vec3 { x, y, z }, $t);
            impl_arithmetic!(@vec Vec4 { x, y, z, w }, $t);
        )+
    };
}

impl_arithmetic!(i32, u32, i64, f32, f64);

macro_rules! impl_negation {
    ($($t:ty),+) => {
        $(
            impl_unary_op!(Vec2 { x, y }, $t, Neg::neg, -);
            impl_unary_op!(Vec3 { x, y, z }, $t, Neg::neg, -);
            impl_unary_op!(Vec4 { x, y, z, w }, $t, Neg::neg, -);
        )+
    };
}

impl_negation!(i32, i64, f32, f64);

/// Bitwise logic, shared by integer and bool vectors
macro_rules! impl_bitwise {
    (@vec $V:ident $fields:tt, $t:ty) => {
        impl_binary_op!($V $fields, $t, BitAnd::bitand, BitAndAssign::bitand_assign, &);
        impl_binary_op!($V $fields, $t, BitOr::bitor, BitOrAssign::bitor_assign, |);
        impl_binary_op!($V $fields, $t, BitXor::bitxor, BitXorAssign::bitxor_assign, ^);
        impl_unary_op!($V $fields, $t, Not::not, !);
    };
    ($($t:ty),+) => {
        $(
            impl_bitwise!(@vec Vec2 { x, y }, $t);
            impl_bitwise!(@vec Vec3 { x, y, z }, $t);
            impl_bitwise!(@vec Vec4 { x, y, z, w }, $t);
        )+
    };
}

impl_bitwise!(bool, i32, u32, i64);

macro_rules! impl_shifts {
    (@vec $V:ident $fields:tt, $t:ty) => {
        impl_shift_op!($V $fields, $t, Shl::shl, ShlAssign::shl_assign, <<);
        impl_shift_op!($V $fields, $t, Shr::shr, ShrAssign::shr_assign, >>);
    };
    ($($t:ty),+) => {
        $(
            impl_shifts!(@vec Vec2 { x, y }, $t);
            impl_shifts!(@vec Vec3 { x, y, z }, $t);
            impl_shifts!(@vec Vec4 { x, y, z, w }, $t);
        )+
    };
}

impl_shifts!(i32, u32, i64);
