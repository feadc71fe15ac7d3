//! Swizzle accessors
//!
//! Getters exist for every 2-, 3- and 4-component combination of a vector's
//! components, repeats allowed, under both the positional (`xyzw`) and the
//! color (`rgba`) names: `v.zyx()`, `v.bgra()`, `v.xxyy()`.
//!
//! Setters exist for every combination without repeats and write exactly the
//! named components: `v.set_zx(float2(1.0, 2.0))` leaves `y` untouched.

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! swizzle_getters {
    (@two ($a:ident, $fa:ident) [$(($b:ident, $fb:ident)),+]) => {
        paste::paste! {
            $(
                #[inline]
                pub fn [<$a $b>](self) -> Vec2<T> {
                    Vec2::new(self.$fa, self.$fb)
                }
            )+
        }
    };
    (@three ($a:ident, $fa:ident) ($b:ident, $fb:ident) [$(($c:ident, $fc:ident)),+]) => {
        paste::paste! {
            $(
                #[inline]
                pub fn [<$a $b $c>](self) -> Vec3<T> {
                    Vec3::new(self.$fa, self.$fb, self.$fc)
                }
            )+
        }
    };
    (@four ($a:ident, $fa:ident) ($b:ident, $fb:ident) ($c:ident, $fc:ident) [$(($d:ident, $fd:ident)),+]) => {
        paste::paste! {
            $(
                #[inline]
                pub fn [<$a $b $c $d>](self) -> Vec4<T> {
                    Vec4::new(self.$fa, self.$fb, self.$fc, self.$fd)
                }
            )+
        }
    };
    (@three_a $first:tt [$($second:tt),+] $all:tt) => {
        $( swizzle_getters!(@three $first $second $all); )+
    };
    (@four_a $first:tt [$($second:tt),+] $all:tt) => {
        $( swizzle_getters!(@four_b $first $second $all $all); )+
    };
    (@four_b $first:tt $second:tt [$($third:tt),+] $all:tt) => {
        $( swizzle_getters!(@four $first $second $third $all); )+
    };
    (@start $V:ident [$($first:tt),+] $all:tt) => {
        impl<T: Copy> $V<T> {
            $(
                swizzle_getters!(@two $first $all);
                swizzle_getters!(@three_a $first $all $all);
                swizzle_getters!(@four_a $first $all $all);
            )+
        }
    };
    ($V:ident $names:tt) => {
        swizzle_getters!(@start $V $names $names);
    };
}

swizzle_getters!(Vec2 [(x, x), (y, y)]);
swizzle_getters!(Vec2 [(r, x), (g, y)]);
swizzle_getters!(Vec3 [(x, x), (y, y), (z, z)]);
swizzle_getters!(Vec3 [(r, x), (g, y), (b, z)]);
swizzle_getters!(Vec4 [(x, x), (y, y), (z, z), (w, w)]);
swizzle_getters!(Vec4 [(r, x), (g, y), (b, z), (a, w)]);

macro_rules! swizzle_setters {
    (@one ($a:ident $b:ident) ($ca:ident $cb:ident)) => {
        paste::paste! {
            #[inline]
            pub fn [<set_ $a $b>](&mut self, v: Vec2<T>) {
                self.$a = v.x;
                self.$b = v.y;
            }

            #[inline]
            pub fn [<set_ $ca $cb>](&mut self, v: Vec2<T>) {
                self.[<set_ $a $b>](v);
            }
        }
    };
    (@one ($a:ident $b:ident $c:ident) ($ca:ident $cb:ident $cc:ident)) => {
        paste::paste! {
            #[inline]
            pub fn [<set_ $a $b $c>](&mut self, v: Vec3<T>) {
                self.$a = v.x;
                self.$b = v.y;
                self.$c = v.z;
            }

            #[inline]
            pub fn [<set_ $ca $cb $cc>](&mut self, v: Vec3<T>) {
                self.[<set_ $a $b $c>](v);
            }
        }
    };
    (@one ($a:ident $b:ident $c:ident $d:ident) ($ca:ident $cb:ident $cc:ident $cd:ident)) => {
        paste::paste! {
            #[inline]
            pub fn [<set_ $a $b $c $d>](&mut self, v: Vec4<T>) {
                self.$a = v.x;
                self.$b = v.y;
                self.$c = v.z;
                self.$d = v.w;
            }

            #[inline]
            pub fn [<set_ $ca $cb $cc $cd>](&mut self, v: Vec4<T>) {
                self.[<set_ $a $b $c $d>](v);
            }
        }
    };
    ($V:ident { $($fields:tt $colors:tt),+ $(,)? }) => {
        impl<T> $V<T> {
            $( swizzle_setters!(@one $fields $colors); )+
        }
    };
}

swizzle_setters!(Vec2 {
    (x y) (r g), (y x) (g r),
});

swizzle_setters!(Vec3 {
    (x y) (r g), (x z) (r b), (y x) (g r), (y z) (g b), (z x) (b r), (z y) (b g),
    (x y z) (r g b), (x z y) (r b g), (y x z) (g r b), (y z x) (g b r), (z x y) (b r g),
    (z y x) (b g r),
});

swizzle_setters!(Vec4 {
    (x y) (r g), (x z) (r b), (x w) (r a), (y x) (g r), (y z) (g b), (y w) (g a),
    (z x) (b r), (z y) (b g), (z w) (b a), (w x) (a r), (w y) (a g), (w z) (a b),
    (x y z) (r g b), (x y w) (r g a), (x z y) (r b g), (x z w) (r b a), (x w y) (r a g),
    (x w z) (r a b), (y x z) (g r b), (y x w) (g r a), (y z x) (g b r), (y z w) (g b a),
    (y w x) (g a r), (y w z) (g a b), (z x y) (b r g), (z x w) (b r a), (z y x) (b g r),
    (z y w) (b g a), (z w x) (b a r), (z w y) (b a g), (w x y) (a r g), (w x z) (a r b),
    (w y x) (a g r), (w y z) (a g b), (w z x) (a b r), (w z y) (a b g),
    (x y z w) (r g b a), (x y w z) (r g a b), (x z y w) (r b g a), (x z w y) (r b a g),
    (x w y z) (r a g b), (x w z y) (r a b g), (y x z w) (g r b a), (y x w z) (g r a b),
    (y z x w) (g b r a), (y z w x) (g b a r), (y w x z) (g a r b), (y w z x) (g a b r),
    (z x y w) (b r g a), (z x w y) (b r a g), (z y x w) (b g r a), (z y w x) (b g a r),
    (z w x y) (b a r g), (z w y x) (b a g r), (w x y z) (a r g b), (w x z y) (a r b g),
    (w y x z) (a g r b), (w y z x) (a g b r), (w z x y) (a b r g), (w z y x) (a b g r),
});

// Single color channels. Positional channels are the public fields.

impl<T: Copy> Vec2<T> {
    #[inline]
    pub fn r(self) -> T {
        self.x
    }

    #[inline]
    pub fn g(self) -> T {
        self.y
    }
}

impl<T: Copy> Vec3<T> {
    #[inline]
    pub fn r(self) -> T {
        self.x
    }

    #[inline]
    pub fn g(self) -> T {
        self.y
    }

    #[inline]
    pub fn b(self) -> T {
        self.z
    }
}

impl<T: Copy> Vec4<T> {
    #[inline]
    pub fn r(self) -> T {
        self.x
    }

    #[inline]
    pub fn g(self) -> T {
        self.y
    }

    #[inline]
    pub fn b(self) -> T {
        self.z
    }

    #[inline]
    pub fn a(self) -> T {
        self.w
    }
}
