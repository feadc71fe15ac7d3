//! Random vectors
//!
//! Sampling goes through `rand`'s `Standard` distribution, so `rng.gen::<Float3>()`
//! works for every element type `Standard` can sample.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::vector::{Vec2, Vec3, Vec4};

impl<T> Distribution<Vec2<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2<T> {
        Vec2::new(rng.gen(), rng.gen())
    }
}

impl<T> Distribution<Vec3<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3<T> {
        Vec3::new(rng.gen(), rng.gen(), rng.gen())
    }
}

impl<T> Distribution<Vec4<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec4<T> {
        Vec4::new(rng.gen(), rng.gen(), rng.gen(), rng.gen())
    }
}

macro_rules! impl_random {
    (@vec $V:ident) => {
        impl<T> $V<T>
        where
            Standard: Distribution<T>,
        {
            /// Every component drawn from `Standard`: `[0, 1)` for floats, the full range for integers
            #[inline]
            pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen::<Self>()
            }
        }
    };
    (@float $V:ident, $t:ty) => {
        impl $V<$t> {
            /// Uniform per component in `[lo, hi)`
            pub fn random_range<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self {
                lo.zip_map(hi, |lo: $t, hi: $t| lo + (hi - lo) * rng.gen::<$t>())
            }
        }
    };
    (@int $V:ident, $t:ty) => {
        impl $V<$t> {
            /// Uniform per component in `[lo, hi)`; an empty range yields `lo`
            pub fn random_range<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self {
                lo.zip_map(hi, |lo: $t, hi: $t| if lo < hi { rng.gen_range(lo..hi) } else { lo })
            }
        }
    };
    ($kind:tt: $($t:ty),+) => {
        $(
            impl_random!(@$kind Vec2, $t);
            impl_random!(@$kind Vec3, $t);
            impl_random!(@$kind Vec4, $t);
        )+
    };
}

impl_random!(@vec Vec2);
impl_random!(@vec Vec3);
impl_random!(@vec Vec4);
impl_random!(float: f32, f64);
impl_random!(int: i32, u32, i64);

macro_rules! impl_random_direction {
    ($($t:ident),+) => {
        $(
            impl Vec2<$t> {
                /// Uniformly distributed point on the unit circle
                pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    let angle = rng.gen::<$t>() * core::$t::consts::TAU;
                    Self::new(angle.cos(), angle.sin())
                }
            }

            impl Vec3<$t> {
                /// Uniformly distributed point on the unit sphere
                pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    let z: $t = rng.gen_range(-1.0..=1.0);
                    let phi = rng.gen::<$t>() * core::$t::consts::TAU;
                    let r = (1.0 - z * z).max(0.0).sqrt();
                    Self::new(r * phi.cos(), r * phi.sin(), z)
                }
            }
        )+
    };
}

impl_random_direction!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::vector::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_standard_sampling() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v: Float4 = rng.gen();
            assert!(v.cmpge(Float4::ZERO).all() && v.cmplt(Float4::ONE).all());
            let d = Double3::random(&mut rng);
            assert!(d.cmpge(Double3::ZERO).all() && d.cmplt(Double3::ONE).all());
        }
    }

    #[test]
    fn test_random_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let lo = int3(-5, 0, 10);
        let hi = int3(5, 1, 10);
        for _ in 0..200 {
            let v = Int3::random_range(&mut rng, lo, hi);
            assert!(v.x >= -5 && v.x < 5);
            assert_eq!(v.y, 0);
            // empty range
            assert_eq!(v.z, 10);

            let f = Float2::random_range(&mut rng, float2(-1.0, 2.0), float2(1.0, 3.0));
            assert!(f.x >= -1.0 && f.x <= 1.0);
            assert!(f.y >= 2.0 && f.y <= 3.0);
        }
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            assert_relative_eq!(Float2::random_direction(&mut rng).length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(Double3::random_direction(&mut rng).length(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_random_matches_standard_sampling() {
        let a = Int3::random(&mut StdRng::seed_from_u64(5));
        let b: Int3 = StdRng::seed_from_u64(5).gen();
        assert_eq!(a, b);

        let c = Bool2::random(&mut StdRng::seed_from_u64(5));
        let d: Bool2 = StdRng::seed_from_u64(5).gen();
        assert_eq!(c, d);
        assert_eq!(Float2::random(&mut StdRng::seed_from_u64(8)).to_array().len(), 2);
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let a = UInt4::random(&mut StdRng::seed_from_u64(99));
        let b = UInt4::random(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
