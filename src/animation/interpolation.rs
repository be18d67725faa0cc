//! Centralized interpolation utilities for animation.

use rand::Rng;

/// Linear interpolation: `start + (end - start) * factor`.
///
/// `factor` is not bounded; values outside `[0, 1]` extrapolate past
/// either endpoint.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Uniform sample in `[min, max)`.
///
/// `min > max` is accepted and samples `(max, min]` instead; ordering the
/// bounds is the caller's responsibility. Unlike `Rng::random_range` this
/// never panics on an empty or inverted range.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Sample from a `[min, max]` pair.
#[inline]
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    random_between(rng, range[0], range[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        for (a, b) in [(0.0, 10.0), (-3.5, 7.25), (100.0, -100.0), (2.0, 2.0)]
        {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_midpoint_and_overshoot() {
        assert!((lerp(0.0, 100.0, 0.25) - 25.0).abs() < 1e-4);
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-4);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, -8.0, 8.0);
            assert!((-8.0..8.0).contains(&v));
        }
    }

    #[test]
    fn test_random_between_accepts_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_between(&mut rng, 4.0, -1.0);
            assert!(v > -1.0 && v <= 4.0);
        }
    }

    #[test]
    fn test_random_between_is_deterministic_for_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            random_in(&mut a, [16.0, 26.0]),
            random_in(&mut b, [16.0, 26.0])
        );
    }
}
