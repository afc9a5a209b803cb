// tests/property_tests.rs
//! Seeded randomized checks of the vector-space, cross-product and wedge laws.

use approx::assert_relative_eq;
use num_traits::Zero;
use r3_grassmann::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;
const EPS: f64 = 1e-9;

fn scalar(rng: &mut StdRng) -> Scalar {
    Scalar::new(rng.gen_range(-100.0..100.0))
}

fn r3(rng: &mut StdRng) -> R3Element {
    R3Element::new(scalar(rng), scalar(rng), scalar(rng))
}

fn vector(rng: &mut StdRng) -> Vector {
    Vector::new(r3(rng))
}

#[test]
fn test_vector_space_axioms() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let (a, b, c) = (vector(&mut rng), vector(&mut rng), vector(&mut rng));
        let (s, t) = (scalar(&mut rng), scalar(&mut rng));

        assert_eq!(a + b, b + a);
        assert_relative_eq!((a + b) + c, a + (b + c), epsilon = EPS);
        assert!((a + -a).is_zero());
        assert_relative_eq!(s * (a + b), s * a + s * b, epsilon = EPS, max_relative = EPS);
        assert_relative_eq!((s * t) * a, s * (t * a), epsilon = EPS, max_relative = EPS);
    }
}

#[test]
fn test_cross_product_identities() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let (a, b) = (r3(&mut rng), r3(&mut rng));
        assert_eq!(a.cross(&b), -(b.cross(&a)));
        assert!(a.cross(&a).is_zero());
        assert!(a.dot(&a) >= Scalar::ZERO);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn test_wedge_matches_cross_and_dot() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..SAMPLES {
        let (a, b) = (vector(&mut rng), vector(&mut rng));
        let big_b = Bivector::new(r3(&mut rng));
        assert_eq!(a.wedge(b).coordinates, a.coordinates.cross(&b.coordinates));
        assert_eq!(a.wedge(big_b).coordinate, a.coordinates.dot(&big_b.coordinates));
        assert_eq!(a.wedge(b), -(b.wedge(a)));
    }
}

#[test]
fn test_wedge_is_bilinear() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let (a, b, c) = (vector(&mut rng), vector(&mut rng), vector(&mut rng));
        let s = scalar(&mut rng);
        assert_relative_eq!(
            (s * a + b).wedge(c),
            s * a.wedge(c) + b.wedge(c),
            epsilon = 1e-6,
            max_relative = EPS
        );
    }
}

#[test]
fn test_division_consistency() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..SAMPLES {
        let v = vector(&mut rng);
        let mut s = scalar(&mut rng);
        if s.is_zero() {
            s = Scalar::ONE;
        }
        assert_relative_eq!(v / s, v * (Scalar::ONE / s), epsilon = EPS, max_relative = EPS);
    }
}

#[test]
fn test_scalar_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let d = f64::from_bits(rng.gen::<u64>());
        if !d.is_finite() {
            continue;
        }
        assert_eq!(Scalar::new(d).value().to_bits(), d.to_bits());
    }
}
