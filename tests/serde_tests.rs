// tests/serde_tests.rs
#![cfg(feature = "serde")]

use r3_grassmann::prelude::*;

#[test]
fn test_scalar_serializes_as_bare_number() {
    let json = serde_json::to_string(&Scalar::new(1.5)).unwrap();
    assert_eq!(json, "1.5");
    let back: Scalar = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Scalar::new(1.5));
}

#[test]
fn test_graded_types_keep_their_field_names() {
    let b = Bivector::new(R3Element::from([0.0, 0.0, 1.0]));
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, r#"{"coordinates":{"x":0.0,"y":0.0,"z":1.0}}"#);

    let t: Trivector = serde_json::from_str(r#"{"coordinate":-2.0}"#).unwrap();
    assert_eq!(t, Trivector::new(Scalar::new(-2.0)));
}
