use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::error::SimError;
use crate::vector::Vector2;

#[test]
fn test_arithmetic_returns_new_values() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, -4.0);

    assert_eq!(a.add(b), Vector2::new(4.0, -2.0));
    assert_eq!(a.subtract(b), Vector2::new(-2.0, 6.0));
    assert_eq!(a.scale(3.0), Vector2::new(3.0, 6.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));
    assert_eq!(2.0 * a, a * 2.0);

    // Operands are untouched
    assert_eq!(a, Vector2::new(1.0, 2.0));
    assert_eq!(b, Vector2::new(3.0, -4.0));
}

#[test]
fn test_compound_assignment_rebinds() {
    let original = Vector2::new(1.0, 1.0);
    let mut v = original;
    v += Vector2::new(2.0, 3.0);
    v -= Vector2::new(1.0, 0.0);

    assert_eq!(v, Vector2::new(2.0, 4.0));
    assert_eq!(original, Vector2::new(1.0, 1.0));
}

#[test]
fn test_dot_product() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);

    assert_eq!(a.dot(b), 11.0);
    assert_eq!(a.dot(Vector2::new(-2.0, 1.0)), 0.0);
}

#[test]
fn test_magnitude() {
    assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2::new(-3.0, -4.0).magnitude(), 5.0);
    assert_eq!(Vector2::zeros().magnitude(), 0.0);
    assert_eq!(Vector2::new(3.0, 4.0).magnitude_squared(), 25.0);
}

#[test]
fn test_normalize_unit_length() {
    let samples = [
        Vector2::new(3.0, 4.0),
        Vector2::new(-0.001, 0.0),
        Vector2::new(1.0e6, -2.5e6),
        Vector2::new(1.0e-9, 1.0e-9),
        Vector2::new(-200.0, 0.5),
    ];

    for v in samples {
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_normalize_keeps_direction() {
    let n = Vector2::new(3.0, 4.0).normalize();

    assert_relative_eq!(n.x(), 0.6);
    assert_relative_eq!(n.y(), 0.8);
}

#[test]
fn test_normalize_zero_is_zero() {
    assert_eq!(Vector2::new(0.0, 0.0).normalize(), Vector2::new(0.0, 0.0));
}

#[test]
fn test_divide() {
    let v = Vector2::new(9.0, -3.0).divide(3.0).unwrap();

    assert_abs_diff_eq!(v.x(), 3.0);
    assert_abs_diff_eq!(v.y(), -1.0);
}

#[test]
fn test_divide_by_zero_is_error() {
    let result = Vector2::new(1.0, 1.0).divide(0.0);

    assert!(matches!(result, Err(SimError::Arithmetic { .. })));
    assert!(Vector2::zeros().divide(-0.0).is_err());
}

#[test]
fn test_components_and_index() {
    let v = Vector2::new(5.0, 6.0);

    assert_eq!(v.components(), [5.0, 6.0]);
    assert_eq!(v[0], 5.0);
    assert_eq!(v[1], 6.0);
    assert_eq!(v.x(), 5.0);
    assert_eq!(v.y(), 6.0);
}

#[test]
#[should_panic]
fn test_index_out_of_range() {
    let _ = Vector2::new(5.0, 6.0)[2];
}

#[test]
fn test_nalgebra_conversions() {
    let v = Vector2::new(1.5, -2.5);
    let na: nalgebra::Vector2<f64> = v.into();

    assert_eq!(na, nalgebra::Vector2::new(1.5, -2.5));
    assert_eq!(Vector2::from(na), v);
}

#[test]
fn test_deserialize_from_pair() {
    let v: Vector2 = serde_yaml::from_str("[700, 500.5]").unwrap();
    assert_eq!(v, Vector2::new(700.0, 500.5));
}

#[test]
fn test_display() {
    assert_eq!(Vector2::new(1.0, 2.5).to_string(), "[1, 2.5]");
}
