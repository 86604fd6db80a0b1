
extern crate sraster;

use sraster::{Transform, Vector};
use std::f64::consts::PI;

fn close(a: Vector, b: Vector) -> bool {
    (a - b).length() < 1e-9
}

fn samples() -> Vec<Transform> {
    vec![
        Transform::new(),
        Transform::new_rotate(0.7),
        Transform::new_translate(3.0, -2.0),
        Transform::new_scale(2.0, 0.5),
        Transform::from_rows(1.0, 0.4, 1.0, -0.3, 1.5, 2.0),
        Transform::around(Vector::new(4.0, 1.0), Transform::new_rotate(-1.2)),
    ]
}

#[test]
fn composition_applies_right_to_left() {
    let p = Vector::new(1.5, -2.5);
    for a in samples() {
        for b in samples() {
            assert!(close((a * b) * p, a * (b * p)), "{:?} {:?}", a, b);
        }
    }
    let t = Transform::new_translate(1.0, 0.0) * Transform::new_scale(2.0, 2.0);
    assert_eq!(t * Vector::new(1.0, 1.0), Vector::new(3.0, 2.0));
}

#[test]
fn inverse_round_trip() {
    let p = Vector::new(-3.0, 7.0);
    for t in samples() {
        assert!(close(t.inverse() * (t * p), p));
        assert!(close((t.inverse() * t) * p, p));
        assert!(t.is_invertible());
    }
}

#[test]
fn singular_inverse_is_not_finite() {
    let t = Transform::new_scale(0.0, 1.0);
    assert_eq!(t.det(), 0.0);
    assert!(!t.is_invertible());
    assert!(!t.inverse().sx.is_finite());
}

#[test]
fn determinant() {
    assert_eq!(Transform::new_scale(2.0, 3.0).det(), 6.0);
    assert!((Transform::new_rotate(0.3).det() - 1.0).abs() < 1e-12);
    assert_eq!(Transform::new_translate(5.0, 5.0).det(), 1.0);
}

#[test]
fn rotation_direction() {
    let t = Transform::new_rotate(PI / 2.0);
    assert!(close(t * Vector::new(1.0, 0.0), Vector::new(0.0, 1.0)));
}

#[test]
fn in_place_builders_append() {
    let mut t = Transform::new();
    t.translate(1.0, 0.0);
    t.rotate(PI / 2.0);
    t.scale(2.0, 2.0);
    let expected = Transform::new_scale(2.0, 2.0)
        * Transform::new_rotate(PI / 2.0)
        * Transform::new_translate(1.0, 0.0);
    let p = Vector::new(0.0, 0.0);
    assert!(close(t * p, Vector::new(0.0, 2.0)));
    assert!(close(t * p, expected * p));
}

#[test]
fn around_keeps_pivot() {
    let pivot = Vector::new(10.0, -4.0);
    let t = Transform::around(pivot, Transform::new_scale(3.0, 0.5));
    assert!(close(t * pivot, pivot));
    assert!(close(t * Vector::new(11.0, -2.0), Vector::new(13.0, -3.0)));
}

#[test]
fn linear_drops_translation() {
    let t = Transform::new_translate(4.0, 4.0) * Transform::new_scale(2.0, 3.0);
    assert_eq!(t.linear() * Vector::new(1.0, 1.0), Vector::new(2.0, 3.0));
}
