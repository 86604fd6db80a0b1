
extern crate sraster;

use sraster::{AABox, Transform, Vector};

fn unit() -> AABox {
    AABox::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0))
}

#[test]
fn corners_are_sorted() {
    let b = AABox::new(Vector::new(3.0, -1.0), Vector::new(1.0, 2.0));
    assert_eq!(b.low, Vector::new(1.0, -1.0));
    assert_eq!(b.high, Vector::new(3.0, 2.0));
    assert_eq!(b.size(), Vector::new(2.0, 3.0));
    assert_eq!(b.midpoint(), Vector::new(2.0, 0.5));
}

#[test]
fn contains_is_inclusive() {
    let b = unit();
    for p in &[(0.0, 0.0), (1.0, 1.0), (0.0, 0.5), (0.5, 1.0), (0.5, 0.5)] {
        assert!(b.contains(Vector::from(*p)), "{:?}", p);
    }
    assert!(!b.contains(Vector::new(1.0 + 1e-12, 0.5)));
    assert!(!b.contains(Vector::new(0.5, -1e-12)));
}

#[test]
fn overlaps_is_exclusive() {
    let b = unit();
    let right = AABox::new(Vector::new(1.0, 0.0), Vector::new(2.0, 1.0));
    let above = AABox::new(Vector::new(0.0, 1.0), Vector::new(1.0, 2.0));
    let corner = AABox::new(Vector::new(1.0, 1.0), Vector::new(2.0, 2.0));
    let inside = AABox::new(Vector::new(0.25, 0.25), Vector::new(0.75, 0.75));
    let partial = AABox::new(Vector::new(0.5, -1.0), Vector::new(3.0, 0.5));
    assert!(!b.overlaps(&right));
    assert!(!right.overlaps(&b));
    assert!(!b.overlaps(&above));
    assert!(!b.overlaps(&corner));
    assert!(b.overlaps(&inside));
    assert!(b.overlaps(&partial));
    assert!(partial.overlaps(&b));
}

#[test]
fn intersection() {
    let b = unit();
    let partial = AABox::new(Vector::new(0.5, -1.0), Vector::new(3.0, 0.5));
    let i = b.intersection(&partial);
    assert_eq!(i, AABox::new(Vector::new(0.5, 0.0), Vector::new(1.0, 0.5)));
    assert!(!i.is_empty());

    let far = AABox::new(Vector::new(5.0, 5.0), Vector::new(6.0, 6.0));
    assert!(!b.overlaps(&far));
    assert!(b.intersection(&far).is_empty());
}

#[test]
fn from_vectors_is_tight() {
    let pts : Vec<_> = [(0.5, 2.0), (-1.0, 3.0), (4.0, -2.5), (1.0, 1.0), (2.0, 0.0)]
        .iter().map(|&p| Vector::from(p)).collect();
    let b = AABox::from_vectors(&pts);
    assert!(pts.iter().all(|&p| b.contains(p)));
    assert_eq!(b.low, Vector::new(-1.0, -2.5));
    assert_eq!(b.high, Vector::new(4.0, 3.0));

    let single = AABox::from_vectors(&[Vector::new(2.0, 2.0)]);
    assert_eq!(single.size(), Vector::new(0.0, 0.0));
}

#[test]
fn expand_and_transform() {
    let mut b = unit();
    b.expand(Vector::new(-1.0, 0.5));
    assert_eq!(b.low, Vector::new(-1.0, 0.0));

    let t = Transform::new_translate(2.0, 3.0) * Transform::new_scale(2.0, -1.0);
    let m = unit().transform(&t);
    assert_eq!(m, AABox::new(Vector::new(2.0, 2.0), Vector::new(4.0, 3.0)));
}
