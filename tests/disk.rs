
extern crate sraster;

use sraster::{Color, ConvexPoly, Ellipse, Image, Shape, Vector};

fn disk() -> Shape {
    Shape::from(Ellipse::circle(Vector::new(5.0, 5.0), 3.0, Color::black()))
}

/// Samples of pixel (x,y) inside the circle of radius 3 at (5,5)
fn analytic_count(x: usize, y: usize, n: usize) -> usize {
    let mut count = 0;
    for j in 0 .. n {
        for i in 0 .. n {
            let sx = x as f64 + (i as f64 + 0.5) / n as f64 - 5.0;
            let sy = y as f64 + (j as f64 + 0.5) / n as f64 - 5.0;
            if sx * sx + sy * sy <= 9.0 {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn disk_coverage() {
    let mut img = Image::new(10, 10);
    disk().draw(&mut img, 4);
    let mut full = 0;
    for y in 0 .. 10 {
        for x in 0 .. 10 {
            let c = img.get(x, y);
            let n = analytic_count(x, y, 4);
            if n == 0 {
                assert!(c.transparent, "({},{})", x, y);
                assert_eq!(c.a, 0.0);
            } else {
                assert!(!c.transparent, "({},{})", x, y);
                assert_eq!(c.a, n as f64 / 16.0, "({},{})", x, y);
            }
            if c.a == 1.0 {
                full += 1;
                assert_eq!(n, 16);
            }
        }
    }
    assert!(full > 0);
    assert_eq!(img.get(5, 5).a, 1.0);
    assert_eq!(img.get(4, 4).a, 1.0);
    assert!(img.get(2, 2).a > 0.0 && img.get(2, 2).a < 1.0);
    assert!(img.get(0, 0).transparent);
    assert!(img.get(9, 9).transparent);
}

#[test]
fn disk_is_deterministic() {
    let mut a = Image::new(10, 10);
    let mut b = Image::new(10, 10);
    disk().draw(&mut a, 4);
    disk().draw(&mut b, 4);
    assert_eq!(a, b);
    assert_eq!(a.as_bytes(), b.as_bytes());

    std::fs::create_dir_all("tests/tmp").unwrap();
    a.to_file("tests/tmp/disk_a.png").unwrap();
    b.to_file("tests/tmp/disk_b.png").unwrap();
    assert!(sraster::ppm::img_diff("tests/tmp/disk_a.png", "tests/tmp/disk_b.png").unwrap());
}

#[test]
fn zero_super_sampling_is_one_sample() {
    let mut a = Image::new(10, 10);
    let mut b = Image::new(10, 10);
    disk().draw(&mut a, 0);
    disk().draw(&mut b, 1);
    assert_eq!(a, b);
    assert!(a.pixels().iter().all(|c| c.a == 0.0 || c.a == 1.0));
}

#[test]
fn clipped_to_image() {
    let mut img = Image::new(4, 4);
    let corner = Shape::from(Ellipse::circle(Vector::new(0.0, 0.0), 3.0, Color::white()));
    corner.draw(&mut img, 3);
    assert_eq!(img.get(0, 0).a, 1.0);
    assert!(img.get(3, 3).transparent);

    let big = Shape::from(ConvexPoly::rectangle(Vector::new(-100.0, -100.0),
                                                Vector::new(100.0, 100.0),
                                                Color::white()));
    let mut img = Image::new(4, 4);
    big.draw(&mut img, 2);
    assert!(img.pixels().iter().all(|c| c.a == 1.0 && !c.transparent));
}

#[test]
fn outside_shapes_are_skipped() {
    let mut img = Image::new(8, 8);
    let blank = img.clone();
    let left = Shape::from(ConvexPoly::rectangle(Vector::new(-5.0, 0.0),
                                                 Vector::new(0.0, 8.0),
                                                 Color::black()));
    let far = Shape::from(Ellipse::circle(Vector::new(50.0, 50.0), 2.0, Color::black()));
    left.draw(&mut img, 4);
    far.draw(&mut img, 4);
    assert_eq!(img, blank);

    let mut empty = Image::new(0, 5);
    Shape::from(Ellipse::circle(Vector::new(0.0, 0.0), 2.0, Color::black())).draw(&mut empty, 2);
}

#[test]
fn half_covered_pixels() {
    // Left half of pixel (1,0) is covered
    let mut img = Image::new(3, 1);
    let r = Shape::from(ConvexPoly::rectangle(Vector::new(0.0, 0.0),
                                              Vector::new(1.5, 1.0),
                                              Color::rgb(1.0, 0.0, 0.0)));
    r.draw(&mut img, 4);
    assert_eq!(img.get(0, 0).a, 1.0);
    assert_eq!(img.get(1, 0).a, 0.5);
    assert_eq!(img.get(1, 0).rgb, [0.5, 0.0, 0.0]);
    assert!(img.get(2, 0).transparent);
}
