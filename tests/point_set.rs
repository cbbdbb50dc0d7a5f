use faultkd::{BoundingBox, Point, PointSet};

#[test]
fn test_insert_is_idempotent() {
    let mut set = PointSet::new();
    assert!(set.insert(Point::new(1.0, 2.0, 3.0)));
    assert!(!set.insert(Point::new(1.0, 2.0, 3.0)));
    assert!(set.insert(Point::new(1.0, 2.0, 3.5)));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Point::new(1.0, 2.0, 3.0)));
}

#[test]
fn test_signed_zero_is_one_point() {
    let mut set = PointSet::new();
    set.insert(Point::new(0.0, -0.0, 0.0));
    assert!(!set.insert(Point::new(-0.0, 0.0, -0.0)));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_nan_is_rejected() {
    let mut set = PointSet::new();
    assert!(!set.insert(Point::new(f64::NAN, 0.0, 0.0)));
    assert!(set.is_empty());
    // Infinite coordinates are valid.
    assert!(set.insert(Point::new(f64::INFINITY, 0.0, 0.0)));
}

#[test]
fn test_insertion_order_is_kept() {
    let set: PointSet = [3.0, 1.0, 2.0, 1.0, 0.0]
        .iter()
        .map(|&x| Point::new(x, 0.0, 0.0))
        .collect();
    let xs: Vec<f64> = set.iter().map(|p| p.x()).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0, 0.0]);
    assert_eq!(set.get(2), Some(&Point::new(2.0, 0.0, 0.0)));
    assert_eq!(set.get(4), None);
}

#[test]
fn test_from_flat() {
    let set = PointSet::from_flat(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 1.0, 2.0, 9.0]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(1).map(|p| p.coords()), Some([3.0, 4.0, 5.0]));
}

#[test]
fn test_random_points_inside_bounds() {
    let bounds = BoundingBox::new([-1.0, 0.0, 10.0], [1.0, 5.0, 20.0]);
    let set = PointSet::random(1000, &bounds);
    assert_eq!(set.len(), 1000);
    assert!(set.iter().all(|p| bounds.contains(p)));
}

#[test]
fn test_point_accessors() {
    let p = Point::from([1.0, 2.0, 3.0]);
    assert_eq!((p.x(), p.y(), p.z()), (1.0, 2.0, 3.0));
    assert_eq!(p[1], 2.0);
    assert_eq!(p.coord(2), 3.0);
    assert_eq!(<[f64; 3]>::from(p), [1.0, 2.0, 3.0]);
}
