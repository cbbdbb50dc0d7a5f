use crate::bounds::BoundingBox;
use indexmap::IndexSet;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An immutable point in 3D space.
///
/// Two points are equal when their coordinates compare equal, so `-0.0` and
/// `0.0` describe the same point. The hash is consistent with that.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    coords: [f64; 3],
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// The coordinate along `axis` (0 = x, 1 = y, 2 = z).
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub fn coords(&self) -> [f64; 3] {
        self.coords
    }

    pub fn has_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords[0] == other.coords[0]
            && self.coords[1] == other.coords[1]
            && self.coords[2] == other.coords[2]
    }
}

// NaN coordinates are kept out of every `PointSet`.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &c in &self.coords {
            canonical_bits(c).hash(state);
        }
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl From<[f64; 3]> for Point {
    fn from(coords: [f64; 3]) -> Self {
        Self { coords }
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        point.coords
    }
}

/// A deduplicating collection of points, the input of tree construction.
///
/// Iteration follows insertion order; the position of a point in that order is
/// the index the tree reports back during searches.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: IndexSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: IndexSet::with_capacity(capacity),
        }
    }

    /// Builds a set from a flat array of coordinates `[x, y, z, x, y, z, ...]`.
    /// A trailing incomplete triple is ignored.
    pub fn from_flat(coords: &[f64]) -> Self {
        coords
            .chunks_exact(3)
            .map(|c| Point::new(c[0], c[1], c[2]))
            .collect()
    }

    /// Generates `count` uniformly distributed points inside `bounds`.
    pub fn random(count: usize, bounds: &BoundingBox) -> Self {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let mut set = Self::with_capacity(count);
        let extent = bounds.extent();
        // Duplicates are practically impossible, but bound the loop regardless.
        let max_attempts = count.saturating_mul(2).max(16);
        let mut attempts = 0;
        while set.len() < count && attempts < max_attempts {
            attempts += 1;
            let x = bounds.min[0] + rng.r#gen::<f64>() * extent[0];
            let y = bounds.min[1] + rng.r#gen::<f64>() * extent[1];
            let z = bounds.min[2] + rng.r#gen::<f64>() * extent[2];
            set.insert(Point::new(x, y, z));
        }
        set
    }

    /// Inserts `point`, returning `true` if it was not present yet.
    ///
    /// Points with a NaN coordinate are rejected.
    pub fn insert(&mut self, point: Point) -> bool {
        if point.has_nan() {
            log::warn!("Ignoring point with NaN coordinate: {:?}", point.coords());
            return false;
        }
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// The point at insertion position `index`.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Consumes the set, returning the points in insertion order.
    pub fn into_vec(self) -> Vec<Point> {
        self.points.into_iter().collect()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
