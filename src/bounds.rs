use crate::point::Point;
use crate::search::{Side, Support};

/// Axis-aligned bounding box in 3D space.
///
/// A box is the most common search region, so it implements [`Support`]
/// directly: the lower bound of an axis is `min`, the upper bound is `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// An inverted box that contains nothing and grows to fit the first point
    /// passed to [`BoundingBox::expand`].
    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    /// A box of zero volume located at `point`.
    pub fn at(point: &Point) -> Self {
        Self::new(point.coords(), point.coords())
    }

    /// The smallest box containing all `points`.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64; 3]>,
    {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand(p);
        }
        bounds
    }

    pub fn expand(&mut self, point: &[f64; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Side lengths of the box.
    pub fn extent(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Whether `value` lies within the closed interval of the box on `axis`.
    pub fn contains_on(&self, axis: usize, value: f64) -> bool {
        value >= self.min[axis] && value <= self.max[axis]
    }

    pub fn contains(&self, point: &Point) -> bool {
        (0..3).all(|axis| self.contains_on(axis, point.coord(axis)))
    }
}

impl Support for BoundingBox {
    fn bound(&self, axis: usize, side: Side) -> f64 {
        match side {
            Side::Lower => self.min[axis],
            Side::Upper => self.max[axis],
        }
    }
}
