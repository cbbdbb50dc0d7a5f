use crate::error::Error;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Leaf size used when none is configured. Small leaves keep the candidate
/// sets returned by a search tight.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 4;

/// Selects which coordinate axes the tree may split on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AxisMask(pub [bool; 3]);

impl AxisMask {
    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self([x, y, z])
    }

    /// Splits on every axis.
    pub fn all() -> Self {
        Self([true; 3])
    }

    /// Returns a copy of this mask with `axis` disabled.
    pub fn without(mut self, axis: usize) -> Self {
        if axis < 3 {
            self.0[axis] = false;
        }
        self
    }

    pub fn is_enabled(&self, axis: usize) -> bool {
        axis < 3 && self.0[axis]
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&enabled| enabled)
    }

    /// The axis the root node splits on.
    pub fn first(&self) -> Option<usize> {
        (0..3).find(|&axis| self.0[axis])
    }

    /// The next enabled axis after `axis`, cycling x -> y -> z -> x.
    ///
    /// When `axis` is the only enabled axis it is returned again.
    pub fn next_after(&self, axis: usize) -> Option<usize> {
        (1..=3).map(|step| (axis + step) % 3).find(|&next| self.0[next])
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::all()
    }
}

impl From<[bool; 3]> for AxisMask {
    fn from(mask: [bool; 3]) -> Self {
        Self(mask)
    }
}

/// Construction parameters of a [`KdTree`](crate::KdTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct TreeConfig {
    /// Nodes holding at most this many points become leaves.
    pub max_leaf_size: usize,
    /// Axes the split dimension cycles through.
    pub split: AxisMask,
}

impl TreeConfig {
    pub fn new(max_leaf_size: usize, split: AxisMask) -> Self {
        Self { max_leaf_size, split }
    }

    /// A configuration that never splits along `axis`, so that searches are
    /// insensitive to that coordinate.
    pub fn excluding(axis: usize) -> Self {
        Self::new(DEFAULT_MAX_LEAF_SIZE, AxisMask::all().without(axis))
    }

    pub fn with_max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    pub fn with_split(mut self, split: AxisMask) -> Self {
        self.split = split;
        self
    }

    /// Checks that the configuration can drive a construction. An empty mask
    /// would leave the axis cycling without a successor.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_leaf_size == 0 {
            return Err(Error::InvalidLeafSize);
        }
        if !self.split.any() {
            return Err(Error::NoSplitAxis);
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEAF_SIZE, AxisMask::all())
    }
}
