use crate::bounds::BoundingBox;
use crate::config::TreeConfig;
use crate::error::Error;
use crate::kdtree::KdTree;
use crate::point::{Point, PointSet};
use rayon::prelude::*;

/// Boundary tag marking a tetrahedron face that lies on the fault.
pub const FAULT_BOUNDARY: i32 = 3;

/// Local vertex indices of the four faces of a tetrahedron.
pub const FACE_TO_NODES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

/// A closed interval `[min, max]`, empty until the first value is added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Gathers the fault points of a mesh before the index is built.
///
/// Besides the points themselves, the collector keeps track of the fault's
/// extent along `direction` and along the lateral axis. Elements beyond the
/// lateral ends of the fault cannot be classified reliably; the direction
/// coordinate of the fault at both lateral ends is reported as a hint for
/// handling them.
#[derive(Clone, Debug)]
pub struct FaultCollector {
    direction: usize,
    lateral: usize,
    points: PointSet,
    extent: Extent,
    lateral_extent: Extent,
    border: [f64; 2],
}

impl FaultCollector {
    /// Starts collecting points of a fault whose sides are told apart along
    /// `direction`.
    pub fn new(direction: usize) -> Result<Self, Error> {
        if direction >= 3 {
            return Err(Error::InvalidAxis(direction));
        }
        Ok(Self {
            direction,
            lateral: if direction == 0 { 1 } else { 0 },
            points: PointSet::new(),
            extent: Extent::empty(),
            lateral_extent: Extent::empty(),
            border: [0.0; 2],
        })
    }

    pub fn direction(&self) -> usize {
        self.direction
    }

    pub fn lateral_axis(&self) -> usize {
        self.lateral
    }

    pub fn add_point(&mut self, point: Point) {
        if !self.points.insert(point) {
            return;
        }

        let d = point.coord(self.direction);
        self.extent.min = self.extent.min.min(d);
        self.extent.max = self.extent.max.max(d);

        let l = point.coord(self.lateral);
        if l < self.lateral_extent.min {
            self.lateral_extent.min = l;
            self.border[0] = d;
        }
        if l > self.lateral_extent.max {
            self.lateral_extent.max = l;
            self.border[1] = d;
        }
    }

    /// Adds the vertices of every tetrahedron face tagged [`FAULT_BOUNDARY`].
    ///
    /// `boundaries[e][f]` is the tag of face `f` of element `e`, with face
    /// vertices given by [`FACE_TO_NODES`].
    pub fn add_mesh(&mut self, vertices: &[[f64; 3]], elements: &[[usize; 4]], boundaries: &[[i32; 4]]) -> Result<(), Error> {
        if elements.len() != boundaries.len() {
            return Err(Error::BoundaryMismatch {
                elements: elements.len(),
                boundaries: boundaries.len(),
            });
        }

        for (e, (element, tags)) in elements.iter().zip(boundaries).enumerate() {
            for (face, &tag) in tags.iter().enumerate() {
                if tag != FAULT_BOUNDARY {
                    continue;
                }
                for &local in &FACE_TO_NODES[face] {
                    let vertex = element[local];
                    let coords = vertices.get(vertex).ok_or(Error::VertexOutOfRange {
                        element: e,
                        vertex,
                        count: vertices.len(),
                    })?;
                    self.add_point(Point::from(*coords));
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Extent of the fault along the direction axis.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Extent of the fault along the lateral axis.
    pub fn lateral_extent(&self) -> Extent {
        self.lateral_extent
    }

    /// Direction coordinates of the fault at its lower and upper lateral end.
    pub fn border(&self) -> [f64; 2] {
        self.border
    }

    /// Builds the index. The direction axis is excluded from splitting so that
    /// searches only look at the lateral position of an element.
    pub fn finish(self, max_leaf_size: usize) -> Result<FaultSide, Error> {
        log::info!(
            "Fault spans [{}, {}] along axis {} ({} points)",
            self.extent.min,
            self.extent.max,
            self.direction,
            self.points.len()
        );
        log::info!(
            "Cells < {} and > {} along axis {} have to be handled manually",
            self.lateral_extent.min,
            self.lateral_extent.max,
            self.lateral
        );
        log::info!("A good choice might be {} resp. {}", self.border[0], self.border[1]);

        let config = TreeConfig::excluding(self.direction).with_max_leaf_size(max_leaf_size);
        let tree = KdTree::build(self.points, config)?;
        Ok(FaultSide {
            tree,
            direction: self.direction,
            extent: self.extent,
        })
    }
}

/// Tags mesh elements with the side of the fault they lie on.
///
/// An element is "left" of the fault when the fault does not pass below its
/// centroid along the direction axis, inside the element's lateral footprint.
pub struct FaultSide {
    tree: KdTree,
    direction: usize,
    extent: Extent,
}

impl FaultSide {
    pub fn tree(&self) -> &KdTree {
        &self.tree
    }

    pub fn direction(&self) -> usize {
        self.direction
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns `true` if the tetrahedron lies left of the fault.
    pub fn classify(&self, element: &[[f64; 3]; 4]) -> bool {
        let d = self.direction;
        let avg = element.iter().map(|v| v[d]).sum::<f64>() / 4.0;

        // Elements beyond the fault's range need no search.
        if avg < self.extent.min {
            return true;
        }
        if avg > self.extent.max {
            return false;
        }

        let bounds = BoundingBox::from_points(element.iter());
        let mut has_point = false;
        let mut is_left = true;
        self.tree.search(&bounds, &mut |p: &Point, _: usize| {
            // Leaves are not filtered by the tree; the lateral test is exact here.
            let inside = (0..3)
                .filter(|&axis| axis != d)
                .all(|axis| bounds.contains_on(axis, p.coord(axis)));
            if inside {
                has_point = true;
                if p.coord(d) < avg {
                    is_left = false;
                }
            }
        });

        if !has_point && avg > self.extent.min {
            return false;
        }
        is_left
    }

    /// Classifies every tetrahedron in parallel.
    pub fn classify_all(&self, elements: &[[[f64; 3]; 4]]) -> Vec<bool> {
        elements.par_iter().map(|element| self.classify(element)).collect()
    }

    /// Classifies the tetrahedra of an indexed mesh in parallel.
    pub fn classify_mesh(&self, vertices: &[[f64; 3]], elements: &[[usize; 4]]) -> Result<Vec<bool>, Error> {
        elements
            .par_iter()
            .enumerate()
            .map(|(e, element)| -> Result<bool, Error> {
                let mut corners = [[0.0; 3]; 4];
                for (corner, &vertex) in corners.iter_mut().zip(element) {
                    *corner = *vertices.get(vertex).ok_or(Error::VertexOutOfRange {
                        element: e,
                        vertex,
                        count: vertices.len(),
                    })?;
                }
                Ok(self.classify(&corners))
            })
            .collect()
    }
}
