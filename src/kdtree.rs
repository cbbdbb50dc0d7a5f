use crate::config::TreeConfig;
use crate::error::Error;
use crate::point::{Point, PointSet};
use crate::search::{Side, Support, Visitor};

/// What a slot of the implicit node array holds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NodeKind {
    /// The slot lies below a leaf and was never reached.
    #[default]
    Vacant,
    Leaf,
    Split {
        axis: usize,
        pivot: f64,
    },
}

/// A node of the tree: a contiguous range of the reordered points plus how
/// that range is split.
#[derive(Clone, Copy, Debug, Default)]
pub struct KdNode {
    start: usize,
    count: usize,
    kind: NodeKind,
}

impl KdNode {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The half-open slot range `[start, start + count)` this node covers.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.count
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    pub fn split_axis(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Split { axis, .. } => Some(axis),
            _ => None,
        }
    }

    pub fn pivot(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Split { pivot, .. } => Some(pivot),
            _ => None,
        }
    }
}

/// A static, balanced K-D tree over 3D points.
///
/// The nodes form an implicit complete binary tree: the root sits at slot 0,
/// the children of node `k` at `2k + 1` and `2k + 2`. Every node owns a
/// contiguous range of `points`; `indices` maps each slot back to the position
/// the point had in the input set.
///
/// The tree is immutable once built and may be searched from many threads at
/// once.
#[derive(Clone, Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    points: Vec<Point>,
    indices: Vec<usize>,
    config: TreeConfig,
    height: usize,
}

impl KdTree {
    /// Builds the tree from a finalized point set.
    ///
    /// Fails if the configuration allows no split axis or a leaf size of 0.
    pub fn build(points: PointSet, config: TreeConfig) -> Result<Self, Error> {
        config.validate()?;
        let points = points.into_vec();
        let count = points.len();

        let height = max_height(count, config.max_leaf_size);
        let mut tree = KdTree {
            nodes: vec![KdNode::default(); (1 << height) - 1],
            indices: (0..count).collect(),
            points,
            config,
            height,
        };
        tree.nodes[0].count = count;

        let Some(axis) = config.split.first() else {
            return Err(Error::NoSplitAxis);
        };
        tree.build_node(0, axis);

        log::debug!(
            "Built K-D tree over {} points: height {}, {} leaves",
            count,
            tree.height,
            tree.leaves().count()
        );
        Ok(tree)
    }

    /// Deduplicates `points` and builds the tree from them.
    pub fn from_points<I>(points: I, config: TreeConfig) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::build(points.into_iter().collect(), config)
    }

    fn build_node(&mut self, k: usize, axis: usize) {
        let KdNode { start, count, .. } = self.nodes[k];
        if count <= self.config.max_leaf_size {
            self.nodes[k].kind = NodeKind::Leaf;
            return;
        }

        let half = count.div_ceil(2);
        let median = start + half;
        self.select(start, start + count - 1, median, axis);
        let pivot = self.points[median].coord(axis);
        self.nodes[k].kind = NodeKind::Split { axis, pivot };

        let (left, right) = (Self::left_child(k), Self::right_child(k));
        self.nodes[left].start = start;
        self.nodes[left].count = half;
        self.nodes[right].start = median;
        self.nodes[right].count = count - half;

        // `build` validated the mask, so a successor always exists.
        let next = self.config.split.next_after(axis).unwrap_or(axis);
        self.build_node(left, next);
        self.build_node(right, next);
    }

    /// Reorders the closed slot range `[left, right]` so that slot `median`
    /// holds the value it would hold if the range were sorted along `axis`,
    /// with smaller values before it and larger or equal ones after it.
    fn select(&mut self, mut left: usize, mut right: usize, median: usize, axis: usize) {
        while left < right {
            let boundary = self.partition(left, right, axis);
            match median.cmp(&boundary) {
                std::cmp::Ordering::Equal => return,
                std::cmp::Ordering::Less => right = boundary - 1,
                std::cmp::Ordering::Greater => left = boundary + 1,
            }
        }
    }

    /// Lomuto partition of `[left, right]` around the value in slot `right`.
    /// Returns the final slot of the pivot.
    fn partition(&mut self, left: usize, right: usize, axis: usize) -> usize {
        let pivot = self.points[right].coord(axis);
        let mut store = left;
        for i in left..right {
            if self.points[i].coord(axis) < pivot {
                self.swap(store, i);
                store += 1;
            }
        }
        self.swap(store, right);
        store
    }

    /// Swaps two slots in both `points` and `indices`.
    fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.points.swap(i, j);
            self.indices.swap(i, j);
        }
    }

    /// Visits every point of every leaf whose region overlaps `support`.
    ///
    /// Leaves are not filtered: all their points are reported, so the visitor
    /// receives a superset of the points inside the region.
    pub fn search<S, V>(&self, support: &S, visitor: &mut V)
    where
        S: Support + ?Sized,
        V: Visitor + ?Sized,
    {
        self.search_node(0, support, visitor);
    }

    fn search_node<S, V>(&self, k: usize, support: &S, visitor: &mut V)
    where
        S: Support + ?Sized,
        V: Visitor + ?Sized,
    {
        let node = &self.nodes[k];
        match node.kind {
            NodeKind::Leaf => {
                for slot in node.range() {
                    visitor.visit(&self.points[slot], self.indices[slot]);
                }
            }
            NodeKind::Split { axis, pivot } => {
                if support.bound(axis, Side::Lower) <= pivot {
                    self.search_node(Self::left_child(k), support, visitor);
                }
                if support.bound(axis, Side::Upper) >= pivot {
                    self.search_node(Self::right_child(k), support, visitor);
                }
            }
            NodeKind::Vacant => {}
        }
    }

    /// Collects the candidate points of a search.
    pub fn search_points<S: Support + ?Sized>(&self, support: &S) -> Vec<Point> {
        let mut found = Vec::new();
        self.search(support, &mut |p: &Point, _: usize| found.push(*p));
        found
    }

    /// Collects the input positions of the candidate points of a search.
    pub fn search_indices<S: Support + ?Sized>(&self, support: &S) -> Vec<usize> {
        let mut found = Vec::new();
        self.search(support, &mut |_: &Point, index: usize| found.push(index));
        found
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in tree order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// For every slot, the position its point had in the input set.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The input position of the point in `slot`.
    pub fn index(&self, slot: usize) -> usize {
        self.indices[slot]
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of levels the node array was sized for.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn root(&self) -> &KdNode {
        &self.nodes[0]
    }

    /// The node in slot `k`, if that slot was reached during construction.
    pub fn node(&self, k: usize) -> Option<&KdNode> {
        self.nodes.get(k).filter(|node| node.kind != NodeKind::Vacant)
    }

    pub fn leaves(&self) -> impl Iterator<Item = &KdNode> + '_ {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    pub const fn left_child(k: usize) -> usize {
        2 * k + 1
    }

    pub const fn right_child(k: usize) -> usize {
        2 * k + 2
    }
}

/// Height of the deepest node reachable when halving `count` points (rounding
/// up) until at most `max_leaf_size` remain.
fn max_height(count: usize, max_leaf_size: usize) -> usize {
    let mut height = 1;
    let mut remaining = count;
    while remaining > max_leaf_size {
        remaining = remaining.div_ceil(2);
        height += 1;
    }
    height
}
