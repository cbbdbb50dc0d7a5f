/// Errors raised while configuring or building an index.
///
/// Searching never fails, so every variant originates either from a
/// [`TreeConfig`](crate::TreeConfig) that cannot drive the construction or
/// from mesh arrays that do not line up.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Leaves must be allowed to hold at least one point.
    #[error("the maximum leaf size must be at least 1")]
    InvalidLeafSize,
    /// The axis mask has no enabled axis, so no split dimension can be chosen.
    #[error("at least one split axis must be enabled")]
    NoSplitAxis,
    /// An axis index outside `0..3` was given.
    #[error("axis {0} is out of range, expected 0, 1 or 2")]
    InvalidAxis(usize),
    /// An element references a vertex that does not exist.
    #[error("element {element} references vertex {vertex}, but only {count} vertices exist")]
    VertexOutOfRange {
        /// The element holding the bad reference.
        element: usize,
        /// The referenced vertex.
        vertex: usize,
        /// Number of vertices available.
        count: usize,
    },
    /// The boundary tags do not cover the same elements as the connectivity.
    #[error("{elements} elements were given with {boundaries} boundary records")]
    BoundaryMismatch {
        /// Number of elements.
        elements: usize,
        /// Number of boundary records.
        boundaries: usize,
    },
}
