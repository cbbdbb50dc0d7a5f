//! # faultkd
//!
//! `faultkd` is a Rust library for static spatial indexing of 3D point sets,
//! designed to be used in Rust as well as compiled to WebAssembly (WASM). Its
//! core is a balanced K-D tree that is built once and then answers any number
//! of range queries.
//!
//! ## Features
//!
//! - **Balanced construction**: median splits found by in-place quickselect.
//! - **Restricted splitting**: an [`AxisMask`] selects the axes the tree splits on,
//!   making searches insensitive to the excluded coordinates.
//! - **Pluggable queries**: searches are driven by a [`Support`] describing the
//!   region per axis and report candidates to a [`Visitor`], so one index serves
//!   many query shapes.
//! - **Fault tagging**: [`FaultCollector`] and [`FaultSide`] tag the elements of a
//!   tetrahedral mesh with the side of a fault surface they lie on, in parallel.
//!
//! ## Example
//!
//! ```
//! use faultkd::{AxisMask, BoundingBox, KdTree, Point, PointSet, TreeConfig};
//!
//! let points: PointSet = (0..5).map(|x| Point::new(x as f64, 0.0, 0.0)).collect();
//! let config = TreeConfig::new(2, AxisMask::new(true, false, false));
//! let tree = KdTree::build(points, config).unwrap();
//!
//! let region = BoundingBox::new([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
//! let mut hits: Vec<f64> = tree
//!     .search_points(&region)
//!     .into_iter()
//!     .filter(|p| region.contains(p))
//!     .map(|p| p.x())
//!     .collect();
//! hits.sort_by(f64::total_cmp);
//! assert_eq!(hits, vec![1.0, 2.0, 3.0]);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct, built from a [`PointSet`]
//! and a [`TreeConfig`].

mod bounds;
mod config;
mod error;
mod faultside;
mod kdtree;
mod point;
mod search;
mod wasm;

pub use bounds::BoundingBox;
pub use config::AxisMask;
pub use config::TreeConfig;
pub use config::DEFAULT_MAX_LEAF_SIZE;
pub use error::Error;
pub use faultside::Extent;
pub use faultside::FaultCollector;
pub use faultside::FaultSide;
pub use faultside::FACE_TO_NODES;
pub use faultside::FAULT_BOUNDARY;
pub use kdtree::KdNode;
pub use kdtree::KdTree;
pub use kdtree::NodeKind;
pub use point::Point;
pub use point::PointSet;
pub use search::Side;
pub use search::Support;
pub use search::Unbounded;
pub use search::Visitor;
pub use wasm::FaultSide3D;
pub use wasm::KdTree3D;
