use crate::point::Point;

/// Which end of a query interval is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Lower = 0,
    Upper = 1,
}

/// Describes the extent of a search region along each axis.
///
/// The tree only ever asks for the interval bounds of the axis a node splits
/// on; whatever shape lies behind them is up to the caller, who filters the
/// returned candidates with the exact test.
pub trait Support {
    /// The region's bound on `axis` (0 = x, 1 = y, 2 = z) at `side`.
    fn bound(&self, axis: usize, side: Side) -> f64;
}

impl<F> Support for F
where
    F: Fn(usize, Side) -> f64,
{
    fn bound(&self, axis: usize, side: Side) -> f64 {
        self(axis, side)
    }
}

/// A region reaching from `-inf` to `+inf` on every axis. Searching with it
/// visits every indexed point exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbounded;

impl Support for Unbounded {
    fn bound(&self, _axis: usize, side: Side) -> f64 {
        match side {
            Side::Lower => f64::NEG_INFINITY,
            Side::Upper => f64::INFINITY,
        }
    }
}

/// Receives the points found by a search.
pub trait Visitor {
    /// Called once per point of every leaf reached. `index` is the position of
    /// the point in the set the tree was built from.
    fn visit(&mut self, point: &Point, index: usize);
}

impl<F> Visitor for F
where
    F: FnMut(&Point, usize),
{
    fn visit(&mut self, point: &Point, index: usize) {
        self(point, index)
    }
}
