//! Capabilities the search consumes.

/// A graph the search can traverse.
///
/// The search only ever queries the graph, and assumes the answers do not change over the course
/// of a single search.
pub trait Graph<N> {
    /// Appends the successors of `node` to `neighbors`.
    ///
    /// The caller clears `neighbors` before calling.
    fn neighbors(&self, node: &N, neighbors: &mut Vec<N>);

    /// Cost of the edge from `from` to its successor `to`. Must be non-negative.
    fn cost(&self, from: &N, to: &N) -> f64;
}

impl<N, G: Graph<N> + ?Sized> Graph<N> for &G {
    fn neighbors(&self, node: &N, neighbors: &mut Vec<N>) {
        (**self).neighbors(node, neighbors)
    }

    fn cost(&self, from: &N, to: &N) -> f64 {
        (**self).cost(from, to)
    }
}

/// Estimate of the remaining cost from a node to the goal.
///
/// Paths returned by the search are optimal only if the estimate is admissible, meaning it never
/// overestimates the true remaining cost. This is not verified.
pub trait Heuristic<N> {
    /// Estimates the cost of the cheapest path from `node` to `goal`. Must be non-negative.
    fn estimate(&self, node: &N, goal: &N) -> f64;
}

impl<N, F: Fn(&N, &N) -> f64> Heuristic<N> for F {
    fn estimate(&self, node: &N, goal: &N) -> f64 {
        self(node, goal)
    }
}

/// The heuristic which always estimates zero. Searching with it is Dijkstra's algorithm.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> f64 {
        0.0
    }
}
