use std::hash::Hash;

use log::{debug, trace};
pub use pathsearch_core::*;
pub use pathsearch_grid as grid;

mod batch;

pub use batch::search_batch;

/// A minimum-cost path found by a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<N> {
    /// Nodes from the start to the goal, inclusive.
    pub nodes: Vec<N>,
    /// Sum of the edge costs along `nodes`.
    pub cost: f64,
}

/// Counters describing the most recent search run by an [`AStarSearcher`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the open list and expanded. The goal is not counted.
    pub expanded: usize,
    /// Distinct nodes that were given a cost, including the start.
    pub generated: usize,
    /// Expanded nodes that were later reached by a cheaper path and put back on the open list.
    /// Always zero with a consistent heuristic.
    pub reopened: usize,
}

/// A* search which keeps its allocations between searches.
pub struct AStarSearcher<N> {
    table: NodeTable<N>,
    open: IndexedPriorityQueue<NodeId, f64>,
    successors: Vec<N>,
    stats: SearchStats,
}

impl<N: Hash + Eq + Clone> AStarSearcher<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a searcher with room for `nodes` generated nodes before it reallocates.
    pub fn with_capacity(nodes: usize) -> Self {
        AStarSearcher {
            table: NodeTable::with_capacity(nodes),
            open: IndexedPriorityQueue::with_capacity(nodes),
            successors: vec![],
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node table left behind by the most recent search.
    pub fn nodes(&self) -> &NodeTable<N> {
        &self.table
    }

    /// Finds a minimum-cost path from `start` to `goal`.
    ///
    /// The path is optimal if edge costs are non-negative and `heuristic` is admissible. Nodes are
    /// expanded at most once if `heuristic` is also consistent. `graph` must have finitely many
    /// nodes reachable from `start`, otherwise an unreachable goal makes the search run forever.
    pub fn search<G, H>(
        &mut self,
        start: N,
        goal: N,
        graph: &G,
        heuristic: &H,
    ) -> Result<Path<N>, SearchError>
    where
        G: Graph<N> + ?Sized,
        H: Heuristic<N> + ?Sized,
    {
        let AStarSearcher {
            ref mut table,
            ref mut open,
            ref mut successors,
            ref mut stats,
        } = *self;

        table.reset();
        open.clear();
        *stats = SearchStats::default();

        let start = table.generate(start);
        let start_h = heuristic.estimate(table.node(start), &goal);
        debug_assert!(start_h >= 0.0, "heuristic must be non-negative");
        *table.record_mut(start) = NodeRecord {
            g: 0.0,
            h: start_h,
            f: start_h,
            parent: None,
            status: NodeStatus::Open,
        };
        open.insert(start, start_h);
        stats.generated = 1;
        debug!("search started, initial estimate {start_h:.3}");

        while let Some((node, f)) = open.extract_min() {
            table.record_mut(node).status = NodeStatus::Closed;

            if *table.node(node) == goal {
                let cost = table.record(node).g;
                debug!(
                    "path found with cost {cost:.3} after {} expansions",
                    stats.expanded
                );
                return Ok(Path {
                    nodes: table.path_to(node),
                    cost,
                });
            }

            stats.expanded += 1;
            trace!("expanding node {} with f = {f:.3}", node.index());

            successors.clear();
            graph.neighbors(table.node(node), successors);

            let node_g = table.record(node).g;

            for successor in successors.drain(..) {
                let edge_cost = graph.cost(table.node(node), &successor);
                debug_assert!(edge_cost >= 0.0, "edge costs must be non-negative");
                let new_g = node_g + edge_cost;

                let successor = table.generate(successor);
                if new_g >= table.record(successor).g {
                    continue;
                }

                if table.record(successor).h.is_nan() {
                    let h = heuristic.estimate(table.node(successor), &goal);
                    debug_assert!(h >= 0.0, "heuristic must be non-negative");
                    table.record_mut(successor).h = h;
                }

                let record = table.record_mut(successor);
                let previous = record.status;
                record.g = new_g;
                record.f = new_g + record.h;
                record.parent = Some(node);
                record.status = NodeStatus::Open;
                let f = record.f;

                match previous {
                    NodeStatus::Open => open.decrease_priority(&successor, f),
                    NodeStatus::Closed => {
                        stats.reopened += 1;
                        open.insert(successor, f);
                    }
                    NodeStatus::Undiscovered => {
                        stats.generated += 1;
                        open.insert(successor, f);
                    }
                }
            }
        }

        debug!(
            "open list exhausted after {} expansions, no path found",
            stats.expanded
        );
        Err(SearchError::NoPathFound)
    }
}

impl<N: Hash + Eq + Clone> Default for AStarSearcher<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds a minimum-cost path from `start` to `goal` with a fresh [`AStarSearcher`].
pub fn search<N, G, H>(start: N, goal: N, graph: &G, heuristic: &H) -> Result<Path<N>, SearchError>
where
    N: Hash + Eq + Clone,
    G: Graph<N> + ?Sized,
    H: Heuristic<N> + ?Sized,
{
    AStarSearcher::new().search(start, goal, graph, heuristic)
}

/// Finds a minimum-cost path using Dijkstra's algorithm, i.e. A* with [`ZeroHeuristic`].
pub fn dijkstra<N, G>(start: N, goal: N, graph: &G) -> Result<Path<N>, SearchError>
where
    N: Hash + Eq + Clone,
    G: Graph<N> + ?Sized,
{
    search(start, goal, graph, &ZeroHeuristic)
}

#[cfg(test)]
mod tests;
