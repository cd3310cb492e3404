use std::hash::Hash;

use rayon::prelude::*;

use crate::{AStarSearcher, Graph, Heuristic, Path, SearchError};

/// Runs one search per `(start, goal)` query in parallel, returning the results in query order.
///
/// Every worker thread reuses a single [`AStarSearcher`] across the queries it runs. The graph and
/// heuristic are shared between threads, and are only ever read.
pub fn search_batch<N, G, H>(
    queries: &[(N, N)],
    graph: &G,
    heuristic: &H,
) -> Vec<Result<Path<N>, SearchError>>
where
    N: Hash + Eq + Clone + Send + Sync,
    G: Graph<N> + Sync + ?Sized,
    H: Heuristic<N> + Sync + ?Sized,
{
    queries
        .par_iter()
        .map_init(AStarSearcher::new, |searcher, (start, goal)| {
            searcher.search(start.clone(), goal.clone(), graph, heuristic)
        })
        .collect()
}
