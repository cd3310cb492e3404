use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::*;
use crate::grid::{manhattan_distance, GridMap};

/// Directed graph over `0..n` with at most one edge per ordered pair.
struct Digraph {
    edges: Vec<Vec<(usize, f64)>>,
}

impl Digraph {
    fn new(n: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Digraph {
            edges: vec![vec![]; n],
        };
        for &(from, to, cost) in edges {
            graph.edges[from].push((to, cost));
        }
        graph
    }

    fn random(rng: &mut impl Rng) -> Self {
        let n = rng.gen_range(1..=10);
        let mut edges = vec![];
        for from in 0..n {
            for to in 0..n {
                if rng.gen_bool(0.3) {
                    edges.push((from, to, rng.gen_range(0..10) as f64));
                }
            }
        }
        Digraph::new(n, &edges)
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    /// Costs of cheapest paths from `source` to every node, by repeated relaxation.
    fn reference_distances(&self, source: usize) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; self.len()];
        dist[source] = 0.0;
        for _ in 0..self.len() {
            for from in 0..self.len() {
                for &(to, cost) in &self.edges[from] {
                    if dist[from] + cost < dist[to] {
                        dist[to] = dist[from] + cost;
                    }
                }
            }
        }
        dist
    }

    fn reversed(&self) -> Digraph {
        let mut edges = vec![];
        for from in 0..self.len() {
            for &(to, cost) in &self.edges[from] {
                edges.push((to, from, cost));
            }
        }
        Digraph::new(self.len(), &edges)
    }
}

impl Graph<usize> for Digraph {
    fn neighbors(&self, node: &usize, neighbors: &mut Vec<usize>) {
        neighbors.extend(self.edges[*node].iter().map(|&(to, _)| to));
    }

    fn cost(&self, from: &usize, to: &usize) -> f64 {
        self.edges[*from]
            .iter()
            .find(|&&(t, _)| t == *to)
            .map(|&(_, cost)| cost)
            .expect("cost requested for missing edge")
    }
}

fn check_path<N: PartialEq + std::fmt::Debug>(
    graph: &impl Graph<N>,
    path: &Path<N>,
    start: &N,
    goal: &N,
) {
    assert_eq!(path.nodes.first(), Some(start));
    assert_eq!(path.nodes.last(), Some(goal));

    let mut total = 0.0;
    let mut buf = vec![];
    for step in path.nodes.windows(2) {
        buf.clear();
        graph.neighbors(&step[0], &mut buf);
        assert!(buf.contains(&step[1]), "{:?} is not an edge", step);
        total += graph.cost(&step[0], &step[1]);
    }
    assert!((total - path.cost).abs() < 1e-9);
}

#[test]
fn start_is_goal() {
    let graph = Digraph::new(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    let mut searcher = AStarSearcher::new();
    let path = searcher.search(1, 1, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(path.nodes, vec![1]);
    assert_eq!(path.cost, 0.0);
    assert_eq!(searcher.stats().expanded, 0);
}

#[test]
fn start_without_neighbors_fails() {
    let graph = Digraph::new(2, &[(1, 0, 1.0)]);
    let mut searcher = AStarSearcher::new();
    assert_eq!(
        searcher.search(0, 1, &graph, &ZeroHeuristic),
        Err(SearchError::NoPathFound)
    );
    assert_eq!(searcher.stats().expanded, 1);
}

#[test]
fn disconnected_goal_fails_after_exhausting_component() {
    let graph = Digraph::new(
        5,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 3, 1.0)],
    );
    let mut searcher = AStarSearcher::new();
    assert_eq!(
        searcher.search(0, 4, &graph, &ZeroHeuristic),
        Err(SearchError::NoPathFound)
    );
    assert_eq!(searcher.stats().expanded, 3);
    assert_eq!(searcher.stats().generated, 3);
    assert_eq!(SearchError::NoPathFound.to_string(), "no path found");
}

#[test]
fn self_loops_are_ignored() {
    let graph = Digraph::new(
        3,
        &[(0, 0, 0.0), (0, 1, 2.0), (1, 1, 5.0), (1, 2, 2.0), (2, 2, 0.0)],
    );
    let mut searcher = AStarSearcher::new();
    let path = searcher.search(0, 2, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2]);
    assert_eq!(path.cost, 4.0);
    assert_eq!(searcher.stats().reopened, 0);
}

#[test]
fn cheaper_detour_wins() {
    let graph = Digraph::new(
        4,
        &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
    );
    let path = dijkstra(0, 3, &graph).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(path.cost, 3.0);
}

#[test]
fn improved_open_node_is_decreased_not_duplicated() {
    // 2 is discovered from 0 at cost 5, then improved to 2 through 1 while still open
    let graph = Digraph::new(
        4,
        &[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
    );
    let mut searcher = AStarSearcher::new();
    let path = searcher.search(0, 3, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(path.cost, 3.0);
    assert_eq!(
        searcher.stats(),
        SearchStats {
            expanded: 3,
            generated: 4,
            reopened: 0,
        }
    );
}

#[test]
fn inconsistent_heuristic_reopens_closed_nodes() {
    let graph = Digraph::new(
        4,
        &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 3.0)],
    );
    // admissible, but overestimates at 1 relative to its successor 2
    let h = |node: &usize, _goal: &usize| [0.0, 3.0, 0.0, 0.0][*node];

    let mut searcher = AStarSearcher::new();
    let path = searcher.search(0, 3, &graph, &h).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(path.cost, 5.0);
    assert_eq!(searcher.stats().reopened, 1);
    assert_eq!(searcher.stats().expanded, 4);
}

#[test]
fn random_graphs_match_reference() {
    let mut rng = Pcg64::seed_from_u64(12345);
    let mut searcher = AStarSearcher::new();

    for _ in 0..500 {
        let graph = Digraph::random(&mut rng);
        let start = rng.gen_range(0..graph.len());
        let goal = rng.gen_range(0..graph.len());

        let expected = graph.reference_distances(start)[goal];
        let to_goal = graph.reversed().reference_distances(goal);
        let half_distance = |node: &usize, _goal: &usize| match to_goal[*node] {
            d if d.is_finite() => d / 2.0,
            _ => 0.0,
        };

        let dijkstra_result = searcher.search(start, goal, &graph, &ZeroHeuristic);
        assert_eq!(searcher.stats().reopened, 0);
        let astar_result = searcher.search(start, goal, &graph, &half_distance);

        for result in [dijkstra_result, astar_result] {
            match result {
                Ok(path) => {
                    assert_eq!(path.cost, expected);
                    check_path(&graph, &path, &start, &goal);
                }
                Err(SearchError::NoPathFound) => assert_eq!(expected, f64::INFINITY),
            }
        }
    }
}

#[test]
fn consistent_heuristic_never_reopens() {
    let mut map = GridMap::four_connected(12, 12);
    for y in 0..10 {
        map.add_obstacle(6, y);
    }
    for x in 2..6 {
        map.add_obstacle(x, 4);
    }

    let mut searcher = AStarSearcher::new();
    let path = searcher
        .search((0, 0), (11, 0), &map, &manhattan_distance)
        .unwrap();
    check_path(&map, &path, &(0, 0), &(11, 0));
    assert_eq!(path.cost, 31.0);
    assert_eq!(searcher.stats().reopened, 0);

    let closed = searcher
        .nodes()
        .iter()
        .filter(|(_, _, record)| record.status == NodeStatus::Closed)
        .count();
    assert_eq!(closed, searcher.stats().expanded + 1);

    // the zero heuristic finds a path of the same cost, doing at least as much work
    let expanded = searcher.stats().expanded;
    let path = searcher.search((0, 0), (11, 0), &map, &ZeroHeuristic).unwrap();
    assert_eq!(path.cost, 31.0);
    assert!(searcher.stats().expanded >= expanded);
}

#[test]
fn searches_are_reproducible() {
    let mut map = GridMap::eight_connected(16, 16);
    for y in 3..13 {
        map.add_obstacle(8, y);
    }
    let heuristic = crate::grid::octile_distance;

    let first = search((1, 8), (14, 8), &map, &heuristic).unwrap();
    let mut searcher = AStarSearcher::with_capacity(256);
    searcher.search((14, 8), (1, 8), &map, &heuristic).unwrap();
    let second = searcher.search((1, 8), (14, 8), &map, &heuristic).unwrap();
    assert_eq!(first, second);
    check_path(&map, &first, &(1, 8), &(14, 8));
}

#[test]
fn batch_matches_sequential() {
    let mut rng = Pcg64::seed_from_u64(99);
    let mut map = GridMap::four_connected(20, 20);
    for _ in 0..120 {
        map.add_obstacle(rng.gen_range(0..20), rng.gen_range(0..20));
    }
    let queries: Vec<_> = (0..64)
        .map(|_| {
            (
                (rng.gen_range(0..20), rng.gen_range(0..20)),
                (rng.gen_range(0..20), rng.gen_range(0..20)),
            )
        })
        .collect();

    let results = search_batch(&queries, &map, &manhattan_distance);
    assert_eq!(results.len(), queries.len());
    for (&(start, goal), result) in queries.iter().zip(results) {
        assert_eq!(result, search(start, goal, &map, &manhattan_distance));
    }
}
