use std::f64::consts::SQRT_2;

/// Exact distance on an obstacle-free 4-connected grid.
pub fn manhattan_distance(from: &(i32, i32), to: &(i32, i32)) -> f64 {
    let dx = (from.0 - to.0).abs();
    let dy = (from.1 - to.1).abs();
    (dx + dy) as f64
}

/// Exact distance on an obstacle-free 8-connected grid with diagonal cost sqrt(2).
pub fn octile_distance(from: &(i32, i32), to: &(i32, i32)) -> f64 {
    let dx = (from.0 - to.0).abs();
    let dy = (from.1 - to.1).abs();
    let diagonals = dx.min(dy);
    let orthos = dx.max(dy) - diagonals;
    orthos as f64 + diagonals as f64 * SQRT_2
}

/// Number of king moves between two cells. Admissible for any grid with unit-or-greater costs.
pub fn chebyshev_distance(from: &(i32, i32), to: &(i32, i32)) -> f64 {
    let dx = (from.0 - to.0).abs();
    let dy = (from.1 - to.1).abs();
    dx.max(dy) as f64
}

#[test]
fn distances() {
    assert_eq!(manhattan_distance(&(0, 0), &(3, -4)), 7.0);
    assert_eq!(chebyshev_distance(&(0, 0), &(3, -4)), 4.0);
    assert_eq!(octile_distance(&(0, 0), &(3, -4)), 1.0 + 3.0 * SQRT_2);
    assert_eq!(octile_distance(&(2, 2), &(2, 2)), 0.0);
}
