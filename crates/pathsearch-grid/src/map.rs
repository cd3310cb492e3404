use std::f64::consts::SQRT_2;

use enumset::EnumSet;
use pathsearch_core::Graph;

use crate::{Direction, Grid, EIGHT_CONNECTED, FOUR_CONNECTED};

/// Grid of traversable and blocked cells, searchable as a [`Graph`] over `(x, y)` cells.
///
/// Axis-aligned moves cost 1 and diagonal moves cost sqrt(2). A diagonal move is only allowed
/// when both axis-aligned cells it passes between are traversable, so paths never cut corners.
#[derive(Clone, Debug)]
pub struct GridMap {
    cells: Grid<bool>,
    connectivity: EnumSet<Direction>,
}

impl GridMap {
    /// Creates a map on which every cell is traversable.
    #[track_caller]
    pub fn new(width: i32, height: i32, connectivity: EnumSet<Direction>) -> Self {
        GridMap {
            cells: Grid::new(width, height, |_, _| true),
            connectivity,
        }
    }

    pub fn four_connected(width: i32, height: i32) -> Self {
        Self::new(width, height, FOUR_CONNECTED)
    }

    pub fn eight_connected(width: i32, height: i32) -> Self {
        Self::new(width, height, EIGHT_CONNECTED)
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    pub fn connectivity(&self) -> EnumSet<Direction> {
        self.connectivity
    }

    #[track_caller]
    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        self.set(x, y, false);
    }

    #[track_caller]
    pub fn set(&mut self, x: i32, y: i32, traversable: bool) {
        self.cells[(x, y)] = traversable;
    }

    /// Cells outside the map are not traversable.
    pub fn is_traversable(&self, x: i32, y: i32) -> bool {
        self.cells.get(x, y).copied().unwrap_or(false)
    }

    fn can_move(&self, (x, y): (i32, i32), dir: Direction) -> bool {
        let (dx, dy) = dir.offset();
        if !self.is_traversable(x + dx, y + dy) {
            return false;
        }
        match dir.components() {
            Some((a, b)) => {
                let (ax, ay) = a.offset();
                let (bx, by) = b.offset();
                self.is_traversable(x + ax, y + ay) && self.is_traversable(x + bx, y + by)
            }
            None => true,
        }
    }
}

impl Graph<(i32, i32)> for GridMap {
    fn neighbors(&self, &(x, y): &(i32, i32), neighbors: &mut Vec<(i32, i32)>) {
        if !self.is_traversable(x, y) {
            return;
        }
        for dir in self.connectivity {
            if self.can_move((x, y), dir) {
                let (dx, dy) = dir.offset();
                neighbors.push((x + dx, y + dy));
            }
        }
    }

    fn cost(&self, from: &(i32, i32), to: &(i32, i32)) -> f64 {
        if from.0 != to.0 && from.1 != to.1 {
            SQRT_2
        } else {
            1.0
        }
    }
}
