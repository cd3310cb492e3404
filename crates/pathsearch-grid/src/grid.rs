/// Dense 2D storage with one `T` per cell, addressed by `(x, y)`.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Box<[T]>,
}

impl<T> Grid<T> {
    #[track_caller]
    pub fn new(width: i32, height: i32, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let w: usize = width.try_into().expect("width must be non-negative");
        let h: usize = height.try_into().expect("height must be non-negative");
        let cells = (0..h)
            .flat_map(move |y| (0..w).map(move |x| (x as i32, y as i32)))
            .map(|(x, y)| f(x, y))
            .collect();
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Returns a reference to a cell of the grid, or `None` if the coordinates are out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.contains(x, y).then(|| &self.cells[self.index(x, y)])
    }

    pub fn storage(&self) -> &[T] {
        &self.cells
    }

    pub fn storage_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        self.width as usize * y as usize + x as usize
    }

    #[track_caller]
    #[inline(always)]
    fn bounds_check(&self, x: i32, y: i32) {
        assert!(x >= 0, "x out of bounds");
        assert!(y >= 0, "y out of bounds");
        assert!(x < self.width, "x out of bounds");
        assert!(y < self.height, "y out of bounds");
    }
}

impl<T> std::ops::Index<(i32, i32)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (x, y): (i32, i32)) -> &T {
        self.bounds_check(x, y);
        &self.cells[self.index(x, y)]
    }
}

impl<T> std::ops::IndexMut<(i32, i32)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        self.bounds_check(x, y);
        let index = self.index(x, y);
        &mut self.cells[index]
    }
}
