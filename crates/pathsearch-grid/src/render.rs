use std::fmt::{self, Display, Formatter};

use ahash::AHashSet;

use crate::GridMap;

/// ASCII drawing of a map with a path on it. Created by [`render`].
pub struct Rendering<'a> {
    map: &'a GridMap,
    path: AHashSet<(i32, i32)>,
    start: (i32, i32),
    goal: (i32, i32),
}

/// Draws `map` with the cells of `path` marked.
///
/// The start is drawn as `S`, the goal as `G`, blocked cells as `##` and path cells as `..`.
/// Columns and rows are labelled with their coordinates.
pub fn render<'a>(
    map: &'a GridMap,
    path: &[(i32, i32)],
    start: (i32, i32),
    goal: (i32, i32),
) -> Rendering<'a> {
    Rendering {
        map,
        path: path.iter().copied().collect(),
        start,
        goal,
    }
}

impl Rendering<'_> {
    fn border(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "  +-")?;
        for _ in 0..self.map.width() {
            write!(f, "--")?;
        }
        writeln!(f, "-+")
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.map.width() {
            write!(f, "{x:2}")?;
        }
        writeln!(f)?;
        self.border(f)?;

        for y in 0..self.map.height() {
            write!(f, "{y:2}| ")?;
            for x in 0..self.map.width() {
                let cell = (x, y);
                let glyph = if cell == self.start {
                    "S "
                } else if cell == self.goal {
                    "G "
                } else if !self.map.is_traversable(x, y) {
                    "##"
                } else if self.path.contains(&cell) {
                    ".."
                } else {
                    "  "
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f, " |")?;
        }

        self.border(f)
    }
}

#[test]
fn renders_path_and_obstacles() {
    let mut map = GridMap::four_connected(3, 2);
    map.add_obstacle(1, 0);
    let path = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)];

    let expected = concat!(
        "    0 1 2\n",
        "  +--------+\n",
        " 0| S ##G  |\n",
        " 1| ...... |\n",
        "  +--------+\n",
    );
    assert_eq!(render(&map, &path, (0, 0), (2, 0)).to_string(), expected);
}
