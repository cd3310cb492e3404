use enumset::{enum_set, EnumSet, EnumSetType};

/// A single move between adjacent grid cells. North is towards negative `y`.
#[derive(EnumSetType, Debug, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
    NorthWest,
    SouthWest,
    SouthEast,
    NorthEast,
}

/// Moves along the axes only.
pub const FOUR_CONNECTED: EnumSet<Direction> =
    enum_set!(Direction::North | Direction::West | Direction::South | Direction::East);

/// Axis-aligned and diagonal moves.
pub const EIGHT_CONNECTED: EnumSet<Direction> = enum_set!(
    Direction::North
        | Direction::West
        | Direction::South
        | Direction::East
        | Direction::NorthWest
        | Direction::SouthWest
        | Direction::SouthEast
        | Direction::NorthEast
);

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// The two axis-aligned moves a diagonal move is composed of.
    pub fn components(self) -> Option<(Direction, Direction)> {
        use Direction::*;
        match self {
            NorthWest => Some((North, West)),
            SouthWest => Some((South, West)),
            SouthEast => Some((South, East)),
            NorthEast => Some((North, East)),
            _ => None,
        }
    }

    pub fn backwards(self) -> Direction {
        use Direction::*;
        match self {
            North => South,
            West => East,
            South => North,
            East => West,
            NorthWest => SouthEast,
            SouthWest => NorthEast,
            SouthEast => NorthWest,
            NorthEast => SouthWest,
        }
    }
}

#[test]
fn offsets_are_consistent() {
    for dir in EnumSet::<Direction>::all() {
        let (dx, dy) = dir.offset();
        let (bx, by) = dir.backwards().offset();
        assert_eq!((dx + bx, dy + by), (0, 0));
        assert_eq!(dir.is_diagonal(), dir.components().is_some());
        if let Some((a, b)) = dir.components() {
            let (ax, ay) = a.offset();
            let (bx, by) = b.offset();
            assert_eq!((ax + bx, ay + by), (dx, dy));
        }
    }
    assert_eq!(EIGHT_CONNECTED, EnumSet::all());
    assert_eq!(FOUR_CONNECTED.iter().filter(|d| d.is_diagonal()).count(), 0);
}
