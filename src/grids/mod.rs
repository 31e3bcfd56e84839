pub mod cell;
pub mod wall_grid;

/// (x, y) position of a cell, x grows to the right and y grows downwards
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Order in which the generator collects unvisited neighbors
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (dx, dy) of a single move in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction of the move from `from` to `to`, if the two are grid-adjacent
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let dx = to.0 as isize - from.0 as isize;
        let dy = to.1 as isize - from.1 as isize;

        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            3 => Direction::Left,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test_direction {
    use super::*;

    #[test]
    fn opposites() {
        for dir in Direction::ALL.iter() {
            assert_eq!(-(-*dir), *dir);
            assert_ne!(-*dir, *dir);

            let (dx, dy) = dir.offset();
            let (ox, oy) = (-*dir).offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn between_adjacent() {
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Right));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::Down));
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Left));

        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((0, 0), (3, 0)), None);
    }

    #[test]
    fn from_index() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from(i), *dir);
            assert_eq!(*dir as usize, i);
        }
    }
}
