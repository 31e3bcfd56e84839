use crate::grids::{Coord, Direction};

const ALL_WALLS: u8 = 0b1111;

/// Four wall flags packed into the low bits of a byte, one bit per `Direction`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    pub fn all() -> Self {
        Walls(ALL_WALLS)
    }

    pub fn none() -> Self {
        Walls(0)
    }

    #[inline]
    pub fn has(&self, dir: Direction) -> bool {
        get_bit(self.0, dir as u8)
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 = unset_bit(self.0, dir as u8);
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.iter().copied().filter(move |dir| self.has(*dir))
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

impl std::fmt::Debug for Walls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            walls: Walls::all(),
            visited: false,
        }
    }

    #[inline]
    pub fn coords(&self) -> Coord {
        (self.x, self.y)
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.has(dir)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell: ({}, {})", self.x, self.y)
    }
}

#[inline(always)]
fn get_bit(n: u8, k: u8) -> bool {
    (n >> k) & 1 != 0
}

#[inline(always)]
fn unset_bit(n: u8, k: u8) -> u8 {
    n & !(1 << k)
}

#[cfg(test)]
mod test_cell {
    use super::*;

    #[test]
    fn starts_closed() {
        let cell = Cell::new(3, 4);

        assert_eq!(cell.coords(), (3, 4));
        assert!(!cell.visited);
        assert_eq!(cell.walls.count(), 4);
        for dir in Direction::ALL.iter() {
            assert!(cell.has_wall(*dir));
        }
    }

    #[test]
    fn walls_are_independent() {
        let mut walls = Walls::all();

        walls.remove(Direction::Right);
        assert!(!walls.has(Direction::Right));
        assert!(walls.has(Direction::Up));
        assert!(walls.has(Direction::Down));
        assert!(walls.has(Direction::Left));

        // removing twice is a no-op
        walls.remove(Direction::Right);
        assert_eq!(walls.count(), 3);

        walls.remove(Direction::Up);
        let left: Vec<_> = walls.iter().collect();
        assert_eq!(left, vec![Direction::Down, Direction::Left]);
        assert_ne!(walls, Walls::none());
    }
}
