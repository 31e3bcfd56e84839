use crate::grids::cell::Cell;
use crate::grids::{Coord, Dimensions, Direction};

/// Rectangular grid of walled cells stored row-major, `index = x + y * width`.
///
/// Adjacency is never stored; neighbors are resolved through coordinate
/// arithmetic and `cell_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    pub dims: Dimensions,
    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect();

        Self {
            dims: Dimensions::new(width, height),
            cells,
        }
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.dims.width
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.dims.contains(x, y) {
            Some(&self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    fn cell_at_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if self.dims.contains(x, y) {
            let index = self.index_of(x, y);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Coordinates of the in-bounds neighbor one step from `coords`
    pub fn neighbor_of(&self, coords: Coord, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.offset();
        let x = offset(coords.0, dx)?;
        let y = offset(coords.1, dy)?;

        if self.dims.contains(x, y) {
            Some((x, y))
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_visited(&self, coords: Coord) -> bool {
        self.cell_at(coords.0, coords.1)
            .map(|cell| cell.visited)
            .unwrap_or(false)
    }

    pub fn mark_visited(&mut self, coords: Coord) {
        if let Some(cell) = self.cell_at_mut(coords.0, coords.1) {
            cell.visited = true;
        }
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }

    /// Knocks down the wall pair shared by two adjacent cells, clearing the
    /// flag on both sides. Returns false if the cells are not adjacent.
    pub fn clear_wall_between(&mut self, one: Coord, two: Coord) -> bool {
        let dir = match Direction::between(one, two) {
            Some(dir) => dir,
            None => return false,
        };
        if !self.dims.contains(one.0, one.1) || !self.dims.contains(two.0, two.1) {
            return false;
        }

        let index_one = self.index_of(one.0, one.1);
        let index_two = self.index_of(two.0, two.1);
        self.cells[index_one].walls.remove(dir);
        self.cells[index_two].walls.remove(-dir);

        true
    }

    /// True if a move from `coords` towards `dir` is not blocked by a wall.
    /// Only the moving cell's flag is consulted, the pair is kept symmetric.
    pub fn is_open(&self, coords: Coord, dir: Direction) -> bool {
        self.cell_at(coords.0, coords.1)
            .map(|cell| !cell.has_wall(dir))
            .unwrap_or(false)
    }

    /// Number of removed wall pairs between adjacent cells
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .iter()
                    .filter(|dir| {
                        self.neighbor_of(cell.coords(), **dir).is_some() && !cell.has_wall(**dir)
                    })
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from `start` through open passages
    pub fn reachable_from(&self, start: Coord) -> usize {
        if !self.dims.contains(start.0, start.1) {
            return 0;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut frontier = vec![start];
        seen[self.index_of(start.0, start.1)] = true;
        let mut count = 0;

        while let Some(coords) = frontier.pop() {
            count += 1;
            for dir in Direction::ALL.iter() {
                if !self.is_open(coords, *dir) {
                    continue;
                }
                if let Some(next) = self.neighbor_of(coords, *dir) {
                    let index = self.index_of(next.0, next.1);
                    if !seen[index] {
                        seen[index] = true;
                        frontier.push(next);
                    }
                }
            }
        }

        count
    }

    /// A perfect maze: connected with exactly `cells - 1` passages, so a spanning tree
    pub fn is_perfect(&self) -> bool {
        let area = self.dims.area();
        self.open_passages() == area - 1 && self.reachable_from((0, 0)) == area
    }
}

#[inline]
fn offset(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}
