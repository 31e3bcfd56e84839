use crate::error::MazeError;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Dimensions};
use crate::solvers::SOLVE_ORDER;
use log::trace;

/// Depth-first maze walker from the top-left to the bottom-right cell.
///
/// The solver keeps its own visited markers; the cells' `visited` flags
/// belong to generation. Its stack is both the backtracking structure and
/// the trail drawn on screen.
#[derive(Debug, Clone)]
pub struct DfsSolver {
    dims: Dimensions,
    visited: Vec<bool>,
    current: Coord,
    stack: Vec<Coord>,
    start: Coord,
    end: Coord,
    steps: usize,
    backtracks: usize,
}

impl DfsSolver {
    pub fn new(grid: &WallGrid) -> Result<Self, MazeError> {
        if !grid.all_visited() {
            return Err(MazeError::GenerationIncomplete);
        }

        let dims = grid.dims;
        let start = (0, 0);
        Ok(Self {
            dims,
            visited: vec![false; dims.area()],
            current: start,
            stack: Vec::new(),
            start,
            end: (dims.width - 1, dims.height - 1),
            steps: 0,
            backtracks: 0,
        })
    }

    #[inline]
    fn index_of(&self, coords: Coord) -> usize {
        coords.0 + coords.1 * self.dims.width
    }

    fn is_marked(&self, coords: Coord) -> bool {
        self.visited[self.index_of(coords)]
    }

    pub fn step(&mut self, grid: &WallGrid) -> Result<(), MazeError> {
        if grid.dims != self.dims {
            return Err(MazeError::DimensionMismatch {
                expected: self.dims,
                found: grid.dims,
            });
        }
        if self.is_solved() {
            return Ok(());
        }
        self.steps += 1;

        let current = self.current;
        if !self.is_marked(current) {
            let index = self.index_of(current);
            self.visited[index] = true;
            if self.stack.last() != Some(&current) {
                self.stack.push(current);
            }
            if self.is_solved() {
                return Ok(());
            }
        }

        let next = SOLVE_ORDER.iter().find_map(|dir| {
            grid.neighbor_of(current, *dir)
                .filter(|neighbor| !self.is_marked(*neighbor) && grid.is_open(current, *dir))
        });

        match next {
            Some(next) => {
                trace!("solver {:?} -> {:?}", current, next);
                self.current = next;
            }
            None => {
                self.stack.pop();
                self.backtracks += 1;
                match self.stack.last() {
                    Some(&prev) => {
                        trace!("solver dead end at {:?}, back to {:?}", current, prev);
                        self.current = prev;
                    }
                    None => {
                        return Err(MazeError::Unsolvable {
                            start: self.start,
                            end: self.end,
                        })
                    }
                }
            }
        }

        Ok(())
    }

    /// Steps until the end is reached
    pub fn solve(&mut self, grid: &WallGrid) -> Result<&[Coord], MazeError> {
        while !self.is_solved() {
            self.step(grid)?;
        }

        Ok(self.path())
    }

    pub fn is_solved(&self) -> bool {
        self.is_marked(self.end)
    }

    /// Trail from the start to the current cell, in the order it was walked
    pub fn path(&self) -> &[Coord] {
        &self.stack
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}
