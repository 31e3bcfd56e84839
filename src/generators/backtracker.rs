use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use log::trace;
use rand::prelude::*;

/// Randomized depth-first carving. Starts at (0, 0), walks to a random
/// unvisited neighbor knocking down the wall in between, and backtracks
/// along its stack when it runs out of fresh neighbors.
pub struct RecursiveBacktracker<R = StdRng> {
    grid: WallGrid,
    rng: R,
    current: Coord,
    stack: Vec<Coord>,
    steps: usize,
}

impl RecursiveBacktracker<StdRng> {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        Self {
            grid: WallGrid::with_dims(width, height),
            rng,
            current: (0, 0),
            stack: Vec::new(),
            steps: 0,
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    fn unvisited_neighbors(&self, coords: Coord) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.grid.neighbor_of(coords, *dir))
            .filter(|neighbor| !self.grid.is_visited(*neighbor))
            .collect()
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) {
        let current = self.current;
        self.grid.mark_visited(current);

        let neighbors = self.unvisited_neighbors(current);
        if let Some(&next) = neighbors.choose(&mut self.rng) {
            // claim it now so no other branch can carve into it
            self.grid.mark_visited(next);
            self.stack.push(current);
            self.grid.clear_wall_between(current, next);
            trace!("carved {:?} -> {:?}, stack depth {}", current, next, self.stack.len());
            self.current = next;
        } else if let Some(prev) = self.stack.pop() {
            trace!("backtracked {:?} -> {:?}", current, prev);
            self.current = prev;
        }

        self.steps += 1;
    }

    fn is_done(&self) -> bool {
        self.grid.all_visited()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn current(&self) -> Option<Coord> {
        if self.is_done() {
            None
        } else {
            Some(self.current)
        }
    }

    fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;

    fn assert_symmetric(grid: &WallGrid) {
        for cell in grid.cells() {
            for dir in Direction::ALL.iter() {
                if let Some((nx, ny)) = grid.neighbor_of(cell.coords(), *dir) {
                    let neighbor = grid.cell_at(nx, ny).unwrap();
                    assert_eq!(
                        cell.has_wall(*dir),
                        neighbor.has_wall(-*dir),
                        "one-sided wall between {} and {}",
                        cell,
                        neighbor
                    );
                } else {
                    assert!(cell.has_wall(*dir), "border wall removed on {}", cell);
                }
            }
        }
    }

    #[test]
    fn carves_a_spanning_tree() {
        for &(width, height) in &[(1, 1), (2, 2), (5, 3), (3, 7), (12, 9), (20, 20)] {
            for seed in 0..20 {
                let mut gen = RecursiveBacktracker::with_seed(width, height, seed);
                let grid = gen.generate_maze();

                assert!(grid.all_visited());
                assert_eq!(grid.open_passages(), width * height - 1);
                assert_eq!(grid.reachable_from((0, 0)), width * height);
                assert!(grid.is_perfect());
                assert_symmetric(grid);
            }
        }
    }

    #[test]
    fn two_by_two_removes_three_walls() {
        let mut gen = RecursiveBacktracker::with_seed(2, 2, 7);
        let grid = gen.generate_maze();

        assert_eq!(grid.open_passages(), 3);
        assert!(grid.cells().iter().all(|cell| cell.visited));
    }

    #[test]
    fn corridor_never_branches() {
        let mut gen = RecursiveBacktracker::with_seed(1, 6, 3);

        // every step moves one cell further down until the end is claimed
        for y in 1..6 {
            gen.step_generation();
            assert_eq!(gen.current, (0, y));
            assert_eq!(gen.stack_depth(), y);
        }
        assert!(gen.is_done());
        assert_eq!(gen.current(), None);
        assert_eq!(gen.grid().open_passages(), 5);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut one = RecursiveBacktracker::with_seed(9, 7, 42);
        let mut two = RecursiveBacktracker::with_seed(9, 7, 42);

        while !one.is_done() {
            one.step_generation();
            two.step_generation();
            assert_eq!(one.current, two.current);
            assert_eq!(one.stack, two.stack);
            assert_eq!(one.grid(), two.grid());
        }
        assert!(two.is_done());
        assert_eq!(one.steps(), two.steps());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut one = RecursiveBacktracker::with_seed(10, 10, 1);
        let mut two = RecursiveBacktracker::with_seed(10, 10, 2);

        assert_ne!(one.generate_maze(), two.generate_maze());
    }

    #[test]
    fn walls_only_ever_come_down() {
        let mut gen = RecursiveBacktracker::with_seed(6, 6, 11);
        let mut previous = gen.grid().clone();

        while !gen.is_done() {
            gen.step_generation();
            let grid = gen.grid();
            for (before, after) in previous.cells().iter().zip(grid.cells()) {
                for dir in Direction::ALL.iter() {
                    if !before.has_wall(*dir) {
                        assert!(!after.has_wall(*dir));
                    }
                }
                if before.visited {
                    assert!(after.visited);
                }
            }
            previous = grid.clone();
        }
    }

    #[test]
    fn is_done_is_stable() {
        let mut gen = RecursiveBacktracker::with_seed(4, 4, 5);
        gen.step_generation();

        let first = gen.is_done();
        assert_eq!(gen.is_done(), first);
        assert!(!first);

        gen.generate_maze();
        assert!(gen.is_done());
        assert!(gen.is_done());
    }

    #[test]
    fn single_cell_finishes_in_one_step() {
        let mut gen = RecursiveBacktracker::with_seed(1, 1, 0);

        assert!(!gen.is_done());
        assert_eq!(gen.current(), Some((0, 0)));
        assert!(gen.next_step().all_visited());
        assert!(gen.is_done());
        assert_eq!(gen.steps(), 1);
        assert_eq!(gen.into_grid().open_passages(), 0);
    }
}
