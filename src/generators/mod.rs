pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;

/// A maze generator that carves its grid incrementally, one step per call,
/// so every intermediate state can be drawn.
pub trait Generator {
    fn step_generation(&mut self);
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;

    /// Cell currently being carved from, `None` once generation is done
    fn current(&self) -> Option<Coord>;
    fn stack_depth(&self) -> usize;

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        self.grid()
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.is_done() {
            self.step_generation();
        }

        self.grid()
    }
}
