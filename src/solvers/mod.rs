pub mod dfs;

use crate::grids::Direction;

/// Fixed move priority for the solver, so a given maze always yields the same trace
pub const SOLVE_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];
