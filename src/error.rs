use crate::grids::{Coord, Dimensions};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The configuration cannot produce a usable grid
    InvalidConfig(String),
    /// A solver was requested over a grid that still has unvisited cells
    GenerationIncomplete,
    /// A solver was stepped with a grid of a different size than it was built over
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },
    /// The solver ran out of cells to backtrack to before reaching the end.
    /// A fully generated maze is connected, so this is an internal fault.
    Unsolvable { start: Coord, end: Coord },
}

impl Display for MazeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::InvalidConfig(reason) => write!(f, "invalid maze config: {}", reason),
            MazeError::GenerationIncomplete => {
                write!(f, "cannot solve a maze that is still being generated")
            }
            MazeError::DimensionMismatch { expected, found } => write!(
                f,
                "solver built for a {} grid was given a {} grid",
                expected, found
            ),
            MazeError::Unsolvable { start, end } => write!(
                f,
                "no path from {:?} to {:?}, generated maze is not connected",
                start, end
            ),
        }
    }
}

impl std::error::Error for MazeError {}
