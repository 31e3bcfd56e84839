//! Animated maze generation and solving.
//!
//! A [`RecursiveBacktracker`](generators::backtracker::RecursiveBacktracker)
//! carves a perfect maze one step per frame, then a
//! [`DfsSolver`](solvers::dfs::DfsSolver) walks it from the top-left cell to
//! the bottom-right one, again one step per frame. [`MazeSession`] sequences
//! the two and [`scene`] turns its state into triangles for the renderer.

pub mod config;
pub mod constants;
pub mod error;
pub mod generators;
pub mod grids;
pub mod scene;
pub mod session;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use session::{Command, MazeSession, Phase};
