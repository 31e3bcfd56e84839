//! Defaults for the maze window and its colors.

/// Default drawable area in pixels
pub const DEFAULT_RESOLUTION: (u32, u32) = (1202, 902);
/// Default edge length of a cell in pixels, bigger cells make a smaller maze
pub const DEFAULT_CELL_SIZE: u32 = 20;
/// Default number of generator/solver steps per second
pub const DEFAULT_FPS: u32 = 60;

/// Thickness of a wall line in pixels
pub const WALL_THICKNESS: f32 = 2.0;
/// Inset of the generator's current-cell highlight in pixels
pub const CURSOR_INSET: f32 = 2.0;

// rgb(r, g, b) / 255
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const WALL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const VISITED_COLOR: [f32; 4] = [0.125, 0.165, 0.267, 1.0];
pub const CURSOR_COLOR: [f32; 4] = [1.0, 0.878, 0.569, 1.0];
pub const PATH_COLOR: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
