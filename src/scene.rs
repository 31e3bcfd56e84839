use crate::constants::{
    CURSOR_COLOR, CURSOR_INSET, PATH_COLOR, VISITED_COLOR, WALL_COLOR, WALL_THICKNESS,
};
use crate::grids::Direction;
use crate::session::MazeSession;

unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Maps pixel rectangles, origin top-left, onto normalized device coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    #[inline]
    fn to_ndc(&self, x: f32, y: f32) -> [f32; 2] {
        [x / self.width * 2.0 - 1.0, 1.0 - y / self.height * 2.0]
    }

    /// Two triangles covering the pixel rectangle at (x, y) of size (w, h)
    pub fn quad(&self, verts: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        let low = self.to_ndc(x, y + h);
        let up = self.to_ndc(x + w, y);

        verts.extend_from_slice(&[
            // lower left triangle
            Vertex {
                position: [low[0], low[1]],
                color,
            },
            Vertex {
                position: [up[0], low[1]],
                color,
            },
            Vertex {
                position: [low[0], up[1]],
                color,
            },
            // upper right triangle
            Vertex {
                position: [low[0], up[1]],
                color,
            },
            Vertex {
                position: [up[0], low[1]],
                color,
            },
            Vertex {
                position: [up[0], up[1]],
                color,
            },
        ]);
    }
}

/// Triangle list for one frame: visited fills, the generator's cursor,
/// wall lines, then the solver's trail on top.
pub fn build(session: &MazeSession, viewport: Viewport) -> Vec<Vertex> {
    let grid = session.grid();
    let size = session.config().cell_size as f32;
    let mut verts = Vec::new();

    for cell in grid.cells() {
        if cell.visited {
            let (x, y) = (cell.x as f32 * size, cell.y as f32 * size);
            viewport.quad(&mut verts, x, y, size, size, VISITED_COLOR);
        }
    }

    if let Some((cx, cy)) = session.generator_cursor() {
        let (x, y) = (cx as f32 * size, cy as f32 * size);
        let inset = CURSOR_INSET.min(size / 2.0);
        viewport.quad(
            &mut verts,
            x + inset,
            y + inset,
            size - inset,
            size - inset,
            CURSOR_COLOR,
        );
    }

    for cell in grid.cells() {
        let (x, y) = (cell.x as f32 * size, cell.y as f32 * size);
        for dir in cell.walls.iter() {
            let (wx, wy, ww, wh) = match dir {
                Direction::Up => (x, y, size, WALL_THICKNESS),
                Direction::Right => (x + size - WALL_THICKNESS / 2.0, y, WALL_THICKNESS, size),
                Direction::Down => (x, y + size - WALL_THICKNESS / 2.0, size, WALL_THICKNESS),
                Direction::Left => (x, y, WALL_THICKNESS, size),
            };
            viewport.quad(&mut verts, wx, wy, ww, wh, WALL_COLOR);
        }
    }

    for &(px, py) in session.solution_path() {
        let quarter = size / 4.0;
        let (x, y) = (px as f32 * size + quarter, py as f32 * size + quarter);
        viewport.quad(&mut verts, x, y, size / 2.0, size / 2.0, PATH_COLOR);
    }

    verts
}

#[cfg(test)]
mod test_scene {
    use super::*;
    use crate::config::MazeConfig;

    const QUAD: usize = 6;

    fn session(width: u32, height: u32) -> MazeSession {
        MazeSession::new(MazeConfig::with_grid(width, height).with_seed(5)).unwrap()
    }

    #[test]
    fn quad_covers_rect() {
        let viewport = Viewport::new(200, 100);
        let mut verts = Vec::new();
        viewport.quad(&mut verts, 0.0, 0.0, 200.0, 100.0, WALL_COLOR);

        assert_eq!(verts.len(), QUAD);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|x| *x == -1.0 || *x == 1.0));
        assert!(ys.iter().all(|y| *y == -1.0 || *y == 1.0));
        assert_eq!(verts[0].position, [-1.0, -1.0]);
        assert_eq!(verts[5].position, [1.0, 1.0]);
    }

    #[test]
    fn fresh_maze_is_walls_and_cursor() {
        let session = session(2, 2);
        let viewport = Viewport::new(40, 40);
        let verts = build(&session, viewport);

        // 4 walls per cell plus the cursor, nothing visited yet
        assert_eq!(verts.len(), (2 * 2 * 4 + 1) * QUAD);
        assert_eq!(verts.iter().filter(|v| v.color == CURSOR_COLOR).count(), QUAD);
        assert!(verts.iter().all(|v| v.color != VISITED_COLOR));
    }

    #[test]
    fn solved_maze_draws_trail() {
        let mut session = session(3, 3);
        let path_len = session.run_to_completion().unwrap().len();
        let verts = build(&session, Viewport::new(60, 60));

        let count = |color: [f32; 4]| verts.iter().filter(|v| v.color == color).count();
        assert_eq!(count(CURSOR_COLOR), 0);
        assert_eq!(count(VISITED_COLOR), 9 * QUAD);
        assert_eq!(count(PATH_COLOR), path_len * QUAD);

        // 36 wall flags minus both sides of 8 passages
        assert_eq!(count(WALL_COLOR), (36 - 2 * 8) * QUAD);
    }

    #[test]
    fn vertices_are_plain_bytes() {
        let verts = build(&session(2, 1), Viewport::new(40, 20));
        let bytes: &[u8] = bytemuck::cast_slice(&verts);

        assert_eq!(bytes.len(), verts.len() * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
