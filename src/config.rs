use crate::constants::{DEFAULT_CELL_SIZE, DEFAULT_FPS, DEFAULT_RESOLUTION};
use crate::error::MazeError;
use crate::grids::Dimensions;
use std::time::Duration;

/// Session settings, fixed for the lifetime of a session and reused on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub display_width: u32,
    pub display_height: u32,
    pub cell_size: u32,
    pub fps: u32,
    /// Fixed seed for the generator; every reset reproduces the same maze
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_RESOLUTION.0,
            display_height: DEFAULT_RESOLUTION.1,
            cell_size: DEFAULT_CELL_SIZE,
            fps: DEFAULT_FPS,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Config whose display area exactly fits a `width` x `height` grid at the default cell size
    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            display_width: width * DEFAULT_CELL_SIZE,
            display_height: height * DEFAULT_CELL_SIZE,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn grid_dims(&self) -> Dimensions {
        if self.cell_size == 0 {
            return Dimensions::new(0, 0);
        }

        Dimensions::new(
            (self.display_width / self.cell_size) as usize,
            (self.display_height / self.cell_size) as usize,
        )
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.cell_size == 0 {
            return Err(MazeError::InvalidConfig("cell size must be non-zero".into()));
        }
        if self.fps == 0 {
            return Err(MazeError::InvalidConfig("frame rate must be non-zero".into()));
        }

        let dims = self.grid_dims();
        if dims.width == 0 || dims.height == 0 {
            return Err(MazeError::InvalidConfig(format!(
                "a {}x{} display fits no {} px cells",
                self.display_width, self.display_height, self.cell_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults() {
        let config = MazeConfig::default();

        assert_eq!(config.grid_dims(), Dimensions::new(60, 45));
        assert_eq!(config.frame_interval(), Duration::from_secs(1) / 60);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let config = MazeConfig::with_grid(7, 3).with_seed(9).with_fps(10);

        assert_eq!(config.grid_dims(), Dimensions::new(7, 3));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.frame_interval(), Duration::from_millis(100));

        let config = config.with_cell_size(70);
        assert_eq!(config.grid_dims(), Dimensions::new(2, 0));
    }

    #[test]
    fn rejects_unusable_configs() {
        assert!(MazeConfig::default().with_cell_size(0).validate().is_err());
        assert!(MazeConfig::default().with_fps(0).validate().is_err());
        assert!(MazeConfig::default().with_cell_size(2000).validate().is_err());

        match MazeConfig::with_grid(0, 4).validate() {
            Err(MazeError::InvalidConfig(_)) => {}
            result => panic!("unexpected {:?}", result),
        }
    }
}
