use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generators::backtracker::RecursiveBacktracker;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::solvers::dfs::DfsSolver;
use log::{debug, info};

/// Control events forwarded by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    StartSolving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generating,
    Generated,
    Solving,
    Solved,
}

/// One maze from blank grid to solved trail. The generator owns the grid
/// while carving; once it is done the solver only ever reads it.
pub struct MazeSession {
    config: MazeConfig,
    generator: RecursiveBacktracker,
    solver: Option<DfsSolver>,
    completion_logged: bool,
}

impl MazeSession {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;

        let generator = Self::new_generator(&config);
        Ok(Self {
            config,
            generator,
            solver: None,
            completion_logged: false,
        })
    }

    fn new_generator(config: &MazeConfig) -> RecursiveBacktracker {
        let dims = config.grid_dims();
        info!("new {} maze, seed {:?}", dims, config.seed);

        match config.seed {
            Some(seed) => RecursiveBacktracker::with_seed(dims.width, dims.height, seed),
            None => RecursiveBacktracker::new(dims.width, dims.height),
        }
    }

    /// Discards the current maze and solver and starts carving a fresh grid
    pub fn reset(&mut self) {
        self.generator = Self::new_generator(&self.config);
        self.solver = None;
        self.completion_logged = false;
    }

    /// Builds the solver if the maze is finished and no solve is underway.
    /// Returns whether solving started.
    pub fn start_solving(&mut self) -> Result<bool, MazeError> {
        if self.solver.is_some() {
            debug!("already solving, ignoring start");
            return Ok(false);
        }
        if !self.generator.is_done() {
            debug!("maze still generating, ignoring start");
            return Ok(false);
        }

        self.solver = Some(DfsSolver::new(self.generator.grid())?);
        info!("solving");
        Ok(true)
    }

    pub fn handle(&mut self, command: Command) -> Result<bool, MazeError> {
        match command {
            Command::Reset => {
                self.reset();
                Ok(true)
            }
            Command::StartSolving => self.start_solving(),
        }
    }

    /// Advances whichever phase is active by a single step
    pub fn tick(&mut self) -> Result<(), MazeError> {
        if !self.generator.is_done() {
            self.generator.step_generation();
            if self.generator.is_done() && !self.completion_logged {
                self.completion_logged = true;
                info!("maze generated in {} steps", self.generator.steps());
            }
            return Ok(());
        }

        if let Some(solver) = self.solver.as_mut() {
            if solver.is_solved() {
                return Ok(());
            }

            solver.step(self.generator.grid())?;
            if solver.is_solved() {
                info!(
                    "solved in {} steps, path length {}, {} backtracks",
                    solver.steps(),
                    solver.path().len(),
                    solver.backtracks()
                );
            }
        }

        Ok(())
    }

    /// Generates and solves without pausing between steps
    pub fn run_to_completion(&mut self) -> Result<&[Coord], MazeError> {
        while !self.generator.is_done() {
            self.tick()?;
        }
        self.start_solving()?;
        while self.phase() != Phase::Solved {
            self.tick()?;
        }

        Ok(self.solution_path())
    }

    pub fn phase(&self) -> Phase {
        match &self.solver {
            Some(solver) if solver.is_solved() => Phase::Solved,
            Some(_) => Phase::Solving,
            None if self.generator.is_done() => Phase::Generated,
            None => Phase::Generating,
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &WallGrid {
        self.generator.grid()
    }

    /// Cell the generator is carving from, only while generating
    pub fn generator_cursor(&self) -> Option<Coord> {
        self.generator.current()
    }

    pub fn solver_cursor(&self) -> Option<Coord> {
        self.solver.as_ref().map(|solver| solver.current())
    }

    /// Trail walked by the solver so far, empty before solving starts
    pub fn solution_path(&self) -> &[Coord] {
        self.solver.as_ref().map(|solver| solver.path()).unwrap_or(&[])
    }

    /// Depth of the active phase's stack
    pub fn stack_depth(&self) -> usize {
        match &self.solver {
            Some(solver) => solver.path().len(),
            None => self.generator.stack_depth(),
        }
    }
}
