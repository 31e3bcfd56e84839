use backtrack_maze::grids::Direction;
use backtrack_maze::{Command, MazeConfig, MazeSession, Phase};

fn drive(session: &mut MazeSession) -> usize {
    let mut ticks = 0;
    while session.phase() == Phase::Generating {
        session.tick().expect("generation never fails");
        ticks += 1;
    }
    assert!(session.handle(Command::StartSolving).unwrap());
    while session.phase() != Phase::Solved {
        session.tick().expect("a generated maze is always solvable");
        ticks += 1;
    }
    ticks
}

#[test]
fn generate_then_solve_many_mazes() {
    for seed in 0..25 {
        let mut session =
            MazeSession::new(MazeConfig::with_grid(16, 11).with_seed(seed)).unwrap();
        drive(&mut session);

        let grid = session.grid();
        assert!(grid.is_perfect());
        assert_eq!(grid.open_passages(), 16 * 11 - 1);

        let path = session.solution_path();
        assert_eq!(path[0], (0, 0));
        assert_eq!(*path.last().unwrap(), (15, 10));
        for pair in path.windows(2) {
            let dir = Direction::between(pair[0], pair[1]).expect("path cells are adjacent");
            assert!(grid.is_open(pair[0], dir));
            assert!(grid.is_open(pair[1], -dir));
        }
    }
}

#[test]
fn seeded_sessions_replay_identically() {
    let config = MazeConfig::with_grid(12, 12).with_seed(77);
    let mut one = MazeSession::new(config.clone()).unwrap();
    let mut two = MazeSession::new(config).unwrap();

    let ticks = drive(&mut one);
    assert_eq!(drive(&mut two), ticks);
    assert_eq!(one.grid(), two.grid());
    assert_eq!(one.solution_path(), two.solution_path());
}

#[test]
fn commands_outside_their_phase_are_ignored() {
    let mut session = MazeSession::new(MazeConfig::with_grid(4, 4).with_seed(1)).unwrap();

    assert!(!session.handle(Command::StartSolving).unwrap());
    drive(&mut session);
    assert!(!session.handle(Command::StartSolving).unwrap());
    assert_eq!(session.phase(), Phase::Solved);

    assert!(session.handle(Command::Reset).unwrap());
    assert_eq!(session.phase(), Phase::Generating);
    assert_eq!(session.generator_cursor(), Some((0, 0)));
}

#[test]
fn default_config_fills_the_window() {
    let mut session = MazeSession::new(MazeConfig::default().with_seed(3)).unwrap();
    let path_len = session.run_to_completion().unwrap().len();

    assert_eq!(session.grid().dims.width, 60);
    assert_eq!(session.grid().dims.height, 45);
    // a path from corner to corner crosses at least the manhattan distance
    assert!(path_len >= 60 + 45 - 1);
}
