use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_blaze::maze::diagnostics::traces_to_json;
use maze_blaze::{
    parse_grid, parse_grid_with, solve, Border, SolveError, Solver, SolverConfig, SourceSymbols,
    TurnPolicy,
};

const CORRIDOR: &str = "\
##########
#S      D#
##########";

const RING: &str = "\
#########
###   ###
##S # D##
### # ###
###   ###
#########";

const DETACHED_LOOP: &str = "\
#########
#S     D#
#########
#       #
#  ###  #
#       #
#########";

const ENCLOSED: &str = "\
########
##S#  D#
#### # #
#      #
########";

#[test]
fn corridor_is_solved_identically_by_every_trial() {
    let grid = parse_grid(CORRIDOR).unwrap();
    for n in [1, 7, 40] {
        let solution = solve(&grid, n).unwrap();
        assert_eq!(solution.path_length, 6);
        assert_eq!(solution.solution_lengths, vec![6; n]);
        assert_eq!(solution.failures, 0);
        assert_eq!(
            solution.grid.to_string(),
            "██████████\n█S······D█\n██████████\n"
        );
    }
}

#[test]
fn ring_keeps_one_half_per_trial() {
    let grid = parse_grid(RING).unwrap();
    let solver = Solver::with_config(SolverConfig::default().with_trials(200));
    let solution = solver.solve(&grid, &mut StdRng::seed_from_u64(2024)).unwrap();

    assert_eq!(solution.failures, 0);
    assert_eq!(solution.solution_lengths.len(), 200);
    assert!(solution
        .solution_lengths
        .iter()
        .all(|len| *len == 5 || *len == 7));
    assert_eq!(solution.path_length, 5);
    assert_eq!(
        solution.grid.to_string(),
        "\
█████████
███···███
██S·█·D██
███ █ ███
███   ███
█████████
"
    );
}

#[test]
fn deterministic_policies_keep_the_whole_ring() {
    // quel que soit le sens de virage fixe, le marcheur finit dans le cul-de-sac D
    let grid = parse_grid(RING).unwrap();
    for policy in [TurnPolicy::Right, TurnPolicy::Left] {
        let config = SolverConfig::default()
            .with_trials(3)
            .with_policy(policy)
            .with_max_stalled_forays(4);
        let solution = Solver::with_config(config)
            .solve(&grid, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(solution.solution_lengths, vec![10; 3]);
        assert_eq!(
            solution.grid.to_string(),
            "\
█████████
███···███
██S·█·D██
███·█·███
███···███
█████████
"
        );
    }
}

#[test]
fn unreachable_loops_do_not_hide_the_corridor() {
    let grid = parse_grid(DETACHED_LOOP).unwrap();
    let solution = solve(&grid, 3).unwrap();
    assert_eq!(solution.path_length, 5);
    assert_eq!(solution.solution_lengths, vec![5; 3]);
    assert_eq!(solution.failures, 0);
    assert_eq!(
        solution.grid.to_string(),
        "\
█████████
█S·····D█
█████████
█       █
█  ███  █
█       █
█████████
"
    );
}

#[test]
fn binary_maze_without_border() {
    let grid = parse_grid_with(
        "0000010\n11111D0\n0001000\n0S11111\n0000100",
        &SourceSymbols::BINARY,
        Border::Complete,
    )
    .unwrap();
    assert_eq!((grid.height(), grid.width()), (7, 9));
    let solution = solve(&grid, 5).unwrap();
    assert_eq!(solution.path_length, 5);
    assert_eq!(
        solution.grid.to_string(),
        "\
█████████
██████ ██
█   ··D██
████·████
██S··   █
█████ ███
█████████
"
    );
}

#[test]
fn enclosed_start_has_no_solution() {
    let grid = parse_grid(ENCLOSED).unwrap();
    let config = SolverConfig::default()
        .with_trials(12)
        .with_max_stalled_forays(10);
    let err = Solver::with_config(config)
        .solve(&grid, &mut StdRng::seed_from_u64(5))
        .unwrap_err();
    assert!(matches!(err, SolveError::NoSolutionFound { trials: 12 }));
}

#[test]
fn parallel_run_is_reproducible() {
    let grid = parse_grid(RING).unwrap();
    let config = SolverConfig::default().with_trials(64);
    let sequential = Solver::with_config(config.clone())
        .solve(&grid, &mut StdRng::seed_from_u64(77))
        .unwrap();
    let parallel = Solver::with_config(config.with_parallel(true))
        .solve(&grid, &mut StdRng::seed_from_u64(77))
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn traces_serialize_to_json() {
    let grid = parse_grid(RING).unwrap();
    let config = SolverConfig::default().with_trials(4).with_trace(true);
    let records = Solver::with_config(config)
        .run_trials(&grid, &mut StdRng::seed_from_u64(3))
        .unwrap();
    let traces: Vec<_> = records.iter().filter_map(|r| r.trace.clone()).collect();
    assert_eq!(traces.len(), 4);

    let json: serde_json::Value = serde_json::from_str(&traces_to_json(&traces).unwrap()).unwrap();
    let trials = json.as_array().unwrap();
    assert_eq!(trials.len(), 4);
    for (i, trial) in trials.iter().enumerate() {
        assert_eq!(trial["trial"], i);
        let forays = trial["forays"].as_array().unwrap();
        assert_eq!(forays.last().unwrap()["outcome"], "loop_broken");
    }
}
