use std::error::Error;
use std::fs;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_blaze::maze::diagnostics::{traces_to_json, TrialTrace};
use maze_blaze::options::Options;
use maze_blaze::{parse_grid_with, Solver, LOG_ENV, LOG_STYLE_ENV};

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&options.maze)?;
    let grid = parse_grid_with(&text, &options.symbols, options.border)?;
    log::info!(
        "maze {} loaded: {}x{}, start {}, destination {}",
        options.maze.display(),
        grid.height(),
        grid.width(),
        grid.start(),
        grid.dest()
    );

    let solver = Solver::with_config(options.solver.clone());
    let records = match options.seed {
        Some(seed) => solver.run_trials(&grid, &mut StdRng::seed_from_u64(seed))?,
        None => solver.run_trials(&grid, &mut rand::rng())?,
    };

    if let Some(path) = &options.trace {
        let traces: Vec<TrialTrace> = records.iter().filter_map(|r| r.trace.clone()).collect();
        fs::write(path, traces_to_json(&traces)?)?;
        log::info!("walk traces written to {}", path.display());
    }

    let solution = solver.select(&grid, &records)?;
    print!("{}", solution.grid);
    println!(
        "shortest path: {} cells (trial {}, {} solved, {} failed)",
        solution.path_length,
        solution.trial,
        solution.solution_lengths.len(),
        solution.failures
    );
    Ok(())
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, "error")
        .write_style(LOG_STYLE_ENV);
    env_logger::init_from_env(env);

    let options = match Options::parse_from_args(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(clap_error) => clap_error.exit(),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    log::debug!("options: {:?}", options);

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
