//! Parsing Options.
//! `maze-blaze <MAZE_FILE> -n 50 --policy random --seed 7 --trace traces.json`
//! `maze-blaze maze.txt --wall 0 --path 1 --complete-border`

use std::error::Error;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::maze::ascii_utils::{
    Border, SourceSymbols, DEST_CHAR, PATH_CHAR, START_CHAR, WALL_CHAR,
};
use crate::maze::config::{SolverConfig, DEFAULT_MAX_STALLED_FORAYS, DEFAULT_TRIALS};
use crate::maze::direction::TurnPolicy;

fn make_options_parser() -> Command {
    Command::new("maze-blaze")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Blazes a short path through a maze by breaking its loops at random")
        .arg(
            Arg::new("maze")
                .value_name("MAZE_FILE")
                .help("Maze file, canonical symbols (█ or #, space, S, D) unless overridden")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("trials")
                .short('n')
                .long("trials")
                .help("Number of independent trials [default: 50]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .help("Turn policy of the walker")
                .default_value("random")
                .value_parser(["random", "right", "left"]),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for reproducible runs")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("max-stalled")
                .long("max-stalled")
                .help("Failed forays in a row before a trial stops breaking loops [default: 1000]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Run the trials on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wall")
                .long("wall")
                .value_name("CHAR")
                .help("Wall symbol of the maze file [default: █]")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("CHAR")
                .help("Path symbol of the maze file [default: space]")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("CHAR")
                .help("Start symbol of the maze file [default: S]")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .value_name("CHAR")
                .help("Destination symbol of the maze file [default: D]")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("complete-border")
                .long("complete-border")
                .help("Surround the maze with walls when its border is not closed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("trace")
                .short('t')
                .long("trace")
                .value_name("FILE")
                .help("Path to file where the per-trial walk traces will be stored")
                .value_parser(value_parser!(PathBuf)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub maze: PathBuf,
    pub symbols: SourceSymbols,
    pub border: Border,
    pub seed: Option<u64>,
    pub trace: Option<PathBuf>,
    pub solver: SolverConfig,
}

impl Options {
    pub fn parse_from_args<I, T>(flags: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(flags)?;

        let maze = matches
            .get_one::<PathBuf>("maze")
            .cloned()
            .ok_or("missing maze file")?;
        let policy = match matches.get_one::<String>("policy").map(String::as_str) {
            Some("right") => TurnPolicy::Right,
            Some("left") => TurnPolicy::Left,
            Some("random") | None => TurnPolicy::Random,
            Some(other) => return Err(format!("unsupported turn policy {}", other).into()),
        };
        let trials = matches
            .get_one::<usize>("trials")
            .copied()
            .unwrap_or(DEFAULT_TRIALS);
        let max_stalled = matches
            .get_one::<usize>("max-stalled")
            .copied()
            .unwrap_or(DEFAULT_MAX_STALLED_FORAYS);
        let trace = matches.get_one::<PathBuf>("trace").cloned();

        let symbol = |name: &str, default: char| {
            matches
                .get_one::<char>(name)
                .copied()
                .unwrap_or(default)
        };
        let symbols = SourceSymbols::new(
            symbol("wall", WALL_CHAR),
            symbol("path", PATH_CHAR),
            symbol("start", START_CHAR),
            symbol("dest", DEST_CHAR),
        )?;
        let border = if matches.get_flag("complete-border") {
            Border::Complete
        } else {
            Border::Required
        };

        let solver = SolverConfig::default()
            .with_trials(trials)
            .with_policy(policy)
            .with_max_stalled_forays(max_stalled)
            .with_parallel(matches.get_flag("parallel"))
            .with_trace(trace.is_some());

        Ok(Options {
            maze,
            symbols,
            border,
            seed: matches.get_one::<u64>("seed").copied(),
            trace,
            solver,
        })
    }
}
