pub mod maze;
pub mod options;

pub use crate::maze::ascii_utils::{
    parse_grid, parse_grid_with, visualize_grid, Border, SourceSymbols,
};
pub use crate::maze::cell::Cell;
pub use crate::maze::config::SolverConfig;
pub use crate::maze::direction::{Direction, TurnPolicy};
pub use crate::maze::error::{GridError, SolveError};
pub use crate::maze::grid::{Grid, Position};
pub use crate::maze::solver::{solve, Solution, Solver};

/// Variable d'environnement qui active les journaux (`BLAZE_LOG=debug`).
pub const LOG_ENV: &str = "BLAZE_LOG";
pub const LOG_STYLE_ENV: &str = "BLAZE_LOG_STYLE";
