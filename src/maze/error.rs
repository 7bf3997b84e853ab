use thiserror::Error;

use crate::maze::grid::Position;

/// Erreurs de construction ou de modification d'une grille.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("the maze has no rows")]
    Empty,
    #[error("the maze must be at least 3x3, got {height}x{width}")]
    TooSmall { height: usize, width: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        col: usize,
    },
    #[error("symbol {0:?} is used for more than one kind of cell")]
    AmbiguousSymbol(char),
    #[error("{0} is already blazed, a maze to solve holds only walls, paths, S and D")]
    BlazedCell(Position),
    #[error("the maze has no start")]
    MissingStart,
    #[error("the maze has no destination")]
    MissingDest,
    #[error("the maze has more than one start ({0} and {1})")]
    DuplicateStart(Position, Position),
    #[error("the maze has more than one destination ({0} and {1})")]
    DuplicateDest(Position, Position),
    #[error("the border is open at {0}")]
    OpenBorder(Position),
    #[error("{0} is outside the maze")]
    OutOfBounds(Position),
    #[error("{0} is a border or anchor cell and cannot be rewritten")]
    ProtectedCell(Position),
}

/// Erreurs visibles par l'appelant du solveur.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no solution found after {trials} trials")]
    NoSolutionFound { trials: usize },
    #[error("invalid maze: {0}")]
    Grid(#[from] GridError),
}
