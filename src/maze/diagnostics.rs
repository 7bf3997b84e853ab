//! Traces de diagnostic : chaque case visitée et chaque mur posé, par essai et
//! par sortie du marcheur.

use serde::Serialize;

use crate::maze::grid::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForayTrace {
    pub foray: usize,
    pub visited: Vec<Position>,
    pub wall: Option<Position>,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrialTrace {
    pub trial: usize,
    pub forays: Vec<ForayTrace>,
    /// L'essai a renoncé à couper les boucles restantes.
    pub stalled: bool,
}

impl TrialTrace {
    pub fn new(trial: usize) -> Self {
        Self {
            trial,
            forays: Vec::new(),
            stalled: false,
        }
    }

    /// Murs posés pendant l'essai, dans l'ordre.
    pub fn walls(&self) -> Vec<Position> {
        self.forays.iter().filter_map(|f| f.wall).collect()
    }
}

pub fn traces_to_json(traces: &[TrialTrace]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(traces)
}
