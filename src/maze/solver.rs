use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::maze::cell::Cell;
use crate::maze::config::SolverConfig;
use crate::maze::diagnostics::TrialTrace;
use crate::maze::error::{GridError, SolveError};
use crate::maze::grid::Grid;
use crate::maze::trial::{run_trial, TrialOutcome};

/// Résultat d'un essai, avec sa trace si elle a été demandée.
#[derive(Debug, Clone)]
pub struct TrialRecord {
    pub trial: usize,
    pub outcome: TrialOutcome,
    pub trace: Option<TrialTrace>,
}

/// Le plus court chemin trouvé, tracé sur la grille d'origine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub grid: Grid,
    pub path_length: usize,
    /// Numéro de l'essai retenu.
    pub trial: usize,
    /// Longueurs de chaque essai réussi, dans l'ordre des essais.
    pub solution_lengths: Vec<usize>,
    pub failures: usize,
}

/// Trace sur une copie de `original` chaque case restée chemin dans `solution`.
pub fn blaze_trail(original: &Grid, solution: &Grid) -> Result<Grid, GridError> {
    let mut blazed = original.clone();
    for pos in solution.find_all(Cell::Path) {
        blazed.set_cell(pos, Cell::Blaze)?;
    }
    Ok(blazed)
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Lance tous les essais. Chaque essai tire son propre générateur à partir
    /// de `rng`, si bien que les modes séquentiel et parallèle donnent les
    /// mêmes résultats pour une même source.
    pub fn run_trials<R: Rng>(
        &self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Vec<TrialRecord>, GridError> {
        let seeds: Vec<u64> = (0..self.config.trials).map(|_| rng.random()).collect();
        if self.config.parallel {
            seeds
                .par_iter()
                .enumerate()
                .map(|(trial, seed)| self.run_one(grid, trial, *seed))
                .collect()
        } else {
            seeds
                .iter()
                .enumerate()
                .map(|(trial, seed)| self.run_one(grid, trial, *seed))
                .collect()
        }
    }

    fn run_one(&self, grid: &Grid, trial: usize, seed: u64) -> Result<TrialRecord, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut trace = self.config.record_trace.then(|| TrialTrace::new(trial));
        let outcome = run_trial(grid, &self.config, &mut rng, trace.as_mut())?;
        log::debug!("trial {}: {:?}", trial, outcome.path_length());
        Ok(TrialRecord {
            trial,
            outcome,
            trace,
        })
    }

    /// Garde l'essai réussi le plus court (le premier en cas d'égalité) et le
    /// trace sur la grille d'origine.
    pub fn select(&self, original: &Grid, records: &[TrialRecord]) -> Result<Solution, SolveError> {
        let mut best: Option<(&TrialRecord, &Grid, usize)> = None;
        let mut solution_lengths = Vec::new();
        for record in records {
            if let TrialOutcome::Solved { grid, path_length } = &record.outcome {
                solution_lengths.push(*path_length);
                if best.map_or(true, |(_, _, shortest)| *path_length < shortest) {
                    best = Some((record, grid, *path_length));
                }
            }
        }

        let failures = records.len() - solution_lengths.len();
        let Some((record, grid, path_length)) = best else {
            log::info!("no solution in {} trials", records.len());
            return Err(SolveError::NoSolutionFound {
                trials: records.len(),
            });
        };

        log::info!(
            "{} of {} trials solved, shortest path {} (trial {})",
            solution_lengths.len(),
            records.len(),
            path_length,
            record.trial
        );
        Ok(Solution {
            grid: blaze_trail(original, grid)?,
            path_length,
            trial: record.trial,
            solution_lengths,
            failures,
        })
    }

    /// Résout le labyrinthe `config.trials` fois et renvoie le plus court chemin.
    pub fn solve<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Result<Solution, SolveError> {
        let records = self.run_trials(grid, rng)?;
        self.select(grid, &records)
    }
}

/// Résout `grid` `n` fois avec le générateur du thread et renvoie le plus court chemin.
pub fn solve(grid: &Grid, n: usize) -> Result<Solution, SolveError> {
    Solver::with_config(SolverConfig::default().with_trials(n)).solve(grid, &mut rand::rng())
}
