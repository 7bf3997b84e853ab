use rand::Rng;

use crate::maze::cell::Cell;
use crate::maze::config::SolverConfig;
use crate::maze::diagnostics::{ForayTrace, TrialTrace};
use crate::maze::error::GridError;
use crate::maze::grid::Grid;
use crate::maze::reducer::{fill_dead_ends, fill_unreachable};
use crate::maze::walker::{Foray, Walker};

/// Raison de l'échec d'un essai.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialFailure {
    /// Plus aucune boucle, mais le départ ou l'arrivée est emmuré.
    DisconnectedAnchors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    Solved { grid: Grid, path_length: usize },
    Failed(TrialFailure),
}

impl TrialOutcome {
    pub fn path_length(&self) -> Option<usize> {
        match self {
            TrialOutcome::Solved { path_length, .. } => Some(*path_length),
            TrialOutcome::Failed(_) => None,
        }
    }
}

/// Un essai complet : comble les culs-de-sac, puis alterne marcheur et
/// comblement jusqu'à ce qu'il ne reste plus aucun embranchement.
///
/// Après `max_stalled_forays` sorties d'affilée sans boucle coupée, l'essai
/// cesse de chercher : le chemin coupé du départ est muré et la grille est
/// jugée telle quelle.
pub fn run_trial<R: Rng>(
    original: &Grid,
    config: &SolverConfig,
    rng: &mut R,
    mut trace: Option<&mut TrialTrace>,
) -> Result<TrialOutcome, GridError> {
    let mut grid = original.clone();
    fill_dead_ends(&mut grid);

    let mut foray_index = 0;
    let mut stalled = 0;
    while grid.count_branches() > 0 {
        let (foray, visited) = {
            let mut walker = Walker::new(&grid, config.policy);
            let foray = walker.walk(rng)?;
            (foray, walker.into_path())
        };
        log::debug!(
            "foray {}: {} after {} steps",
            foray_index,
            foray.label(),
            visited.len()
        );

        if let Some(trace) = trace.as_deref_mut() {
            let wall = match &foray {
                Foray::LoopBroken { wall, .. } => Some(*wall),
                _ => None,
            };
            trace.forays.push(ForayTrace {
                foray: foray_index,
                visited,
                wall,
                outcome: foray.label(),
            });
        }
        foray_index += 1;

        match foray {
            Foray::LoopBroken { grid: broken, .. } => {
                grid = broken;
                fill_dead_ends(&mut grid);
                stalled = 0;
            }
            _ => {
                stalled += 1;
                if stalled > config.max_stalled_forays {
                    let pruned = fill_unreachable(&mut grid);
                    fill_dead_ends(&mut grid);
                    log::warn!(
                        "trial stalled after {} forays without breaking a loop: \
                         {} unreachable cells walled, {} branches left",
                        stalled,
                        pruned,
                        grid.count_branches()
                    );
                    if let Some(trace) = trace.as_deref_mut() {
                        trace.stalled = true;
                    }
                    break;
                }
            }
        }
    }

    if grid.is_walled_in(grid.start()) || grid.is_walled_in(grid.dest()) {
        log::debug!("trial failed: start or destination walled in");
        return Ok(TrialOutcome::Failed(TrialFailure::DisconnectedAnchors));
    }

    let path_length = grid.count_kind(Cell::Path);
    log::debug!("trial solved in {} forays, path length {}", foray_index, path_length);
    Ok(TrialOutcome::Solved { grid, path_length })
}
