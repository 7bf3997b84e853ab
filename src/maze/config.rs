use crate::maze::direction::TurnPolicy;

pub const DEFAULT_TRIALS: usize = 50;
pub const DEFAULT_MAX_STALLED_FORAYS: usize = 1000;

/// Réglages du solveur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Nombre d'essais indépendants.
    pub trials: usize,
    /// Politique de virage du marcheur pendant un essai.
    pub policy: TurnPolicy,
    /// Sorties consécutives sans boucle coupée avant de renoncer aux boucles
    /// restantes de l'essai.
    pub max_stalled_forays: usize,
    /// Exécute les essais sur le pool rayon.
    pub parallel: bool,
    /// Conserve la trace de chaque sortie du marcheur.
    pub record_trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            policy: TurnPolicy::Random,
            max_stalled_forays: DEFAULT_MAX_STALLED_FORAYS,
            parallel: false,
            record_trace: false,
        }
    }
}

impl SolverConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_policy(mut self, policy: TurnPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_stalled_forays(mut self, max_stalled_forays: usize) -> Self {
        self.max_stalled_forays = max_stalled_forays;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}
