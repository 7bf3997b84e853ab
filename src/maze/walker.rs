use std::collections::HashSet;

use rand::Rng;
use crate::maze::cell::Cell;
use crate::maze::direction::{next_step, Direction, TurnPolicy};
use crate::maze::error::GridError;
use crate::maze::grid::{Grid, Position};

/// Départ ou arrivée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Dest,
}

/// Résultat d'une sortie du marcheur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Foray {
    /// Une boucle a été coupée : `grid` contient exactement un mur de plus, en `wall`.
    LoopBroken { grid: Grid, wall: Position },
    /// Le marcheur est revenu sur une ancre qui est un cul-de-sac.
    DeadEndAtAnchor(Anchor),
    /// La case à murer derrière le marcheur est une ancre.
    AnchorBehind(Anchor),
    /// Aucune direction permise (départ emmuré, ou seule issue derrière soi).
    Blocked(Position),
}

impl Foray {
    pub fn is_loop_broken(&self) -> bool {
        matches!(self, Foray::LoopBroken { .. })
    }

    /// Nom court de l'issue, pour les journaux et les traces.
    pub fn label(&self) -> &'static str {
        match self {
            Foray::LoopBroken { .. } => "loop_broken",
            Foray::DeadEndAtAnchor(_) => "dead_end_at_anchor",
            Foray::AnchorBehind(_) => "anchor_behind",
            Foray::Blocked(_) => "blocked",
        }
    }
}

/// État du marcheur pendant une sortie : position, case précédente et
/// embranchements déjà croisés.
#[derive(Debug)]
pub struct Walker<'a> {
    grid: &'a Grid,
    policy: TurnPolicy,
    position: Position,
    previous: Option<Position>,
    branches: HashSet<Position>,
    seen_start: bool,
    seen_dest: bool,
    path: Vec<Position>,
}

impl<'a> Walker<'a> {
    pub fn new(grid: &'a Grid, policy: TurnPolicy) -> Self {
        let start = grid.start();
        Self {
            grid,
            policy,
            position: start,
            previous: None,
            branches: HashSet::new(),
            seen_start: false,
            seen_dest: false,
            path: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Chemin parcouru: positions successives
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }

    /// Marche depuis le départ jusqu'à couper une boucle ou constater qu'aucune
    /// n'a été trouvée.
    pub fn walk<R: Rng>(&mut self, rng: &mut R) -> Result<Foray, GridError> {
        loop {
            self.path.push(self.position);
            log::trace!("walker at {}", self.position);
            if let Some(outcome) = self.check_position()? {
                return Ok(outcome);
            }
            match self.choose_direction(rng) {
                Some(direction) => self.advance(direction)?,
                None => return Ok(Foray::Blocked(self.position)),
            }
        }
    }

    /// Contrôles sur la case courante, dans l'ordre : départ, arrivée, boucle
    /// refermée sur un embranchement connu, nouvel embranchement.
    fn check_position(&mut self) -> Result<Option<Foray>, GridError> {
        let here = self.position;
        let grid = self.grid;

        if self.previous.is_some() && here == grid.start() {
            if grid.is_dead_end(here) {
                return Ok(Some(Foray::DeadEndAtAnchor(Anchor::Start)));
            }
            if self.seen_start {
                return self.wall_behind().map(Some);
            }
            self.seen_start = true;
        }

        if here == grid.dest() {
            if grid.is_dead_end(here) {
                return Ok(Some(Foray::DeadEndAtAnchor(Anchor::Dest)));
            }
            if self.seen_dest {
                return self.wall_behind().map(Some);
            }
            self.seen_dest = true;
        }

        if grid.is_branch(here) {
            let behind_anchor = self.previous.is_some_and(|prev| grid.is_anchor(prev));
            if self.branches.contains(&here) && !behind_anchor {
                return self.wall_behind().map(Some);
            }
            self.branches.insert(here);
        }

        Ok(None)
    }

    fn choose_direction<R: Rng>(&self, rng: &mut R) -> Option<Direction> {
        let open = self.grid.open_neighbors(self.position);
        match self.previous.and_then(|prev| Direction::between(prev, self.position)) {
            None => self.policy.first_step(open, rng),
            Some(heading) => next_step(self.policy.resolve(rng), heading, open),
        }
    }

    fn advance(&mut self, direction: Direction) -> Result<(), GridError> {
        let next = self
            .position
            .step(direction)
            .ok_or(GridError::OutOfBounds(self.position))?;
        self.previous = Some(self.position);
        self.position = next;
        Ok(())
    }

    /// Mure la case d'où l'on vient.
    fn wall_behind(&self) -> Result<Foray, GridError> {
        let Some(prev) = self.previous else {
            return Ok(Foray::Blocked(self.position));
        };
        if prev == self.grid.start() {
            return Ok(Foray::AnchorBehind(Anchor::Start));
        }
        if prev == self.grid.dest() {
            return Ok(Foray::AnchorBehind(Anchor::Dest));
        }
        let grid = self.grid.with_cell(prev, Cell::Wall)?;
        Ok(Foray::LoopBroken { grid, wall: prev })
    }
}

/// Une sortie complète du marcheur sur `grid`.
pub fn break_loop<R: Rng>(
    grid: &Grid,
    policy: TurnPolicy,
    rng: &mut R,
) -> Result<Foray, GridError> {
    Walker::new(grid, policy).walk(rng)
}
