use rand::seq::IndexedRandom;
use rand::Rng;

use crate::maze::grid::Position;
use crate::maze::neighbors::OpenNeighbors;

/// Les quatre directions absolues de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Fait demi tour (par ex. North -> South )
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage (ligne, colonne) d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Direction du pas qui mène de `from` à `to`, si les deux cases sont voisines.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|dir| from.step(*dir) == Some(to))
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Préférence de virage du marcheur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPolicy {
    Right,
    Left,
    /// Tire à pile ou face entre droite et gauche à chaque pas.
    Random,
}

/// Sens de virage effectivement appliqué pour un pas donné.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

// Premier pas, sans direction d'arrivée.
const FIRST_STEP_RIGHT: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];
const FIRST_STEP_LEFT: [Direction; 4] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
];

// Indexé par le cap (N, E, S, W) : virage, tout droit, virage opposé.
// Le demi-tour n'y figure jamais.
const RIGHT_PRIORITY: [[Direction; 3]; 4] = [
    [Direction::East, Direction::North, Direction::West],
    [Direction::South, Direction::East, Direction::North],
    [Direction::West, Direction::South, Direction::East],
    [Direction::North, Direction::West, Direction::South],
];
const LEFT_PRIORITY: [[Direction; 3]; 4] = [
    [Direction::West, Direction::North, Direction::East],
    [Direction::North, Direction::East, Direction::South],
    [Direction::East, Direction::South, Direction::West],
    [Direction::South, Direction::West, Direction::North],
];

impl Turn {
    /// Ordre de préférence pour un marcheur qui avance avec le cap `heading`.
    pub fn priority(self, heading: Direction) -> &'static [Direction; 3] {
        match self {
            Turn::Right => &RIGHT_PRIORITY[heading.index()],
            Turn::Left => &LEFT_PRIORITY[heading.index()],
        }
    }
}

impl TurnPolicy {
    /// Résout la politique pour le pas courant.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Turn {
        match self {
            TurnPolicy::Right => Turn::Right,
            TurnPolicy::Left => Turn::Left,
            TurnPolicy::Random => {
                if rng.random_bool(0.5) {
                    Turn::Right
                } else {
                    Turn::Left
                }
            }
        }
    }

    /// Choisit la direction du tout premier pas depuis le départ.
    pub fn first_step<R: Rng>(self, open: OpenNeighbors, rng: &mut R) -> Option<Direction> {
        match self {
            TurnPolicy::Right => FIRST_STEP_RIGHT.into_iter().find(|d| open.is_open(*d)),
            TurnPolicy::Left => FIRST_STEP_LEFT.into_iter().find(|d| open.is_open(*d)),
            TurnPolicy::Random => {
                let candidates: Vec<Direction> = open.directions().collect();
                candidates.choose(rng).copied()
            }
        }
    }
}

/// Choisit le pas suivant sans jamais revenir sur ses pas.
pub fn next_step(turn: Turn, heading: Direction, open: OpenNeighbors) -> Option<Direction> {
    turn.priority(heading)
        .iter()
        .copied()
        .find(|d| open.is_open(*d))
}
