use crate::maze::direction::Direction;

/// Ouvertures autour d'une case : `true` si la voisine n'est pas un mur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenNeighbors {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl OpenNeighbors {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Nombre de voisines ouvertes (0 à 4).
    pub fn count(&self) -> usize {
        [self.north, self.east, self.south, self.west]
            .iter()
            .filter(|open| **open)
            .count()
    }

    /// Directions ouvertes, dans l'ordre N, E, S, W.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.is_open(*d))
    }
}
