use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::Serialize;

use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::error::GridError;
use crate::maze::neighbors::OpenNeighbors;

/// Coordonnées (ligne, colonne) d'une case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Case voisine dans `direction`, `None` si on sortirait par le haut ou la gauche.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grille rectangulaire du labyrinthe, bordure fermée, un départ et une arrivée.
///
/// Les invariants sont vérifiés à la construction : une fois qu'on tient une
/// `Grid`, toute case intérieure a ses quatre voisines dans les bornes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    dest: Position,
}

impl Grid {
    /// Construit une grille à partir de ses lignes et vérifie ses invariants.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if height < 3 || width < 3 {
            return Err(GridError::TooSmall { height, width });
        }

        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(GridError::Ragged {
                row: r,
                expected: width,
                found: row.len(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut dest = None;
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                let pos = Position::new(r, c);
                if cell == Cell::Blaze {
                    return Err(GridError::BlazedCell(pos));
                }
                let on_border = r == 0 || c == 0 || r == height - 1 || c == width - 1;
                if on_border && cell != Cell::Wall {
                    return Err(GridError::OpenBorder(pos));
                }
                match cell {
                    Cell::Start => match start {
                        Some(first) => return Err(GridError::DuplicateStart(first, pos)),
                        None => start = Some(pos),
                    },
                    Cell::Dest => match dest {
                        Some(first) => return Err(GridError::DuplicateDest(first, pos)),
                        None => dest = Some(pos),
                    },
                    _ => {}
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            width,
            height,
            start: start.ok_or(GridError::MissingStart)?,
            dest: dest.ok_or(GridError::MissingDest)?,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn dest(&self) -> Position {
        self.dest
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.height && pos.col < self.width).then(|| pos.row * self.width + pos.col)
    }

    /// Récupère une case en lecture seule.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    fn cell(&self, pos: Position) -> Cell {
        self.get(pos).unwrap_or(Cell::Wall)
    }

    pub fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 >= self.height || pos.col + 1 >= self.width
    }

    pub fn is_anchor(&self, pos: Position) -> bool {
        pos == self.start || pos == self.dest
    }

    /// Lignes de la grille, de haut en bas.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Positions intérieures (hors bordure), ligne par ligne.
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        let (height, width) = (self.height, self.width);
        (1..height - 1).flat_map(move |row| (1..width - 1).map(move |col| Position::new(row, col)))
    }

    /// Ouvertures autour de `pos`. Hors grille compte comme mur.
    pub fn open_neighbors(&self, pos: Position) -> OpenNeighbors {
        let open = |dir: Direction| pos.step(dir).is_some_and(|next| self.cell(next).is_open());
        OpenNeighbors {
            north: open(Direction::North),
            east: open(Direction::East),
            south: open(Direction::South),
            west: open(Direction::West),
        }
    }

    fn open_count(&self, pos: Position) -> usize {
        self.open_neighbors(pos).count()
    }

    /// Cul-de-sac : case praticable avec une seule voisine ouverte.
    pub fn is_dead_end(&self, pos: Position) -> bool {
        self.cell(pos).is_walkable() && self.open_count(pos) == 1
    }

    /// Embranchement : case praticable avec au moins trois voisines ouvertes.
    pub fn is_branch(&self, pos: Position) -> bool {
        self.cell(pos).is_walkable() && self.open_count(pos) > 2
    }

    /// Emmurée : aucune voisine ouverte, quel que soit le type de la case.
    pub fn is_walled_in(&self, pos: Position) -> bool {
        self.open_count(pos) == 0
    }

    pub fn count_branches(&self) -> usize {
        self.interior().filter(|pos| self.is_branch(*pos)).count()
    }

    /// Nombre de culs-de-sac, départ et arrivée compris.
    pub fn count_dead_ends(&self) -> usize {
        self.interior().filter(|pos| self.is_dead_end(*pos)).count()
    }

    pub fn count_kind(&self, kind: Cell) -> usize {
        self.interior().filter(|pos| self.cell(*pos) == kind).count()
    }

    /// Toutes les positions d'un type donné, ligne par ligne.
    pub fn find_all(&self, kind: Cell) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == kind)
            .map(|(i, _)| Position::new(i / self.width, i % self.width))
            .collect()
    }

    /// Cases ouvertes atteignables depuis `from`, `from` compris.
    pub fn reachable_from(&self, from: Position) -> HashSet<Position> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        if self.get(from).is_some_and(Cell::is_open) {
            visited.insert(from);
            queue.push_back(from);
        }
        while let Some(pos) = queue.pop_front() {
            for dir in self.open_neighbors(pos).directions() {
                if let Some(next) = pos.step(dir) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        visited
    }

    /// Mure une case de chemin et renvoie `true` ; toute autre case est laissée
    /// telle quelle. Le chemin n'est jamais sur la bordure ni sur une ancre.
    pub(crate) fn fill_path(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i] == Cell::Path => {
                self.cells[i] = Cell::Wall;
                true
            }
            _ => false,
        }
    }

    /// Remplace une case intérieure. La bordure et les ancres sont protégées,
    /// et on ne peut pas créer un second départ ou une seconde arrivée.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> Result<(), GridError> {
        let index = self.index(pos).ok_or(GridError::OutOfBounds(pos))?;
        if self.is_border(pos) || self.is_anchor(pos) || cell.is_anchor() {
            return Err(GridError::ProtectedCell(pos));
        }
        self.cells[index] = cell;
        Ok(())
    }

    /// Variante par valeur de [`Grid::set_cell`].
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Result<Grid, GridError> {
        let mut grid = self.clone();
        grid.set_cell(pos, cell)?;
        Ok(grid)
    }
}
