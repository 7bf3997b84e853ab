/*!
 * # Symboles canoniques du labyrinthe
 *
 * Conversion entre une `Grid` et sa représentation texte :
 * - `█` (ou `#`) pour un mur,
 * - une espace pour le chemin,
 * - `S` et `D` pour le départ et l'arrivée,
 * - `·` pour le tracé de la solution, en sortie seulement.
 *
 * Un fichier écrit dans un autre alphabet (`0`/`1` par exemple) se lit avec
 * [`parse_grid_with`] et un [`SourceSymbols`].
 */

use std::fmt;

use crate::maze::cell::Cell;
use crate::maze::error::GridError;
use crate::maze::grid::Grid;

pub const WALL_CHAR: char = '\u{2588}';
pub const PATH_CHAR: char = ' ';
pub const START_CHAR: char = 'S';
pub const DEST_CHAR: char = 'D';
pub const BLAZE_CHAR: char = '\u{00B7}';

/// Caractère affiché pour une case.
pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Wall => WALL_CHAR,
        Cell::Path => PATH_CHAR,
        Cell::Start => START_CHAR,
        Cell::Dest => DEST_CHAR,
        Cell::Blaze => BLAZE_CHAR,
    }
}

/// Case correspondant à un symbole canonique d'entrée (ou à l'alias `#`).
/// Le tracé `·` n'est jamais lu.
pub fn char_to_cell(symbol: char) -> Option<Cell> {
    match symbol {
        WALL_CHAR | '#' => Some(Cell::Wall),
        PATH_CHAR => Some(Cell::Path),
        START_CHAR => Some(Cell::Start),
        DEST_CHAR => Some(Cell::Dest),
        _ => None,
    }
}

/// Alphabet d'un fichier source, un caractère par type de case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSymbols {
    wall: char,
    path: char,
    start: char,
    dest: char,
}

impl Default for SourceSymbols {
    fn default() -> Self {
        Self {
            wall: WALL_CHAR,
            path: PATH_CHAR,
            start: START_CHAR,
            dest: DEST_CHAR,
        }
    }
}

impl SourceSymbols {
    /// Fichiers `0` pour les murs et `1` pour le chemin.
    pub const BINARY: SourceSymbols = SourceSymbols {
        wall: '0',
        path: '1',
        start: START_CHAR,
        dest: DEST_CHAR,
    };

    /// Les quatre symboles doivent être distincts.
    pub fn new(wall: char, path: char, start: char, dest: char) -> Result<Self, GridError> {
        let symbols = [wall, path, start, dest];
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[i + 1..].contains(symbol) {
                return Err(GridError::AmbiguousSymbol(*symbol));
            }
        }
        Ok(Self {
            wall,
            path,
            start,
            dest,
        })
    }

    /// Case d'un symbole source ; les symboles canoniques restent acceptés.
    pub fn cell(&self, symbol: char) -> Option<Cell> {
        match symbol {
            s if s == self.wall => Some(Cell::Wall),
            s if s == self.path => Some(Cell::Path),
            s if s == self.start => Some(Cell::Start),
            s if s == self.dest => Some(Cell::Dest),
            s => char_to_cell(s),
        }
    }
}

/// Traitement d'une bordure incomplète à la lecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    /// Une case ouverte sur le bord est une erreur.
    #[default]
    Required,
    /// Si une case du bord n'est pas un mur, la grille est entourée d'un cadre
    /// de murs.
    Complete,
}

/// Ajoute un cadre de murs autour de `rows` si son bord n'est pas entièrement
/// muré. Une grille vide ou irrégulière est rendue telle quelle.
fn complete_border(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    let Some(width) = rows.first().map(Vec::len) else {
        return rows;
    };
    if width == 0 || rows.iter().any(|row| row.len() != width) {
        return rows;
    }
    let last = rows.len() - 1;
    let on_border = |r: usize, c: usize| r == 0 || r == last || c == 0 || c == width - 1;
    let closed = rows.iter().enumerate().all(|(r, row)| {
        row.iter()
            .enumerate()
            .all(|(c, cell)| *cell == Cell::Wall || !on_border(r, c))
    });
    if closed {
        return rows;
    }

    let mut framed = Vec::with_capacity(rows.len() + 2);
    framed.push(vec![Cell::Wall; width + 2]);
    for row in rows {
        let mut line = Vec::with_capacity(width + 2);
        line.push(Cell::Wall);
        line.extend(row);
        line.push(Cell::Wall);
        framed.push(line);
    }
    framed.push(vec![Cell::Wall; width + 2]);
    framed
}

/// Lit une grille écrite en symboles canoniques, une ligne de texte par rangée.
///
/// Les fins de ligne (`\n`, `\r\n`) sont ignorées ainsi que les lignes vides en
/// fin de texte ; les espaces de fin de rangée sont conservées car elles sont
/// du chemin.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    parse_grid_with(text, &SourceSymbols::default(), Border::Required)
}

/// Lit une grille écrite dans l'alphabet `symbols`. Avec [`Border::Complete`],
/// les positions des erreurs de validation sont celles de la grille encadrée.
pub fn parse_grid_with(
    text: &str,
    symbols: &SourceSymbols,
    border: Border,
) -> Result<Grid, GridError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let rows = lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, symbol)| {
                    symbols
                        .cell(symbol)
                        .ok_or(GridError::UnknownSymbol { symbol, row, col })
                })
                .collect::<Result<Vec<Cell>, GridError>>()
        })
        .collect::<Result<Vec<Vec<Cell>>, GridError>>()?;

    match border {
        Border::Required => Grid::new(rows),
        Border::Complete => Grid::new(complete_border(rows)),
    }
}

/// Génère la représentation texte d'une grille, une rangée par ligne.
pub fn visualize_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height() * 3);
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| cell_to_char(*cell)));
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&visualize_grid(self))
    }
}
