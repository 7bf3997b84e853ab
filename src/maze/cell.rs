/// Représente une case du labyrinthe.
///
/// `Start` et `Dest` se comportent comme du chemin pour la connectivité, mais
/// ne sont jamais réécrites. `Blaze` ne sert qu'au tracé de la solution finale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Path,
    Start,
    Dest,
    Blaze,
}

impl Cell {
    /// Tout ce qui n'est pas un mur est ouvert.
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }

    /// Cases sur lesquelles on peut marcher : chemin, départ, arrivée.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Path | Cell::Start | Cell::Dest)
    }

    pub fn is_anchor(self) -> bool {
        matches!(self, Cell::Start | Cell::Dest)
    }
}
