use crate::direction::Direction;
use crate::walls::Walls;

/// Représente une cellule du labyrinthe.
///
/// Une cellule ne porte que sa configuration de murs : l'état "visitée"
/// utilisé pendant la génération est transitoire et reste interne au
/// creusement, il ne fait pas partie du contrat de la cellule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
}

impl Cell {
    /// Le mur de ce côté est-il présent ?
    pub fn has_wall(&self, side: Direction) -> bool {
        self.walls.has(side)
    }
}
