use crate::direction::Direction;

/// Ensemble des 4 murs d'une cellule. Tous présents à la création,
/// retirés un à un par le creusement du labyrinthe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }
}

impl Walls {
    /// Le mur de ce côté est-il encore présent ?
    pub fn has(&self, side: Direction) -> bool {
        match side {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Retire le mur de ce côté. Le retrait du mur jumeau de la cellule
    /// voisine est à la charge de l'appelant (voir `Maze::remove_wall`).
    pub(crate) fn clear(&mut self, side: Direction) {
        match side {
            Direction::North => self.north = false,
            Direction::East => self.east = false,
            Direction::South => self.south = false,
            Direction::West => self.west = false,
        }
    }
}
