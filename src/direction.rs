/// Les quatre directions absolues du labyrinthe.
///
/// L'axe y descend (la rangée 0 est en haut) : `North` correspond donc
/// au déplacement (0, -1) et `South` à (0, +1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Les quatre directions, dans l'ordre de balayage des voisins.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Associe une décimale de pi (0..=9) à une direction.
    ///
    /// La répartition est volontairement asymétrique (2 chiffres vers le
    /// haut, 3 vers la droite, 2 vers le bas, 3 vers la gauche) : c'est
    /// la règle du jeu, à conserver telle quelle.
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            0 | 1 => Direction::North,
            2..=4 => Direction::East,
            5 | 6 => Direction::South,
            _ => Direction::West,
        }
    }

    /// Déplacement (dx, dy) d'un pas dans cette direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Direction opposée (par ex. North -> South).
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Libellé affiché dans le panneau de statistiques.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "Haut ↑",
            Direction::East => "Droite →",
            Direction::South => "Bas ↓",
            Direction::West => "Gauche ←",
        }
    }
}
