use std::collections::HashSet;

use crate::digits::DigitStream;
use crate::direction::Direction;
use crate::maze::Maze;

/// Résultat d'un pas de simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// L'agent a franchi un passage ouvert.
    Moved,
    /// Le mur tiré était fermé : la décimale est consommée, la
    /// position ne bouge pas. Occurrence normale, simplement comptée.
    Blocked,
}

/// Le joueur : une position, les cellules traversées et les compteurs
/// de la partie. Il interroge le labyrinthe et la source de décimales
/// mais ne les possède pas.
#[derive(Debug)]
pub struct Agent {
    pub x: i32,
    pub y: i32,
    /// Cellules traversées depuis le départ (appartenance seule).
    pub visited_cells: HashSet<(i32, i32)>,
    pub moves_made: u32,
    pub stuck_count: u32,
    /// Dernière décimale tirée, pour l'affichage.
    pub current_digit: Option<u8>,
}

impl Agent {
    pub fn new(x: i32, y: i32) -> Self {
        let mut visited_cells = HashSet::new();
        visited_cells.insert((x, y));
        Self {
            x,
            y,
            visited_cells,
            moves_made: 0,
            stuck_count: 0,
            current_digit: None,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Un pas de simulation : consomme exactement une décimale, même en
    /// cas de blocage, et tente le déplacement correspondant.
    pub fn step(&mut self, maze: &Maze, digits: &mut dyn DigitStream) -> StepOutcome {
        let digit = digits.next_digit();
        self.current_digit = Some(digit);
        let dir = Direction::from_digit(digit);

        let cell = maze
            .get_cell(self.x, self.y)
            .unwrap_or_else(|| panic!("agent hors du labyrinthe en ({}, {})", self.x, self.y));
        if cell.has_wall(dir) {
            self.stuck_count += 1;
            return StepOutcome::Blocked;
        }

        let (dx, dy) = dir.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);
        // un mur percé implique une voisine réelle : sortir de la
        // grille serait un bug de construction du labyrinthe
        assert!(
            maze.in_bounds(nx, ny),
            "mur percé vers l'extérieur en ({}, {})",
            self.x,
            self.y
        );

        self.x = nx;
        self.y = ny;
        self.visited_cells.insert((nx, ny));
        self.moves_made += 1;
        StepOutcome::Moved
    }
}
