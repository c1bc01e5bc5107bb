use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cell::Cell;
use crate::direction::Direction;

/// Grille de cellules entièrement reliées par un arbre couvrant.
///
/// Une fois générée, la configuration de murs ne change plus : entre
/// deux cellules quelconques il existe exactement un chemin, sans cycle
/// et sans zone isolée.
#[derive(Debug)]
pub struct Maze {
    pub width: i32,
    pub height: i32,
    grid: Vec<Cell>,
}

impl Maze {
    /// Génère un labyrinthe `width` x `height` par creusement en
    /// profondeur (recursive backtracker), avec une pile explicite :
    ///
    /// 1. on part de (0,0), marquée visitée ;
    /// 2. tant que la cellule courante a des voisines non visitées, on
    ///    en tire une au hasard, on empile la cellule courante, on perce
    ///    le mur commun et on avance ;
    /// 3. sans voisine libre, on dépile (retour en arrière) ;
    /// 4. pile vide : le creusement est terminé, chaque cellule a été
    ///    visitée exactement une fois.
    pub fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let mut maze = Self::closed(width, height);
        maze.carve(rng);
        maze
    }

    /// Grille aux murs tous fermés, avant creusement.
    pub(crate) fn closed(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "dimensions de labyrinthe invalides: {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            grid: vec![Cell::default(); (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// La position (x, y) est-elle dans la grille ?
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Récupère une cellule en lecture seule. Hors de la grille,
    /// renvoie `None` : "pas de voisine ici", jamais une erreur.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.grid[self.index(x, y)])
        } else {
            None
        }
    }

    /// Perce le mur entre (x, y) et sa voisine dans la direction `dir`.
    /// Le retrait est toujours symétrique : le mur jumeau de la voisine
    /// tombe dans le même geste.
    pub(crate) fn remove_wall(&mut self, (x, y): (i32, i32), dir: Direction) {
        let (dx, dy) = dir.delta();
        let here = self.index(x, y);
        let there = self.index(x + dx, y + dy);
        self.grid[here].walls.clear(dir);
        self.grid[there].walls.clear(dir.opposite());
    }

    fn carve(&mut self, rng: &mut impl Rng) {
        // l'état "visitée" ne vit que le temps du creusement
        let mut visited = vec![false; self.grid.len()];
        let mut stack: Vec<(i32, i32)> = Vec::new();
        let mut current = (0, 0);
        visited[self.index(0, 0)] = true;

        loop {
            let candidates: Vec<Direction> = Direction::ALL
                .iter()
                .copied()
                .filter(|dir| {
                    let (dx, dy) = dir.delta();
                    let (nx, ny) = (current.0 + dx, current.1 + dy);
                    self.in_bounds(nx, ny) && !visited[self.index(nx, ny)]
                })
                .collect();

            if let Some(&dir) = candidates.choose(rng) {
                let (dx, dy) = dir.delta();
                let next = (current.0 + dx, current.1 + dy);
                visited[self.index(next.0, next.1)] = true;
                stack.push(current);
                self.remove_wall(current, dir);
                current = next;
            } else if let Some(cell) = stack.pop() {
                current = cell;
            } else {
                break;
            }
        }
    }

    /// Nombre de passages ouverts (paires de murs percés). Un arbre
    /// couvrant en compte exactement width * height - 1.
    pub fn open_wall_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = &self.grid[self.index(x, y)];
                if !cell.walls.east && x + 1 < self.width {
                    count += 1;
                }
                if !cell.walls.south && y + 1 < self.height {
                    count += 1;
                }
            }
        }
        count
    }
}
