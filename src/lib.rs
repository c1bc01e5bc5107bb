/*!
 * # pi-laby
 *
 * Pi joue au labyrinthe : un agent déterministe parcourt un labyrinthe
 * parfait généré aléatoirement, en choisissant sa direction à chaque pas
 * d'après la décimale suivante de pi.
 *
 * Le coeur est composé de trois briques :
 * - [`PiDigits`] : la source de décimales, à précision croissante ;
 * - [`Maze`] : la grille de cellules creusée en arbre couvrant ;
 * - [`Agent`] : le joueur qui consomme les décimales et tente d'avancer.
 *
 * La [`Session`] possède les trois et pilote l'état Traveling/Arrived.
 * L'affichage n'est pas couvert ici : un Presenter externe lit l'état
 * une fois par tick et dessine.
 */

pub mod agent;
pub mod cell;
pub mod digits;
pub mod direction;
pub mod maze;
pub mod session;
pub mod walls;

pub use agent::{Agent, StepOutcome};
pub use cell::Cell;
pub use digits::{DigitStream, PiDigits};
pub use direction::Direction;
pub use maze::Maze;
pub use session::{Session, SessionState};
pub use walls::Walls;

/// Largeur de la surface d'affichage visée, en pixels.
pub const WIDTH: i32 = 1200;
/// Hauteur de la surface d'affichage visée, en pixels.
pub const HEIGHT: i32 = 800;
/// Taille d'une cellule en pixels.
pub const CELL_SIZE: i32 = 60;
/// Largeur réservée au panneau de statistiques.
pub const PANEL_WIDTH: i32 = 250;

/// Dimensions du labyrinthe, dérivées de la surface d'affichage.
pub const MAZE_WIDTH: i32 = (WIDTH - PANEL_WIDTH) / CELL_SIZE;
pub const MAZE_HEIGHT: i32 = HEIGHT / CELL_SIZE;

/// Cadence cible de la boucle de simulation, en ticks par seconde.
pub const FPS: u64 = 100;

/// Précision initiale de la source de décimales (chiffres significatifs).
pub const INITIAL_PRECISION: usize = 1000;
/// Incrément de précision quand la source est épuisée.
pub const PRECISION_STEP: usize = 500;
