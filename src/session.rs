use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::{Agent, StepOutcome};
use crate::digits::PiDigits;
use crate::maze::Maze;

/// État de la partie en cours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// L'agent est en route vers la sortie.
    Traveling,
    /// La sortie est atteinte. État terminal jusqu'au prochain reset.
    Arrived,
}

/// Une partie : le labyrinthe, l'agent et la source de décimales,
/// possédés ensemble et remplacés ensemble au reset.
///
/// Le départ est la cellule (0, 0), la sortie la cellule opposée
/// (width - 1, height - 1).
pub struct Session {
    maze: Maze,
    agent: Agent,
    digits: PiDigits,
    exit: (i32, i32),
    state: SessionState,
    rng: StdRng,
}

impl Session {
    pub fn new(width: i32, height: i32) -> Self {
        Self::build(width, height, StdRng::from_os_rng())
    }

    /// Partie reproductible : la graine ne pilote que le creusement du
    /// labyrinthe, les décimales de pi sont déterministes par nature.
    pub fn with_seed(width: i32, height: i32, seed: u64) -> Self {
        Self::build(width, height, StdRng::seed_from_u64(seed))
    }

    fn build(width: i32, height: i32, mut rng: StdRng) -> Self {
        let maze = Maze::generate(width, height, &mut rng);
        let agent = Agent::new(0, 0);
        let exit = (width - 1, height - 1);
        // cas dégénéré 1x1 : départ et sortie confondus, la partie est
        // gagnée avant le moindre pas
        let state = if agent.position() == exit {
            SessionState::Arrived
        } else {
            SessionState::Traveling
        };
        Self {
            maze,
            agent,
            digits: PiDigits::new(),
            exit,
            state,
            rng,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn digits(&self) -> &PiDigits {
        &self.digits
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn exit(&self) -> (i32, i32) {
        self.exit
    }

    /// Un tick de simulation. Renvoie `None` une fois arrivé : plus
    /// aucune décimale n'est consommée jusqu'au reset.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.state == SessionState::Arrived {
            return None;
        }
        let outcome = self.agent.step(&self.maze, &mut self.digits);
        if outcome == StepOutcome::Moved && self.agent.position() == self.exit {
            self.state = SessionState::Arrived;
        }
        Some(outcome)
    }

    /// Remplace d'un bloc labyrinthe, agent et source de décimales,
    /// aux mêmes dimensions (la touche espace du jeu d'origine). Le
    /// flux du générateur aléatoire continue : deux resets successifs
    /// donnent très probablement deux labyrinthes différents.
    pub fn reset(&mut self) {
        self.maze = Maze::generate(self.maze.width, self.maze.height, &mut self.rng);
        self.agent = Agent::new(0, 0);
        self.digits = PiDigits::new();
        self.state = if self.agent.position() == self.exit {
            SessionState::Arrived
        } else {
            SessionState::Traveling
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::DigitStream;

    #[test]
    fn test_1x1_arrived_before_any_step() {
        let mut session = Session::with_seed(1, 1, 3);
        assert_eq!(session.state(), SessionState::Arrived);
        assert_eq!(session.agent().moves_made, 0);
        assert_eq!(session.agent().stuck_count, 0);
        assert_eq!(session.step(), None);
        assert_eq!(session.digits().current_index(), 0);
    }

    #[test]
    fn test_one_digit_per_tick() {
        let mut session = Session::with_seed(9, 7, 11);
        let mut issued = 0u32;
        for _ in 0..200 {
            if session.step().is_some() {
                issued += 1;
            } else {
                break;
            }
        }
        let agent = session.agent();
        assert_eq!(agent.moves_made + agent.stuck_count, issued);
        assert_eq!(session.digits().current_index(), issued as usize);
    }

    #[test]
    fn test_arrives_on_corridor_maze() {
        // en 5x1 l'arbre couvrant est forcément le couloir complet ;
        // la marche pilotée par pi atteint le bout très vite
        let mut session = Session::with_seed(5, 1, 23);
        let mut steps = 0;
        while session.state() == SessionState::Traveling && steps < 2000 {
            session.step();
            steps += 1;
        }
        assert_eq!(session.state(), SessionState::Arrived);
        assert_eq!(session.agent().position(), session.exit());
        assert_eq!(session.step(), None);
    }

    #[test]
    fn test_reset_replaces_the_triple() {
        let mut session = Session::with_seed(6, 5, 31);
        for _ in 0..50 {
            session.step();
        }
        session.reset();

        assert_eq!(session.state(), SessionState::Traveling);
        assert_eq!(session.agent().position(), (0, 0));
        assert_eq!(session.agent().moves_made, 0);
        assert_eq!(session.agent().stuck_count, 0);
        assert_eq!(session.digits().current_index(), 0);
        // la validité du labyrinthe, elle, ne dépend pas du tirage
        assert_eq!(session.maze().open_wall_count(), 6 * 5 - 1);

        session.reset();
        assert_eq!(session.maze().open_wall_count(), 6 * 5 - 1);
    }
}
