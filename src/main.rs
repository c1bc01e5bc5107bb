use std::thread;
use std::time::Duration;

use anyhow::ensure;
use clap::Parser;

use pi_laby::{Direction, Session, SessionState, FPS, MAZE_HEIGHT, MAZE_WIDTH};

/// Pi joue au labyrinthe : pilote console de la simulation.
///
/// Tient lieu de Presenter : un tick par trame, puis lecture de l'état
/// du labyrinthe et de l'agent pour l'affichage.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Largeur du labyrinthe en cellules
    #[arg(long, default_value_t = MAZE_WIDTH)]
    width: i32,

    /// Hauteur du labyrinthe en cellules
    #[arg(long, default_value_t = MAZE_HEIGHT)]
    height: i32,

    /// Graine du creusement (tirage aléatoire si absente)
    #[arg(long)]
    seed: Option<u64>,

    /// Nombre maximum de pas par partie avant abandon
    #[arg(long, default_value_t = 50_000)]
    max_steps: u64,

    /// Nombre de parties à jouer (reset complet entre chaque)
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Ignorer la cadence cible et simuler à pleine vitesse
    #[arg(long)]
    fast: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    ensure!(
        args.width > 0 && args.height > 0,
        "dimensions invalides: {}x{}",
        args.width,
        args.height
    );

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(args.width, args.height, seed),
        None => Session::new(args.width, args.height),
    };

    println!("Pi joue ! Labyrinthe: {}x{}", args.width, args.height);
    let (exit_x, exit_y) = session.exit();
    println!("Départ: (0, 0) | Sortie: ({}, {})", exit_x, exit_y);

    for game in 1..=args.games {
        if game > 1 {
            session.reset();
            println!("--- Partie {} ---", game);
        }
        run_game(&mut session, &args);
    }
    Ok(())
}

fn run_game(session: &mut Session, args: &Args) {
    let tick = Duration::from_millis(1000 / FPS);
    let mut steps = 0u64;

    while session.state() == SessionState::Traveling && steps < args.max_steps {
        session.step();
        steps += 1;
        if steps % 500 == 0 {
            print_status(session);
        }
        if !args.fast {
            thread::sleep(tick);
        }
    }

    if session.state() == SessionState::Arrived {
        println!("VICTOIRE !");
        println!("{} décimales jouées", session.digits().current_index());
    } else {
        print_status(session);
        println!("Abandon après {} pas", steps);
    }
}

fn print_status(session: &Session) {
    let agent = session.agent();
    let digit = match agent.current_digit {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    };
    let action = match agent.current_digit {
        Some(d) => Direction::from_digit(d).label(),
        None => "-",
    };
    println!(
        "Décimale: {} | Action: {} | Mouvements: {} | Bloqué: {} | Total: {} | Index: {} | Position: ({}, {})",
        digit,
        action,
        agent.moves_made,
        agent.stuck_count,
        agent.moves_made + agent.stuck_count,
        session.digits().current_index(),
        agent.x,
        agent.y
    );
}
