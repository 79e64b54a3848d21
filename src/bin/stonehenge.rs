use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use stonehenge::{
    apply_move, Controller, Error, Game, GameState, Move, Owner, Rules, SearchResult, Strategy,
};
use stonehenge::game::prompt_move;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerOpt {
    Human,
    Rough,
    Recursive,
    Iterative,
    Parallel,
}

impl PlayerOpt {
    fn controller(self) -> Controller {
        match self {
            PlayerOpt::Human => Controller::Human,
            PlayerOpt::Rough => Controller::Engine(Strategy::RoughOutcome),
            PlayerOpt::Recursive => Controller::Engine(Strategy::RecursiveMinimax),
            PlayerOpt::Iterative => Controller::Engine(Strategy::IterativeMinimax),
            PlayerOpt::Parallel => Controller::Engine(Strategy::ParallelMinimax),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineOpt {
    Recursive,
    Iterative,
    Parallel,
}

impl EngineOpt {
    fn strategy(self) -> Strategy {
        match self {
            EngineOpt::Recursive => Strategy::RecursiveMinimax,
            EngineOpt::Iterative => Strategy::IterativeMinimax,
            EngineOpt::Parallel => Strategy::ParallelMinimax,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "stonehenge", about = "Stonehenge ley-line capture game and exhaustive solver")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a game; each side is a human or an engine
    Play {
        /// Side length of the grid (1-5)
        #[arg(long, default_value_t = 2)]
        size: u8,

        /// Let p2 claim the first cell
        #[arg(long)]
        p2_starts: bool,

        #[arg(long, value_enum, default_value_t = PlayerOpt::Human)]
        p1: PlayerOpt,

        #[arg(long, value_enum, default_value_t = PlayerOpt::Recursive)]
        p2: PlayerOpt,
    },
    /// Solve a position and print the chosen move
    Solve {
        /// Side length of the grid (1-5)
        #[arg(long, default_value_t = 2)]
        size: u8,

        /// Let p2 claim the first cell
        #[arg(long)]
        p2_starts: bool,

        /// Moves played so far as a string of cell letters, e.g. "AD"
        #[arg(long, default_value = "")]
        moves: String,

        #[arg(long, value_enum, default_value_t = EngineOpt::Recursive)]
        engine: EngineOpt,

        /// Print a single JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct SolveOut {
    size: u8,
    to_move: Owner,
    best_move: Option<String>,
    value: i8,
    nodes: u64,
}

fn rules_for(size: u8, p2_starts: bool) -> Result<Rules, Error> {
    let first = if p2_starts { Owner::P2 } else { Owner::P1 };
    Rules::new(size, first)
}

fn spinner(msg: &str) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] {spinner} {msg}")?);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    Ok(pb)
}

fn read_move(state: &GameState) -> Result<Move, Error> {
    prompt_move(&mut io::stdin().lock(), &mut io::stdout(), state)
}

fn play(rules: Rules, p1: PlayerOpt, p2: PlayerOpt) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(rules, p1.controller(), p2.controller())?;
    println!("{}", game.state());
    while !game.is_over() {
        let engine_turn = game.controller(game.state().next) != Controller::Human;
        let pb = if engine_turn {
            Some(spinner(&format!("{} thinking", game.state().next))?)
        } else {
            None
        };
        let stepped = game.step(read_move);
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        match stepped {
            Ok(Some(mv)) => {
                println!("{} claims {mv}", game.state().next.other());
                println!("{}", game.state());
            }
            Ok(None) => break,
            Err(Error::InvalidMove { letter }) => println!("'{letter}' is not a legal move, try again"),
            Err(e) => return Err(e.into()),
        }
    }
    match game.winner() {
        Some(w) => println!("winner: {w}"),
        None => println!("no winner"),
    }
    Ok(())
}

fn solve(
    rules: Rules,
    moves: &str,
    engine: EngineOpt,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameState::new(rules)?;
    for c in moves.chars().filter(|c| !c.is_whitespace()) {
        state = apply_move(&state, Move::parse(&c.to_string()))?;
    }

    let pb = spinner("searching")?;
    let strategy = engine.strategy();
    let result = strategy.search(&state);
    pb.finish_and_clear();
    let Some(SearchResult {
        best_move,
        value,
        nodes,
    }) = result
    else {
        return Err(format!("{strategy:?} is not an exhaustive engine").into());
    };

    if json {
        let out = SolveOut {
            size: rules.size,
            to_move: state.next,
            best_move: best_move.map(|m| m.to_string()),
            value,
            nodes,
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{state}");
        match best_move {
            Some(mv) => println!("{} to move: best move {mv}, value {value}, nodes {nodes}", state.next),
            None => println!("game over, value {value} for {}", state.next),
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.command {
        Command::Play {
            size,
            p2_starts,
            p1,
            p2,
        } => play(rules_for(size, p2_starts)?, p1, p2),
        Command::Solve {
            size,
            p2_starts,
            moves,
            engine,
            json,
        } => solve(rules_for(size, p2_starts)?, &moves, engine, json),
    }
}
