use clap::Parser;
use holdem_rs::agents::{AgentTable, RandomAgent, RandomProfile};
use holdem_rs::config::TableConfig;
use holdem_rs::game::Game;
use std::process::ExitCode;

/// Play hands of No-Limit Hold'em between random agents.
#[derive(Debug, Parser)]
#[command(name = "holdem-sim", version, about)]
struct Args {
    /// Players at the table (2-10).
    #[arg(short, long, default_value_t = 6)]
    players: usize,
    /// Hands to play; stops early when one player has every chip.
    #[arg(long, default_value_t = 100)]
    hands: u64,
    /// Seed for the deck and the agents.
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 10)]
    small_blind: u64,
    #[arg(long, default_value_t = 20)]
    big_blind: u64,
    /// Starting stack for every player.
    #[arg(long, default_value_t = 1000)]
    stack: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = TableConfig::new(args.players)
        .with_blinds(args.small_blind, args.big_blind)
        .with_starting_stack(args.stack);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid table: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut table = AgentTable::new();
    for (i, player) in game.players().iter().enumerate() {
        let mut profile = RandomProfile::default();
        if let Some(seed) = args.seed {
            profile = profile.with_seed(seed.wrapping_add(i as u64 + 1));
        }
        table.set_agent(player.id(), Box::new(RandomAgent::new(profile)));
    }

    for _ in 0..args.hands {
        if game.players().iter().filter(|p| p.stack() > 0).count() < 2 {
            break;
        }
        let winners = match table.play_hand(&mut game) {
            Ok(winners) => winners,
            Err(err) => {
                eprintln!("hand #{} aborted: {err}", game.hand_number());
                return ExitCode::FAILURE;
            }
        };
        let board: Vec<String> = game.board().as_slice().iter().map(|c| c.to_string()).collect();
        println!("hand #{} [{}]", game.hand_number(), board.join(" "));
        for w in &winners {
            println!("  {} wins {} ({})", w.player_id, w.amount, w.description);
        }
    }

    println!("final stacks after {} hands:", game.hand_number());
    for p in game.players() {
        println!("  {:<6} {:>8}", p.id(), p.stack());
    }
    ExitCode::SUCCESS
}
