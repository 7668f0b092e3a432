//! holdem-rs: a No-Limit Texas Hold'em engine
//!
//! Goals:
//! - Correct NLHE betting: min-raise law, short all-ins, side pots
//! - Deterministic play from a seed; every table owns its RNG
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_rs::cards::parse_cards;
//! use holdem_rs::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.category, Category::OnePair);
//! assert_eq!(eval.description(), "Pair of Aces");
//! ```
//!
//! ## Quick start: play a hand
//! ```
//! use holdem_rs::action::ActionKind;
//! use holdem_rs::config::TableConfig;
//! use holdem_rs::game::{Game, Phase};
//!
//! let mut game = Game::new(TableConfig::new(2).with_seed(7)).unwrap();
//! game.start_hand().unwrap();
//! game.take_action(ActionKind::Fold, 0).unwrap();
//! assert_eq!(game.phase(), Phase::HandOver);
//! assert_eq!(game.winners()[0].amount, 30);
//! ```
//!
//! ## Simulator
//! Run random agents against each other with:
//! ```sh
//! RUST_LOG=info cargo run --bin holdem-sim -- --players 6 --hands 50 --seed 1
//! ```

pub mod action;
pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod player;
pub mod pot;
pub mod rules;
pub mod state;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
