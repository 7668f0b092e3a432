use holdem_rs::agents::{Agent, AgentTable, RandomAgent, RandomProfile};
use holdem_rs::config::TableConfig;
use holdem_rs::game::{Game, Phase};
use proptest::prelude::*;

fn table_total(game: &Game) -> u64 {
    game.players().iter().map(|p| p.stack()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn chips_are_conserved_action_by_action(
        seed in any::<u64>(),
        n in 2usize..=6,
        stacks in prop::collection::vec(1u64..600, 6),
        aggression in 0.0f64..1.0,
    ) {
        let stacks = stacks[..n].to_vec();
        let total: u64 = stacks.iter().sum();
        let cfg = TableConfig::new(n).with_blinds(5, 10).with_stacks(stacks).with_seed(seed);
        let mut game = Game::new(cfg).unwrap();
        let mut agents: Vec<RandomAgent> = (0..n)
            .map(|i| RandomAgent::new(RandomProfile::default().with_seed(seed ^ i as u64).with_probabilities(0.15, aggression)))
            .collect();

        for _ in 0..15 {
            if game.start_hand().is_err() {
                break;
            }
            let mut steps = 0;
            while let Some(seat) = game.current_seat() {
                let id = game.players()[seat].id().to_string();
                let state = game.state(Some(&id));
                let decision = agents[seat].act(&state);
                game.take_action(decision.kind, decision.amount).unwrap();
                prop_assert_eq!(table_total(&game) + game.pot_total() - game.winners().iter().map(|w| w.amount).sum::<u64>(), total);
                steps += 1;
                prop_assert!(steps < 500, "hand did not terminate");
            }
            prop_assert_eq!(game.phase(), Phase::HandOver);
            prop_assert_eq!(table_total(&game), total);
            prop_assert!(!game.winners().is_empty());
        }
    }

    #[test]
    fn agent_table_sessions_conserve_chips(seed in any::<u64>(), n in 2usize..=8) {
        let cfg = TableConfig::new(n).with_starting_stack(300).with_seed(seed);
        let mut game = Game::new(cfg).unwrap();
        let mut table = AgentTable::new();
        for (i, p) in game.players().iter().enumerate() {
            table.set_agent(p.id(), Box::new(RandomAgent::seeded(seed.wrapping_add(i as u64))));
        }
        for _ in 0..10 {
            if game.players().iter().filter(|p| p.stack() > 0).count() < 2 {
                break;
            }
            let winners = table.play_hand(&mut game).unwrap();
            prop_assert!(!winners.is_empty());
            prop_assert_eq!(table_total(&game), 300 * n as u64);
        }
    }
}
