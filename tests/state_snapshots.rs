use holdem_rs::action::{ActionKind, LegalAction};
use holdem_rs::cards::Card;
use holdem_rs::config::TableConfig;
use holdem_rs::game::{Game, Phase, FOLD_WIN_DESCRIPTION};
use holdem_rs::state::GameState;

fn started(n: usize) -> Game {
    let mut g = Game::new(TableConfig::new(n).with_seed(31)).unwrap();
    g.start_hand().unwrap();
    g
}

#[test]
fn public_state_hides_hole_cards() {
    let g = started(3);
    let state = g.state(None);
    assert!(state.private.is_none());
    let json = serde_json::to_value(&state.public).unwrap();
    assert!(json.get("hole_cards").is_none());
    assert_eq!(json["phase"], "PREFLOP");
    assert_eq!(json["pot"], 30);
    assert_eq!(json["current_player"], "P1");
}

#[test]
fn private_state_for_the_actor() {
    let g = started(3);
    let state = g.state(Some("P1"));
    assert!(state.is_turn_of("P1"));
    let private = state.private.expect("seated player");
    assert_eq!(private.hole_cards.len(), 2);
    assert_eq!(
        private.legal_actions,
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
    );
    assert_eq!(private.chips_to_call, 20);
    assert_eq!(private.min_raise, 40);
    let range = private.raise_range.expect("raise open");
    assert_eq!((range.min, range.max), (40, 1000));
    assert_eq!(private.pot_raises.len(), 4);
    // Pot 30 plus the call of 20, on top of the 20 bet.
    assert_eq!(private.pot_raises[2].name, "Pot");
    assert_eq!(private.pot_raises[2].total, 70);
    assert!(private.pot_raises[2].valid);
    assert!(private.pot_raises.iter().all(|h| (range.min..=range.max).contains(&h.total)));
}

#[test]
fn private_state_off_turn_has_no_actions() {
    let g = started(3);
    let state = g.state(Some("P2"));
    assert!(!state.is_turn_of("P2"));
    let private = state.private.expect("seated player");
    assert_eq!(private.hole_cards.len(), 2);
    assert!(private.legal_actions.is_empty());
    assert!(private.raise_range.is_none());
    assert!(g.legal_actions_for("P2").is_empty());
    assert!(!g.legal_actions_for("P1").is_empty());
    assert!(g.state(Some("nobody")).private.is_none());
}

#[test]
fn snapshots_round_trip_through_json() {
    let g = started(4);
    let state = g.state(Some("P1"));
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);

    let legal = serde_json::to_value(g.legal_actions()).unwrap();
    assert_eq!(legal[0]["type"], "FOLD");
    assert_eq!(serde_json::to_value(LegalAction::Call { amount: 5 }).unwrap()["amount"], 5);
}

#[test]
fn cards_serialize_as_tokens() {
    let card: Card = "Td".parse().unwrap();
    assert_eq!(serde_json::to_string(&card).unwrap(), "\"Td\"");
    let back: Card = serde_json::from_str("\"Td\"").unwrap();
    assert_eq!(back, card);
}

#[test]
fn winners_appear_once_the_hand_is_over() {
    let mut g = started(2);
    assert!(g.state(None).public.winners.is_empty());
    g.take_action(ActionKind::Fold, 0).unwrap();
    let public = g.state(None).public;
    assert_eq!(public.phase, Phase::HandOver);
    assert_eq!(public.winners.len(), 1);
    assert_eq!(public.winners[0].description, FOLD_WIN_DESCRIPTION);
    assert!(public.winners[0].category.is_none());
    assert!(public.current_player.is_none());
}
