use holdem_rs::action::ActionKind;
use holdem_rs::config::TableConfig;
use holdem_rs::game::{Game, Phase};

#[test]
fn history_records_actions_with_their_street() {
    let mut game = Game::new(TableConfig::new(2).with_blinds(5, 10).with_seed(4)).unwrap();
    game.start_hand().unwrap();
    assert!(game.history().is_empty());
    assert_eq!(game.players()[0].last_action(), Some("SB 5"));
    assert_eq!(game.players()[1].last_action(), Some("BB 10"));

    let call = game.take_action(ActionKind::Call, 0).unwrap();
    assert_eq!(call.player_id, "P1");
    assert_eq!(call.kind, ActionKind::Call);
    assert_eq!(call.total, 10);
    assert_eq!(call.phase, Phase::Preflop);
    assert_eq!(game.players()[0].last_action(), Some("Call 5"));

    game.take_action(ActionKind::Check, 0).unwrap();
    assert_eq!(game.phase(), Phase::Flop);
    assert!(game.round_actions().is_empty());

    let bet = game.take_action(ActionKind::Bet, 30).unwrap();
    assert_eq!(bet.phase, Phase::Flop);
    assert_eq!(bet.raise_increment, 30);
    assert_eq!(game.round_actions().len(), 1);
    assert_eq!(game.players()[1].last_action(), Some("Bet 30"));

    let recent = game.history_recent(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].kind, ActionKind::Check);
    assert_eq!(recent[1], bet);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.history_recent(10).len(), 3);
}

#[test]
fn history_resets_with_each_hand() {
    let mut game = Game::new(TableConfig::new(3).with_seed(6)).unwrap();
    game.start_hand().unwrap();
    game.take_action(ActionKind::Raise, 60).unwrap();
    game.take_action(ActionKind::Fold, 0).unwrap();
    game.take_action(ActionKind::Fold, 0).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.players()[0].last_action(), Some("Win 90"));

    game.start_hand().unwrap();
    assert!(game.history().is_empty());
    assert!(game.winners().is_empty());
}
