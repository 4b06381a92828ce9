use crate::battle::engine::{
    BattleAction, RETURN_AFTER_FLEE_MS, RETURN_AFTER_VICTORY_MS, WILD_ACTION_DELAY_MS,
};
use crate::battle::state::BattlePhase;
use crate::battle::tests::common::{battle_log, scripted_battle};
use crate::errors::{ActionError, EngineError};
use crate::session::GameMode;
use pretty_assertions::assert_eq;
use schema::Species;

// Wild Rattata at level 5: 40 max HP, 63 attack.
// The player's default starter is a level 5 Pikachu: 45 max HP, 62 attack.

#[test]
fn attacks_whittle_the_wild_down_to_a_victory() {
    // Script: player damage, wild damage, player damage, wild damage,
    // finishing blow, victory payout.
    let mut session = scripted_battle(Species::Rattata, 5, vec![15, 8, 15, 9, 10, 77]);

    // Round 1: hit for 15, then the wild answers for 8.
    session.submit_battle_action(BattleAction::Attack).unwrap();
    assert_eq!(session.encounter().unwrap().wild.hp, 25);
    assert_eq!(session.encounter().unwrap().phase, BattlePhase::WildTurn);
    assert_eq!(session.advance(WILD_ACTION_DELAY_MS), 1);
    assert_eq!(session.party().active().hp, 37);
    assert_eq!(session.encounter().unwrap().phase, BattlePhase::PlayerTurn);

    // Round 2.
    session.submit_battle_action(BattleAction::Attack).unwrap();
    assert_eq!(session.encounter().unwrap().wild.hp, 10);
    assert_eq!(session.advance(WILD_ACTION_DELAY_MS), 1);
    assert_eq!(session.party().active().hp, 28);

    // Round 3: the finishing blow pays out and ends the battle.
    session.submit_battle_action(BattleAction::Attack).unwrap();
    assert_eq!(session.encounter().unwrap().wild.hp, 0);
    assert_eq!(session.encounter().unwrap().phase, BattlePhase::Won);
    assert_eq!(session.inventory().money, 1077);
    assert_eq!(session.mode(), GameMode::Battle);

    assert_eq!(
        battle_log(&session),
        [
            "A wild Rattata appeared!",
            "Pikachu dealt 15 damage!",
            "Wild Rattata dealt 8 damage!",
            "Pikachu dealt 15 damage!",
            "Wild Rattata dealt 9 damage!",
            "Pikachu dealt 10 damage!",
            "Wild Rattata fainted!",
            "You earned $77!",
        ]
        .map(String::from)
    );

    // The return beat tears the encounter down.
    assert_eq!(session.advance(RETURN_AFTER_VICTORY_MS), 1);
    assert_eq!(session.mode(), GameMode::Overworld);
    assert!(session.encounter().is_none());
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn actions_are_rejected_while_the_wild_turn_is_pending() {
    let mut session = scripted_battle(Species::Rattata, 5, vec![15]);
    session.submit_battle_action(BattleAction::Attack).unwrap();

    let err = session
        .submit_battle_action(BattleAction::Attack)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Action(ActionError::NotPlayerTurn(BattlePhase::WildTurn))
    );

    // Nothing moved: same wild HP, same log.
    assert_eq!(session.encounter().unwrap().wild.hp, 25);
    assert_eq!(battle_log(&session).len(), 2);
}

#[test]
fn a_battle_blocks_the_overworld_surfaces() {
    let mut session = scripted_battle(Species::Pidgey, 3, vec![]);

    let err = session.move_player(1, 0).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Action(ActionError::WrongMode { .. })
    ));

    let err = session.enter_shop().unwrap_err();
    assert!(matches!(
        err,
        EngineError::Action(ActionError::WrongMode { .. })
    ));

    let err = session.return_to_overworld().unwrap_err();
    assert_eq!(err, EngineError::Action(ActionError::BattleInProgress));

    assert_eq!(session.mode(), GameMode::Battle);
}

#[test]
fn fleeing_ends_the_battle_after_its_delay() {
    let mut session = scripted_battle(Species::Pidgey, 4, vec![]);
    session.submit_battle_action(BattleAction::Flee).unwrap();

    assert_eq!(session.encounter().unwrap().phase, BattlePhase::Fled);
    assert_eq!(session.mode(), GameMode::Battle);
    assert_eq!(
        battle_log(&session),
        ["A wild Pidgey appeared!", "You ran away safely!"].map(String::from)
    );

    assert_eq!(session.advance(RETURN_AFTER_FLEE_MS), 1);
    assert_eq!(session.mode(), GameMode::Overworld);
    assert!(session.encounter().is_none());
}

#[test]
fn the_wild_counterattack_keeps_hp_in_sync() {
    let mut session = scripted_battle(Species::Rattata, 3, vec![12, 30]);
    session.submit_battle_action(BattleAction::Attack).unwrap();
    assert_eq!(session.encounter().unwrap().wild.hp, 24);

    session.advance(WILD_ACTION_DELAY_MS);
    assert_eq!(session.party().active().hp, 15);
    assert_eq!(session.party().active().max_hp, 45);
    assert_eq!(
        battle_log(&session).last().map(String::as_str),
        Some("Wild Rattata dealt 30 damage!")
    );
}
