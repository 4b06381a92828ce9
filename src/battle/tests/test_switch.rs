#[cfg(test)]
mod tests {
    use crate::battle::commands::BattleCommand;
    use crate::battle::engine::{
        player_action_commands, BattleAction, CAPTURE_REVEAL_DELAY_MS, RETURN_AFTER_CAPTURE_MS,
    };
    use crate::battle::state::{BattleEvent, BattlePhase, Encounter, EncounterId};
    use crate::battle::tests::common::{battle_log, scripted_battle, species_roll, ENCOUNTER_HIT};
    use crate::creature::Creature;
    use crate::errors::{ActionError, EngineError, PartyError};
    use crate::inventory::Inventory;
    use crate::party::Party;
    use crate::rng::GameRng;
    use crate::session::GameMode;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Species;

    fn creature(species: Species, level: u8) -> Creature {
        Creature::new(species, level).unwrap()
    }

    fn two_member_party() -> Party {
        let mut party = Party::new(creature(Species::Pikachu, 5));
        party.add_captured(creature(Species::Squirtle, 4));
        party
    }

    fn switch_in_battle(party: &Party, index: usize) -> Result<Vec<BattleCommand>, EngineError> {
        let encounter = Encounter::new(EncounterId(1), creature(Species::Pidgey, 3));
        let inventory = Inventory::new(0, 1, 0);
        // Switching never draws from the RNG.
        let mut rng = GameRng::scripted(vec![]);
        player_action_commands(
            BattleAction::Switch { index },
            &encounter,
            party,
            &inventory,
            &mut rng,
        )
    }

    // --- Unit tests for the switch commands ---

    #[test]
    fn a_switch_changes_the_lead_and_keeps_the_turn() {
        let party = two_member_party();
        let commands = switch_in_battle(&party, 1).unwrap();

        // No SetPhase command: the player still owes an action.
        assert_eq!(
            commands,
            vec![
                BattleCommand::SwitchActive { index: 1 },
                BattleCommand::EmitEvent(BattleEvent::CreatureSentOut {
                    species: Species::Squirtle,
                }),
            ]
        );
    }

    #[test]
    fn switching_to_the_active_slot_does_nothing() {
        let party = two_member_party();
        let commands = switch_in_battle(&party, 0).unwrap();
        assert_eq!(commands, Vec::new());
    }

    #[rstest]
    #[case(2, EngineError::Party(PartyError::InvalidIndex(2)))]
    #[case(7, EngineError::Party(PartyError::InvalidIndex(7)))]
    fn switching_out_of_range_is_refused(#[case] index: usize, #[case] expected: EngineError) {
        let party = two_member_party();
        assert_eq!(switch_in_battle(&party, index).unwrap_err(), expected);
    }

    #[test]
    fn switching_to_a_fainted_member_is_refused() {
        let mut party = two_member_party();
        let target = party.member_mut(1).unwrap();
        target.take_damage(target.max_hp);

        assert_eq!(
            switch_in_battle(&party, 1).unwrap_err(),
            EngineError::Party(PartyError::TargetFainted(1))
        );
    }

    // --- Session-level switching ---

    #[test]
    fn an_in_battle_switch_is_logged_and_leaves_the_turn_open() {
        // Script: capture roll (full-health floor), capture payout, then a
        // second encounter check, species, and level.
        let mut session = scripted_battle(
            Species::Rattata,
            3,
            vec![30, 25, ENCOUNTER_HIT, species_roll(Species::Pidgey), 3],
        );

        // Catch the Rattata so the party has a bench.
        session
            .submit_battle_action(BattleAction::ThrowPokeball)
            .unwrap();
        session.advance(CAPTURE_REVEAL_DELAY_MS);
        session.advance(RETURN_AFTER_CAPTURE_MS);
        assert_eq!(session.party().members().len(), 2);

        // Walk into a second battle and send the Rattata out.
        let outcome = session.move_player(1, 0).unwrap();
        assert!(outcome.encounter_started);
        session.switch_active(1).unwrap();

        assert_eq!(session.party().active().species, Species::Rattata);
        assert_eq!(session.encounter().unwrap().phase, BattlePhase::PlayerTurn);
        assert_eq!(
            battle_log(&session),
            ["A wild Pidgey appeared!", "Go Rattata!"].map(String::from)
        );

        // Re-selecting the active slot adds nothing to the log.
        session.switch_active(1).unwrap();
        assert_eq!(battle_log(&session).len(), 2);
    }

    #[test]
    fn overworld_switching_requires_the_menu() {
        let mut session = scripted_battle(Species::Pidgey, 3, vec![]);
        session.submit_battle_action(BattleAction::Flee).unwrap();
        session.advance(10_000);
        assert_eq!(session.mode(), GameMode::Overworld);

        let err = session.switch_active(0).unwrap_err();
        assert_eq!(
            err,
            EngineError::Action(ActionError::WrongMode {
                required: GameMode::Menu,
                current: GameMode::Overworld,
            })
        );

        session.enter_menu().unwrap();
        // A one-member party can only re-select its lead.
        session.switch_active(0).unwrap();
        assert_eq!(
            session.switch_active(1).unwrap_err(),
            EngineError::Party(PartyError::InvalidIndex(1))
        );
    }
}
