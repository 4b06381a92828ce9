#[cfg(test)]
mod tests {
    use crate::battle::commands::BattleCommand;
    use crate::battle::engine::{
        player_action_commands, wild_action_commands, BattleAction, RETURN_AFTER_LOSS_MS,
        WILD_ACTION_DELAY_MS,
    };
    use crate::battle::state::{BattleEvent, BattlePhase, Combatant, Encounter, EncounterId};
    use crate::battle::tests::common::{battle_log, scripted_battle};
    use crate::creature::Creature;
    use crate::errors::{ActionError, EngineError};
    use crate::inventory::Inventory;
    use crate::party::Party;
    use crate::rng::GameRng;
    use crate::session::GameMode;
    use crate::timers::DelayedEffect;
    use pretty_assertions::assert_eq;
    use schema::Species;

    fn creature(species: Species, level: u8) -> Creature {
        Creature::new(species, level).unwrap()
    }

    fn faint_active(party: &mut Party) {
        let active = party.active_mut();
        active.take_damage(active.max_hp);
    }

    // --- Unit tests for the faint recovery commands ---

    #[test]
    fn a_fainted_active_is_swapped_for_the_first_healthy_teammate() {
        let mut party = Party::new(creature(Species::Pikachu, 5));
        party.add_captured(creature(Species::Squirtle, 4));
        faint_active(&mut party);

        let encounter = Encounter::new(EncounterId(1), creature(Species::Rattata, 3));
        // The recovery path never touches the RNG.
        let mut rng = GameRng::scripted(vec![]);

        let commands = wild_action_commands(&encounter, &party, &mut rng);
        assert_eq!(
            commands,
            vec![
                BattleCommand::SwitchActive { index: 1 },
                BattleCommand::EmitEvent(BattleEvent::CreatureSentOut {
                    species: Species::Squirtle,
                }),
                BattleCommand::SetPhase(BattlePhase::PlayerTurn),
            ]
        );
    }

    #[test]
    fn a_lethal_wild_hit_with_no_teammates_ends_in_a_loss() {
        let party = Party::new(creature(Species::Pikachu, 5));
        let encounter = Encounter::new(EncounterId(1), creature(Species::Rattata, 5));
        let mut rng = GameRng::scripted(vec![45]);

        let commands = wild_action_commands(&encounter, &party, &mut rng);
        assert_eq!(
            commands,
            vec![
                BattleCommand::DealDamage {
                    target: Combatant::Player,
                    amount: 45,
                },
                BattleCommand::EmitEvent(BattleEvent::DamageDealt {
                    attacker: Combatant::Wild,
                    species: Species::Rattata,
                    damage: 45,
                    remaining_hp: 0,
                }),
                BattleCommand::EmitEvent(BattleEvent::CreatureFainted {
                    species: Species::Pikachu,
                }),
                BattleCommand::EmitEvent(BattleEvent::PartyWiped),
                BattleCommand::SetPhase(BattlePhase::Lost),
                BattleCommand::Schedule {
                    delay_ms: RETURN_AFTER_LOSS_MS,
                    effect: DelayedEffect::ReturnToOverworld,
                },
            ]
        );
    }

    #[test]
    fn attacking_with_a_fainted_active_is_refused() {
        let mut party = Party::new(creature(Species::Pikachu, 5));
        faint_active(&mut party);
        let encounter = Encounter::new(EncounterId(1), creature(Species::Pidgey, 3));
        let inventory = Inventory::new(0, 1, 0);
        let mut rng = GameRng::scripted(vec![]);

        let err = player_action_commands(
            BattleAction::Attack,
            &encounter,
            &party,
            &inventory,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::Action(ActionError::ActiveCreatureFainted));
    }

    // --- Integration test for a full party wipe ---

    #[test]
    fn a_party_wipe_returns_to_the_overworld_with_the_party_as_it_fell() {
        // Script: player damage 15, then a lethal 45 from the wild.
        let mut session = scripted_battle(Species::Rattata, 5, vec![15, 45]);

        session.submit_battle_action(BattleAction::Attack).unwrap();
        assert_eq!(session.advance(WILD_ACTION_DELAY_MS), 1);

        assert_eq!(session.encounter().unwrap().phase, BattlePhase::Lost);
        assert_eq!(session.mode(), GameMode::Battle);
        assert_eq!(session.party().active().hp, 0);
        assert_eq!(session.inventory().money, 1000);
        assert_eq!(
            battle_log(&session),
            [
                "A wild Rattata appeared!",
                "Pikachu dealt 15 damage!",
                "Wild Rattata dealt 45 damage!",
                "Pikachu fainted!",
                "All your Pokemon have fainted! You ran away!",
            ]
            .map(String::from)
        );

        assert_eq!(session.advance(RETURN_AFTER_LOSS_MS), 1);
        assert_eq!(session.mode(), GameMode::Overworld);
        assert!(session.encounter().is_none());

        // No healing and no roster change on a loss.
        assert_eq!(session.party().members().len(), 1);
        assert!(session.party().active().is_fainted());
    }
}
