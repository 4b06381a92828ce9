use crate::creature::Creature;
use crate::errors::PartyError;
use serde::{Deserialize, Serialize};

/// The player's roster. Holds at least one creature from construction on,
/// and `active_index` always points at a real member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    members: Vec<Creature>,
    active_index: usize,
}

impl Party {
    /// Create a party around a starter creature.
    pub fn new(starter: Creature) -> Self {
        Party {
            members: vec![starter],
            active_index: 0,
        }
    }

    /// The creature currently leading the party.
    pub fn active(&self) -> &Creature {
        &self.members[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut Creature {
        &mut self.members[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Result<&Creature, PartyError> {
        self.members.get(index).ok_or(PartyError::InvalidIndex(index))
    }

    pub fn member_mut(&mut self, index: usize) -> Result<&mut Creature, PartyError> {
        self.members
            .get_mut(index)
            .ok_or(PartyError::InvalidIndex(index))
    }

    /// Make `index` the active creature. The target must exist and be
    /// conscious; switching to the already-active slot is a no-op.
    pub fn set_active(&mut self, index: usize) -> Result<(), PartyError> {
        let target = self.member(index)?;
        if target.is_fainted() {
            return Err(PartyError::TargetFainted(index));
        }
        self.active_index = index;
        Ok(())
    }

    /// Append a freshly caught creature, restored to full HP.
    pub fn add_captured(&mut self, mut creature: Creature) {
        creature.restore_full();
        self.members.push(creature);
    }

    /// First index other than `index` holding a conscious creature, scanning
    /// in party order.
    pub fn first_healthy_other(&self, index: usize) -> Option<usize> {
        self.members
            .iter()
            .enumerate()
            .find(|(i, member)| *i != index && !member.is_fainted())
            .map(|(i, _)| i)
    }

    pub fn all_fainted(&self) -> bool {
        self.members.iter().all(|member| member.is_fainted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartyError;
    use pretty_assertions::assert_eq;
    use schema::Species;

    fn healthy(species: Species) -> Creature {
        Creature::new(species, 5).unwrap()
    }

    fn fainted(species: Species) -> Creature {
        let mut creature = healthy(species);
        creature.take_damage(creature.max_hp);
        creature
    }

    // add_captured restores HP, so members are fainted in place.
    fn faint_member(party: &mut Party, index: usize) {
        let member = party.member_mut(index).unwrap();
        member.take_damage(member.max_hp);
    }

    #[test]
    fn starter_leads_the_party() {
        let party = Party::new(healthy(Species::Pikachu));
        assert_eq!(party.active_index(), 0);
        assert_eq!(party.active().species, Species::Pikachu);
        assert_eq!(party.members().len(), 1);
    }

    #[test]
    fn set_active_rejects_bad_targets() {
        let mut party = Party::new(healthy(Species::Pikachu));
        party.add_captured(healthy(Species::Pidgey));
        faint_member(&mut party, 1);

        assert_eq!(party.set_active(5), Err(PartyError::InvalidIndex(5)));
        assert_eq!(party.set_active(1), Err(PartyError::TargetFainted(1)));
        assert_eq!(party.active_index(), 0);
    }

    #[test]
    fn set_active_moves_the_lead() {
        let mut party = Party::new(healthy(Species::Pikachu));
        party.add_captured(healthy(Species::Squirtle));

        party.set_active(1).unwrap();
        assert_eq!(party.active().species, Species::Squirtle);
    }

    #[test]
    fn captured_creatures_join_at_full_hp() {
        let mut party = Party::new(healthy(Species::Pikachu));
        let mut caught = healthy(Species::Rattata);
        caught.take_damage(caught.max_hp);

        party.add_captured(caught);
        let newcomer = &party.members()[1];
        assert_eq!(newcomer.hp, newcomer.max_hp);
    }

    #[test]
    fn faint_scan_skips_fainted_members_and_the_given_index() {
        let mut party = Party::new(healthy(Species::Pikachu));
        party.add_captured(healthy(Species::Pidgey));
        party.add_captured(healthy(Species::Bulbasaur));
        faint_member(&mut party, 1);

        assert_eq!(party.first_healthy_other(0), Some(2));
        assert_eq!(party.first_healthy_other(2), Some(0));
    }

    #[test]
    fn faint_scan_reports_nobody_left() {
        let mut party = Party::new(fainted(Species::Pikachu));
        party.add_captured(healthy(Species::Pidgey));
        faint_member(&mut party, 1);

        assert_eq!(party.first_healthy_other(0), None);
        assert!(party.all_fainted());
    }
}
