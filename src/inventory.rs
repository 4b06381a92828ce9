use crate::creature::Creature;
use crate::errors::{ItemError, ShopError};
use schema::ItemKind;
use serde::{Deserialize, Serialize};

/// Money and consumable counts. Purchase and potion rules live here; the
/// session decides when calling them is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub money: u32,
    pub pokeballs: u32,
    pub potions: u32,
}

impl Inventory {
    pub fn new(money: u32, pokeballs: u32, potions: u32) -> Self {
        Inventory {
            money,
            pokeballs,
            potions,
        }
    }

    /// Buy one item at catalog price. On `Err` nothing changes.
    pub fn purchase(&mut self, kind: ItemKind) -> Result<(), ShopError> {
        let price = kind.price();
        if self.money < price {
            return Err(ShopError::InsufficientFunds {
                price,
                money: self.money,
            });
        }

        self.money -= price;
        match kind {
            ItemKind::Pokeball => self.pokeballs += 1,
            ItemKind::Potion => self.potions += 1,
        }
        Ok(())
    }

    /// Spend one potion to heal `target` by `heal_amount` (clamped). A
    /// fainted target is legal; on `Err` nothing changes.
    pub fn use_potion(&mut self, target: &mut Creature, heal_amount: u16) -> Result<(), ItemError> {
        if self.potions == 0 {
            return Err(ItemError::NoPotions);
        }
        if target.hp >= target.max_hp {
            return Err(ItemError::AlreadyFullHp);
        }

        target.heal(heal_amount);
        self.potions -= 1;
        Ok(())
    }

    /// Consume one pokeball. Callers validate the count first.
    pub fn spend_pokeball(&mut self) {
        self.pokeballs = self.pokeballs.saturating_sub(1);
    }

    pub fn earn(&mut self, amount: u32) {
        self.money += amount;
    }
}
