use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ItemKind {
    Pokeball,
    Potion,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemData {
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    pub sprite: &'static str,
}

impl ItemKind {
    /// Static catalog entry for this item.
    pub fn data(self) -> &'static ItemData {
        match self {
            ItemKind::Pokeball => &POKEBALL,
            ItemKind::Potion => &POTION,
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    pub fn price(self) -> u32 {
        self.data().price
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static POKEBALL: ItemData = ItemData {
    name: "Pokeball",
    price: 200,
    description: "Catch wild Pokemon",
    sprite: "⚪",
};

static POTION: ItemData = ItemData {
    name: "Potion",
    price: 300,
    description: "Restore 20 HP to a Pokemon",
    sprite: "🧪",
};
