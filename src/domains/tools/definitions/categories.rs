//! Grand Exchange item categories.

use serde::Serialize;

/// A Grand Exchange catalogue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

const fn category(id: u32, name: &'static str) -> Category {
    Category { id, name }
}

/// Every catalogue category, sorted by name. IDs are not contiguous.
pub const GE_CATEGORIES: &[Category] = &[
    category(1, "Ammo"),
    category(41, "Archaeology materials"),
    category(2, "Arrows"),
    category(3, "Bolts"),
    category(4, "Construction materials"),
    category(5, "Construction products"),
    category(6, "Cooking ingredients"),
    category(7, "Costumes"),
    category(8, "Crafting materials"),
    category(9, "Familiars"),
    category(10, "Farming produce"),
    category(40, "Firemaking products"),
    category(11, "Fletching materials"),
    category(12, "Food and Drink"),
    category(13, "Herblore materials"),
    category(14, "Hunting equipment"),
    category(15, "Hunting Produce"),
    category(16, "Jewellery"),
    category(17, "Magic armour"),
    category(18, "Magic weapons"),
    category(21, "Melee armour - high level"),
    category(19, "Melee armour - low level"),
    category(20, "Melee armour - mid level"),
    category(24, "Melee weapons - high level"),
    category(22, "Melee weapons - low level"),
    category(23, "Melee weapons - mid level"),
    category(25, "Mining and Smithing"),
    category(0, "Miscellaneous"),
    category(42, "Miscellaneous"),
    category(43, "Necromancy armour"),
    category(37, "Pocket items"),
    category(26, "Potions"),
    category(27, "Prayer armour"),
    category(28, "Prayer materials"),
    category(29, "Ranged armour"),
    category(30, "Ranged weapons"),
    category(31, "Runecrafting"),
    category(32, "Runes, Spells and Teleports"),
    category(39, "Salvage"),
    category(33, "Seeds"),
    category(38, "Stone spirits"),
    category(34, "Summoning scrolls"),
    category(35, "Tools and containers"),
    category(36, "Woodcutting product"),
];
