//! Village shop.
//!
//! Purchases are all-or-nothing: the gold check happens before any
//! mutation, so a rejected purchase leaves the player untouched.

use log::debug;

use super::catalog::{ShopItem, ShopItemId};
use super::errors::GameError;
use super::player::Player;

/// Receipt for a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub item: ShopItem,
    pub gold_left: u32,
}

/// Items for sale, in display order.
pub fn catalog() -> Vec<ShopItem> {
    ShopItemId::ALL.iter().map(|id| id.item()).collect()
}

/// Buy by shop id or item name (`"amulet"`, `"Magic Amulet"`).
pub fn purchase_by_name(player: &mut Player, raw: &str) -> Result<Purchase, GameError> {
    let id: ShopItemId = raw.parse()?;
    purchase(player, id)
}

pub fn purchase(player: &mut Player, id: ShopItemId) -> Result<Purchase, GameError> {
    let item = id.item();
    player.spend_gold(item.price)?;
    player.grant_item(item.name);
    if item.effect.attack > 0 {
        player.increase_attack(item.effect.attack);
    }
    if item.effect.defense > 0 {
        player.increase_defense(item.effect.defense);
    }
    if item.effect.max_health > 0 {
        player.increase_max_health(item.effect.max_health);
    }
    debug!(
        "{} bought {} for {}g ({}g left)",
        player.name,
        item.name,
        item.price,
        player.gold()
    );
    Ok(Purchase {
        item,
        gold_left: player.gold(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::HEALTH_POTION;

    #[test]
    fn catalog_lists_four_items_in_order() {
        let names: Vec<_> = catalog().iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec!["Health Potion", "Iron Sword", "Leather Shield", "Magic Amulet"]
        );
    }

    #[test]
    fn potion_is_stocked_without_stat_change() {
        let mut p = Player::new("Aria");
        let receipt = purchase(&mut p, ShopItemId::Potion).unwrap();
        assert_eq!(receipt.gold_left, 5);
        assert!(p.has_item(HEALTH_POTION));
        assert_eq!(p.attack(), 10);
        assert_eq!(p.defense(), 5);
    }

    #[test]
    fn sword_and_shield_raise_stats() {
        let mut p = Player::new("Aria");
        p.grant_gold(25);
        purchase(&mut p, ShopItemId::Sword).unwrap();
        purchase(&mut p, ShopItemId::Shield).unwrap();
        assert_eq!(p.attack(), 15);
        assert_eq!(p.defense(), 8);
        assert_eq!(p.gold(), 0);
    }

    #[test]
    fn amulet_raises_max_and_current_health() {
        let mut p = Player::new("Aria");
        p.grant_gold(20);
        purchase(&mut p, ShopItemId::Amulet).unwrap();
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.health(), 120);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let mut p = Player::new("Aria");
        assert_eq!(
            purchase_by_name(&mut p, "longbow"),
            Err(GameError::UnknownItem("longbow".into()))
        );
        assert_eq!(p.gold(), 20);
    }
}
