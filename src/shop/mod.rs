//! Shop items: one-off purchases with a single permanent effect each.

pub mod data;

pub use data::SHOP_ITEMS;

/// The one effect a shop item applies when bought.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShopEffect {
    /// Flat permanent addition to points per click.
    ClickBonus(f64),
    /// Flat permanent addition to points per second.
    AutoBonus(f64),
    /// Cosmetic tag for the presentation layer; safe to reapply on load.
    Visual(&'static str),
    /// Global score multiplier; compounds multiplicatively with other
    /// multiplier items.
    Multiplier(f64),
}

/// Static catalog entry. Ids are stable across save versions.
#[derive(Debug, Clone, Copy)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub effect: ShopEffect,
}

/// Look up a catalog item by id.
pub fn find_item(id: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS.iter().find(|item| item.id == id)
}
