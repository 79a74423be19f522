//! Static shop catalog.

use super::{ShopEffect, ShopItem};

pub static SHOP_ITEMS: [ShopItem; 8] = [
    // Progress items
    ShopItem {
        id: "golden_finger",
        name: "Golden Finger",
        description: "+5 points per click, permanently",
        price: 10_000.0,
        effect: ShopEffect::ClickBonus(5.0),
    },
    ShopItem {
        id: "lucky_clover",
        name: "Lucky Clover",
        description: "+10 points per click, permanently",
        price: 50_000.0,
        effect: ShopEffect::ClickBonus(10.0),
    },
    ShopItem {
        id: "mini_robot",
        name: "Mini Robot",
        description: "+3 automatic points per second",
        price: 25_000.0,
        effect: ShopEffect::AutoBonus(3.0),
    },
    ShopItem {
        id: "turbo_engine",
        name: "Turbo Engine",
        description: "+5 automatic points per second",
        price: 75_000.0,
        effect: ShopEffect::AutoBonus(5.0),
    },
    // Cosmetics
    ShopItem {
        id: "neon_glow",
        name: "Neon Glow",
        description: "Adds an extra glow to the main button",
        price: 5_000.0,
        effect: ShopEffect::Visual("neon-glow-effect"),
    },
    ShopItem {
        id: "rainbow_border",
        name: "Rainbow Border",
        description: "Animated border on the main button",
        price: 15_000.0,
        effect: ShopEffect::Visual("rainbow-border-effect"),
    },
    ShopItem {
        id: "particle_trail",
        name: "Particle Trail",
        description: "Particle burst on every click",
        price: 35_000.0,
        effect: ShopEffect::Visual("particle-effect"),
    },
    // Specials
    ShopItem {
        id: "double_trouble",
        name: "Double Trouble",
        description: "Doubles all points earned (x2)",
        price: 100_000.0,
        effect: ShopEffect::Multiplier(2.0),
    },
];
