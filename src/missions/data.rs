//! Static mission catalog.

use super::types::{MissionDef, MissionRank, MissionType};

pub static MISSIONS: [MissionDef; 27] = [
    // Click missions
    MissionDef {
        id: "first_clicks",
        title: "First Steps",
        description: "Click 10 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Bronze,
        reward: 25.0,
        target: 10.0,
    },
    MissionDef {
        id: "click_beginner",
        title: "Click Apprentice",
        description: "Click 100 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Bronze,
        reward: 100.0,
        target: 100.0,
    },
    MissionDef {
        id: "click_intermediate",
        title: "Dedicated Clicker",
        description: "Click 500 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Silver,
        reward: 500.0,
        target: 500.0,
    },
    MissionDef {
        id: "click_advanced",
        title: "Click Master",
        description: "Click 1,000 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Gold,
        reward: 1_500.0,
        target: 1_000.0,
    },
    MissionDef {
        id: "click_expert",
        title: "Click Legend",
        description: "Click 5,000 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Diamond,
        reward: 5_000.0,
        target: 5_000.0,
    },
    MissionDef {
        id: "click_master",
        title: "Click Deity",
        description: "Click 25,000 times",
        mission_type: MissionType::Clicks,
        rank: MissionRank::Master,
        reward: 25_000.0,
        target: 25_000.0,
    },
    // Point missions
    MissionDef {
        id: "points_starter",
        title: "First Hundred",
        description: "Earn 100 points",
        mission_type: MissionType::Points,
        rank: MissionRank::Bronze,
        reward: 50.0,
        target: 100.0,
    },
    MissionDef {
        id: "points_thousand",
        title: "Millionaire in Training",
        description: "Earn 1,000 points",
        mission_type: MissionType::Points,
        rank: MissionRank::Silver,
        reward: 250.0,
        target: 1_000.0,
    },
    MissionDef {
        id: "points_rich",
        title: "Fortune Gatherer",
        description: "Earn 10,000 points",
        mission_type: MissionType::Points,
        rank: MissionRank::Gold,
        reward: 2_000.0,
        target: 10_000.0,
    },
    MissionDef {
        id: "points_wealthy",
        title: "Point Magnate",
        description: "Earn 100,000 points",
        mission_type: MissionType::Points,
        rank: MissionRank::Diamond,
        reward: 15_000.0,
        target: 100_000.0,
    },
    MissionDef {
        id: "points_tycoon",
        title: "Point Emperor",
        description: "Earn 1,000,000 points",
        mission_type: MissionType::Points,
        rank: MissionRank::Master,
        reward: 100_000.0,
        target: 1_000_000.0,
    },
    // Upgrade missions
    MissionDef {
        id: "first_upgrade",
        title: "First Upgrade",
        description: "Buy your first upgrade",
        mission_type: MissionType::Upgrade,
        rank: MissionRank::Bronze,
        reward: 20.0,
        target: 1.0,
    },
    MissionDef {
        id: "upgrade_collector",
        title: "Upgrade Collector",
        description: "Buy 10 upgrades in total",
        mission_type: MissionType::Upgrade,
        rank: MissionRank::Silver,
        reward: 300.0,
        target: 10.0,
    },
    MissionDef {
        id: "upgrade_hoarder",
        title: "Upgrade Hoarder",
        description: "Buy 25 upgrades in total",
        mission_type: MissionType::Upgrade,
        rank: MissionRank::Gold,
        reward: 1_000.0,
        target: 25.0,
    },
    // Shop missions
    MissionDef {
        id: "first_shop_item",
        title: "First Purchase",
        description: "Buy an item from the shop",
        mission_type: MissionType::Purchase,
        rank: MissionRank::Silver,
        reward: 500.0,
        target: 1.0,
    },
    MissionDef {
        id: "shop_enthusiast",
        title: "Shop Enthusiast",
        description: "Buy 3 shop items",
        mission_type: MissionType::Purchase,
        rank: MissionRank::Gold,
        reward: 2_500.0,
        target: 3.0,
    },
    MissionDef {
        id: "shop_master",
        title: "King of Commerce",
        description: "Buy 6 shop items",
        mission_type: MissionType::Purchase,
        rank: MissionRank::Diamond,
        reward: 10_000.0,
        target: 6.0,
    },
    // Time missions
    MissionDef {
        id: "time_1min",
        title: "First Minute",
        description: "Play for 1 minute",
        mission_type: MissionType::Time,
        rank: MissionRank::Bronze,
        reward: 15.0,
        target: 60.0,
    },
    MissionDef {
        id: "time_5min",
        title: "Early Dedication",
        description: "Play for 5 minutes",
        mission_type: MissionType::Time,
        rank: MissionRank::Bronze,
        reward: 75.0,
        target: 300.0,
    },
    MissionDef {
        id: "time_30min",
        title: "Committed Player",
        description: "Play for 30 minutes",
        mission_type: MissionType::Time,
        rank: MissionRank::Silver,
        reward: 400.0,
        target: 1_800.0,
    },
    MissionDef {
        id: "time_1hour",
        title: "Click Marathon",
        description: "Play for 1 hour",
        mission_type: MissionType::Time,
        rank: MissionRank::Gold,
        reward: 1_200.0,
        target: 3_600.0,
    },
    MissionDef {
        id: "time_3hours",
        title: "Click Addict",
        description: "Play for 3 hours",
        mission_type: MissionType::Time,
        rank: MissionRank::Diamond,
        reward: 5_000.0,
        target: 10_800.0,
    },
    MissionDef {
        id: "time_10hours",
        title: "Eternal Legend",
        description: "Play for 10 hours",
        mission_type: MissionType::Time,
        rank: MissionRank::Master,
        reward: 20_000.0,
        target: 36_000.0,
    },
    // Prestige missions
    MissionDef {
        id: "first_prestige",
        title: "First Star",
        description: "Perform your first prestige",
        mission_type: MissionType::Prestige,
        rank: MissionRank::Silver,
        reward: 1_000.0,
        target: 1.0,
    },
    MissionDef {
        id: "prestige_veteran",
        title: "Prestige Veteran",
        description: "Reach prestige level 3",
        mission_type: MissionType::Prestige,
        rank: MissionRank::Gold,
        reward: 5_000.0,
        target: 3.0,
    },
    MissionDef {
        id: "prestige_elite",
        title: "Prestigious Elite",
        description: "Reach prestige level 5",
        mission_type: MissionType::Prestige,
        rank: MissionRank::Diamond,
        reward: 15_000.0,
        target: 5.0,
    },
    MissionDef {
        id: "prestige_master",
        title: "Lord of Prestige",
        description: "Reach prestige level 10",
        mission_type: MissionType::Prestige,
        rank: MissionRank::Master,
        reward: 50_000.0,
        target: 10.0,
    },
];
