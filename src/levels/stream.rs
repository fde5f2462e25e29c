//! Stream biome: flip rocks to find macroinvertebrates

use super::{Biome, FEEDBACK_URL, Level, LevelSounds, ObjectCategory, TreeLine, bush};
use crate::sim::catalog::{Catalog, critters_from_rows, trash_from_rows};
use crate::sim::placement::Span;
use crate::sim::state::ObjectKind;

// (id, name, asset, description)
const CRITTERS: &[(&str, &str, &str, &str)] = &[
    (
        "caddisfly",
        "Caddisfly Larva",
        "caddisfly.png",
        "Caddisfly larvae often build protective cases from sand and twigs. They indicate clean water and help stabilize streambeds.",
    ),
    (
        "hellgrammite",
        "Hellgrammite",
        "hellgrammite.png",
        "Hellgrammites are fierce predators found in fast-moving, oxygen-rich streams. They feed on other invertebrates, helping maintain balance in aquatic ecosystems.",
    ),
    (
        "mayfly",
        "Mayfly Nymph",
        "mayfly.png",
        "Mayfly nymphs are very sensitive to pollution and signal excellent water quality. Their presence supports fish like trout and bass.",
    ),
    (
        "crayfish",
        "Crayfish",
        "crayfish.png",
        "Crayfish are scavengers that help clean streams by eating dead plants and animals. They are an important food source for fish and birds.",
    ),
    (
        "stonefly",
        "Stonefly Nymph",
        "stonefly.png",
        "Stonefly nymphs require high oxygen levels and fast-flowing water, making them excellent indicators of clean streams. They help control populations of other aquatic insects.",
    ),
    (
        "dragonfly",
        "Dragonfly Nymph",
        "dragonfly.png",
        "Dragonfly nymphs are predatory insects that help control mosquito populations in freshwater habitats. They are an important part of the food web.",
    ),
    (
        "aquaticworm",
        "Aquatic Worm",
        "aquaticworm.png",
        "Aquatic worms are detritivores, breaking down organic matter and recycling nutrients in streams. They improve water quality and provide food for fish.",
    ),
];

// (id, name, asset, description, score delta)
const TRASH: &[(&str, &str, &str, &str, i32)] = &[
    (
        "plastic",
        "Plastic Bottle",
        "plastic.png",
        "Plastic trash harms aquatic life, pollutes streams, and can break down into microplastics that enter the food chain.",
        -5,
    ),
    (
        "can",
        "Aluminum Can",
        "can.png",
        "Litter left on land often ends up in waterways. Recycling cans helps conserve resources and protect wildlife.",
        -5,
    ),
    (
        "glass",
        "Broken Glass",
        "glass.png",
        "Broken glass can injure wildlife and people exploring the stream. Glass does not degrade quickly and can stay in the environment for decades.",
        -4,
    ),
    (
        "tire",
        "Tire",
        "tire.png",
        "Tires leach chemicals into water, block natural stream flow, and create hazards for fish and other aquatic life.",
        -8,
    ),
    (
        "cigarette",
        "Cigarette Butt",
        "cigarette.png",
        "Cigarette butts leach toxic chemicals and are harmful to fish and wildlife. Even one butt can contaminate a liter of water.",
        -3,
    ),
    (
        "styrofoam",
        "Styrofoam",
        "styrofoam.png",
        "Styrofoam breaks into tiny pieces that are ingested by wildlife and never fully biodegrade, persisting in the environment for centuries.",
        -6,
    ),
    (
        "fishingLine",
        "Fishing Line",
        "fishingLine.png",
        "Discarded fishing line can entangle fish, birds, and other wildlife, causing injury or death.",
        -7,
    ),
];

pub(super) fn level() -> Level {
    Level {
        name: "stream".to_string(),
        title: "The Stream".to_string(),
        biome: Biome::Stream,
        categories: vec![ObjectCategory {
            kind: ObjectKind::Rock,
            count: 18,
            x: Span::new(0.1, 0.9),
            y: Span::new(0.3, 0.8),
            scale: Span::new(0.25, 0.35),
            min_separation: 0.06,
        }],
        catalog: Catalog {
            critters: critters_from_rows(CRITTERS),
            trash: trash_from_rows(TRASH),
        },
        bushes: vec![
            bush(0.85, 0.2),
            bush(0.75, 0.85),
            bush(0.4, 0.7),
            bush(0.2, 0.4),
        ],
        trees: Some(TreeLine {
            asset: "tree".to_string(),
            count: 24,
            y: 0.05,
            scale: Span::new(0.5, 0.7),
            min_depth: 1,
            max_depth: 2,
        }),
        sounds: LevelSounds {
            critter_found: "rockFlip.wav".to_string(),
            trash_found: "trash.wav".to_string(),
            ambient: "ambientWater.wav".to_string(),
        },
        background_color: "#5DADE2".to_string(),
        feedback_url: FEEDBACK_URL.to_string(),
    }
}
