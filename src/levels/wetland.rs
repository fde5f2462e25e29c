//! Wetland biome: rocks, fallen logs and lily pads around a marsh

use super::{Biome, FEEDBACK_URL, Level, LevelSounds, ObjectCategory, bush};
use crate::sim::catalog::{Catalog, critters_from_rows, trash_from_rows};
use crate::sim::placement::Span;
use crate::sim::state::ObjectKind;

const CRITTERS: &[(&str, &str, &str, &str)] = &[
    (
        "frog",
        "Green Frog",
        "frog.png",
        "Frogs breathe partly through their skin, so they are quick to suffer from polluted water. A chorus of frogs is a sign of a healthy wetland.",
    ),
    (
        "salamander",
        "Spotted Salamander",
        "salamander.png",
        "Spotted salamanders return to the same wetland pools every spring to lay their eggs. They eat insects, worms and snails.",
    ),
    (
        "turtle",
        "Painted Turtle",
        "turtle.png",
        "Painted turtles bask on logs to warm up and eat plants, insects and small fish. They can live for more than 40 years.",
    ),
    (
        "snail",
        "Pond Snail",
        "snail.png",
        "Pond snails graze on algae and dead plants, helping keep the water clear. They are food for ducks, fish and turtles.",
    ),
    (
        "waterstrider",
        "Water Strider",
        "waterstrider.png",
        "Water striders skate across the surface using tiny hairs on their legs. They hunt insects that fall into the water.",
    ),
    (
        "damselfly",
        "Damselfly Nymph",
        "damselfly.png",
        "Damselfly nymphs live among underwater plants and breathe through three leaf-like gills on their tails.",
    ),
    (
        "leech",
        "Leech",
        "leech.png",
        "Most wetland leeches eat snails and insect larvae rather than blood. Some kinds can survive in low-oxygen water.",
    ),
];

const TRASH: &[(&str, &str, &str, &str, i32)] = &[
    (
        "bag",
        "Plastic Bag",
        "bag.png",
        "Plastic bags tangle around plants and animals and can be mistaken for food by turtles.",
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
        "oil",
        "Oil Jug",
        "oil.png",
        "Motor oil spreads into a thin film that blocks oxygen from entering the water. A single quart can pollute a whole pond.",
        -8,
    ),
    (
        "balloon",
        "Balloon",
        "balloon.png",
        "Released balloons come back down in wetlands, where birds and turtles swallow the pieces or get caught in the strings.",
        -4,
    ),
    (
        "sixpack",
        "Six-Pack Rings",
        "sixpack.png",
        "Plastic six-pack rings can trap the necks and legs of birds and turtles.",
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
        name: "wetland".to_string(),
        title: "The Wetland".to_string(),
        biome: Biome::Wetland,
        categories: vec![
            ObjectCategory {
                kind: ObjectKind::Rock,
                count: 6,
                x: Span::new(0.1, 0.9),
                y: Span::new(0.55, 0.85),
                scale: Span::new(0.25, 0.35),
                min_separation: 0.08,
            },
            ObjectCategory {
                kind: ObjectKind::Log,
                count: 5,
                x: Span::new(0.1, 0.9),
                y: Span::new(0.3, 0.85),
                scale: Span::new(0.3, 0.4),
                min_separation: 0.1,
            },
            ObjectCategory {
                kind: ObjectKind::LilyPad,
                count: 7,
                x: Span::new(0.15, 0.85),
                y: Span::new(0.25, 0.55),
                scale: Span::new(0.2, 0.3),
                min_separation: 0.08,
            },
        ],
        catalog: Catalog {
            critters: critters_from_rows(CRITTERS),
            trash: trash_from_rows(TRASH),
        },
        bushes: vec![bush(0.9, 0.3), bush(0.05, 0.6), bush(0.6, 0.9)],
        trees: None,
        sounds: LevelSounds {
            critter_found: "splash.wav".to_string(),
            trash_found: "trash.wav".to_string(),
            ambient: "ambientMarsh.wav".to_string(),
        },
        background_color: "#7DB46C".to_string(),
        feedback_url: FEEDBACK_URL.to_string(),
    }
}
