//! Static furniture data: the catalog the deterministic planner places, and
//! the per-floor recommendation lists.

use crate::types::layout::Recommendation;

/// Footprint in meters.
#[derive(Debug, Clone, Copy)]
pub struct FurnitureSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub width: f64,
    pub depth: f64,
}

/// Default living-room set, largest pieces first so the planner packs them
/// along the walls before filling in the small items.
pub const DEFAULT_CATALOG: &[FurnitureSpec] = &[
    FurnitureSpec {
        name: "Sofa",
        category: "seating",
        width: 2.2,
        depth: 0.9,
    },
    FurnitureSpec {
        name: "Dining Table",
        category: "tables",
        width: 1.8,
        depth: 0.9,
    },
    FurnitureSpec {
        name: "Wardrobe",
        category: "storage",
        width: 1.5,
        depth: 0.6,
    },
    FurnitureSpec {
        name: "Bed",
        category: "bedroom",
        width: 1.6,
        depth: 2.0,
    },
    FurnitureSpec {
        name: "TV Stand",
        category: "storage",
        width: 1.4,
        depth: 0.4,
    },
    FurnitureSpec {
        name: "Coffee Table",
        category: "tables",
        width: 1.0,
        depth: 0.6,
    },
    FurnitureSpec {
        name: "Nightstand",
        category: "tables",
        width: 0.5,
        depth: 0.4,
    },
];

/// Suggested pieces per floor; floors outside 1..=3 get nothing.
pub fn floor_recommendations(floor: i64) -> Vec<Recommendation> {
    match floor {
        1 => vec![
            Recommendation {
                name: "Sofa",
                category: "seating",
            },
            Recommendation {
                name: "Coffee Table",
                category: "tables",
            },
            Recommendation {
                name: "TV Stand",
                category: "storage",
            },
        ],
        2 => vec![
            Recommendation {
                name: "Bed",
                category: "bedroom",
            },
            Recommendation {
                name: "Wardrobe",
                category: "storage",
            },
            Recommendation {
                name: "Nightstand",
                category: "tables",
            },
        ],
        3 => vec![
            Recommendation {
                name: "Dining Table",
                category: "tables",
            },
            Recommendation {
                name: "Dining Chair",
                category: "seating",
            },
        ],
        _ => Vec::new(),
    }
}
