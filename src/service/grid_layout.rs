//! Deterministic fallback placement: packs the default catalog row by row
//! inside the room bounds, skipping pieces that no longer fit. No model, no
//! randomness, same input always gives the same layout.

use crate::error::ApiError;
use crate::service::catalog::{DEFAULT_CATALOG, FurnitureSpec};
use crate::service::dispatch::LayoutEngine;
use crate::types::layout::{LayoutOutcome, Placement};
use serde_json::{Map, json};

const WALL_MARGIN: f64 = 0.5;
const ITEM_GAP: f64 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct GridPlanner;

impl GridPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn place_all(&self, room_width: f64, room_height: f64) -> Vec<Placement> {
        let mut placements = Vec::new();
        let mut x = WALL_MARGIN;
        let mut y = WALL_MARGIN;
        let mut row_depth: f64 = 0.0;

        for spec in DEFAULT_CATALOG {
            if x + spec.width > room_width - WALL_MARGIN {
                // start the next row
                x = WALL_MARGIN;
                y += row_depth + ITEM_GAP;
                row_depth = 0.0;
            }
            if x + spec.width > room_width - WALL_MARGIN
                || y + spec.depth > room_height - WALL_MARGIN
            {
                // piece does not fit anywhere anymore
                continue;
            }
            placements.push(to_placement(spec, x, y));
            x += spec.width + ITEM_GAP;
            row_depth = row_depth.max(spec.depth);
        }
        placements
    }
}

fn to_placement(spec: &FurnitureSpec, x: f64, y: f64) -> Placement {
    let mut extra = Map::new();
    extra.insert("width".to_string(), json!(spec.width));
    extra.insert("depth".to_string(), json!(spec.depth));
    extra.insert("category".to_string(), json!(spec.category));
    extra.insert("rotation".to_string(), json!(0));
    Placement {
        name: spec.name.to_string(),
        x,
        y,
        extra,
    }
}

impl LayoutEngine for GridPlanner {
    async fn auto_place(
        &self,
        room_width: f64,
        room_height: f64,
    ) -> Result<LayoutOutcome, ApiError> {
        let data = self.place_all(room_width, room_height);
        let mut extra = Map::new();
        extra.insert("status".to_string(), json!("success"));
        extra.insert("algorithm".to_string(), json!("grid"));
        extra.insert("total_placed".to_string(), json!(data.len()));
        Ok(LayoutOutcome {
            model_used: false,
            data,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint(p: &Placement) -> (f64, f64, f64, f64) {
        let w = p.extra["width"].as_f64().unwrap();
        let d = p.extra["depth"].as_f64().unwrap();
        (p.x, p.y, w, d)
    }

    #[test]
    fn everything_fits_in_the_default_room() {
        let placements = GridPlanner::new().place_all(17.0, 11.0);
        assert_eq!(placements.len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn placements_stay_inside_bounds() {
        let (room_w, room_h) = (6.0, 5.0);
        for p in GridPlanner::new().place_all(room_w, room_h) {
            let (x, y, w, d) = footprint(&p);
            assert!(x >= 0.0 && y >= 0.0, "{} out of bounds", p.name);
            assert!(x + w <= room_w, "{} exceeds width", p.name);
            assert!(y + d <= room_h, "{} exceeds height", p.name);
        }
    }

    #[test]
    fn placements_do_not_overlap() {
        let placements = GridPlanner::new().place_all(17.0, 11.0);
        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                let (ax, ay, aw, ad) = footprint(a);
                let (bx, by, bw, bd) = footprint(b);
                let disjoint =
                    ax + aw <= bx || bx + bw <= ax || ay + ad <= by || by + bd <= ay;
                assert!(disjoint, "{} overlaps {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn tiny_room_places_nothing() {
        assert!(GridPlanner::new().place_all(1.0, 1.0).is_empty());
    }

    #[test]
    fn deterministic_output() {
        let first = GridPlanner::new().place_all(10.0, 8.0);
        let second = GridPlanner::new().place_all(10.0, 8.0);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
