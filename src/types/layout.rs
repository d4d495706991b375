use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_room_type() -> String {
    "living_room".to_string()
}

const fn default_floor() -> i64 {
    1
}

const fn default_room_width() -> f64 {
    17.0
}

const fn default_room_height() -> f64 {
    11.0
}

const fn default_use_ai() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default = "default_room_type")]
    pub room_type: String,
    #[serde(default)]
    pub floor_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default = "default_floor")]
    pub floor: i64,
}

#[derive(Debug, Deserialize)]
pub struct AutoPlaceRequest {
    #[serde(default = "default_room_width")]
    pub room_width: f64,
    #[serde(default = "default_room_height")]
    pub room_height: f64,
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub name: &'static str,
    pub category: &'static str,
}

/// One placed furniture item. Coordinates are meters from the room origin;
/// anything else the engine reports rides along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a layout engine hands back for an auto-place run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOutcome {
    #[serde(default)]
    pub model_used: bool,
    #[serde(default)]
    pub data: Vec<Placement>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upstream reply for a batch prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictReply {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub model_used: bool,
}
