use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Target cardinality of a recommendation set.
pub const TARGET_COUNT: usize = 5;

/// Category of a recommended place. `other` is the repair default for
/// anything the generator leaves blank or invents outside this list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Cafe,
    Bar,
    Park,
    Museum,
    Shopping,
    Entertainment,
    Attraction,
    Sports,
    Fitness,
    Education,
    Art,
    Music,
    Outdoor,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single recommended place, fully repaired and validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub category: Category,
    pub coordinates: Coordinates,
    pub rating: Option<f64>,
    pub website: Option<String>,
    pub price_level: Option<u8>,
}
