//! Backfill catalog — a small fixed list of well-known, verified Toronto
//! places used to top up a short recommendation set. Entries are real places
//! with real addresses and coordinates; they are appended only when
//! generation produced at least one location but fewer than the target.

use uuid::Uuid;

use crate::models::location::{Category, Coordinates, Location};

pub struct CatalogEntry {
    pub name: &'static str,
    pub address: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    pub rating: f64,
    pub website: Option<&'static str>,
}

pub const FALLBACK_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "CN Tower",
        address: "290 Bremner Blvd, Toronto, ON",
        description: "Toronto's defining landmark with panoramic views from the main deck.",
        category: Category::Attraction,
        lat: 43.6426,
        lng: -79.3871,
        rating: 4.6,
        website: Some("https://www.cntower.ca"),
    },
    CatalogEntry {
        name: "Royal Ontario Museum",
        address: "100 Queens Park, Toronto, ON",
        description: "Canada's largest museum of world cultures and natural history.",
        category: Category::Museum,
        lat: 43.6677,
        lng: -79.3948,
        rating: 4.7,
        website: Some("https://www.rom.on.ca"),
    },
    CatalogEntry {
        name: "St. Lawrence Market",
        address: "93 Front St E, Toronto, ON",
        description: "Historic market hall packed with food vendors and local producers.",
        category: Category::Shopping,
        lat: 43.6487,
        lng: -79.3716,
        rating: 4.6,
        website: Some("https://www.stlawrencemarket.com"),
    },
    CatalogEntry {
        name: "Art Gallery of Ontario",
        address: "317 Dundas St W, Toronto, ON",
        description: "Major gallery spanning the Group of Seven to contemporary art.",
        category: Category::Art,
        lat: 43.6536,
        lng: -79.3925,
        rating: 4.7,
        website: Some("https://ago.ca"),
    },
    CatalogEntry {
        name: "High Park",
        address: "1873 Bloor St W, Toronto, ON",
        description: "Toronto's largest public park, with trails, gardens, and a zoo.",
        category: Category::Park,
        lat: 43.6465,
        lng: -79.4637,
        rating: 4.7,
        website: None,
    },
    CatalogEntry {
        name: "Kensington Market",
        address: "Augusta Ave, Toronto, ON",
        description: "Eclectic bohemian neighbourhood of vintage shops and global eats.",
        category: Category::Shopping,
        lat: 43.6547,
        lng: -79.4005,
        rating: 4.5,
        website: None,
    },
    CatalogEntry {
        name: "Distillery Historic District",
        address: "55 Mill St, Toronto, ON",
        description: "Pedestrian-only Victorian industrial district of galleries and cafes.",
        category: Category::Entertainment,
        lat: 43.6503,
        lng: -79.3596,
        rating: 4.6,
        website: Some("https://www.thedistillerydistrict.com"),
    },
    CatalogEntry {
        name: "Ripley's Aquarium of Canada",
        address: "288 Bremner Blvd, Toronto, ON",
        description: "Walk-through tunnel aquarium beside the CN Tower.",
        category: Category::Attraction,
        lat: 43.6424,
        lng: -79.3860,
        rating: 4.6,
        website: Some("https://www.ripleyaquariums.com/canada"),
    },
];

impl CatalogEntry {
    pub fn to_location(&self) -> Location {
        Location {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            address: self.address.to_string(),
            description: self.description.to_string(),
            category: self.category,
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            rating: Some(self.rating),
            website: self.website.map(String::from),
            price_level: None,
        }
    }
}
