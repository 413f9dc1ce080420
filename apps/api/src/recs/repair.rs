//! Field repair for generated location candidates. The generator's output is
//! loosely structured; every optional field gets a deterministic repair so
//! accepted locations always satisfy the data-model invariants.

use url::Url;

use crate::models::location::{Category, Coordinates};
use crate::recs::city::{in_city_bounds, DEFAULT_CENTER};

/// Neutral rating assigned when the generator omits one.
pub const DEFAULT_RATING: f64 = 4.0;

/// URL fragments that identify mapping-service links. A map pin is never an
/// official website.
const MAPPING_SERVICE_MARKERS: &[&str] = &[
    "google.com/maps",
    "maps.google.",
    "goo.gl/maps",
    "maps.apple.com",
    "openstreetmap.org",
    "bing.com/maps",
];

/// Missing or out-of-region coordinates are replaced with the city center.
pub fn repair_coordinates(raw: Option<Coordinates>) -> Coordinates {
    match raw {
        Some(c) if in_city_bounds(&c) => c,
        _ => DEFAULT_CENTER,
    }
}

/// Missing or unrecognized categories become the generic default rather
/// than sinking the whole candidate.
pub fn repair_category(raw: Option<&str>) -> Category {
    raw.and_then(|s| {
        serde_json::from_str::<Category>(&format!("\"{}\"", s.trim().to_lowercase())).ok()
    })
    .unwrap_or_default()
}

/// Missing or out-of-range ratings become the neutral default.
pub fn repair_rating(raw: Option<f64>) -> Option<f64> {
    Some(
        raw.filter(|r| (1.0..=5.0).contains(r))
            .unwrap_or(DEFAULT_RATING),
    )
}

/// Keeps a website only when it is an absolute HTTP(S) URL with a dotted,
/// non-empty host and is not a mapping-service link; kept values are
/// preserved verbatim.
pub fn sanitize_website(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    let parsed = Url::parse(raw).ok()?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }
    let host = parsed.host_str()?;
    if !host.contains('.') {
        return None;
    }
    let lower = raw.to_lowercase();
    if MAPPING_SERVICE_MARKERS.iter().any(|m| lower.contains(m)) {
        return None;
    }
    Some(raw.to_string())
}
