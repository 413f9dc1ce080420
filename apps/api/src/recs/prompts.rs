// All LLM prompt constants for the recommendation module.

/// System prompt for location generation — enforces JSON-only output.
pub const RECOMMENDATION_SYSTEM: &str =
    "You are a knowledgeable local concierge recommending real, currently \
    operating places in a specific city. \
    You MUST respond with valid JSON only — a JSON array of location objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT invent places that do not exist.";

/// Batch recommendation prompt template.
/// Replace: {count}, {city}, {persona_json}
pub const BATCH_PROMPT_TEMPLATE: &str = r#"Recommend EXACTLY {count} real places in {city} for the persona below.

PERSONA:
{persona_json}

Return a JSON ARRAY of {count} objects with this EXACT schema:
[
  {
    "name": "St. Lawrence Market",
    "address": "93 Front St E, Toronto, ON",
    "description": "One sentence on why this fits the persona",
    "category": "shopping",
    "coordinates": {"lat": 43.6487, "lng": -79.3716},
    "rating": 4.6,
    "website": "https://www.stlawrencemarket.com",
    "priceLevel": 2
  }
]

Allowed `category` values: restaurant, cafe, bar, park, museum, shopping, entertainment, attraction, sports, fitness, education, art, music, outdoor, other.

HARD RULES:
1. Every place must be real and located in {city} — no inventions
2. All {count} places must be DISTINCT: no two may share a name or an address
3. Spread across different categories that match the persona's interests
4. `description` must reference the persona's traits or interests, not generic praise
5. `website` is the place's own official site, or omit the field — NEVER a maps link"#;

/// Corrective-round prompt template, used when earlier rounds fell short.
/// Replace: {count}, {city}, {persona_json}, {exclude_names}
pub const CORRECTIVE_PROMPT_TEMPLATE: &str = r#"Recommend EXACTLY {count} real places in {city} for the persona below.

PERSONA:
{persona_json}

Use the same JSON array schema as before: name, address, description, category, coordinates, rating, website, priceLevel.

HARD RULES:
1. Every place must be real and located in {city}
2. Do NOT include any of these already-recommended places, or anything at the same address:
{exclude_names}
3. All {count} places must be distinct from each other as well"#;
