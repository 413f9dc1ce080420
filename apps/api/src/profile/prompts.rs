// All LLM prompt constants for the profile module.

/// System prompt for persona synthesis — enforces JSON-only output.
pub const PERSONA_SYSTEM: &str =
    "You are an expert social-media profiler who distills a person's public \
    footprint into a concise persona. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona synthesis prompt template.
/// Replace: {handle}, {name}, {bio}, {tweets}
pub const PERSONA_PROMPT_TEMPLATE: &str = r#"Build a persona for the social-media account @{handle} from the extracted profile signal below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Display Name",
  "handle": "{handle}",
  "bio": "1-2 sentence summary of who this person is",
  "traits": ["curious", "community-minded", "direct"],
  "interests": ["urban design", "espresso", "crypto"]
}

Rules:
- `traits`: EXACTLY 3 to 5 personality, communication-style, or values descriptors.
- `interests`: EXACTLY 3 to 5 topic or activity descriptors.
- Ground every trait and interest in the signal below — do NOT invent a different person.
- If the signal is too thin to determine a real name, use "Unknown" for `name`.

EXTRACTED NAME: {name}

EXTRACTED BIO:
{bio}

RECENT POSTS:
{tweets}"#;
