use serde::{Deserialize, Serialize};

/// Maximum number of tweet-like fragments carried in a `ProfileSignal`.
pub const MAX_TWEETS: usize = 20;

/// Name value the generator emits when it cannot determine a real name.
/// Never allowed to reach a caller — substituted with the capitalized handle.
pub const NAME_PLACEHOLDER: &str = "Unknown";

/// Intermediate extraction result: everything the search corpus told us
/// about a handle, before any generation happens.
///
/// `handle` is the trusted, `@`-stripped input — extraction never overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSignal {
    pub tweets: Vec<String>,
    pub bio: String,
    pub name: String,
    pub handle: String,
    pub profile_image_url: Option<String>,
}

/// A synthesized persona. `handle` always equals the requested handle and
/// `name` is never `NAME_PLACEHOLDER` — post-processing enforces both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub traits: Vec<String>,
    pub interests: Vec<String>,
    pub profile_image_url: Option<String>,
}

/// Capitalizes a handle for use as a display-name fallback: "torontodao" → "Torontodao".
pub fn capitalize_handle(handle: &str) -> String {
    let mut chars = handle.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
