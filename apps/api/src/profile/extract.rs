//! Text extraction — pulls bio, name, image, and tweet fragments out of noisy
//! search results for a handle.
//!
//! Pure functions over already-fetched records: no I/O, no logging. The
//! heuristics are inherently ad hoc (this is scraping unstructured text) but
//! they live behind one contract so they stay unit-testable in isolation.

use thiserror::Error;

use crate::models::persona::{capitalize_handle, ProfileSignal, MAX_TWEETS};
use crate::search_client::SearchRecord;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot extract a profile signal from zero search results")]
    EmptyInput,
}

/// Lines containing any of these are platform chrome, not profile content.
const BOILERPLATE_MARKERS: &[&str] = &[
    "followers",
    "following",
    "joined",
    "log in",
    "sign up",
    "see new posts",
    "cookie",
];

/// Title fragments that are site names or navigation, never a person's name.
const GENERIC_TITLE_FRAGMENTS: &[&str] = &[
    "x",
    "twitter",
    "instagram",
    "tiktok",
    "linkedin",
    "facebook",
    "home",
    "profile",
    "log in",
    "sign up",
    "search",
];

/// Domain → descriptor hints for the synthesized-bio fallback.
const DOMAIN_DESCRIPTOR_HINTS: &[(&str, &str)] = &[
    ("github.com", "developer"),
    ("gitlab.com", "developer"),
    ("soundcloud.com", "musician"),
    ("spotify.com", "musician"),
    ("bandcamp.com", "musician"),
    ("behance.net", "artist"),
    ("dribbble.com", "artist"),
    ("deviantart.com", "artist"),
    ("medium.com", "writer"),
    ("substack.com", "writer"),
];

/// Title keyword → descriptor hints, checked after domains.
const TITLE_DESCRIPTOR_HINTS: &[(&str, &str)] = &[
    ("developer", "developer"),
    ("engineer", "developer"),
    ("programmer", "developer"),
    ("artist", "artist"),
    ("designer", "artist"),
    ("musician", "musician"),
    ("producer", "musician"),
    ("dj", "musician"),
    ("writer", "writer"),
    ("author", "writer"),
];

const MIN_BIO_LEN: usize = 20;
const MAX_BIO_LEN: usize = 300;
const MIN_TWEET_LEN: usize = 15;
const MAX_TWEET_LEN: usize = 280;
const MAX_NAME_LEN: usize = 60;

/// Builds a `ProfileSignal` from raw search results.
///
/// `handle` is the trusted, `@`-stripped input; it is copied into the signal
/// verbatim and never replaced by extracted data. Every other field is
/// best-effort with a documented fallback, so this only fails on empty input.
pub fn extract_profile_signal(
    records: &[SearchRecord],
    handle: &str,
) -> Result<ProfileSignal, ExtractionError> {
    if records.is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    // Prefer records that plausibly reference the handle; fall back to the
    // full set only when nothing matches.
    let relevant: Vec<&SearchRecord> = records
        .iter()
        .filter(|r| is_relevant(r, handle))
        .collect();
    let preferred: Vec<&SearchRecord> = if relevant.is_empty() {
        records.iter().collect()
    } else {
        relevant
    };

    let bio = extract_bio(&preferred, handle)
        .unwrap_or_else(|| synthesize_default_bio(&preferred, handle));
    let name = extract_name(&preferred).unwrap_or_else(|| capitalize_handle(handle));
    let profile_image_url = extract_image(&preferred);
    let tweets = collect_tweets(&preferred);

    Ok(ProfileSignal {
        tweets,
        bio,
        name,
        handle: handle.to_string(),
        profile_image_url,
    })
}

/// A record is relevant when its URL, text, or title references the handle
/// as `@handle`, `from:handle`, or a profile path segment `/handle`.
pub fn is_relevant(record: &SearchRecord, handle: &str) -> bool {
    let handle = handle.to_lowercase();
    let at_pattern = format!("@{handle}");
    let from_pattern = format!("from:{handle}");
    let path_pattern = format!("/{handle}");

    if record.url.to_lowercase().contains(&path_pattern) {
        return true;
    }
    for field in [record.text.as_deref(), record.title.as_deref()] {
        if let Some(content) = field {
            let content = content.to_lowercase();
            if content.contains(&at_pattern) || content.contains(&from_pattern) {
                return true;
            }
        }
    }
    false
}

fn is_profile_page(record: &SearchRecord, handle: &str) -> bool {
    record
        .url
        .to_lowercase()
        .contains(&format!("/{}", handle.to_lowercase()))
}

fn is_boilerplate(line: &str) -> bool {
    let lower = line.to_lowercase();
    BOILERPLATE_MARKERS.iter().any(|m| lower.contains(m))
}

/// A line reads like profile prose: bounded length, contains whitespace
/// (not a bare token), no raw markup, and carries no platform chrome.
fn is_paragraph_like(line: &str) -> bool {
    let line = line.trim();
    (MIN_BIO_LEN..=MAX_BIO_LEN).contains(&line.len())
        && line.contains(' ')
        && !line.contains('<')
        && !is_boilerplate(line)
}

/// Bio ladder — first rung that produces a usable line wins:
/// profile-page paragraphs → highlights → any text lines → meta-description
/// patterns → title fragments.
fn extract_bio(records: &[&SearchRecord], handle: &str) -> Option<String> {
    // (a) paragraph-like lines from pages that look like the handle's profile
    for record in records.iter().filter(|r| is_profile_page(r, handle)) {
        if let Some(text) = &record.text {
            if let Some(line) = text.lines().map(str::trim).find(|l| is_paragraph_like(l)) {
                return Some(line.to_string());
            }
        }
    }

    // (b) highlighted snippets
    for record in records {
        if let Some(h) = record
            .highlights
            .iter()
            .map(|h| h.trim())
            .find(|h| is_paragraph_like(h))
        {
            return Some(h.to_string());
        }
    }

    // (c) generic text lines from any record
    for record in records {
        if let Some(text) = &record.text {
            if let Some(line) = text.lines().map(str::trim).find(|l| is_paragraph_like(l)) {
                return Some(line.to_string());
            }
        }
    }

    // (d) meta-description patterns embedded in raw text
    for record in records {
        if let Some(text) = &record.text {
            if let Some(desc) = find_meta_description(text) {
                return Some(desc);
            }
        }
    }

    // (e) title-derived fragments
    for record in records {
        if let Some(title) = &record.title {
            if let Some(fragment) = title
                .split(['|', '·'])
                .map(str::trim)
                .find(|f| is_paragraph_like(f))
            {
                return Some(fragment.to_string());
            }
        }
    }

    None
}

/// Scans raw (often HTML-ish) text for a meta-description value.
fn find_meta_description(text: &str) -> Option<String> {
    const PATTERNS: &[&str] = &[
        "name=\"description\" content=\"",
        "property=\"og:description\" content=\"",
        "\"description\":\"",
    ];
    for pattern in PATTERNS {
        if let Some(start) = text.find(pattern) {
            let rest = &text[start + pattern.len()..];
            if let Some(end) = rest.find('"') {
                let candidate = rest[..end].trim();
                if (MIN_BIO_LEN..=MAX_BIO_LEN).contains(&candidate.len()) {
                    return Some(candidate.to_string());
                }
            }
        }
    }
    None
}

/// Synthesized fallback bio: always names the handle, adds a descriptor when
/// the corpus hints at one (known domains, then title keywords).
fn synthesize_default_bio(records: &[&SearchRecord], handle: &str) -> String {
    if let Some(descriptor) = infer_descriptor(records) {
        format!(
            "{} sharing work and updates as @{handle}.",
            capitalize_handle(descriptor)
        )
    } else {
        format!("Social media user posting as @{handle}.")
    }
}

fn infer_descriptor(records: &[&SearchRecord]) -> Option<&'static str> {
    for record in records {
        let url = record.url.to_lowercase();
        for (domain, descriptor) in DOMAIN_DESCRIPTOR_HINTS {
            if url.contains(domain) {
                return Some(descriptor);
            }
        }
    }
    for record in records {
        if let Some(title) = &record.title {
            let title = title.to_lowercase();
            for (keyword, descriptor) in TITLE_DESCRIPTOR_HINTS {
                if title.contains(keyword) {
                    return Some(descriptor);
                }
            }
        }
    }
    None
}

/// Scans titles for a leading-name pattern: the text preceding `(`, `@`, or
/// `|`. Generic site-title fragments are rejected; first match wins.
fn extract_name(records: &[&SearchRecord]) -> Option<String> {
    for record in records {
        let Some(title) = &record.title else {
            continue;
        };
        let cut = title
            .find(['(', '@', '|'])
            .map(|i| &title[..i])
            .unwrap_or(title);
        let candidate = cut.trim().trim_end_matches('-').trim();
        if candidate.len() < 2 || candidate.len() > MAX_NAME_LEN {
            continue;
        }
        let lower = candidate.to_lowercase();
        if GENERIC_TITLE_FRAGMENTS.iter().any(|g| lower == *g) {
            continue;
        }
        return Some(candidate.to_string());
    }
    None
}

/// Per record, in order: direct image field, then an image URL embedded in
/// text, then a platform photo-URL pattern. First hit across records wins.
fn extract_image(records: &[&SearchRecord]) -> Option<String> {
    for record in records {
        if let Some(image) = &record.image {
            if !image.is_empty() {
                return Some(image.clone());
            }
        }
        if let Some(text) = &record.text {
            if let Some(url) = find_image_url(text) {
                return Some(url);
            }
            if let Some(url) = find_url_with_prefix(text, "https://pbs.twimg.com/profile_images/")
            {
                return Some(url);
            }
        }
    }
    None
}

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Finds the first `https://…` token in `text` ending in an image extension.
fn find_image_url(text: &str) -> Option<String> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find("https://") {
        let start = search_from + offset;
        let token: String = text[start..]
            .chars()
            .take_while(|c| !c.is_whitespace() && *c != '"' && *c != '\'' && *c != ')')
            .collect();
        let lower = token.to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            return Some(token);
        }
        search_from = start + "https://".len();
    }
    None
}

fn find_url_with_prefix(text: &str, prefix: &str) -> Option<String> {
    let start = text.find(prefix)?;
    let token: String = text[start..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '"' && *c != '\'' && *c != ')')
        .collect();
    Some(token)
}

/// Gathers distinct tweet-like fragments from titles, highlights, and text
/// lines, in discovery order, exact-deduped, capped at `MAX_TWEETS`.
fn collect_tweets(records: &[&SearchRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tweets = Vec::new();

    let mut push = |fragment: &str, tweets: &mut Vec<String>| {
        let fragment = fragment.trim();
        if !(MIN_TWEET_LEN..=MAX_TWEET_LEN).contains(&fragment.len()) || is_boilerplate(fragment)
        {
            return;
        }
        if seen.insert(fragment.to_string()) {
            tweets.push(fragment.to_string());
        }
    };

    for record in records {
        if tweets.len() >= MAX_TWEETS {
            break;
        }
        if let Some(title) = &record.title {
            push(title, &mut tweets);
        }
        for highlight in &record.highlights {
            push(highlight, &mut tweets);
        }
        if let Some(text) = &record.text {
            for line in text.lines() {
                push(line, &mut tweets);
            }
        }
    }

    tweets.truncate(MAX_TWEETS);
    tweets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, title: Option<&str>, text: Option<&str>) -> SearchRecord {
        SearchRecord {
            title: title.map(String::from),
            url: url.to_string(),
            text: text.map(String::from),
            highlights: vec![],
            image: None,
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            extract_profile_signal(&[], "torontodao"),
            Err(ExtractionError::EmptyInput)
        ));
    }

    #[test]
    fn test_handle_is_never_overwritten() {
        let records = vec![record(
            "https://x.com/someoneelse",
            Some("Someone Else (@someoneelse) | X"),
            Some("A completely different person talking about other things."),
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.handle, "torontodao");
    }

    #[test]
    fn test_relevance_by_at_mention() {
        let r = record(
            "https://news.example.com/article",
            None,
            Some("An interview with @torontodao about community building."),
        );
        assert!(is_relevant(&r, "torontodao"));
    }

    #[test]
    fn test_relevance_by_from_operator() {
        let r = record(
            "https://search.example.com",
            Some("Results from:torontodao"),
            None,
        );
        assert!(is_relevant(&r, "torontodao"));
    }

    #[test]
    fn test_relevance_by_profile_path() {
        let r = record("https://x.com/TorontoDAO", None, None);
        assert!(is_relevant(&r, "torontodao"));
    }

    #[test]
    fn test_irrelevant_record() {
        let r = record(
            "https://example.com/blog",
            Some("Ten soup recipes"),
            Some("Soup is good."),
        );
        assert!(!is_relevant(&r, "torontodao"));
    }

    #[test]
    fn test_bio_prefers_profile_page_paragraph() {
        let records = vec![
            record(
                "https://blog.example.com/post",
                None,
                Some("This generic article mentions @torontodao in passing somewhere."),
            ),
            record(
                "https://x.com/torontodao",
                Some("Toronto DAO (@torontodao) | X"),
                Some("12.4K Followers\nBuilding Canada's most vibrant crypto community 🍁\nJoined March 2021"),
            ),
        ];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.bio, "Building Canada's most vibrant crypto community 🍁");
    }

    #[test]
    fn test_bio_skips_follower_boilerplate() {
        let records = vec![record(
            "https://x.com/torontodao",
            None,
            Some("12.4K Followers and 301 Following since we Joined March 2021"),
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        // The only line is boilerplate, so the bio falls through to synthesis.
        assert!(signal.bio.contains("@torontodao"));
    }

    #[test]
    fn test_bio_from_highlights_when_no_profile_page() {
        let mut r = record(
            "https://news.example.com/article",
            Some("Interview with @torontodao"),
            None,
        );
        r.highlights = vec!["They organize meetups across the city every month".to_string()];
        let signal = extract_profile_signal(&[r], "torontodao").unwrap();
        assert_eq!(signal.bio, "They organize meetups across the city every month");
    }

    #[test]
    fn test_bio_from_meta_description_pattern() {
        let records = vec![record(
            "https://x.com/torontodao",
            None,
            Some(r#"<meta name="description" content="Grassroots collective for Toronto web3 builders">"#),
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.bio, "Grassroots collective for Toronto web3 builders");
    }

    #[test]
    fn test_synthesized_bio_always_names_handle() {
        let records = vec![record("https://example.com/x", None, None)];
        let signal = extract_profile_signal(&records, "quiethandle").unwrap();
        assert!(signal.bio.contains("@quiethandle"));
    }

    #[test]
    fn test_synthesized_bio_uses_domain_descriptor() {
        let records = vec![record("https://github.com/quiethandle", None, None)];
        let signal = extract_profile_signal(&records, "quiethandle").unwrap();
        assert!(signal.bio.starts_with("Developer"));
    }

    #[test]
    fn test_synthesized_bio_uses_title_keyword_descriptor() {
        // Title too fragment-like to be a bio candidate, but it carries a
        // descriptor keyword.
        let records = vec![record(
            "https://example.com/about",
            Some("Musician · DJ mixes"),
            None,
        )];
        let signal = extract_profile_signal(&records, "quiethandle").unwrap();
        assert!(signal.bio.starts_with("Musician"));
        assert!(signal.bio.contains("@quiethandle"));
    }

    #[test]
    fn test_name_from_title_before_at() {
        let records = vec![record(
            "https://x.com/torontodao",
            Some("Toronto DAO (@torontodao) | X"),
            None,
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.name, "Toronto DAO");
    }

    #[test]
    fn test_name_rejects_generic_site_titles() {
        let records = vec![
            record("https://x.com/torontodao", Some("X"), None),
            record("https://x.com/torontodao", Some("Home | X"), None),
        ];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.name, "Torontodao");
    }

    #[test]
    fn test_name_defaults_to_capitalized_handle() {
        let records = vec![record("https://example.com/page", None, None)];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.name, "Torontodao");
    }

    #[test]
    fn test_image_from_direct_field_wins() {
        let mut r = record("https://x.com/torontodao", None, None);
        r.image = Some("https://pbs.twimg.com/profile_images/1/a.jpg".to_string());
        let signal = extract_profile_signal(&[r], "torontodao").unwrap();
        assert_eq!(
            signal.profile_image_url.as_deref(),
            Some("https://pbs.twimg.com/profile_images/1/a.jpg")
        );
    }

    #[test]
    fn test_image_from_embedded_url_in_text() {
        let records = vec![record(
            "https://x.com/torontodao",
            None,
            Some("profile pic at https://cdn.example.com/avatars/toronto.png for download"),
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(
            signal.profile_image_url.as_deref(),
            Some("https://cdn.example.com/avatars/toronto.png")
        );
    }

    #[test]
    fn test_image_from_platform_pattern() {
        let records = vec![record(
            "https://x.com/torontodao",
            None,
            Some("avatar: https://pbs.twimg.com/profile_images/99887/xyz_400x400 shown above"),
        )];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(
            signal.profile_image_url.as_deref(),
            Some("https://pbs.twimg.com/profile_images/99887/xyz_400x400")
        );
    }

    #[test]
    fn test_image_none_when_absent() {
        let records = vec![record("https://x.com/torontodao", None, Some("no pics here"))];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert!(signal.profile_image_url.is_none());
    }

    #[test]
    fn test_tweets_deduplicated_exactly() {
        let text = "Shipped our community map today, come explore\n\
                    Shipped our community map today, come explore\n\
                    Meetup this Thursday at the usual spot downtown";
        let records = vec![record("https://x.com/torontodao", None, Some(text))];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.tweets.len(), 2);
    }

    #[test]
    fn test_tweets_capped_at_limit() {
        let text: String = (0..40)
            .map(|i| format!("Unique fragment number {i} with enough length to count\n"))
            .collect();
        let records = vec![record("https://x.com/torontodao", None, Some(&text))];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.tweets.len(), MAX_TWEETS);
    }

    #[test]
    fn test_tweets_exclude_boilerplate_and_short_fragments() {
        let text = "ok\n12.4K Followers\nActual tweet content with enough length here";
        let records = vec![record("https://x.com/torontodao", None, Some(text))];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(
            signal.tweets,
            vec!["Actual tweet content with enough length here".to_string()]
        );
    }

    #[test]
    fn test_relevant_records_preferred_over_noise() {
        let records = vec![
            record(
                "https://unrelated.example.com",
                Some("Generic SEO Spam Title Words"),
                Some("Totally unrelated content that should not become the bio."),
            ),
            record(
                "https://x.com/torontodao",
                Some("Toronto DAO (@torontodao) | X"),
                Some("Building Canada's most vibrant crypto community 🍁"),
            ),
        ];
        let signal = extract_profile_signal(&records, "torontodao").unwrap();
        assert_eq!(signal.name, "Toronto DAO");
        assert_eq!(signal.bio, "Building Canada's most vibrant crypto community 🍁");
    }
}
