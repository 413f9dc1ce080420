//! Dedup gate for recommendation candidates: within one result set no two
//! locations may share a normalized name or a normalized address.

use std::collections::HashSet;

/// Normalized comparison key: lower-cased, trimmed.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Tracks accepted names and addresses. Candidates are admitted in response
/// order; a collision on either key rejects the candidate.
#[derive(Debug, Default)]
pub struct DedupGate {
    names: HashSet<String>,
    addresses: HashSet<String>,
    /// Original-cased accepted names, in acceptance order — fed back to
    /// corrective generation rounds as the exclusion list.
    accepted_names: Vec<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a candidate if neither key collides, recording both keys.
    pub fn admit(&mut self, name: &str, address: &str) -> bool {
        let name_key = normalize_key(name);
        let address_key = normalize_key(address);
        if name_key.is_empty() || address_key.is_empty() {
            return false;
        }
        if self.names.contains(&name_key) || self.addresses.contains(&address_key) {
            return false;
        }
        self.names.insert(name_key);
        self.addresses.insert(address_key);
        self.accepted_names.push(name.trim().to_string());
        true
    }

    pub fn accepted_names(&self) -> &[String] {
        &self.accepted_names
    }
}
