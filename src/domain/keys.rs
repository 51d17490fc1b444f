use std::fmt;

/// Deterministic cache identity for one `(city, flavor)` pair.
///
/// Derivation lowercases both fields and strips whitespace entirely, so
/// `"New York"` and `"newyork"` share a key. Distinct inputs that happen to
/// collide after folding map to the same cache entry; this is an accepted
/// limitation of the derivation and is not resolved further.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn derive(city: &str, flavor: &str) -> Self {
        Self(format!("{}-{}", fold(city), fold(flavor)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase and drop whitespace plus path separators, keeping the key safe
/// to use as a file name.
fn fold(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/' && *c != '\\')
        .flat_map(char::to_lowercase)
        .collect()
}
