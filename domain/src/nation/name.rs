//! Nation identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Base of every nation profile link
pub const PROFILE_URL_BASE: &str = "https://www.nationstates.net/nation=";

/// Normalize a raw nation identifier.
///
/// Surrounding whitespace is dropped, the name is lower-cased and inner
/// spaces become underscores. Applying it twice yields the same string.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// A normalized nation identifier (Value Object)
///
/// Two names that differ only in case or in spaces versus underscores
/// compare equal once wrapped. Ordering is plain lexicographic order of the
/// normalized form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationName(String);

impl NationName {
    /// Normalize and wrap a nation identifier
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(DomainError::InvalidNation(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Normalize every entry, dropping blanks and duplicates
    pub fn set_from<I, S>(raw: I) -> BTreeSet<NationName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().filter_map(|s| Self::new(s).ok()).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link to the nation's page on nationstates.net
    pub fn profile_url(&self) -> String {
        format!("{}{}", PROFILE_URL_BASE, normalize(&self.0))
    }
}

impl std::fmt::Display for NationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for NationName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NationName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NationName> for String {
    fn from(name: NationName) -> Self {
        name.0
    }
}

impl AsRef<str> for NationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_spaces() {
        assert_eq!(normalize("Testlandia"), "testlandia");
        assert_eq!(normalize("The Black Hawks"), "the_black_hawks");
        assert_eq!(normalize("  Padded Name "), "padded_name");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Testlandia", "The Black Hawks", "already_normal", " Mixed_Case Name "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
            let name = NationName::new(raw).unwrap();
            assert_eq!(NationName::new(name.as_str()).unwrap(), name);
        }
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(
            NationName::new("   "),
            Err(DomainError::InvalidNation("   ".to_string()))
        );
        assert!("".parse::<NationName>().is_err());
    }

    #[test]
    fn test_equal_after_normalization() {
        assert_eq!(
            NationName::new("The Black Hawks").unwrap(),
            NationName::new("the_black_hawks").unwrap()
        );
    }

    #[test]
    fn test_profile_url() {
        let name = NationName::new("Max Barry").unwrap();
        assert_eq!(name.profile_url(), "https://www.nationstates.net/nation=max_barry");
    }

    #[test]
    fn test_set_from_drops_blanks_and_duplicates() {
        let set = NationName::set_from(["b", "A", "a", " ", "c d"]);
        let names: Vec<_> = set.iter().map(NationName::as_str).collect();
        assert_eq!(names, vec!["a", "b", "c_d"]);
    }

    #[test]
    fn test_serde_normalizes() {
        let name: NationName = serde_json::from_str("\"Some Nation\"").unwrap();
        assert_eq!(name.as_str(), "some_nation");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"some_nation\"");
        assert!(serde_json::from_str::<NationName>("\"\"").is_err());
    }
}
