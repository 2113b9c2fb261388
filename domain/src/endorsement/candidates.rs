//! Candidate peer computation

use crate::nation::name::NationName;
use std::collections::BTreeSet;

/// WA members of the subject's region that the subject could endorse.
///
/// Returns `members − {subject} − exclusions`. Exclusions are removed here,
/// before any endorsement lookup, so an excluded nation is never fetched.
/// The `BTreeSet` fixes the scan order to ascending name order.
pub fn candidate_peers<I>(
    members: I,
    subject: &NationName,
    exclusions: &BTreeSet<NationName>,
) -> BTreeSet<NationName>
where
    I: IntoIterator<Item = NationName>,
{
    members
        .into_iter()
        .filter(|member| member != subject && !exclusions.contains(member))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> BTreeSet<NationName> {
        NationName::set_from(raw.iter().copied())
    }

    #[test]
    fn test_removes_subject() {
        let subject = NationName::new("b").unwrap();
        let candidates = candidate_peers(names(&["a", "b", "c"]), &subject, &BTreeSet::new());
        assert_eq!(candidates, names(&["a", "c"]));
    }

    #[test]
    fn test_removes_exclusions() {
        let subject = NationName::new("b").unwrap();
        let candidates = candidate_peers(names(&["a", "b", "c", "d"]), &subject, &names(&["d", "zz"]));
        assert_eq!(candidates, names(&["a", "c"]));
    }

    #[test]
    fn test_excluding_subject_is_harmless() {
        let subject = NationName::new("b").unwrap();
        let candidates = candidate_peers(names(&["a", "b"]), &subject, &names(&["b"]));
        assert_eq!(candidates, names(&["a"]));
    }

    #[test]
    fn test_subset_of_members() {
        let members = names(&["x", "y", "z", "me"]);
        let subject = NationName::new("me").unwrap();
        let exclusions = names(&["y"]);
        let candidates = candidate_peers(members.clone(), &subject, &exclusions);
        assert!(candidates.is_subset(&members));
        assert!(!candidates.contains(&subject));
        assert!(candidates.is_disjoint(&exclusions));
    }

    #[test]
    fn test_empty_members() {
        let subject = NationName::new("me").unwrap();
        assert!(candidate_peers(Vec::new(), &subject, &BTreeSet::new()).is_empty());
    }
}
