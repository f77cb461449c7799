//! Sign-in identity matching.
//!
//! User identity is self-asserted: the `(name, location)` pair is the only
//! de-duplication key, compared case-insensitively. Signing in twice with
//! the same pair yields the same user; any other pair is a new user.

/// Case-insensitive equality on the `(name, location)` pair.
pub fn same_identity(name_a: &str, location_a: &str, name_b: &str, location_b: &str) -> bool {
    name_a.to_lowercase() == name_b.to_lowercase()
        && location_a.to_lowercase() == location_b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pair_matches() {
        assert!(same_identity("Alice", "Riverside", "Alice", "Riverside"));
    }

    #[test]
    fn case_differences_are_ignored() {
        assert!(same_identity("alice", "RIVERSIDE", "Alice", "Riverside"));
    }

    #[test]
    fn different_name_is_a_different_identity() {
        assert!(!same_identity("Alice", "Riverside", "Bob", "Riverside"));
    }

    #[test]
    fn same_name_in_a_different_location_is_a_different_identity() {
        assert!(!same_identity("Alice", "Riverside", "Alice", "Hillcrest"));
    }

    #[test]
    fn whitespace_is_significant() {
        // The key is the raw pair; no trimming is applied.
        assert!(!same_identity("Alice ", "Riverside", "Alice", "Riverside"));
    }
}
