//! core::prefix
//!
//! Prefix arithmetic on asset names.
//!
//! # Features
//!
//! - Check whether a name already carries a prefix
//! - Apply a prefix to a name
//! - Strip a prefix from a name
//!
//! These are pure string operations; the decision of *which* prefix a
//! class gets lives in [`crate::core::conventions`].

/// Check whether `name` already carries `prefix`.
///
/// Compares the leading substring of matching length. An empty prefix
/// never reports present: "no convention configured" must not read as
/// "convention already satisfied", or empty-prefix classes would be
/// skipped forever.
///
/// # Example
///
/// ```
/// use prefixer::core::prefix::has_prefix;
///
/// assert!(has_prefix("BP_Door", "BP_"));
/// assert!(!has_prefix("Door", "BP_"));
/// assert!(!has_prefix("Door", ""));
/// ```
pub fn has_prefix(name: &str, prefix: &str) -> bool {
    !prefix.is_empty() && name.starts_with(prefix)
}

/// Build the prefixed form of a name.
///
/// # Example
///
/// ```
/// use prefixer::core::prefix::apply_prefix;
///
/// assert_eq!(apply_prefix("Door", "BP_"), "BP_Door");
/// ```
pub fn apply_prefix(name: &str, prefix: &str) -> String {
    format!("{}{}", prefix, name)
}

/// Strip `prefix` from the front of `name`.
///
/// Returns `None` if the name does not carry the prefix (including the
/// empty-prefix case), so callers cannot accidentally truncate a name
/// that was never prefixed.
///
/// # Example
///
/// ```
/// use prefixer::core::prefix::strip_prefix;
///
/// assert_eq!(strip_prefix("BP_Door", "BP_"), Some("Door".to_string()));
/// assert_eq!(strip_prefix("Door", "BP_"), None);
/// ```
pub fn strip_prefix(name: &str, prefix: &str) -> Option<String> {
    if !has_prefix(name, prefix) {
        return None;
    }
    Some(name[prefix.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_prefix_basic() {
        assert!(has_prefix("BP_Door", "BP_"));
        assert!(has_prefix("M_Brick", "M_"));
        assert!(!has_prefix("Door", "BP_"));
        assert!(!has_prefix("B", "BP_"));
    }

    #[test]
    fn empty_prefix_never_reports_present() {
        // The original editor plugin compared an empty leading substring
        // and reported every name as already prefixed, so renames were
        // silently skipped. An empty prefix must read as absent.
        assert!(!has_prefix("Door", ""));
        assert!(!has_prefix("", ""));
    }

    #[test]
    fn has_prefix_is_case_sensitive() {
        assert!(!has_prefix("bp_Door", "BP_"));
    }

    #[test]
    fn apply_then_check_is_idempotent() {
        let renamed = apply_prefix("Door", "BP_");
        assert_eq!(renamed, "BP_Door");
        assert!(has_prefix(&renamed, "BP_"));
    }

    #[test]
    fn strip_restores_original() {
        let renamed = apply_prefix("Door", "BP_");
        assert_eq!(strip_prefix(&renamed, "BP_"), Some("Door".to_string()));
    }

    #[test]
    fn strip_refuses_unprefixed() {
        assert_eq!(strip_prefix("Door", "BP_"), None);
        assert_eq!(strip_prefix("Door", ""), None);
    }

    #[test]
    fn strip_exact_length_only() {
        // Strips exactly prefix.len() characters, nothing more
        assert_eq!(strip_prefix("BP_BP_Door", "BP_"), Some("BP_Door".to_string()));
    }
}
