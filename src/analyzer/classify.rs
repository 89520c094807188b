//! Change classification.
//!
//! Terraform reports each resource change as an ordered sequence of action
//! tokens. The gate cares about five buckets, matched exactly on the
//! sequence; any combination outside the four known ones lands in
//! [`ChangeKind::Unknown`] and blocks auto-apply.

/// Kind of change proposed for a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Resource will be created.
    Create,
    /// Resource will be updated in place.
    Update,
    /// Resource will be destroyed.
    Delete,
    /// Resource will be destroyed and recreated.
    Replace,
    /// Any other action sequence, including no-op and read.
    Unknown,
}

impl ChangeKind {
    /// Classifies an ordered action sequence.
    ///
    /// The match is exact: `["delete", "create"]` is a replace, but
    /// `["create", "delete"]` is not and falls through to `Unknown`.
    #[must_use]
    pub fn classify(actions: &[String]) -> Self {
        let tokens: Vec<&str> = actions.iter().map(String::as_str).collect();
        match tokens.as_slice() {
            ["create"] => Self::Create,
            ["update"] => Self::Update,
            ["delete"] => Self::Delete,
            ["delete", "create"] => Self::Replace,
            _ => Self::Unknown,
        }
    }

    /// Whether this kind keeps the "only additions" flag alive.
    ///
    /// Only pure creations do; no-ops and reads are treated as blocking so
    /// the gate never applies a plan it cannot fully account for.
    #[must_use]
    pub const fn preserves_only_add(self) -> bool {
        matches!(self, Self::Create)
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Replace => "replace",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_classify_known_sequences() {
        assert_eq!(ChangeKind::classify(&actions(&["create"])), ChangeKind::Create);
        assert_eq!(ChangeKind::classify(&actions(&["update"])), ChangeKind::Update);
        assert_eq!(ChangeKind::classify(&actions(&["delete"])), ChangeKind::Delete);
        assert_eq!(
            ChangeKind::classify(&actions(&["delete", "create"])),
            ChangeKind::Replace
        );
    }

    #[test]
    fn test_classify_order_matters() {
        assert_eq!(
            ChangeKind::classify(&actions(&["create", "delete"])),
            ChangeKind::Unknown
        );
    }

    #[test]
    fn test_classify_unknown_sequences() {
        assert_eq!(ChangeKind::classify(&actions(&["no-op"])), ChangeKind::Unknown);
        assert_eq!(ChangeKind::classify(&actions(&["read"])), ChangeKind::Unknown);
        assert_eq!(ChangeKind::classify(&actions(&[])), ChangeKind::Unknown);
        assert_eq!(
            ChangeKind::classify(&actions(&["create", "create"])),
            ChangeKind::Unknown
        );
    }

    #[test]
    fn test_only_create_preserves_only_add() {
        assert!(ChangeKind::Create.preserves_only_add());
        assert!(!ChangeKind::Update.preserves_only_add());
        assert!(!ChangeKind::Delete.preserves_only_add());
        assert!(!ChangeKind::Replace.preserves_only_add());
        assert!(!ChangeKind::Unknown.preserves_only_add());
    }
}
