//! Interpolated references resolved by the loader.

/// What a reference points at, decided once when the expression is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `count.index`
    Count,
    /// `local.<name>`
    Local,
    /// `module.<name>.<output>`
    Module,
    /// `path.module`, `path.root`, `path.cwd`
    Path,
    /// `<type>.<name>` or `data.<type>.<name>`
    Resource,
    /// `self.<attr>`
    SelfRef,
    /// A bare identifier with no attribute access.
    Simple,
    /// `terraform.workspace`
    Terraform,
    /// `var.<name>`
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub full_key: String,
}

impl Reference {
    pub fn new(kind: ReferenceKind, full_key: impl Into<String>) -> Self {
        Self { kind, full_key: full_key.into() }
    }

    pub fn user(name: &str) -> Self {
        Self::new(ReferenceKind::User, format!("var.{}", name))
    }

    /// Whether this reference can resolve to a declared variable.
    pub fn is_variable_like(&self) -> bool {
        matches!(self.kind, ReferenceKind::User | ReferenceKind::Count)
    }

    /// The key with its leading `var.` namespace removed.
    pub fn unqualified_name(&self) -> &str {
        self.full_key.strip_prefix("var.").unwrap_or(&self.full_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_reference_is_stripped() {
        let reference = Reference::user("region");
        assert_eq!(reference.full_key, "var.region");
        assert_eq!(reference.unqualified_name(), "region");
        assert!(reference.is_variable_like());
    }

    #[test]
    fn test_count_reference_keeps_its_key() {
        let reference = Reference::new(ReferenceKind::Count, "count.index");
        assert_eq!(reference.unqualified_name(), "count.index");
        assert!(reference.is_variable_like());
    }

    #[test]
    fn test_only_leading_namespace_is_stripped() {
        let reference = Reference::new(ReferenceKind::Local, "local.var.thing");
        assert_eq!(reference.unqualified_name(), "local.var.thing");
        assert!(!reference.is_variable_like());
    }
}
