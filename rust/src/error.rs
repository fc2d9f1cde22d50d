//! Error handling and result types for AvlTree operations.
//!
//! The plain operations (`insert`, `remove`, `contains`) never fail: a
//! duplicate insert or a missing key is a normal outcome reported through the
//! return value. The strict `try_*` variants and the validation routines use
//! the types here.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Key already present in the tree.
    DuplicateKey,
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl AvlTreeError {
    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a broken structural invariant
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::DataIntegrityError(_) | Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            AvlTreeError::DuplicateKey => write!(f, "Key already present in tree"),
            AvlTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            AvlTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Result type for validation and other whole-tree checks
pub type TreeResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, AvlTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = AvlTreeError::corrupted_tree("Balance", "node at depth 2 has factor 2");
        assert_eq!(
            err.to_string(),
            "Corrupted tree: Balance corruption: node at depth 2 has factor 2"
        );

        let err = AvlTreeError::data_integrity("insert", "tree invalid");
        assert_eq!(err.to_string(), "Data integrity error: insert: tree invalid");
    }

    #[test]
    fn test_integrity_classification() {
        assert!(AvlTreeError::corrupted_tree("Height", "stale").is_integrity_error());
        assert!(AvlTreeError::data_integrity("a", "b").is_integrity_error());
        assert!(!AvlTreeError::KeyNotFound.is_integrity_error());
        assert!(!AvlTreeError::DuplicateKey.is_integrity_error());
    }
}
