use thiserror::Error;

/// Boxed failure raised by a caller-supplied function.
pub type CallerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Key selector failed on element {index}: {source}")]
    KeySelector {
        index: usize,
        #[source]
        source: CallerError,
    },

    #[error("Predicate failed on group {index}: {source}")]
    Predicate {
        index: usize,
        #[source]
        source: CallerError,
    },

    #[error("Projector failed on group {index}: {source}")]
    Projector {
        index: usize,
        #[source]
        source: CallerError,
    },

    #[error("Operation not implemented: {operation}")]
    NotImplemented { operation: String },
}

impl GroupingError {
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        GroupingError::NotImplemented {
            operation: operation.into(),
        }
    }

    /// Position of the element or group the failing caller function was
    /// evaluating, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            GroupingError::KeySelector { index, .. }
            | GroupingError::Predicate { index, .. }
            | GroupingError::Projector { index, .. } => Some(*index),
            GroupingError::NotImplemented { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GroupingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_display_formats_correctly() {
        let err = GroupingError::not_implemented("nested_group_by");
        assert_eq!(err.to_string(), "Operation not implemented: nested_group_by");
        assert_eq!(err.index(), None);
    }

    #[test]
    fn key_selector_error_keeps_source() {
        let err = GroupingError::KeySelector {
            index: 3,
            source: "bad element".into(),
        };
        assert_eq!(err.to_string(), "Key selector failed on element 3: bad element");
        assert_eq!(err.index(), Some(3));
        assert_eq!(err.source().map(|s| s.to_string()), Some("bad element".to_string()));
    }
}
