//! Error types for rule parsing and construction.

/// A string failed to parse into one of the closed policy enums.
///
/// Not recoverable locally: the caller constructing the rule must supply a
/// value from the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not one of `create`, `read`, `update`, `delete`.
    #[error("unknown action {0:?} (expected one of: create, read, update, delete)")]
    UnknownAction(String),

    /// The value is not one of `Post`, `Comment`, `User`.
    #[error("unknown subject {0:?} (expected one of: Post, Comment, User)")]
    UnknownSubject(String),
}

/// `build()` was called before every required step was supplied.
///
/// The variant names exactly which step(s) are missing; the caller must
/// supply them before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No action recorded: `can` was never called.
    #[error("incomplete permission rule: no action set (`can` was never called)")]
    MissingAction,

    /// No subject recorded: `on` was never called.
    #[error("incomplete permission rule: no subject set (`on` was never called)")]
    MissingSubject,

    /// Neither required step was recorded.
    #[error("incomplete permission rule: neither action nor subject set")]
    MissingActionAndSubject,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_rejected_value() {
        let err = ParseError::UnknownAction("append".to_owned());
        assert!(err.to_string().contains("\"append\""));

        let err = ParseError::UnknownSubject("Page".to_owned());
        assert!(err.to_string().contains("\"Page\""));
    }

    #[test]
    fn build_error_names_the_missing_step() {
        assert!(BuildError::MissingAction.to_string().contains("no action"));
        assert!(BuildError::MissingSubject.to_string().contains("no subject"));
        assert!(
            BuildError::MissingActionAndSubject
                .to_string()
                .contains("neither action nor subject")
        );
    }
}
