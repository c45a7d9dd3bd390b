//! Policy data model: actions, subjects, and the immutable permission rule.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::ParseError;

/// The operation a rule grants.
///
/// Closed set: the typed API makes other values unrepresentable, and the
/// string boundary ([`FromStr`]) rejects anything outside it with
/// [`ParseError::UnknownAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(ParseError::UnknownAction(other.to_owned())),
        }
    }
}

/// The resource type a rule applies to.
///
/// Closed set, same validation posture as [`Action`]. Variant names are the
/// canonical spelling (`Post`, `Comment`, `User`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Post,
    Comment,
    User,
}

impl Subject {
    /// Canonical name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Post" => Ok(Self::Post),
            "Comment" => Ok(Self::Comment),
            "User" => Ok(Self::User),
            other => Err(ParseError::UnknownSubject(other.to_owned())),
        }
    }
}

/// A caller-supplied predicate over the request [`Context`].
///
/// Opaque to the engine: it is only ever invoked, never inspected.
/// Reference-counted so rules holding conditions stay cheaply cloneable.
pub type Condition = Arc<dyn Fn(&Context) -> bool + Send + Sync>;

/// An immutable authorization rule: one action on one subject, optionally
/// narrowed to a field allow-list and/or extra runtime conditions.
///
/// Built once via [`PermissionBuilder`](crate::PermissionBuilder) and then
/// reused across many evaluations. Evaluation never mutates a rule, so a
/// single `Permission` can be shared across concurrent checks without
/// coordination.
#[derive(Clone)]
pub struct Permission {
    action: Action,
    subject: Subject,
    fields: Option<Vec<String>>,
    conditions: Vec<Condition>,
}

impl Permission {
    /// Start building a rule.
    #[must_use]
    pub fn builder() -> crate::PermissionBuilder {
        crate::PermissionBuilder::new()
    }

    pub(crate) fn new(
        action: Action,
        subject: Subject,
        fields: Option<Vec<String>>,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            action,
            subject,
            fields,
            conditions,
        }
    }

    /// The granted action.
    #[inline]
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// The resource type the rule applies to.
    #[inline]
    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    /// The field allow-list, if the rule is field-scoped.
    ///
    /// `None` means the rule is not field-scoped (every field is permitted).
    /// An empty slice means no field is permitted.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// The extra conditions, in evaluation order.
    #[inline]
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Permission")
            .field("action", &self.action)
            .field("subject", &self.subject)
            .field("fields", &self.fields)
            .field("conditions", &self.conditions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn action_round_trips_through_str() {
        for action in [Action::Create, Action::Read, Action::Update, Action::Delete] {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn action_rejects_unknown_value() {
        let err = "append".parse::<Action>();
        assert_eq!(err, Err(ParseError::UnknownAction("append".to_owned())));
    }

    #[test]
    fn subject_round_trips_through_str() {
        for subject in [Subject::Post, Subject::Comment, Subject::User] {
            assert_eq!(subject.as_str().parse::<Subject>(), Ok(subject));
        }
    }

    #[test]
    fn subject_is_case_sensitive() {
        assert_eq!(
            "user".parse::<Subject>(),
            Err(ParseError::UnknownSubject("user".to_owned()))
        );
    }

    #[test]
    fn action_serializes_lowercase() {
        let json = serde_json::to_string(&Action::Update).expect("serialize");
        assert_eq!(json, "\"update\"");
        let back: Action = serde_json::from_str("\"delete\"").expect("deserialize");
        assert_eq!(back, Action::Delete);
    }

    #[test]
    fn subject_serializes_with_canonical_spelling() {
        let json = serde_json::to_string(&Subject::Post).expect("serialize");
        assert_eq!(json, "\"Post\"");
    }

    #[test]
    fn permission_debug_reports_condition_count() {
        let always: Condition = Arc::new(|_| true);
        let rule = Permission::new(Action::Read, Subject::Comment, None, vec![always]);
        let dbg = format!("{rule:?}");
        assert!(dbg.contains("Permission"));
        assert!(dbg.contains("conditions: 1"));
    }
}
