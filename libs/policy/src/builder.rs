//! Step-by-step constructor for [`Permission`] rules.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::error::BuildError;
use crate::models::{Action, Condition, Permission, Subject};

/// Accumulates rule parts and validates completeness only at [`build`].
///
/// Each method consumes and returns the builder, so steps chain in any
/// order and a rule can be assembled across conditionals without every
/// part being present at each intermediate step:
///
/// ```
/// use gatewise_policy::{Action, PermissionBuilder, Subject};
///
/// # fn main() -> Result<(), gatewise_policy::BuildError> {
/// let rule = PermissionBuilder::new()
///     .can(Action::Update)
///     .on(Subject::Post)
///     .with_fields(["title", "content", "tags"])
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// The builder is single-writer and short-lived: use a fresh one per rule
/// rather than sharing builder state across construction sequences. The
/// built [`Permission`] owns its data; later builder use cannot touch it.
///
/// [`build`]: PermissionBuilder::build
#[derive(Default, Clone)]
pub struct PermissionBuilder {
    action: Option<Action>,
    subject: Option<Subject>,
    fields: Option<Vec<String>>,
    conditions: Vec<Condition>,
}

impl PermissionBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the action. Calling again overwrites (last write wins).
    #[must_use]
    pub fn can(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Record the subject. Calling again overwrites (last write wins).
    #[must_use]
    pub fn on(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Record the field allow-list, replacing any previous list.
    ///
    /// An empty list is legal and means "no field is permitted" — distinct
    /// from never calling `with_fields`, which leaves the rule unscoped
    /// (every field permitted). Field names must be non-empty.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        debug_assert!(
            fields.iter().all(|f| !f.is_empty()),
            "field names must be non-empty"
        );
        self.fields = Some(fields);
        self
    }

    /// Append one condition predicate; prior conditions are kept and run
    /// before this one.
    #[must_use]
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.conditions.push(Arc::new(condition));
        self
    }

    /// Finalize into an immutable [`Permission`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] naming the missing step(s) when [`can`] or
    /// [`on`] was never called.
    ///
    /// [`can`]: PermissionBuilder::can
    /// [`on`]: PermissionBuilder::on
    pub fn build(self) -> Result<Permission, BuildError> {
        match (self.action, self.subject) {
            (Some(action), Some(subject)) => Ok(Permission::new(
                action,
                subject,
                self.fields,
                self.conditions,
            )),
            (None, Some(_)) => Err(BuildError::MissingAction),
            (Some(_), None) => Err(BuildError::MissingSubject),
            (None, None) => Err(BuildError::MissingActionAndSubject),
        }
    }
}

impl fmt::Debug for PermissionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionBuilder")
            .field("action", &self.action)
            .field("subject", &self.subject)
            .field("fields", &self.fields)
            .field("conditions", &self.conditions.len())
            .finish_non_exhaustive()
    }
}
