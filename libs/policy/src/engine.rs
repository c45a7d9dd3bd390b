//! Rule evaluation.
//!
//! [`authorize`] decides whether a [`Permission`] authorizes a [`Context`].
//!
//! ## Decision Matrix
//!
//! | rule `fields` | context `field` | conditions | Result |
//! |---------------|-----------------|------------|--------|
//! | present       | present         | ignored    | allow-list membership |
//! | present       | absent          | consulted  | AND over conditions |
//! | absent        | *               | consulted  | AND over conditions |
//! | absent        | *               | none       | `true` |
//!
//! When both the rule and the context name a field, the field-scope check
//! fully determines the outcome — conditions are not consulted on that
//! branch.

use crate::context::Context;
use crate::models::Permission;

/// Decide whether `permission` authorizes `context`.
///
/// Action/subject matching is the caller's concern: selecting which rule
/// to evaluate happens before this call, and the engine does not re-check
/// the pair against the context.
///
/// Conditions run left-to-right and stop at the first `false`, so cheap
/// predicates can be ordered before expensive ones. Total on the engine's
/// account: a panic inside a caller-supplied condition propagates
/// unchanged, since neither fail-open nor fail-closed is a safe default
/// to pick silently.
#[must_use]
pub fn authorize(permission: &Permission, context: &Context) -> bool {
    if let (Some(allowed), Some(field)) = (permission.fields(), context.field()) {
        let granted = allowed.iter().any(|f| f == field);
        tracing::debug!(
            action = %permission.action(),
            subject = %permission.subject(),
            field,
            granted,
            "field scope decided authorization"
        );
        return granted;
    }

    let granted = permission
        .conditions()
        .iter()
        .all(|condition| condition(context));
    tracing::debug!(
        action = %permission.action(),
        subject = %permission.subject(),
        conditions = permission.conditions().len(),
        granted,
        "condition check decided authorization"
    );
    granted
}
