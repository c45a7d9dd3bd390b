//! Gatewise policy engine.
//!
//! Declarative authorization rules: build an immutable [`Permission`] with
//! the fluent [`PermissionBuilder`], then evaluate it against a per-request
//! [`Context`] with [`authorize`].
//!
//! - [`Action`], [`Subject`] — closed enums naming what a rule grants
//! - [`Permission`], [`PermissionBuilder`] — the policy unit and its constructor
//! - [`Context`], [`Condition`] — request attributes and caller predicates
//! - [`authorize`] — the evaluation function
//! - [`ParseError`], [`BuildError`] — construction-time errors
//!
//! Rules are built ahead of time and shared; storage and indexing of rules,
//! and picking which rule applies to a request, belong to the caller.
//!
//! ## Usage
//!
//! ```
//! use gatewise_policy::{authorize, Action, Context, Permission, Subject};
//!
//! # fn main() -> Result<(), gatewise_policy::BuildError> {
//! let rule = Permission::builder()
//!     .can(Action::Update)
//!     .on(Subject::User)
//!     .with_fields(["name", "email", "profile_image"])
//!     .build()?;
//!
//! assert!(authorize(&rule, &Context::new().with_field("email")));
//! assert!(!authorize(&rule, &Context::new().with_field("password")));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod context;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use builder::PermissionBuilder;
pub use context::Context;
pub use engine::authorize;
pub use error::{BuildError, ParseError};
pub use models::{Action, Condition, Permission, Subject};
