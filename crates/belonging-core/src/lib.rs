//! Core data model for relationship-derived authorization grants.
//!
//! A subject (a user, an organization) is connected to the objects it
//! administers, manages, or is merely associated with through directional
//! relationship records called [belongings](Belonging). This crate provides
//! the record and grant model that the derivation handlers in
//! `belonging-grants` turn into concrete authorization grants:
//!
//! - [`Belonging`], [`Direction`], and the identifier newtypes that scope a
//!   record to host model classes and rows
//! - [`AbilityLabel`] / [`AbilityLevel`]: stored labels and the permission
//!   tiers they map to
//! - [`Condition`]: the tagged scoping shapes a grant can carry, and their
//!   rendering to the flat-or-nested wire map consumed by the evaluator
//! - [`Grant`] and [`RuleCollection`]: the emission boundary to the external
//!   rule-collection engine
//! - [`BelongingQuery`]: direction- and scope-filtered views over a subject's
//!   records
//! - the capability seams host applications implement for their principal
//!   model: [`RelationshipSource`], [`NamedCollectionProvider`], [`Subject`]
//!
//! Everything here is synchronous and side-effect free; each derivation pass
//! re-reads records from the host and holds no state across calls.

#![forbid(unsafe_code)]

pub mod ability;
pub mod condition;
pub mod errors;
pub mod grant;
pub mod inflect;
pub mod query;
pub mod record;
pub mod subject;

#[doc(hidden)]
pub mod test_utils;

pub use ability::{AbilityLabel, AbilityLevel};
pub use condition::{condition_key, Condition, ConditionValue};
pub use errors::{Error, Result};
pub use grant::{Grant, RuleCollection};
pub use query::BelongingQuery;
pub use record::{Belonging, Direction, OwnedObject, RecordId, ScopeLabel, TypeName};
pub use subject::{NamedCollectionProvider, RelationshipSource, Subject};
