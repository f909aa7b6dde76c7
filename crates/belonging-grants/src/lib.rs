//! Grant derivation for relationship-connected subjects.
//!
//! Turns a subject's [belonging](belonging_core::Belonging) records, its
//! directly-owned named collections, and the static visibility convention
//! into authorization grants handed to an external rule-collection engine:
//!
//! - [`GrantEmitter`]: the handler routines (`abilities`,
//!   `membership_abilities`, `belongable_abilities`, `belonger_abilities`,
//!   `public_abilities`)
//! - [`AbilityOptions`] / [`MembershipOptions`]: per-call knobs with the
//!   conventional defaults
//! - [`Dispatcher`]: string entry points of the form `<relation>_abilities`
//!   resolved to membership derivation through an explicit registry
//!
//! A derivation pass is a pure function of (resource class, subject, options,
//! current records); emitters hold no state across passes, so concurrent
//! passes just use independent emitters.

#![forbid(unsafe_code)]

pub mod dispatch;
pub mod emitter;
pub mod options;

pub use dispatch::{handles, relation_of, Dispatcher};
pub use emitter::GrantEmitter;
pub use options::{AbilityOptions, MembershipOptions};
