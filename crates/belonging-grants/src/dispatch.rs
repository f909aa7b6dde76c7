//! Entry-point resolution and the relation registry
//!
//! Host applications reach membership derivation through dynamically-named
//! entry points (`team_abilities`, `organization_abilities`). The name is
//! plain data here: a string of the form `<relation>_abilities` resolves
//! through an explicit registry rather than reflection, and a capability
//! probe lets host tooling distinguish "dynamically supported" from "truly
//! unknown".

use std::collections::BTreeMap;

use belonging_core::{Error, Result, RuleCollection, Subject, TypeName};

use crate::emitter::GrantEmitter;
use crate::options::MembershipOptions;

/// Names claimed by the fixed handlers; never resolved as dynamic relations.
const FIXED_HANDLERS: [&str; 5] = [
    "abilities",
    "membership_abilities",
    "belongable_abilities",
    "belonger_abilities",
    "public_abilities",
];

const ENTRY_SUFFIX: &str = "_abilities";

/// Relation encoded in a dynamic entry-point name, if any.
///
/// `team_abilities` → `Some("team")`. Fixed handler names, the bare suffix,
/// and names without the suffix resolve to `None`.
pub fn relation_of(name: &str) -> Option<&str> {
    if FIXED_HANDLERS.contains(&name) {
        return None;
    }
    let relation = name.strip_suffix(ENTRY_SUFFIX)?;
    if relation.is_empty() {
        return None;
    }
    Some(relation)
}

/// Capability probe: whether `name` is served by this module's entry points.
///
/// True for every name matching the `<relation>_abilities` pattern, the
/// fixed handler names included.
pub fn handles(name: &str) -> bool {
    FIXED_HANDLERS.contains(&name) || relation_of(name).is_some()
}

/// Registry resolving dynamic entry points to membership derivation.
///
/// Relations may be bound to non-default [`MembershipOptions`] at setup time;
/// unregistered relations dispatch with the defaults, so any
/// `<relation>_abilities` name works without prior registration.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registered: BTreeMap<String, MembershipOptions>,
}

impl Dispatcher {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `relation` to non-default membership options.
    pub fn register(&mut self, relation: impl Into<String>, options: MembershipOptions) -> &mut Self {
        self.registered.insert(relation.into(), options);
        self
    }

    /// Options bound to a relation; defaults when unregistered.
    pub fn options_for(&self, relation: &str) -> MembershipOptions {
        self.registered.get(relation).cloned().unwrap_or_default()
    }

    /// Capability probe, see [`handles`].
    pub fn handles(&self, name: &str) -> bool {
        handles(name)
    }

    /// Resolve a dynamic entry point and derive membership grants for it.
    ///
    /// A name that encodes no relation (a fixed handler name, or anything
    /// not matching the pattern) is a programmer error surfaced to the host;
    /// the fixed handlers are called directly on [`GrantEmitter`].
    pub fn dispatch(
        &self,
        name: &str,
        resource: &TypeName,
        subject: &dyn Subject,
        rules: &mut dyn RuleCollection,
    ) -> Result<()> {
        let Some(relation) = relation_of(name) else {
            return Err(Error::unknown_entry_point(name));
        };
        let options = self.options_for(relation);
        GrantEmitter::new(rules).membership_abilities(relation, resource, subject, &options);
        Ok(())
    }
}
