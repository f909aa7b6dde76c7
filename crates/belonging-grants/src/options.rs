//! Handler options with the conventional defaults

use serde::{Deserialize, Serialize};

use belonging_core::ScopeLabel;

/// Options for [`GrantEmitter::abilities`](crate::GrantEmitter::abilities).
///
/// Defaults: owner column `user`, flat (not polymorphic) scoping, public
/// grants emitted first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityOptions {
    /// Column prefix for the owner condition keys (`user` → `user_id`).
    /// An empty string resolves to the bare `id`/`type` keys.
    pub column: String,
    /// Add the paired type discriminator to the owner condition.
    pub polymorphic: bool,
    /// Emit the three public-visibility grants before the owner grant.
    pub public_grants: bool,
}

impl Default for AbilityOptions {
    fn default() -> Self {
        Self {
            column: "user".to_string(),
            polymorphic: false,
            public_grants: true,
        }
    }
}

/// Options for
/// [`GrantEmitter::membership_abilities`](crate::GrantEmitter::membership_abilities).
///
/// Defaults: records filtered to the `membership` scope, condition keys
/// derived from the relation name, flat scoping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipOptions {
    /// Scope filter applied to membership records; `None` disables
    /// filtering. The direct-ownership branch is never scope filtered.
    pub scope: Option<ScopeLabel>,
    /// Column override for condition keys (and for the collection field when
    /// [`acts_as_belongable`](Self::acts_as_belongable) is set). `None`
    /// derives the keys from the relation name.
    pub column: Option<String>,
    /// Add the paired type discriminator to each condition.
    pub polymorphic: bool,
    /// The resource relates to its container through a collection-valued
    /// field, so grants scope by collection membership instead of a foreign
    /// key.
    pub acts_as_belongable: bool,
}

impl Default for MembershipOptions {
    fn default() -> Self {
        Self {
            scope: Some(ScopeLabel::membership()),
            column: None,
            polymorphic: false,
            acts_as_belongable: false,
        }
    }
}
