//! Relationship records and the identifiers that scope them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ability::AbilityLabel;
use crate::inflect;

/// Persistence-layer row identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Host model class name, e.g. `Team` or `ForumTopic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeName(pub String);

impl TypeName {
    /// Wrap an already-cased class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Class name for a relation: `forum_topic` → `ForumTopic`.
    pub fn from_relation(relation: &str) -> Self {
        Self(inflect::class_name(relation))
    }

    /// The class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Label partitioning relationship kinds, e.g. `membership`.
///
/// A subject may hold belongings of different scopes to the same object;
/// queries filter on exact label equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeLabel(pub String);

impl ScopeLabel {
    /// Wrap a scope label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The conventional scope for container-membership records.
    pub fn membership() -> Self {
        Self("membership".to_string())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Which side of a [`Belonging`] the subject occupies.
///
/// Membership records place the member on the [`Belongable`](Self::Belongable)
/// side; the containing team or organization is the belonger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The owning/containing side of the record.
    Belonger,
    /// The contained/associated side of the record.
    Belongable,
}

impl Direction {
    /// The other side of the record.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Belonger => Direction::Belongable,
            Direction::Belongable => Direction::Belonger,
        }
    }
}

/// A directional relationship record connecting a belonger to a belongable.
///
/// Records are created and destroyed by the host's persistence layer; this
/// system only reads them. Consumers must check exact type-name equality on a
/// side before trusting that side's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belonging {
    /// Class name of the owning/containing side.
    pub belonger_type: TypeName,
    /// Row id of the owning/containing side.
    pub belonger_id: RecordId,
    /// Class name of the contained side.
    pub belongable_type: TypeName,
    /// Row id of the contained side.
    pub belongable_id: RecordId,
    /// Relationship kind, if the record is partitioned.
    #[serde(default)]
    pub scope: Option<ScopeLabel>,
    /// Stored permission label; empty means no label.
    #[serde(default)]
    pub ability: AbilityLabel,
}

impl Belonging {
    /// Record with no scope and no ability label.
    pub fn new(
        belonger_type: impl Into<TypeName>,
        belonger_id: impl Into<RecordId>,
        belongable_type: impl Into<TypeName>,
        belongable_id: impl Into<RecordId>,
    ) -> Self {
        Self {
            belonger_type: belonger_type.into(),
            belonger_id: belonger_id.into(),
            belongable_type: belongable_type.into(),
            belongable_id: belongable_id.into(),
            scope: None,
            ability: AbilityLabel::default(),
        }
    }

    /// Set the scope label.
    pub fn with_scope(mut self, scope: impl Into<ScopeLabel>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the ability label.
    pub fn with_ability(mut self, ability: impl Into<AbilityLabel>) -> Self {
        self.ability = ability.into();
        self
    }

    /// Class name on the given side.
    pub fn side_type(&self, side: Direction) -> &TypeName {
        match side {
            Direction::Belonger => &self.belonger_type,
            Direction::Belongable => &self.belongable_type,
        }
    }

    /// Row id on the given side.
    pub fn side_id(&self, side: Direction) -> RecordId {
        match side {
            Direction::Belonger => self.belonger_id,
            Direction::Belongable => self.belongable_id,
        }
    }
}

/// An element of a subject's directly-owned named collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedObject {
    /// Row id of the owned object.
    pub id: RecordId,
    /// Class name of the owned object.
    pub class_name: TypeName,
}

impl OwnedObject {
    /// Owned object with the given id and class name.
    pub fn new(id: impl Into<RecordId>, class_name: impl Into<TypeName>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
        }
    }
}
