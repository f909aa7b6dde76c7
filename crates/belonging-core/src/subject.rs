//! Capability seams implemented by host principal models
//!
//! The derivation handlers never see the host's user or organization types
//! directly; they consume these three traits. Hosts implement them over
//! whatever persistence layer backs their principal model.

use crate::record::{Belonging, Direction, OwnedObject, RecordId, TypeName};

/// Read access to a subject's relationship records.
///
/// A fully-materializing read: every derivation pass re-queries, nothing is
/// cached between calls. Ordering beyond the persistence layer's natural
/// order is not guaranteed and not relied upon.
pub trait RelationshipSource {
    /// All records where the subject occupies `direction`.
    fn belongings(&self, direction: Direction) -> Vec<Belonging>;
}

/// Lookup of a subject's directly-owned collections by pluralized relation
/// name (`"teams"`, `"forum_topics"`).
pub trait NamedCollectionProvider {
    /// Objects in the named collection; unknown names yield an empty
    /// collection.
    fn named_collection(&self, name: &str) -> Vec<OwnedObject>;
}

/// A principal grants can be derived for.
pub trait Subject: RelationshipSource + NamedCollectionProvider {
    /// Persistence id of the subject.
    fn id(&self) -> RecordId;

    /// Host model class name of the subject.
    fn class_name(&self) -> TypeName;
}
