//! Internal test fixtures
//!
//! `StaticSubject` is an in-memory [`Subject`] used by this workspace's unit
//! and integration tests. Host applications implement the capability traits
//! over their own principal model instead.

use std::collections::BTreeMap;

use crate::record::{Belonging, Direction, OwnedObject, RecordId, TypeName};
use crate::subject::{NamedCollectionProvider, RelationshipSource, Subject};

/// In-memory subject holding fixed records and collections.
#[derive(Debug, Clone)]
pub struct StaticSubject {
    /// Row id reported by [`Subject::id`].
    pub id: RecordId,
    /// Class name reported by [`Subject::class_name`].
    pub class_name: TypeName,
    /// Records where the subject is the belonger.
    pub belonger_records: Vec<Belonging>,
    /// Records where the subject is the belongable.
    pub belongable_records: Vec<Belonging>,
    /// Named collections keyed by pluralized relation name.
    pub collections: BTreeMap<String, Vec<OwnedObject>>,
}

impl StaticSubject {
    /// Subject with no records and no collections.
    pub fn new(id: u64, class_name: &str) -> Self {
        Self {
            id: RecordId(id),
            class_name: TypeName::new(class_name),
            belonger_records: Vec::new(),
            belongable_records: Vec::new(),
            collections: BTreeMap::new(),
        }
    }

    /// Append a record on the given side.
    pub fn with_belonging(mut self, side: Direction, belonging: Belonging) -> Self {
        match side {
            Direction::Belonger => self.belonger_records.push(belonging),
            Direction::Belongable => self.belongable_records.push(belonging),
        }
        self
    }

    /// Set a named collection.
    pub fn with_collection(mut self, name: &str, objects: Vec<OwnedObject>) -> Self {
        self.collections.insert(name.to_string(), objects);
        self
    }
}

impl RelationshipSource for StaticSubject {
    fn belongings(&self, direction: Direction) -> Vec<Belonging> {
        match direction {
            Direction::Belonger => self.belonger_records.clone(),
            Direction::Belongable => self.belongable_records.clone(),
        }
    }
}

impl NamedCollectionProvider for StaticSubject {
    fn named_collection(&self, name: &str) -> Vec<OwnedObject> {
        self.collections.get(name).cloned().unwrap_or_default()
    }
}

impl Subject for StaticSubject {
    fn id(&self) -> RecordId {
        self.id
    }

    fn class_name(&self) -> TypeName {
        self.class_name.clone()
    }
}
