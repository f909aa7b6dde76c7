//! Relation-name inflection
//!
//! Relation names arrive in snake case (`forum_topic`). Host model classes
//! are Pascal cased and named collections are pluralized, so both inflections
//! are needed when resolving a relation against records and collections.

use cruet::Inflector;

/// Class name for a relation: `forum_topic` → `ForumTopic`.
pub fn class_name(relation: &str) -> String {
    relation.to_pascal_case()
}

/// Named-collection key for a relation: `category` → `categories`.
pub fn pluralize(relation: &str) -> String {
    relation.to_plural()
}
