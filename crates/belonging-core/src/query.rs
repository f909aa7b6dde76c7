//! Filtered views over a subject's relationship records

use crate::record::{Belonging, Direction, ScopeLabel};
use crate::subject::RelationshipSource;

/// Direction- and scope-filtered query over a relationship source.
///
/// Side-effect free: each [`run`](Self::run) re-reads the source and filters
/// in place. When a scope is set, only records with exactly that scope match;
/// unscoped records are dropped.
#[derive(Debug, Clone)]
pub struct BelongingQuery {
    direction: Direction,
    scope: Option<ScopeLabel>,
}

impl BelongingQuery {
    /// Unscoped query on one side.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            scope: None,
        }
    }

    /// Query with an optional scope filter.
    pub fn scoped(direction: Direction, scope: Option<ScopeLabel>) -> Self {
        Self { direction, scope }
    }

    /// Restrict to records carrying exactly this scope.
    pub fn with_scope(mut self, scope: impl Into<ScopeLabel>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Fetch and filter the subject's records.
    pub fn run(&self, source: &dyn RelationshipSource) -> Vec<Belonging> {
        let records = source.belongings(self.direction);
        match &self.scope {
            None => records,
            Some(scope) => records
                .into_iter()
                .filter(|belonging| belonging.scope.as_ref() == Some(scope))
                .collect(),
        }
    }
}
