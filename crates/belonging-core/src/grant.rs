//! Grants and the rule-collection boundary

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ability::AbilityLevel;
use crate::condition::Condition;
use crate::record::TypeName;

/// A derived authorization grant.
///
/// Grants are write-only output: emitted once, in derivation order, and never
/// mutated afterwards. Evaluation happens in the external rule-collection
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// Permission tier the grant is issued at.
    pub level: AbilityLevel,
    /// Resource class the grant applies to.
    pub resource: TypeName,
    /// Scoping condition limiting which instances match.
    pub condition: Condition,
}

impl Grant {
    /// Grant with the given level, resource class, and condition.
    pub fn new(level: AbilityLevel, resource: TypeName, condition: Condition) -> Self {
        Self {
            level,
            resource,
            condition,
        }
    }

    /// The condition rendered to the wire shape handed to the evaluator.
    pub fn condition_map(&self) -> Map<String, Value> {
        self.condition.to_map()
    }
}

/// Boundary to the external rule-collection engine.
///
/// The derivation handlers call [`grant`](Self::grant) once per derived
/// grant, in derivation order. Implementations accumulate rules for later
/// evaluation; this system never reads them back.
pub trait RuleCollection {
    /// Record one derived grant.
    fn grant(&mut self, grant: Grant);

    /// Register an action alias grouping `actions` under `to`.
    ///
    /// Engines without action aliasing can leave the default no-op.
    fn alias_actions(&mut self, actions: Vec<String>, to: AbilityLevel) {
        let _ = (actions, to);
    }
}

/// Grants collect into a plain vector, preserving derivation order.
impl RuleCollection for Vec<Grant> {
    fn grant(&mut self, grant: Grant) {
        self.push(grant);
    }
}
