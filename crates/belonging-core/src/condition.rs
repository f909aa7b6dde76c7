//! Grant-scoping conditions and their wire rendering
//!
//! A grant is scoped by exactly one [`Condition`]. The variants cover the
//! shapes the derivation handlers produce; each renders to a flat or
//! one-level-nested JSON mapping, the sole representation the external
//! rule-collection engine consumes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::ability::AbilityLabel;
use crate::record::{RecordId, TypeName};

/// Visibility value carried by the static public grants.
pub const PUBLIC_VISIBILITY: &str = "public";

/// Condition-map key for an association column.
///
/// An absent or empty column override resolves to the bare suffix; otherwise
/// the key is `<column>_<suffix>`. Called once for the identity key (suffix
/// `id`) and once more with suffix `type` when the association is
/// polymorphic.
pub fn condition_key(column: Option<&str>, suffix: &str) -> String {
    match column {
        None | Some("") => suffix.to_string(),
        Some(column) => format!("{column}_{suffix}"),
    }
}

/// Value a condition pins a column to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionValue {
    /// Row-id equality.
    Id(RecordId),
    /// Literal text equality.
    Text(String),
}

impl ConditionValue {
    fn to_json(&self) -> Value {
        match self {
            ConditionValue::Id(id) => json!(id.0),
            ConditionValue::Text(text) => json!(text),
        }
    }
}

/// Scoping condition attached to a grant.
///
/// The emitter selects a variant explicitly per derivation case rather than
/// assembling ad-hoc maps:
///
/// - [`Flat`](Self::Flat): one column equality (`team_id = 7`)
/// - [`Typed`](Self::Typed): paired id/type equality for a polymorphic
///   association (`owner_id = 1, owner_type = "User"`)
/// - [`Membership`](Self::Membership): the resource relates to the container
///   through a collection field (`teams: { id: 7 }`)
/// - [`Public`](Self::Public): the static visibility convention
///   (`ability = <label>, visibility = "public"`), independent of
///   relationship records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Single-column equality.
    Flat {
        /// Column name on the resource.
        field: String,
        /// Required value.
        value: ConditionValue,
    },
    /// Paired id/type equality for a polymorphic association.
    Typed {
        /// Identity column name.
        id_field: String,
        /// Required row id.
        id_value: RecordId,
        /// Discriminator column name.
        type_field: String,
        /// Required class name.
        type_value: TypeName,
    },
    /// Membership in a collection-valued field: `field: { id: … }`.
    Membership {
        /// Collection field name on the resource.
        field: String,
        /// Row id the collection must contain.
        id: RecordId,
    },
    /// Static visibility convention: `ability = <label>, visibility = "public"`.
    Public {
        /// Required ability column value.
        ability: AbilityLabel,
    },
}

impl Condition {
    /// Flat id-equality condition.
    pub fn flat_id(field: impl Into<String>, id: impl Into<RecordId>) -> Self {
        Condition::Flat {
            field: field.into(),
            value: ConditionValue::Id(id.into()),
        }
    }

    /// Public-visibility condition for the given ability label.
    pub fn public(ability: impl Into<AbilityLabel>) -> Self {
        Condition::Public {
            ability: ability.into(),
        }
    }

    /// Render to the wire shape consumed by the evaluator: a flat or
    /// one-level-nested mapping of field name to required value.
    ///
    /// `serde_json::Map` iterates in key order, so rendering is deterministic
    /// for a given condition.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            Condition::Flat { field, value } => {
                map.insert(field.clone(), value.to_json());
            }
            Condition::Typed {
                id_field,
                id_value,
                type_field,
                type_value,
            } => {
                map.insert(id_field.clone(), json!(id_value.0));
                map.insert(type_field.clone(), json!(type_value.as_str()));
            }
            Condition::Membership { field, id } => {
                map.insert(field.clone(), json!({ "id": id.0 }));
            }
            Condition::Public { ability } => {
                map.insert("ability".to_string(), json!(ability.as_str()));
                map.insert("visibility".to_string(), json!(PUBLIC_VISIBILITY));
            }
        }
        map
    }
}
