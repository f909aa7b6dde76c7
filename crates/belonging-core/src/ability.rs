//! Ability labels and permission levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form permission label stored on a belonging.
///
/// `admin`, `user`, and `guest` are reserved and map to the built-in tiers;
/// any other non-empty label names a custom level the evaluator is expected
/// to understand. The empty label means the record carries no label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityLabel(pub String);

impl AbilityLabel {
    /// Wrap a stored label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Whether the record carries no label.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Permission level this label maps to.
    ///
    /// Reserved labels map to their tier, the empty label to nothing, and any
    /// other label passes through literally. Callers skip grant emission on
    /// `None`; an unlabeled record is not an error.
    pub fn level(&self) -> Option<AbilityLevel> {
        match self.0.as_str() {
            "admin" => Some(AbilityLevel::Manage),
            "user" => Some(AbilityLevel::Modify),
            "guest" => Some(AbilityLevel::Read),
            "" => None,
            other => Some(AbilityLevel::Custom(other.to_string())),
        }
    }
}

impl fmt::Display for AbilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Permission tier attached to a grant.
///
/// `Manage` logically implies `Modify` and `Read`; the hierarchy is enforced
/// by the external rule-collection engine, this system only selects which
/// tier to attach.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityLevel {
    /// Read-only access.
    Read,
    /// Read and write access.
    Modify,
    /// Full access, including administrative operations.
    Manage,
    /// Host-defined level named by a literal label.
    Custom(String),
}

impl AbilityLevel {
    /// The level name handed to the evaluator.
    pub fn as_str(&self) -> &str {
        match self {
            AbilityLevel::Read => "read",
            AbilityLevel::Modify => "modify",
            AbilityLevel::Manage => "manage",
            AbilityLevel::Custom(name) => name,
        }
    }
}

impl fmt::Display for AbilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
