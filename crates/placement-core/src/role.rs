//! Role hierarchy.
//!
//! Roles form a strict total order `Student < Agent < Admin`. The order is
//! only ever used for minimum-role gates; it does not mean a higher role
//! inherits the data of a lower one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The role of a user account.
///
/// Variant declaration order is the rank order; [`has_minimum_role`]
/// compares through the derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Agent,
    Admin,
}

impl Role {
    /// All roles, lowest rank first.
    pub const ALL: [Self; 3] = [Self::Student, Self::Agent, Self::Admin];

    /// Returns the canonical lowercase name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }
}

/// ## Summary
/// Returns `true` iff `actual >= required` under `Student < Agent < Admin`.
#[must_use]
pub fn has_minimum_role(actual: Role, required: Role) -> bool {
    actual >= required
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "agent" => Ok(Self::Agent),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::ParseError(format!("unknown role `{other}`"))),
        }
    }
}
