//! Database enum types with Diesel serialization.
//!
//! Each enum implements `ToSql` and `FromSql` for automatic conversion between
//! Rust and `PostgreSQL` text columns guarded by CHECK constraints.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use placement_core::Role;
use std::io::Write;

/// User role column.
///
/// Maps to the `user.role` CHECK constraint. Unknown values fail to decode
/// rather than falling back to any role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum UserRole {
    Student,
    Agent,
    Admin,
}

impl ToSql<Text, Pg> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for UserRole {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"student" => Ok(Self::Student),
            b"agent" => Ok(Self::Agent),
            b"admin" => Ok(Self::Admin),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl UserRole {
    /// Returns the database string representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }
}

impl From<UserRole> for Role {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Student => Self::Student,
            UserRole::Agent => Self::Agent,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<Role> for UserRole {
    fn from(value: Role) -> Self {
        match value {
            Role::Student => Self::Student,
            Role::Agent => Self::Agent,
            Role::Admin => Self::Admin,
        }
    }
}
