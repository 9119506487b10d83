use diesel::{pg::Pg, prelude::*};
use placement_core::Principal;

use crate::db::{enums::UserRole, schema};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub organisation_id: Option<i32>,
}

impl User {
    /// Builds the principal this row authenticates as.
    #[must_use]
    pub fn to_principal(&self) -> Principal {
        Principal::new(self.id, self.role.into(), self.organisation_id)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::user)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub display_name: Option<&'a str>,
    pub role: UserRole,
    pub organisation_id: Option<i32>,
}
