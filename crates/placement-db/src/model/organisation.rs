use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::organisation)]
#[diesel(check_for_backend(Pg))]
pub struct Organisation {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::organisation)]
pub struct NewOrganisation<'a> {
    pub name: &'a str,
}
