use diesel::{pg::Pg, prelude::*};
use placement_core::VacancyRef;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::vacancy)]
#[diesel(check_for_backend(Pg))]
pub struct Vacancy {
    pub id: i32,
    pub employer_id: i32,
    pub title: String,
}

impl From<&Vacancy> for VacancyRef {
    fn from(vacancy: &Vacancy) -> Self {
        Self {
            id: vacancy.id,
            employer_id: vacancy.employer_id,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::vacancy)]
pub struct NewVacancy<'a> {
    pub employer_id: i32,
    pub title: &'a str,
}
