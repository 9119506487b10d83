use diesel::{pg::Pg, prelude::*};
use placement_core::ApplicationRef;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::application)]
#[diesel(check_for_backend(Pg))]
pub struct Application {
    pub id: i32,
    pub user_id: i32,
    pub vacancy_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Application> for ApplicationRef {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            vacancy_id: application.vacancy_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = schema::application)]
pub struct NewApplication {
    pub user_id: i32,
    pub vacancy_id: i32,
}
