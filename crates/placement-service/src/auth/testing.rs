//! In-memory resolver for decision tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use futures::future::BoxFuture;
use placement_core::{OrganisationId, Role, UserId, VacancyRef};
use placement_db::error::DbError;

use super::resolver::RelationshipResolver;
use crate::error::{ServiceError, ServiceResult};

#[derive(Default)]
pub struct FakeResolver {
    roles: HashMap<UserId, Role>,
    applications: Vec<(UserId, OrganisationId)>,
    fail: bool,
    lookups: AtomicUsize,
}

impl FakeResolver {
    /// A resolver whose every lookup fails as if the store were down.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: UserId, role: Role) -> Self {
        self.roles.insert(user_id, role);
        self
    }

    #[must_use]
    pub fn with_application(mut self, user_id: UserId, vacancy: VacancyRef) -> Self {
        self.applications.push((user_id, vacancy.employer_id));
        self
    }

    /// Number of store lookups made so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn lookup(&self) -> ServiceResult<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ServiceError::StoreUnavailable(DbError::Query(
                DieselError::DatabaseError(
                    DatabaseErrorKind::ClosedConnection,
                    Box::new(String::from("connection closed")),
                ),
            )));
        }
        Ok(())
    }
}

impl RelationshipResolver for FakeResolver {
    fn role_of(&self, user_id: UserId) -> BoxFuture<'_, ServiceResult<Option<Role>>> {
        Box::pin(async move {
            self.lookup()?;
            Ok(self.roles.get(&user_id).copied())
        })
    }

    fn applied_to_organisation_vacancy(
        &self,
        student_id: UserId,
        organisation_id: OrganisationId,
    ) -> BoxFuture<'_, ServiceResult<bool>> {
        Box::pin(async move {
            self.lookup()?;
            Ok(self
                .applications
                .iter()
                .any(|&(user_id, employer_id)| {
                    user_id == student_id && employer_id == organisation_id
                }))
        })
    }
}
