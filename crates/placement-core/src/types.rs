/// Store identifiers. All entities use integer identity keys.
pub type UserId = i32;
pub type OrganisationId = i32;
pub type VacancyId = i32;
pub type ApplicationId = i32;

/// The facts about a vacancy that authorization depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VacancyRef {
    pub id: VacancyId,
    /// Owning organisation.
    pub employer_id: OrganisationId,
}

/// The facts about an application that authorization depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplicationRef {
    pub id: ApplicationId,
    /// The applicant.
    pub user_id: UserId,
    pub vacancy_id: VacancyId,
}
