//! Shared vocabulary for the placement authorization engine.
//!
//! This crate has no store or transport dependencies. It defines the role
//! hierarchy, the authenticated principal value, the lightweight resource
//! references decisions are made against, and configuration loading.

pub mod config;
pub mod error;
pub mod principal;
pub mod role;
pub mod types;

pub use principal::Principal;
pub use role::{Role, has_minimum_role};
pub use types::{ApplicationId, ApplicationRef, OrganisationId, UserId, VacancyId, VacancyRef};
