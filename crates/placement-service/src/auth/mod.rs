//! Authentication context and authorization decisions.
//!
//! ## Module Organization
//!
//! - `action`: Guarded operations and their coarse role gates
//! - `authenticate`: Loading the request principal from the store
//! - `decision`: Per-resource allow/deny predicates
//! - `depot`: Helpers for carrying authorization context through Salvo requests
//! - `listing`: Application listings filtered by visibility
//! - `resolver`: Relational facts read from the store
//! - `service`: Centralized enforcement (`Authorizer`)

pub mod action;
pub mod authenticate;
pub mod decision;
pub mod depot;
pub mod listing;
pub mod resolver;
pub mod service;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use authenticate::load_principal;
pub use decision::{Verdict, application_scope, require_admin, require_agent, require_role};
pub use depot::{
    PrincipalLoader, StoreHandler, attach_principal, authorizer_from_depot, principal_from_depot,
};
pub use listing::{list_vacancy_applications, list_visible_applications};
pub use resolver::{DbResolver, RelationshipResolver};
pub use service::Authorizer;
