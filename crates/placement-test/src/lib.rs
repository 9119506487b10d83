//! Placement authorization engine - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can reach
//! them through a single `placement_test::component` path.

pub mod component {
    pub use placement_core::{
        ApplicationId, ApplicationRef, OrganisationId, Principal, Role, UserId, VacancyId,
        VacancyRef, config,
    };
    pub use placement_service::{auth, error};

    pub mod db {
        pub use placement_db::db::*;
        pub use placement_db::error::DbError;
    }

    pub mod model {
        pub use placement_db::model::*;
    }
}
