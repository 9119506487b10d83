pub mod application;
pub mod organisation;
pub mod user;
pub mod vacancy;
