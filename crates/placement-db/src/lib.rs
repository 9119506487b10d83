//! Store access for the placement authorization engine.
//!
//! Owns the table definitions, row models, the role column codec, the
//! connection pool and the relational queries decisions are built on.

pub mod db;
pub mod error;
pub mod model;
