//! Query builders and executors.
//!
//! Builders return boxed queries so callers can narrow them further; the
//! async functions run a single statement each.

pub mod application;
pub mod user;
pub mod vacancy;
