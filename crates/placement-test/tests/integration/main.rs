#![allow(clippy::expect_used)]
//! Integration tests against `PostgreSQL`.
//!
//! Set `TEST_DATABASE_URL` (or `DATABASE_URL`) to a database the tests may
//! migrate. Every test runs inside its own uncommitted transaction.


mod handlers;
mod listing;
mod store;
