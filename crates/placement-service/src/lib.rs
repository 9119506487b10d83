//! Authorization and visibility engine for the placement marketplace.

pub mod auth;
pub mod error;
