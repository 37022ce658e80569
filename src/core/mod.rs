//! Configuration and request-scoped data model

pub mod config;
pub mod models;
