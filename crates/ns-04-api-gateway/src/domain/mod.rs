//! Gateway domain: configuration, errors, request and response bodies.

pub mod config;
pub mod error;
pub mod requests;
