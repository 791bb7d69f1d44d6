//! # REST API Interface Layer
//!
//! Each `*_apis` module exposes a `router()` that is nested under `/api` by
//! [`crate::create_router`]. Domain errors become HTTP responses through the
//! `IntoResponse` impl in [`mappers::error_mapper`].

pub mod auth;
pub mod logging_apis;
pub mod mappers;
pub mod planner_apis;

pub use auth::{AuthenticatedUser, SESSION_COOKIE};
