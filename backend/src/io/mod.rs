//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services: axum handlers,
//! request extractors, DTO mapping and error translation.
//!
//! ## Supported Operations
//!
//! - **GET /api/users/{username}/planner**: Owner and activity catalog for a
//!   planner page (401 without a session, 404 for an unknown owner)
//! - **POST /api/logs**: Structured log sink for frontend events

pub mod rest;

pub use rest::*;
