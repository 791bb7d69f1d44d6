//! # Domain Module
//!
//! Business logic behind the activity planner page.
//!
//! ## Module Organization
//!
//! - **planner_service**: Resolves a page owner by username and lists their
//!   activity catalog in stored order
//! - **session_service**: Issues sessions and maps session cookies to user IDs
//! - **errors**: The `PlannerError` taxonomy (`NotFound`, `Unauthenticated`,
//!   `Storage`)
//! - **commands**: Internal query/result types used between the REST layer
//!   and the services
//! - **models**: Domain entities (`User`, `Activity`, `Session`)
//!
//! The catalog is rendered as received: services never filter, sort or cache
//! activities. Bookings are not part of the backend; the booking flow lives
//! entirely in the frontend state machine.

pub mod commands;
pub mod errors;
pub mod models;
pub mod planner_service;
pub mod session_service;

pub use errors::PlannerError;
pub use planner_service::PlannerService;
pub use session_service::SessionService;
