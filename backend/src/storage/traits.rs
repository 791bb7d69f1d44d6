//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::activity::Activity;
use crate::domain::models::session::Session;
use crate::domain::models::user::User;

/// Trait defining the interface for page owner storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user or overwrite an existing one with the same username
    async fn store_user(&self, user: &User) -> Result<()>;

    /// Retrieve a user by username; `None` when no such user exists
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Trait defining the interface for activity catalog storage operations
#[async_trait]
pub trait ActivityStorage: Send + Sync {
    /// Append an activity to its owner's catalog
    async fn store_activity(&self, activity: &Activity) -> Result<()>;

    /// List an owner's activities in stored order
    async fn list_activities(&self, owner_id: &str) -> Result<Vec<Activity>>;
}

/// Trait defining the interface for session storage operations
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Store a new session or replace one with the same ID
    async fn store_session(&self, session: &Session) -> Result<()>;

    /// Retrieve a session by ID
    async fn get_session(&self, session_id: &str) -> Result<Option<Session>>;
}
