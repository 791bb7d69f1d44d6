use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use tracing::{debug, info, warn};

use super::connection::CsvConnection;
use crate::domain::models::user::User;
use crate::storage::UserStorage;

/// A stored user together with the directory it was loaded from
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    pub directory_name: String,
    pub user: User,
}

/// YAML-backed user repository using one directory per username
#[derive(Clone)]
pub struct UserRepository {
    connection: CsvConnection,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Load the user stored in `users/<directory_name>/user.yaml`, if any
    fn load_user_from_directory(&self, directory_name: &str) -> Result<Option<User>> {
        let yaml_path = self.connection.user_yaml_path(directory_name);
        if !yaml_path.exists() {
            return Ok(None);
        }

        let yaml_content = fs::read_to_string(&yaml_path)
            .with_context(|| format!("Failed to read {}", yaml_path.display()))?;
        let user: User = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", yaml_path.display()))?;

        // The directory name is what lookups and the catalog path go by
        if user.username != directory_name {
            warn!(
                "User {} in directory {} is stored with username {:?}",
                user.id, directory_name, user.username
            );
        }

        Ok(Some(user))
    }

    /// Discover all users by scanning the users directory
    pub fn discover_users(&self) -> Result<Vec<UserDirectory>> {
        let users_dir = self.connection.users_directory();
        if !users_dir.exists() {
            debug!("Users directory doesn't exist, returning empty user list");
            return Ok(Vec::new());
        }

        let mut users = Vec::new();
        for entry in fs::read_dir(&users_dir)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }

            let directory_name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => {
                    warn!("Skipping directory with invalid name: {:?}", path);
                    continue;
                }
            };

            match self.load_user_from_directory(&directory_name) {
                Ok(Some(user)) => users.push(UserDirectory {
                    directory_name,
                    user,
                }),
                Ok(None) => debug!("Directory {} doesn't contain a user", directory_name),
                Err(e) => warn!("Error loading user from directory {}: {}", directory_name, e),
            }
        }

        users.sort_by(|a, b| a.directory_name.cmp(&b.directory_name));
        Ok(users)
    }

    /// Name of the directory holding the files of the user with `user_id`
    pub fn find_user_directory(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self
            .discover_users()?
            .into_iter()
            .find(|entry| entry.user.id == user_id)
            .map(|entry| entry.directory_name))
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn store_user(&self, user: &User) -> Result<()> {
        let username = User::normalize_username(&user.username)
            .ok_or_else(|| anyhow::anyhow!("Invalid username: {:?}", user.username))?;

        let mut stored = user.clone();
        stored.username = username.clone();

        let yaml_content = serde_yaml::to_string(&stored)?;
        CsvConnection::write_atomically(
            &self.connection.user_yaml_path(&username),
            yaml_content.as_bytes(),
        )?;

        info!("Saved user {} ({})", stored.username, stored.id);
        Ok(())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        match User::normalize_username(username) {
            Some(directory_name) => self.load_user_from_directory(&directory_name),
            None => {
                debug!("Rejected malformed username {:?}", username);
                Ok(None)
            }
        }
    }
}
