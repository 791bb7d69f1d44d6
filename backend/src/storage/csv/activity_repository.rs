use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use tracing::{debug, info, warn};

use super::connection::CsvConnection;
use super::user_repository::UserRepository;
use crate::domain::models::activity::Activity;
use crate::storage::ActivityStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of `activities.csv`
#[derive(Debug, Serialize, Deserialize)]
struct ActivityRecord {
    id: String,
    title: String,
    tags: String,
    created_at: String,
}

impl ActivityRecord {
    fn into_domain(self, owner_id: &str) -> Result<Activity> {
        let created_at = NaiveDate::parse_from_str(&self.created_at, DATE_FORMAT)
            .with_context(|| format!("Invalid created_at {:?} for activity {}", self.created_at, self.id))?;

        Ok(Activity {
            tags: Activity::parse_tags(&self.tags),
            id: self.id,
            owner_id: owner_id.to_string(),
            title: self.title,
            created_at,
        })
    }

    fn from_domain(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            tags: activity.format_tags(),
            created_at: activity.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// CSV-based activity catalog, one `activities.csv` per owner
#[derive(Clone)]
pub struct ActivityRepository {
    connection: CsvConnection,
    user_repository: UserRepository,
}

impl ActivityRepository {
    /// Create a new CSV activity repository
    pub fn new(connection: CsvConnection) -> Self {
        let user_repository = UserRepository::new(connection.clone());
        Self {
            connection,
            user_repository,
        }
    }

    /// Resolve the directory name holding an owner's files
    fn find_owner_directory(&self, owner_id: &str) -> Result<Option<String>> {
        self.user_repository.find_user_directory(owner_id)
    }

    fn read_activities(&self, directory_name: &str, owner_id: &str) -> Result<Vec<Activity>> {
        let file_path = self.connection.activities_file_path(directory_name);

        if !file_path.exists() {
            debug!("No activities file for {}, catalog is empty", directory_name);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut activities = Vec::new();
        for (index, result) in csv_reader.deserialize::<ActivityRecord>().enumerate() {
            let record = result.with_context(|| {
                format!("Malformed row {} in {}", index + 1, file_path.display())
            })?;
            activities.push(record.into_domain(owner_id)?);
        }

        Ok(activities)
    }

    fn write_activities(&self, directory_name: &str, activities: &[Activity]) -> Result<()> {
        let mut csv_writer = Writer::from_writer(Vec::new());
        for activity in activities {
            csv_writer.serialize(ActivityRecord::from_domain(activity))?;
        }
        let contents = csv_writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush activities: {}", e))?;

        CsvConnection::write_atomically(
            &self.connection.activities_file_path(directory_name),
            &contents,
        )
    }
}

#[async_trait]
impl ActivityStorage for ActivityRepository {
    async fn store_activity(&self, activity: &Activity) -> Result<()> {
        let directory_name = self
            .find_owner_directory(&activity.owner_id)?
            .ok_or_else(|| anyhow::anyhow!("Owner not found: {}", activity.owner_id))?;

        let mut activities = self.read_activities(&directory_name, &activity.owner_id)?;
        match activities.iter_mut().find(|existing| existing.id == activity.id) {
            Some(existing) => *existing = activity.clone(),
            None => activities.push(activity.clone()),
        }

        self.write_activities(&directory_name, &activities)?;
        info!("Stored activity {} for owner {}", activity.id, activity.owner_id);
        Ok(())
    }

    async fn list_activities(&self, owner_id: &str) -> Result<Vec<Activity>> {
        match self.find_owner_directory(owner_id)? {
            Some(directory_name) => self.read_activities(&directory_name, owner_id),
            None => {
                warn!("No directory for owner {}, returning empty catalog", owner_id);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::UserStorage;
    use std::fs;

    fn activity(id: &str, owner_id: &str, title: &str, tags: &str) -> Activity {
        Activity {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            tags: Activity::parse_tags(tags),
            created_at: NaiveDate::from_ymd_opt(2023, 4, 20).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_preserves_stored_order() {
        let env = TestEnvironment::new().await.unwrap();
        let owner = env.seed_user("user::1", "alice", None).await.unwrap();
        let repo = ActivityRepository::new(env.connection.clone());

        repo.store_activity(&activity("2", &owner.id, "Yoga", "Health")).await.unwrap();
        repo.store_activity(&activity("1", &owner.id, "Run", "Health;Fun")).await.unwrap();

        let activities = repo.list_activities(&owner.id).await.unwrap();
        let ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(activities[1].tags.len(), 2);
        assert_eq!(activities[1].owner_id, "user::1");
    }

    #[tokio::test]
    async fn test_store_replaces_activity_with_same_id() {
        let env = TestEnvironment::new().await.unwrap();
        let owner = env.seed_user("user::1", "alice", None).await.unwrap();
        let repo = ActivityRepository::new(env.connection.clone());

        repo.store_activity(&activity("1", &owner.id, "Run", "")).await.unwrap();
        repo.store_activity(&activity("1", &owner.id, "Long run", "Cardio")).await.unwrap();

        let activities = repo.list_activities(&owner.id).await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].title, "Long run");
    }

    #[tokio::test]
    async fn test_owner_without_activities_file_has_empty_catalog() {
        let env = TestEnvironment::new().await.unwrap();
        let owner = env.seed_user("user::1", "alice", None).await.unwrap();
        let repo = ActivityRepository::new(env.connection.clone());

        assert!(repo.list_activities(&owner.id).await.unwrap().is_empty());
        assert!(repo.list_activities("user::unknown").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_for_unknown_owner_fails() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = ActivityRepository::new(env.connection.clone());

        let result = repo.store_activity(&activity("1", "user::404", "Run", "")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reads_hand_written_csv() {
        let env = TestEnvironment::new().await.unwrap();
        let owner = env.seed_user("user::1", "alice", None).await.unwrap();
        fs::write(
            env.connection.activities_file_path("alice"),
            "id,title,tags,created_at\n1,Run,Fun;Health,2022-10-14\n2,Yoga,,2022-10-15\n",
        )
        .unwrap();

        let repo = ActivityRepository::new(env.connection.clone());
        let activities = repo.list_activities(&owner.id).await.unwrap();

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].title, "Run");
        assert!(activities[0].tags.contains("Fun"));
        assert_eq!(
            activities[0].created_at,
            NaiveDate::from_ymd_opt(2022, 10, 14).unwrap()
        );
        assert!(activities[1].tags.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date_is_an_error() {
        let env = TestEnvironment::new().await.unwrap();
        let owner = env.seed_user("user::1", "alice", None).await.unwrap();
        fs::write(
            env.connection.activities_file_path("alice"),
            "id,title,tags,created_at\n1,Run,,14 october 2022\n",
        )
        .unwrap();

        let repo = ActivityRepository::new(env.connection.clone());
        assert!(repo.list_activities(&owner.id).await.is_err());
    }

    #[tokio::test]
    async fn test_catalog_is_read_from_owner_directory_despite_stale_username() {
        let env = TestEnvironment::new().await.unwrap();
        let alice_dir = env.connection.user_directory("alice");
        fs::create_dir_all(&alice_dir).unwrap();
        fs::write(
            env.connection.user_yaml_path("alice"),
            "id: \"user::1\"\nusername: alice_old\ncreated_at: \"2023-05-01T00:00:00Z\"\n",
        )
        .unwrap();
        fs::write(
            env.connection.activities_file_path("alice"),
            "id,title,tags,created_at\n1,Run,,2023-05-01\n",
        )
        .unwrap();

        let users = UserRepository::new(env.connection.clone());
        let owner = users
            .get_user_by_username("alice")
            .await
            .unwrap()
            .expect("owner in users/alice");

        let repo = ActivityRepository::new(env.connection.clone());
        let activities = repo.list_activities(&owner.id).await.unwrap();

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].title, "Run");
    }
}
