//! # Data Directory Seeding
//!
//! Creates (or updates) a planner owner, appends activities to their catalog
//! and issues a session, so a fresh data directory can serve a planner page.
//!
//! ```text
//! seed <username> [--name <display name>] [--activity <title>[:<tag;tag>]]...
//! ```

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::activity::Activity;
use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::domain::SessionService;
use crate::storage::{
    ActivityRepository, ActivityStorage, CsvConnection, SessionRepository, UserRepository,
    UserStorage,
};

pub const USAGE: &str =
    "usage: seed <username> [--name <display name>] [--activity <title>[:<tag;tag>]]...";

/// One activity to append, as given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct SeedActivity {
    pub title: String,
    /// `;`-separated tags
    pub tags: String,
}

impl SeedActivity {
    /// Parse `title` or `title:tag;tag`
    pub fn parse(raw: &str) -> Result<Self> {
        let (title, tags) = match raw.split_once(':') {
            Some((title, tags)) => (title.trim(), tags.trim()),
            None => (raw.trim(), ""),
        };

        if title.is_empty() {
            bail!("Activity title must not be empty: {:?}", raw);
        }

        Ok(Self {
            title: title.to_string(),
            tags: tags.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedRequest {
    pub username: String,
    pub name: Option<String>,
    pub activities: Vec<SeedActivity>,
}

impl SeedRequest {
    /// Parse command-line arguments, program name excluded
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut username = None;
        let mut name = None;
        let mut activities = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => {
                    name = Some(args.next().context("--name needs a value")?);
                }
                "--activity" => {
                    let raw = args.next().context("--activity needs a value")?;
                    activities.push(SeedActivity::parse(&raw)?);
                }
                flag if flag.starts_with("--") => bail!("Unknown option {}", flag),
                positional => {
                    if username.is_some() {
                        bail!("Unexpected argument {:?}", positional);
                    }
                    username = Some(positional.to_string());
                }
            }
        }

        Ok(Self {
            username: username.context(USAGE)?,
            name,
            activities,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SeedOutcome {
    pub user: User,
    pub activities: Vec<Activity>,
    pub session: Session,
}

/// Apply `request` to the data directory behind `connection`
pub async fn seed_planner(connection: &CsvConnection, request: SeedRequest) -> Result<SeedOutcome> {
    let users = UserRepository::new(connection.clone());
    let catalog = ActivityRepository::new(connection.clone());
    let sessions = SessionService::new(Arc::new(SessionRepository::new(connection.clone())));

    let username = User::normalize_username(&request.username)
        .with_context(|| {
            format!(
                "Invalid username {:?}: use [a-z0-9_], at most 40 characters",
                request.username
            )
        })?;

    let user = match users.get_user_by_username(&username).await? {
        Some(mut existing) => {
            if request.name.is_some() {
                existing.name = request.name.clone();
            }
            existing.username = username.clone();
            existing
        }
        None => User {
            id: User::generate_id(),
            username: username.clone(),
            name: request.name.clone(),
            image_id: None,
            created_at: Utc::now(),
        },
    };
    users.store_user(&user).await?;

    let mut activities = Vec::new();
    for seed in &request.activities {
        let activity = Activity {
            id: uuid::Uuid::new_v4().simple().to_string(),
            owner_id: user.id.clone(),
            title: seed.title.clone(),
            tags: Activity::parse_tags(&seed.tags),
            created_at: Utc::now().date_naive(),
        };
        catalog.store_activity(&activity).await?;
        activities.push(activity);
    }

    let session = sessions.create_session(&user.id).await?;

    info!(
        "Seeded {} with {} new activities",
        user.username,
        activities.len()
    );

    Ok(SeedOutcome {
        user,
        activities,
        session,
    })
}
