use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator between tags inside the `tags` column of `activities.csv`
pub const TAG_SEPARATOR: char = ';';

/// Domain model for a bookable activity owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub tags: BTreeSet<String>,
    pub created_at: NaiveDate,
}

impl Activity {
    /// Split a stored tag column into a tag set, dropping blanks
    pub fn parse_tags(raw: &str) -> BTreeSet<String> {
        raw.split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Join the tag set back into its stored column form
    pub fn format_tags(&self) -> String {
        self.tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&TAG_SEPARATOR.to_string())
    }
}
