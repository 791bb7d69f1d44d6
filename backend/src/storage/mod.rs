//! # Storage Module
//!
//! Handles all data persistence for the activity planner.
//!
//! The domain layer only sees the traits in [`traits`]; the file-based
//! implementation lives in [`csv`]:
//!
//! ```text
//! <data_dir>/
//!   sessions.yaml
//!   users/<username>/user.yaml
//!   users/<username>/activities.csv
//! ```

pub mod csv;
pub mod traits;

pub use self::csv::{ActivityRepository, CsvConnection, SessionRepository, UserRepository};
pub use self::traits::{ActivityStorage, SessionStorage, UserStorage};
