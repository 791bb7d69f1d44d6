pub mod activity_repository;
pub mod connection;
pub mod session_repository;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use activity_repository::ActivityRepository;
pub use connection::CsvConnection;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;
