pub mod activity_mapper;
pub mod error_mapper;
pub mod owner_mapper;
