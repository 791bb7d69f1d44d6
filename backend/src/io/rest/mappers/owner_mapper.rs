use crate::domain::models::user::User;
use shared::Owner;

/// Mapper from the domain `User` to the public `Owner` DTO.
pub struct OwnerMapper;

impl OwnerMapper {
    /// Only the fields the planner page selects leave the backend.
    pub fn to_dto(domain: User) -> Owner {
        Owner {
            id: domain.id,
            username: domain.username,
            name: domain.name,
            image_id: domain.image_id,
        }
    }
}
