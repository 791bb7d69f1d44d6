use crate::domain::commands::planner::LoadPlannerResult;
use crate::domain::models::activity::Activity as DomainActivity;
use shared::{Activity as SharedActivity, PlannerPageResponse};

use super::owner_mapper::OwnerMapper;

/// Mapper between domain activities and the shared DTOs.
pub struct ActivityMapper;

impl ActivityMapper {
    pub fn to_dto(domain: DomainActivity) -> SharedActivity {
        SharedActivity {
            id: domain.id,
            title: domain.title,
            tags: domain.tags,
            created_at: domain.created_at,
        }
    }

    /// Build the planner page response, keeping catalog order
    pub fn to_planner_page_response(result: LoadPlannerResult) -> PlannerPageResponse {
        PlannerPageResponse {
            owner: OwnerMapper::to_dto(result.owner),
            activities: result.activities.into_iter().map(Self::to_dto).collect(),
        }
    }
}
