use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerStatsDto {
    pub total: u64,
    pub banned: u64,
    pub new_this_week: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CardStatsDto {
    pub templates: u64,
    pub published: u64,
    pub instances: u64,
    pub activated: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CmsStatsDto {
    pub articles: u64,
    pub videos: u64,
    pub total_views: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BillingStatsDto {
    pub orders: u64,
    pub paid_orders: u64,
    pub revenue_cents: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModerationStatsDto {
    pub warnings_7d: u64,
    pub bans_7d: u64,
}

/// Aggregated platform counters for the admin dashboard.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardDto {
    pub players: PlayerStatsDto,
    pub cards: CardStatsDto,
    pub cms: CmsStatsDto,
    pub billing: BillingStatsDto,
    pub moderation: ModerationStatsDto,
}
