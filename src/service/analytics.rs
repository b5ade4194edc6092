//! Dashboard analytics.

use sea_orm::DatabaseConnection;

use crate::{
    data::analytics::AnalyticsRepository,
    dto::analytics::{
        BillingStatsDto, CardStatsDto, CmsStatsDto, DashboardDto, ModerationStatsDto,
        PlayerStatsDto,
    },
    error::AppError,
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard snapshot.
    pub async fn dashboard(&self) -> Result<DashboardDto, AppError> {
        let counts = AnalyticsRepository::new(self.db).dashboard_counts().await?;

        Ok(DashboardDto {
            players: PlayerStatsDto {
                total: counts.players_total,
                banned: counts.players_banned,
                new_this_week: counts.players_new_this_week,
            },
            cards: CardStatsDto {
                templates: counts.card_templates,
                published: counts.cards_published,
                instances: counts.nfc_instances,
                activated: counts.nfc_activated,
            },
            cms: CmsStatsDto {
                articles: counts.articles,
                videos: counts.videos,
                total_views: counts.total_views,
            },
            billing: BillingStatsDto {
                orders: counts.orders,
                paid_orders: counts.paid_orders,
                revenue_cents: counts.revenue_cents,
            },
            moderation: ModerationStatsDto {
                warnings_7d: counts.warnings_7d,
                bans_7d: counts.bans_7d,
            },
        })
    }
}
