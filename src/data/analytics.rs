//! Dashboard count queries.
//!
//! All of the dashboard numbers in one place so the analytics service is a
//! straight pass-through. Each block is a handful of COUNT queries; nothing
//! here is hot-path.

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    data::nfc::INSTANCE_STATUS_ACTIVATED,
    model::billing::ORDER_STATUS_PAID,
};

/// Raw dashboard numbers, converted to the DTO by the analytics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCounts {
    pub players_total: u64,
    pub players_banned: u64,
    pub players_new_this_week: u64,
    pub card_templates: u64,
    pub cards_published: u64,
    pub nfc_instances: u64,
    pub nfc_activated: u64,
    pub articles: u64,
    pub videos: u64,
    pub total_views: i64,
    pub orders: u64,
    pub paid_orders: u64,
    pub revenue_cents: i64,
    pub warnings_7d: u64,
    pub bans_7d: u64,
}

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects every dashboard counter.
    ///
    /// # Returns
    /// - `Ok(DashboardCounts)` - Current platform counters
    /// - `Err(DbErr)` - Database error during any count query
    pub async fn dashboard_counts(&self) -> Result<DashboardCounts, DbErr> {
        let week_ago = Utc::now() - Duration::days(7);

        let players_total = entity::prelude::Player::find().count(self.db).await?;
        let players_banned = entity::prelude::Player::find()
            .filter(entity::player::Column::IsBanned.eq(true))
            .count(self.db)
            .await?;
        let players_new_this_week = entity::prelude::Player::find()
            .filter(entity::player::Column::CreatedAt.gte(week_ago))
            .count(self.db)
            .await?;

        let card_templates = entity::prelude::CardTemplate::find().count(self.db).await?;
        let cards_published = entity::prelude::CardTemplate::find()
            .filter(entity::card_template::Column::IsPublished.eq(true))
            .count(self.db)
            .await?;
        let nfc_instances = entity::prelude::NfcCardInstance::find().count(self.db).await?;
        let nfc_activated = entity::prelude::NfcCardInstance::find()
            .filter(entity::nfc_card_instance::Column::Status.eq(INSTANCE_STATUS_ACTIVATED))
            .count(self.db)
            .await?;

        let articles = entity::prelude::NewsArticle::find().count(self.db).await?;
        let videos = entity::prelude::VideoItem::find().count(self.db).await?;

        // Vanity counters; folded in process at dashboard scale
        let article_views: i64 = entity::prelude::NewsArticle::find()
            .all(self.db)
            .await?
            .iter()
            .map(|article| article.view_count)
            .sum();
        let video_views: i64 = entity::prelude::VideoItem::find()
            .all(self.db)
            .await?
            .iter()
            .map(|video| video.view_count)
            .sum();

        let orders = entity::prelude::ShopOrder::find().count(self.db).await?;
        let paid = entity::prelude::ShopOrder::find()
            .filter(entity::shop_order::Column::Status.eq(ORDER_STATUS_PAID))
            .all(self.db)
            .await?;
        let paid_orders = paid.len() as u64;
        let revenue_cents: i64 = paid.iter().map(|order| order.amount_cents).sum();

        let warnings_7d = entity::prelude::PlayerWarning::find()
            .filter(entity::player_warning::Column::CreatedAt.gte(week_ago))
            .count(self.db)
            .await?;
        let bans_7d = entity::prelude::ModerationAction::find()
            .filter(entity::moderation_action::Column::Action.eq("ban"))
            .filter(entity::moderation_action::Column::CreatedAt.gte(week_ago))
            .count(self.db)
            .await?;

        Ok(DashboardCounts {
            players_total,
            players_banned,
            players_new_this_week,
            card_templates,
            cards_published,
            nfc_instances,
            nfc_activated,
            articles,
            videos,
            total_views: article_views + video_views,
            orders,
            paid_orders,
            revenue_cents,
            warnings_7d,
            bans_7d,
        })
    }
}
