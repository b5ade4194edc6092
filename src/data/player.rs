//! Player repository.
//!
//! Read side for the moderation screens plus the row updates behind warn,
//! ban, and unban. The moderation history itself lives in the
//! `player_warning` and `moderation_action` tables; both are append-only.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::player::{BanPlayerParams, PlayerQuery, WarnPlayerParams};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Gets players with pagination and optional filters.
    ///
    /// The `q` filter matches the email and display name case-insensitively as
    /// a substring; `banned` restricts to banned or not-banned accounts.
    /// Newest accounts come first.
    ///
    /// # Arguments
    /// - `query` - Search and filter criteria
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of players per page
    ///
    /// # Returns
    /// - `Ok((players, total))` - Page of players and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        query: &PlayerQuery,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::player::Model>, u64), DbErr> {
        let mut find = entity::prelude::Player::find();

        if let Some(q) = &query.q {
            let needle = format!("%{}%", q.to_lowercase());
            find = find.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::player::Column::Email)))
                            .like(needle.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::player::Column::DisplayName)))
                            .like(needle),
                    ),
            );
        }

        if let Some(banned) = query.banned {
            find = find.filter(entity::player::Column::IsBanned.eq(banned));
        }

        let paginator = find
            .order_by_desc(entity::player::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let players = paginator.fetch_page(page).await?;

        Ok((players, total))
    }

    /// Gets all warnings issued to a player, newest first.
    pub async fn get_warnings(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::player_warning::Model>, DbErr> {
        entity::prelude::PlayerWarning::find()
            .filter(entity::player_warning::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::player_warning::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the full moderation action log for a player, newest first.
    pub async fn get_actions(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::moderation_action::Model>, DbErr> {
        entity::prelude::ModerationAction::find()
            .filter(entity::moderation_action::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::moderation_action::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Records a warning and bumps the player's warning counter.
    ///
    /// Inserts the `player_warning` row and increments `warning_count` on the
    /// player in one place so the counter cannot drift from the log.
    ///
    /// # Arguments
    /// - `params` - Player, acting admin, and reason
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted warning row
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add_warning(
        &self,
        params: &WarnPlayerParams,
    ) -> Result<entity::player_warning::Model, DbErr> {
        let warning = entity::player_warning::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(params.player_id),
            admin_id: ActiveValue::Set(params.admin_id),
            reason: ActiveValue::Set(params.reason.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(params.player_id))
            .col_expr(
                entity::player::Column::WarningCount,
                Expr::col(entity::player::Column::WarningCount).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(warning)
    }

    /// Sets the ban flags on a player.
    ///
    /// # Arguments
    /// - `params` - Player, reason, and optional expiry
    ///
    /// # Returns
    /// - `Ok(())` - Flags written
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_banned(&self, params: &BanPlayerParams) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(params.player_id))
            .col_expr(
                entity::player::Column::IsBanned,
                Expr::value(true),
            )
            .col_expr(
                entity::player::Column::BanReason,
                Expr::value(params.reason.clone()),
            )
            .col_expr(
                entity::player::Column::BanExpiresAt,
                Expr::value(params.expires_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears the ban flags on a player.
    pub async fn clear_banned(&self, player_id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(player_id))
            .col_expr(
                entity::player::Column::IsBanned,
                Expr::value(false),
            )
            .col_expr(
                entity::player::Column::BanReason,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::player::Column::BanExpiresAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Appends a row to the moderation action log.
    ///
    /// # Arguments
    /// - `player_id` - Player the action applies to
    /// - `admin_id` - Acting admin
    /// - `action` - One of `warn`, `ban`, `unban`
    /// - `reason` - Free-form reason text
    /// - `expires_at` - Ban expiry if the action carries one
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted action row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_action(
        &self,
        player_id: i32,
        admin_id: i32,
        action: &str,
        reason: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<entity::moderation_action::Model, DbErr> {
        entity::moderation_action::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(player_id),
            admin_id: ActiveValue::Set(admin_id),
            action: ActiveValue::Set(action.to_string()),
            reason: ActiveValue::Set(reason.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
