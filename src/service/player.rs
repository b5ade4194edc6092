//! Player moderation.
//!
//! Warn, ban, and unban with full bookkeeping: every action
//! lands in the append-only moderation log, warnings bump the player's
//! counter, and the audit trail records the acting admin.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::player::PlayerRepository,
    dto::player::{
        ModerationActionDto, PaginatedPlayersDto, PlayerDetailDto, PlayerDto, PlayerWarningDto,
    },
    error::AppError,
    model::{
        audit::AuditEntryParams,
        player::{BanPlayerParams, PlayerQuery, WarnPlayerParams},
    },
    service::audit::AuditService,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets players with pagination, search, and the banned filter.
    pub async fn get_paginated(
        &self,
        query: PlayerQuery,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPlayersDto, AppError> {
        let (players, total) = PlayerRepository::new(self.db)
            .get_paginated(&query, page, per_page)
            .await?;

        Ok(PaginatedPlayersDto {
            players: players.into_iter().map(PlayerDto::from).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets one player's profile with the full moderation history.
    ///
    /// # Returns
    /// - `Ok(PlayerDetailDto)` - Profile, warnings, and action log
    /// - `Err(AppError::NotFound)` - No player with that id
    pub async fn get_detail(&self, player_id: i32) -> Result<PlayerDetailDto, AppError> {
        let repo = PlayerRepository::new(self.db);

        let Some(player) = repo.find_by_id(player_id).await? else {
            return Err(AppError::NotFound(format!("Player {} not found", player_id)));
        };

        let warnings = repo.get_warnings(player_id).await?;
        let actions = repo.get_actions(player_id).await?;

        Ok(PlayerDetailDto {
            player: PlayerDto::from(player),
            warnings: warnings.into_iter().map(PlayerWarningDto::from).collect(),
            actions: actions.into_iter().map(ModerationActionDto::from).collect(),
        })
    }

    /// Issues a warning to a player.
    ///
    /// Inserts the warning, bumps the player's counter, appends a `warn`
    /// action to the moderation log, and audits.
    ///
    /// # Returns
    /// - `Ok(PlayerWarningDto)` - The recorded warning
    /// - `Err(AppError::NotFound)` - No player with that id
    pub async fn warn(&self, params: WarnPlayerParams) -> Result<PlayerWarningDto, AppError> {
        let repo = PlayerRepository::new(self.db);

        if repo.find_by_id(params.player_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                params.player_id
            )));
        }

        let warning = repo.add_warning(&params).await?;
        repo.add_action(params.player_id, params.admin_id, "warn", &params.reason, None)
            .await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(params.admin_id), "player.warn", "player")
                    .resource_id(params.player_id)
                    .detail(json!({ "reason": params.reason })),
            )
            .await;

        Ok(PlayerWarningDto::from(warning))
    }

    /// Bans a player, permanently or until an expiry.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The player with ban flags set
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::Conflict)` - Player is already banned
    pub async fn ban(&self, params: BanPlayerParams) -> Result<PlayerDto, AppError> {
        let repo = PlayerRepository::new(self.db);

        let Some(player) = repo.find_by_id(params.player_id).await? else {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                params.player_id
            )));
        };

        if player.is_banned {
            return Err(AppError::Conflict(format!(
                "Player {} is already banned",
                params.player_id
            )));
        }

        repo.set_banned(&params).await?;
        repo.add_action(
            params.player_id,
            params.admin_id,
            "ban",
            &params.reason,
            params.expires_at,
        )
        .await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(params.admin_id), "player.ban", "player")
                    .resource_id(params.player_id)
                    .detail(json!({
                        "reason": params.reason,
                        "expires_at": params.expires_at.map(|t| t.timestamp()),
                    })),
            )
            .await;

        // Re-read so the DTO reflects the written flags
        let banned = repo
            .find_by_id(params.player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", params.player_id)))?;

        Ok(PlayerDto::from(banned))
    }

    /// Lifts a player's ban.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The player with ban flags cleared
    /// - `Err(AppError::NotFound)` - No player with that id
    /// - `Err(AppError::Conflict)` - Player is not banned
    pub async fn unban(&self, player_id: i32, admin_id: i32) -> Result<PlayerDto, AppError> {
        let repo = PlayerRepository::new(self.db);

        let Some(player) = repo.find_by_id(player_id).await? else {
            return Err(AppError::NotFound(format!("Player {} not found", player_id)));
        };

        if !player.is_banned {
            return Err(AppError::Conflict(format!(
                "Player {} is not banned",
                player_id
            )));
        }

        repo.clear_banned(player_id).await?;
        repo.add_action(player_id, admin_id, "unban", "", None).await?;

        AuditService::new(self.db)
            .record(
                AuditEntryParams::new(Some(admin_id), "player.unban", "player")
                    .resource_id(player_id),
            )
            .await;

        let unbanned = repo
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

        Ok(PlayerDto::from(unbanned))
    }
}
