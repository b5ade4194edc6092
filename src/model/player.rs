use chrono::{DateTime, Utc};

/// Search and filter criteria for the player list.
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    /// Case-insensitive substring match against email and display name.
    pub q: Option<String>,
    /// Restrict to banned (true) or not-banned (false) players.
    pub banned: Option<bool>,
}

/// Parameters for issuing a warning to a player.
#[derive(Debug, Clone)]
pub struct WarnPlayerParams {
    pub player_id: i32,
    /// Admin issuing the warning.
    pub admin_id: i32,
    pub reason: String,
}

/// Parameters for banning a player.
#[derive(Debug, Clone)]
pub struct BanPlayerParams {
    pub player_id: i32,
    /// Admin issuing the ban.
    pub admin_id: i32,
    pub reason: String,
    /// None bans permanently.
    pub expires_at: Option<DateTime<Utc>>,
}
