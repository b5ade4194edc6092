pub use super::admin::Entity as Admin;
pub use super::announcement::Entity as Announcement;
pub use super::arena::Entity as Arena;
pub use super::audit_log::Entity as AuditLog;
pub use super::card_template::Entity as CardTemplate;
pub use super::generation_job::Entity as GenerationJob;
pub use super::moderation_action::Entity as ModerationAction;
pub use super::news_article::Entity as NewsArticle;
pub use super::nfc_card_instance::Entity as NfcCardInstance;
pub use super::payment_event::Entity as PaymentEvent;
pub use super::player::Entity as Player;
pub use super::player_warning::Entity as PlayerWarning;
pub use super::shop_order::Entity as ShopOrder;
pub use super::video_item::Entity as VideoItem;
