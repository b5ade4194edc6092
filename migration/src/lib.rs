pub use sea_orm_migration::prelude::*;

mod m20250315_000001_create_admin_table;
mod m20250315_000002_create_player_table;
mod m20250315_000003_create_player_warning_table;
mod m20250315_000004_create_moderation_action_table;
mod m20250316_000005_create_card_template_table;
mod m20250316_000006_create_nfc_card_instance_table;
mod m20250318_000007_create_arena_table;
mod m20250318_000008_create_generation_job_table;
mod m20250322_000009_create_announcement_table;
mod m20250322_000010_create_news_article_table;
mod m20250322_000011_create_video_item_table;
mod m20250402_000012_create_shop_order_table;
mod m20250402_000013_create_payment_event_table;
mod m20250405_000014_create_audit_log_table;
mod m20250512_000015_add_ban_expiry_to_player;
mod m20250607_000016_add_animation_to_card_template;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250315_000001_create_admin_table::Migration),
            Box::new(m20250315_000002_create_player_table::Migration),
            Box::new(m20250315_000003_create_player_warning_table::Migration),
            Box::new(m20250315_000004_create_moderation_action_table::Migration),
            Box::new(m20250316_000005_create_card_template_table::Migration),
            Box::new(m20250316_000006_create_nfc_card_instance_table::Migration),
            Box::new(m20250318_000007_create_arena_table::Migration),
            Box::new(m20250318_000008_create_generation_job_table::Migration),
            Box::new(m20250322_000009_create_announcement_table::Migration),
            Box::new(m20250322_000010_create_news_article_table::Migration),
            Box::new(m20250322_000011_create_video_item_table::Migration),
            Box::new(m20250402_000012_create_shop_order_table::Migration),
            Box::new(m20250402_000013_create_payment_event_table::Migration),
            Box::new(m20250405_000014_create_audit_log_table::Migration),
            Box::new(m20250512_000015_add_ban_expiry_to_player::Migration),
            Box::new(m20250607_000016_add_animation_to_card_template::Migration),
        ]
    }
}
