use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250316_000005_create_card_template_table::CardTemplate;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(CardTemplate::Table)
                    .add_column(string_null(CardTemplate::VideoUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CardTemplate::Table)
                    .add_column(boolean(CardTemplate::HasAnimation).default(false))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(CardTemplate::Table)
                    .drop_column(CardTemplate::HasAnimation)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CardTemplate::Table)
                    .drop_column(CardTemplate::VideoUrl)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
