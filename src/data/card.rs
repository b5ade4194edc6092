//! Card template repository.
//!
//! Backs both the admin catalog CRUD and the public published-only catalog.
//! The same filter struct drives both; the public side sets
//! `published_only`.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::card::{CardQuery, CreateCardTemplateParams, UpdateCardTemplateParams};

pub struct CardTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardTemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new card template. Templates start unpublished.
    pub async fn create(
        &self,
        params: CreateCardTemplateParams,
    ) -> Result<entity::card_template::Model, DbErr> {
        let now = Utc::now();
        entity::card_template::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(params.slug),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            flavor_text: ActiveValue::Set(params.flavor_text),
            rarity: ActiveValue::Set(params.rarity),
            category: ActiveValue::Set(params.category),
            mana_cost: ActiveValue::Set(params.mana_cost),
            attack: ActiveValue::Set(params.attack),
            defense: ActiveValue::Set(params.defense),
            health: ActiveValue::Set(params.health),
            artwork_url: ActiveValue::Set(params.artwork_url),
            video_url: ActiveValue::Set(params.video_url),
            has_animation: ActiveValue::Set(params.has_animation),
            is_published: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::card_template::Model>, DbErr> {
        entity::prelude::CardTemplate::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::card_template::Model>, DbErr> {
        entity::prelude::CardTemplate::find()
            .filter(entity::card_template::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets card templates with pagination and filters, newest first.
    ///
    /// # Arguments
    /// - `query` - Rarity, category, name search, and published-only flag
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of templates per page
    ///
    /// # Returns
    /// - `Ok((templates, total))` - Page of templates and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        query: &CardQuery,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::card_template::Model>, u64), DbErr> {
        let mut find = entity::prelude::CardTemplate::find();

        if query.published_only {
            find = find.filter(entity::card_template::Column::IsPublished.eq(true));
        }

        if let Some(rarity) = &query.rarity {
            find = find.filter(entity::card_template::Column::Rarity.eq(rarity));
        }

        if let Some(category) = &query.category {
            find = find.filter(entity::card_template::Column::Category.eq(category));
        }

        if let Some(q) = &query.q {
            let needle = format!("%{}%", q.to_lowercase());
            find = find.filter(
                Expr::expr(Func::lower(Expr::col(entity::card_template::Column::Name)))
                    .like(needle),
            );
        }

        let paginator = find
            .order_by_desc(entity::card_template::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let templates = paginator.fetch_page(page).await?;

        Ok((templates, total))
    }

    /// Updates the mutable fields of a template and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated template
    /// - `Ok(None)` - No template with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateCardTemplateParams,
    ) -> Result<Option<entity::card_template::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut model: entity::card_template::ActiveModel = existing.into();
        model.name = ActiveValue::Set(params.name);
        model.description = ActiveValue::Set(params.description);
        model.flavor_text = ActiveValue::Set(params.flavor_text);
        model.rarity = ActiveValue::Set(params.rarity);
        model.category = ActiveValue::Set(params.category);
        model.mana_cost = ActiveValue::Set(params.mana_cost);
        model.attack = ActiveValue::Set(params.attack);
        model.defense = ActiveValue::Set(params.defense);
        model.health = ActiveValue::Set(params.health);
        model.artwork_url = ActiveValue::Set(params.artwork_url);
        model.video_url = ActiveValue::Set(params.video_url);
        model.has_animation = ActiveValue::Set(params.has_animation);
        model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(model.update(self.db).await?))
    }

    /// Sets the published flag and stamps `updated_at`.
    pub async fn set_published(&self, id: i32, is_published: bool) -> Result<(), DbErr> {
        entity::prelude::CardTemplate::update_many()
            .filter(entity::card_template::Column::Id.eq(id))
            .col_expr(
                entity::card_template::Column::IsPublished,
                Expr::value(is_published),
            )
            .col_expr(
                entity::card_template::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a template.
    ///
    /// # Returns
    /// - `Ok(true)` - Template existed and was deleted
    /// - `Ok(false)` - No template with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CardTemplate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
