use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Admin, Player};
///
/// let test = TestBuilder::new()
///     .with_table(Admin)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for player moderation operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Admin
    /// - Player
    /// - PlayerWarning
    /// - ModerationAction
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_moderation_tables(self) -> Self {
        self.with_table(Admin)
            .with_table(Player)
            .with_table(PlayerWarning)
            .with_table(ModerationAction)
    }

    /// Adds all tables required for card catalog operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Player
    /// - CardTemplate
    /// - NfcCardInstance
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_card_tables(self) -> Self {
        self.with_table(Player)
            .with_table(CardTemplate)
            .with_table(NfcCardInstance)
    }

    /// Adds all tables required for arena and generation job operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Arena
    /// - GenerationJob
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_arena_tables(self) -> Self {
        self.with_table(Arena).with_table(GenerationJob)
    }

    /// Adds all tables required for content management operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Admin
    /// - Announcement
    /// - NewsArticle
    /// - VideoItem
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_cms_tables(self) -> Self {
        self.with_table(Admin)
            .with_table(Announcement)
            .with_table(NewsArticle)
            .with_table(VideoItem)
    }

    /// Adds all tables required for billing operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Player
    /// - ShopOrder
    /// - PaymentEvent
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_billing_tables(self) -> Self {
        self.with_table(Player)
            .with_table(ShopOrder)
            .with_table(PaymentEvent)
    }

    /// Adds all tables required for audit trail operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Admin
    /// - AuditLog
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_audit_tables(self) -> Self {
        self.with_table(Admin).with_table(AuditLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
